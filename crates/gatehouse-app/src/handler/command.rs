//! Operator command handlers

use gatehouse_core::command::{self, Command, HELP_TEXT};
use gatehouse_core::prelude::*;

use super::{dialog, DashboardEvent, UpdateResult};
use crate::message::Message;
use crate::state::AppState;

/// Parse and run one command line
pub fn handle_run_command(state: &mut AppState, line: &str) -> UpdateResult {
    let line = line.trim();
    debug!("Running command: {:?}", line);

    match command::parse(line).context("parsing operator command") {
        Ok(Command::Gate(action)) => {
            let instructions = state.controller.record_gate_action(action);
            state.apply(instructions);
            state.document.set_status(action.reply());
            info!("Gate action: {}", action.as_str());
            UpdateResult::publish(DashboardEvent::GateAction {
                action,
                message: action.reply().to_string(),
            })
        }
        Ok(Command::AddDevice {
            mac_address,
            access_level,
            name,
        }) => {
            let instructions =
                state
                    .controller
                    .submit_device(&name, &mac_address, Some(access_level));
            dialog::apply_submission(state, instructions)
        }
        Ok(Command::Help) => reply(state, line, HELP_TEXT.to_string(), true),
        Ok(Command::Quit) => UpdateResult::message(Message::RequestQuit),
        Err(e) => reply(state, line, e.to_string(), false),
    }
}

fn reply(state: &mut AppState, command: &str, reply: String, success: bool) -> UpdateResult {
    state.document.set_status(reply.clone());
    UpdateResult::publish(DashboardEvent::CommandReply {
        command: command.to_string(),
        reply,
        success,
    })
}
