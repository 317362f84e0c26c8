//! Main update function - handles state transitions (TEA pattern)

use gatehouse_core::prelude::*;

use super::{command, dialog, keys, pointer, UpdateResult};
use crate::message::Message;
use crate::state::AppState;

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => match keys::handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Pointer(target) => match pointer::handle_pointer(state, target) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::PointerMoved { x, y } => {
            if let Some(background) = state.background.as_mut() {
                background.set_pointer(x, y);
            }
            UpdateResult::none()
        }

        Message::Tick => {
            state.document.tick();
            if let Some(background) = state.background.as_mut() {
                background.tick();
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Dialog
        // ─────────────────────────────────────────────────────────
        Message::OpenDialog => dialog::handle_open(state),
        Message::CloseDialog => dialog::handle_close(state),
        Message::SubmitDialog => dialog::handle_submit(state),
        Message::FocusNextField => {
            let next = state.focus.next();
            dialog::set_focus(state, next);
            UpdateResult::none()
        }
        Message::FocusPreviousField => {
            let previous = state.focus.previous();
            dialog::set_focus(state, previous);
            UpdateResult::none()
        }
        Message::FocusField(field) => {
            dialog::set_focus(state, field);
            UpdateResult::none()
        }
        Message::InputChar(c) => {
            if let Some(input) = state.command_input.as_mut() {
                input.push(c);
            } else {
                dialog::handle_input_char(state, c);
            }
            UpdateResult::none()
        }
        Message::Backspace => {
            if let Some(input) = state.command_input.as_mut() {
                input.pop();
            } else {
                dialog::handle_backspace(state);
            }
            UpdateResult::none()
        }
        Message::SelectAccessLevel(level) => {
            dialog::select_access_level(state, level);
            UpdateResult::none()
        }
        Message::CycleAccessLevel(forward) => {
            dialog::cycle_access_level(state, forward);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Operator commands
        // ─────────────────────────────────────────────────────────
        Message::OpenCommandBar => {
            state.command_input = Some(String::new());
            UpdateResult::none()
        }
        Message::CancelCommandBar => {
            state.command_input = None;
            UpdateResult::none()
        }
        Message::SubmitCommandBar => match state.command_input.take() {
            Some(line) => UpdateResult::message(Message::RunCommand(line)),
            None => UpdateResult::none(),
        },
        Message::RunCommand(line) => command::handle_run_command(state, &line),

        // ─────────────────────────────────────────────────────────
        // Lifecycle
        // ─────────────────────────────────────────────────────────
        Message::RequestQuit => {
            info!("Quit requested");
            state.request_quit();
            UpdateResult::none()
        }
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }
    }
}
