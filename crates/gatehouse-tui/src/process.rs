//! Message processing for the TUI loop

use gatehouse_app::{update, AppState, DashboardEvent, Message, UpdateAction};
use gatehouse_core::prelude::*;

/// Run a message and its follow-ups through the TEA update loop.
///
/// Published events are returned in order; the TUI only logs them.
pub fn process_message(state: &mut AppState, message: Message) -> Vec<DashboardEvent> {
    let mut events = Vec::new();
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = update(state, m);
        if let Some(UpdateAction::Publish(event)) = result.action {
            log_event(&event);
            events.push(event);
        }
        msg = result.message;
    }
    events
}

fn log_event(event: &DashboardEvent) {
    match event {
        DashboardEvent::DeviceAdded {
            name,
            mac_address,
            active_devices,
            ..
        } => info!(
            "Registered {} ({}), {} active",
            name, mac_address, active_devices
        ),
        DashboardEvent::GateAction { action, .. } => info!("Gate action: {}", action.as_str()),
        DashboardEvent::CommandReply {
            command, success, ..
        } => debug!("Command '{}' finished (success={})", command, success),
        other => trace!("Dashboard event: {:?}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_state;
    use gatehouse_app::InputKey;

    #[test]
    fn test_follow_up_messages_are_processed() {
        let mut state = create_test_state();
        let events = process_message(&mut state, Message::Key(InputKey::Char('a')));
        assert_eq!(events, vec![DashboardEvent::DialogOpened]);
        assert!(state.controller.is_dialog_visible());
    }

    #[test]
    fn test_quit_command_quits() {
        let mut state = create_test_state();
        process_message(&mut state, Message::RunCommand("quit".into()));
        assert!(state.should_quit());
    }
}
