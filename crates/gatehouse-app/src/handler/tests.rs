//! Tests for handler module

use super::*;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, FormField, UiMode};
use gatehouse_core::{AccessLevel, FormError, GateAction, PointerTarget, SurfaceId};

fn test_state() -> AppState {
    let mut state = AppState::default();
    state.settings.ui.show_background = false;
    state.initialize();
    state
}

/// Run a message and every follow-up, collecting published events
fn process(state: &mut AppState, message: Message) -> Vec<DashboardEvent> {
    let mut events = Vec::new();
    let mut next = Some(message);
    while let Some(msg) = next {
        let result = update(state, msg);
        if let Some(UpdateAction::Publish(event)) = result.action {
            events.push(event);
        }
        next = result.message;
    }
    events
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        process(state, Message::Key(InputKey::Char(c)));
    }
}

fn fill_living_room_hub(state: &mut AppState) {
    process(state, Message::Key(InputKey::Char('a')));
    type_text(state, "Living Room Hub");
    process(state, Message::Key(InputKey::Tab));
    type_text(state, "AA:BB:CC:11:22:33");
    process(state, Message::Key(InputKey::Tab));
    process(state, Message::Key(InputKey::Char(' ')));
}

#[test]
fn test_quit_message_sets_should_quit() {
    let mut state = test_state();
    assert!(!state.should_quit());

    update(&mut state, Message::Quit);

    assert!(state.should_quit());
}

#[test]
fn test_q_key_produces_request_quit_message() {
    let state = test_state();
    let result = handle_key(&state, InputKey::Char('q'));
    assert!(matches!(result, Some(Message::RequestQuit)));
}

#[test]
fn test_ctrl_c_quits_from_dialog() {
    let mut state = test_state();
    process(&mut state, Message::OpenDialog);
    let result = handle_key(&state, InputKey::CharCtrl('c'));
    assert!(matches!(result, Some(Message::Quit)));
}

#[test]
fn test_a_key_opens_dialog() {
    let mut state = test_state();
    let events = process(&mut state, Message::Key(InputKey::Char('a')));

    assert_eq!(state.ui_mode(), UiMode::DeviceDialog);
    assert_eq!(events, vec![DashboardEvent::DialogOpened]);
    assert_eq!(state.focus, FormField::Name);
}

#[test]
fn test_keyboard_registration_end_to_end() {
    let mut state = test_state();
    fill_living_room_hub(&mut state);
    assert_eq!(
        state.controller.form().access_level,
        Some(AccessLevel::Guest)
    );

    let events = process(&mut state, Message::Key(InputKey::Enter));

    assert_eq!(events.len(), 1);
    match &events[0] {
        DashboardEvent::DeviceAdded {
            name,
            mac_address,
            access_level,
            active_devices,
            ..
        } => {
            assert_eq!(name, "Living Room Hub");
            assert_eq!(mac_address, "AA:BB:CC:11:22:33");
            assert_eq!(*access_level, AccessLevel::Guest);
            assert_eq!(*active_devices, 4);
        }
        other => panic!("expected DeviceAdded, got {:?}", other),
    }

    assert_eq!(state.ui_mode(), UiMode::Normal);
    assert_eq!(state.document.device_count(), "4 Active");
    assert_eq!(state.document.devices().len(), 4);
    assert_eq!(state.document.devices()[0].entry.name, "Living Room Hub");
    assert_eq!(state.document.access_logs().len(), 1);
    assert!(state.controller.form().is_empty());
    assert_eq!(state.document.placeholder_count(), 0);
}

#[test]
fn test_submit_without_access_level_keeps_dialog_open() {
    let mut state = test_state();
    process(&mut state, Message::OpenDialog);
    type_text(&mut state, "Porch Camera");
    process(&mut state, Message::FocusNextField);
    type_text(&mut state, "11:22");

    let events = process(&mut state, Message::SubmitDialog);

    assert_eq!(
        events,
        vec![DashboardEvent::FormRejected {
            error: FormError::AccessLevelRequired
        }]
    );
    assert_eq!(state.ui_mode(), UiMode::DeviceDialog);
    assert_eq!(state.focus, FormField::AccessLevel);
    assert_eq!(
        state.document.form_error(),
        Some(FormError::AccessLevelRequired)
    );
    assert_eq!(state.document.devices().len(), 3);
    assert_eq!(state.document.device_count(), "3 Active");
    assert_eq!(state.controller.form().name, "Porch Camera");
}

#[test]
fn test_enter_on_cancel_closes_dialog() {
    let mut state = test_state();
    process(&mut state, Message::OpenDialog);
    type_text(&mut state, "Draft");
    state.focus = FormField::Cancel;

    let events = process(&mut state, Message::Key(InputKey::Enter));

    assert_eq!(events, vec![DashboardEvent::DialogClosed]);
    assert_eq!(state.ui_mode(), UiMode::Normal);
    assert!(state.controller.form().is_empty());
}

#[test]
fn test_close_twice_publishes_once() {
    let mut state = test_state();
    process(&mut state, Message::OpenDialog);

    let first = process(&mut state, Message::CloseDialog);
    let second = process(&mut state, Message::CloseDialog);

    assert_eq!(first, vec![DashboardEvent::DialogClosed]);
    assert!(second.is_empty());
    assert_eq!(state.ui_mode(), UiMode::Normal);
}

#[test]
fn test_open_then_close_leaves_lists() {
    let mut state = test_state();
    process(&mut state, Message::OpenDialog);
    process(&mut state, Message::CloseDialog);

    assert_eq!(state.document.devices().len(), 3);
    assert!(state.document.access_logs().is_empty());
    assert_eq!(state.document.device_count(), "3 Active");
}

#[test]
fn test_backdrop_click_closes_and_clears() {
    let mut state = test_state();
    process(&mut state, Message::OpenDialog);
    type_text(&mut state, "Half typed");

    process(&mut state, Message::Pointer(PointerTarget::Backdrop));

    assert!(!state.controller.is_dialog_visible());
    assert!(state.controller.form().name.is_empty());
}

#[test]
fn test_click_inside_dialog_keeps_it_open() {
    let mut state = test_state();
    process(&mut state, Message::OpenDialog);
    type_text(&mut state, "Half");

    process(
        &mut state,
        Message::Pointer(PointerTarget::Surface(SurfaceId::Dialog)),
    );
    process(
        &mut state,
        Message::Pointer(PointerTarget::Surface(SurfaceId::DeviceForm)),
    );
    process(&mut state, Message::Pointer(PointerTarget::Elsewhere));

    assert!(state.controller.is_dialog_visible());
    assert_eq!(state.controller.form().name, "Half");
    assert_eq!(state.document.device_count(), "3 Active");
}

#[test]
fn test_pointer_moved_links_background() {
    let mut state = AppState::default();
    state.settings.ui.show_background = true;
    state.initialize();
    assert!(state.background.as_ref().is_some_and(|bg| bg.pointer().is_none()));

    process(&mut state, Message::PointerMoved { x: 0.5, y: 0.5 });

    let background = state.background.as_ref().expect("background enabled");
    let (px, py) = background.pointer().expect("pointer tracked");
    assert_eq!(px, background.width() / 2.0);
    assert_eq!(py, background.height() / 2.0);
}

#[test]
fn test_pointer_moved_ignored_without_mouse_controls() {
    let mut state = AppState::default();
    state.settings.ui.show_background = true;
    state.settings.background.mouse_controls = false;
    state.initialize();

    process(&mut state, Message::PointerMoved { x: 0.5, y: 0.5 });

    let background = state.background.as_ref().expect("background enabled");
    assert!(background.pointer().is_none());
}

#[test]
fn test_pointer_registration_flow() {
    let mut state = test_state();
    process(
        &mut state,
        Message::Pointer(PointerTarget::Surface(SurfaceId::AddDeviceButton)),
    );
    assert!(state.controller.is_dialog_visible());

    process(
        &mut state,
        Message::Pointer(PointerTarget::Surface(SurfaceId::MacAddressField)),
    );
    type_text(&mut state, "DE:AD");
    process(
        &mut state,
        Message::Pointer(PointerTarget::Surface(SurfaceId::DeviceNameField)),
    );
    type_text(&mut state, "Side Gate");
    process(
        &mut state,
        Message::Pointer(PointerTarget::AccessOption(AccessLevel::Admin)),
    );

    let events = process(
        &mut state,
        Message::Pointer(PointerTarget::Surface(SurfaceId::SubmitButton)),
    );

    assert!(matches!(
        &events[0],
        DashboardEvent::DeviceAdded {
            name,
            access_level: AccessLevel::Admin,
            ..
        } if name == "Side Gate"
    ));
    assert_eq!(state.document.devices()[0].entry.mac_address, "DE:AD");
}

#[test]
fn test_page_surface_behind_dialog_acts_as_backdrop() {
    let mut state = test_state();
    process(&mut state, Message::OpenDialog);
    let msg = handle_pointer(
        &state,
        PointerTarget::Surface(SurfaceId::AddDeviceButton),
    );
    assert_eq!(msg, Some(Message::CloseDialog));
}

#[test]
fn test_arrow_keys_cycle_access_level() {
    let mut state = test_state();
    process(&mut state, Message::OpenDialog);
    state.focus = FormField::AccessLevel;

    process(&mut state, Message::Key(InputKey::Right));
    assert_eq!(state.controller.form().access_level, Some(AccessLevel::Guest));
    process(&mut state, Message::Key(InputKey::Right));
    assert_eq!(
        state.controller.form().access_level,
        Some(AccessLevel::Resident)
    );
    process(&mut state, Message::Key(InputKey::Left));
    process(&mut state, Message::Key(InputKey::Left));
    assert_eq!(state.controller.form().access_level, Some(AccessLevel::Admin));
}

#[test]
fn test_typing_ignored_on_access_group() {
    let mut state = test_state();
    process(&mut state, Message::OpenDialog);
    state.focus = FormField::AccessLevel;
    type_text(&mut state, "xyz");
    assert!(state.controller.form().name.is_empty());
    assert!(state.controller.form().mac_address.is_empty());
}

#[test]
fn test_backspace_edits_focused_field() {
    let mut state = test_state();
    process(&mut state, Message::OpenDialog);
    type_text(&mut state, "Hubb");
    process(&mut state, Message::Key(InputKey::Backspace));
    assert_eq!(state.controller.form().name, "Hub");
}

#[test]
fn test_command_bar_gate_open() {
    let mut state = test_state();
    process(&mut state, Message::Key(InputKey::Char(':')));
    assert_eq!(state.ui_mode(), UiMode::CommandInput);
    type_text(&mut state, "gate open");

    let events = process(&mut state, Message::Key(InputKey::Enter));

    assert_eq!(
        events,
        vec![DashboardEvent::GateAction {
            action: GateAction::Open,
            message: "Gate opens fully for car passage!".to_string(),
        }]
    );
    assert_eq!(state.ui_mode(), UiMode::Normal);
    assert_eq!(
        state.document.access_logs()[0].entry.message,
        "Gate opens fully for car passage!"
    );
    assert_eq!(state.document.device_count(), "3 Active");
    assert_eq!(
        state.document.status(),
        Some("Gate opens fully for car passage!")
    );
}

#[test]
fn test_command_bar_escape_cancels() {
    let mut state = test_state();
    process(&mut state, Message::OpenCommandBar);
    type_text(&mut state, "gate");
    process(&mut state, Message::Key(InputKey::Esc));

    assert_eq!(state.ui_mode(), UiMode::Normal);
    assert!(state.document.access_logs().is_empty());
}

#[test]
fn test_device_add_command_registers() {
    let mut state = test_state();
    let events = process(
        &mut state,
        Message::RunCommand("!device add AA:BB:CC:11:22:33 guest Living Room Hub".into()),
    );

    assert!(matches!(
        &events[0],
        DashboardEvent::DeviceAdded { active_devices: 4, .. }
    ));
    assert_eq!(state.document.devices()[0].entry.name, "Living Room Hub");
    assert_eq!(state.document.device_count(), "4 Active");
}

#[test]
fn test_unknown_command_replies() {
    let mut state = test_state();
    let events = process(&mut state, Message::RunCommand("config".into()));

    assert_eq!(
        events,
        vec![DashboardEvent::CommandReply {
            command: "config".to_string(),
            reply: "Unknown command".to_string(),
            success: false,
        }]
    );
    assert_eq!(state.document.status(), Some("Unknown command"));
}

#[test]
fn test_quit_command_requests_quit() {
    let mut state = test_state();
    process(&mut state, Message::RunCommand("quit".into()));
    assert!(state.should_quit());
}

#[test]
fn test_counter_tracks_many_submissions() {
    let mut state = test_state();
    for n in 1..=4u32 {
        process(
            &mut state,
            Message::RunCommand(format!("device add 00:00:00:00:00:0{} resident Device {}", n, n)),
        );
        assert_eq!(state.document.device_count(), format!("{} Active", 3 + n));
        assert_eq!(state.document.devices().len(), 3 + n as usize);
        assert_eq!(state.document.access_logs().len(), n as usize);
    }
}

#[test]
fn test_tick_advances_dialog_animation() {
    let mut state = test_state();
    process(&mut state, Message::OpenDialog);
    assert!(state.document.dialog().is_animating());

    for _ in 0..crate::document::TRANSITION_FRAMES {
        process(&mut state, Message::Tick);
    }
    assert!(!state.document.dialog().is_animating());
    assert!(state.document.dialog().is_drawn());
}
