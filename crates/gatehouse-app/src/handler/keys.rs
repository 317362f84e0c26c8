//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, FormField, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode() {
        UiMode::Normal => handle_key_normal(key),
        UiMode::DeviceDialog => handle_key_device_dialog(state, key),
        UiMode::CommandInput => handle_key_command_input(key),
    }
}

fn handle_key_normal(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('a' | '+') => Some(Message::OpenDialog),
        InputKey::Char(':') => Some(Message::OpenCommandBar),
        InputKey::Char('q') | InputKey::Esc => Some(Message::RequestQuit),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_device_dialog(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Esc => Some(Message::CloseDialog),
        InputKey::Tab => Some(Message::FocusNextField),
        InputKey::BackTab => Some(Message::FocusPreviousField),
        InputKey::Enter if state.focus == FormField::Cancel => Some(Message::CloseDialog),
        InputKey::Enter => Some(Message::SubmitDialog),
        key => match state.focus {
            field if field.is_text() => handle_key_text_field(key),
            FormField::AccessLevel => handle_key_access_level(state, key),
            _ => match key {
                InputKey::Left | InputKey::Up => Some(Message::FocusPreviousField),
                InputKey::Right | InputKey::Down => Some(Message::FocusNextField),
                _ => None,
            },
        },
    }
}

fn handle_key_text_field(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char(c) => Some(Message::InputChar(c)),
        InputKey::Backspace => Some(Message::Backspace),
        InputKey::Up => Some(Message::FocusPreviousField),
        InputKey::Down => Some(Message::FocusNextField),
        _ => None,
    }
}

fn handle_key_access_level(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Left | InputKey::Up => Some(Message::CycleAccessLevel(false)),
        InputKey::Right | InputKey::Down => Some(Message::CycleAccessLevel(true)),
        InputKey::Char(' ') => Some(Message::SelectAccessLevel(state.access_cursor)),
        _ => None,
    }
}

fn handle_key_command_input(key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Esc => Some(Message::CancelCommandBar),
        InputKey::Enter => Some(Message::SubmitCommandBar),
        InputKey::Char(c) => Some(Message::InputChar(c)),
        InputKey::Backspace => Some(Message::Backspace),
        _ => None,
    }
}
