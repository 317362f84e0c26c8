//! Terminal event polling

use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use gatehouse_app::{InputKey, Message};
use gatehouse_core::prelude::*;
use std::time::Duration;

use crate::layout::SurfaceMap;

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        _ => None,
    }
}

/// Translate one terminal event.
///
/// Mouse events need the surface map of the last frame; without one (the
/// terminal is too small) they are dropped.
pub fn translate(event: Event, map: Option<&SurfaceMap>, dialog_visible: bool) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            key_event_to_input(key).map(Message::Key)
        }
        Event::Mouse(mouse) => {
            let map = map?;
            match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => Some(Message::Pointer(map.hit_test(
                    mouse.column,
                    mouse.row,
                    dialog_visible,
                ))),
                MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                    let (x, y) = map.normalize(mouse.column, mouse.row);
                    Some(Message::PointerMoved { x, y })
                }
                _ => None,
            }
        }
        _ => None,
    }
}

/// Poll for terminal events with timeout
pub fn poll(map: Option<&SurfaceMap>, dialog_visible: bool) -> Result<Option<Message>> {
    // Poll with 50ms timeout (20 FPS)
    if event::poll(Duration::from_millis(50))? {
        let event = event::read()?;
        Ok(translate(event, map, dialog_visible))
    } else {
        // Generate tick on timeout for animations
        Ok(Some(Message::Tick))
    }
}
