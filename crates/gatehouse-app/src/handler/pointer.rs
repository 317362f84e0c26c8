//! Pointer press handling

use gatehouse_core::{PointerTarget, SurfaceId};

use crate::message::Message;
use crate::state::{AppState, FormField};

/// Convert a hit-tested pointer press to a message.
///
/// While the dialog is visible a press on the backdrop closes it; a press
/// anywhere else inside the dialog content only focuses or activates the
/// control under the pointer.
pub fn handle_pointer(state: &AppState, target: PointerTarget) -> Option<Message> {
    if state.command_input.is_some() {
        return Some(Message::CancelCommandBar);
    }

    if state.controller.is_dialog_visible() {
        return match target {
            PointerTarget::Backdrop => Some(Message::CloseDialog),
            // Page surfaces sit behind the backdrop
            PointerTarget::Surface(surface) if !surface.is_dialog_content() => {
                Some(Message::CloseDialog)
            }
            PointerTarget::AccessOption(level) => Some(Message::SelectAccessLevel(level)),
            PointerTarget::Surface(surface) => match surface {
                SurfaceId::CloseDialogButton | SurfaceId::CancelButton => {
                    Some(Message::CloseDialog)
                }
                SurfaceId::SubmitButton => Some(Message::SubmitDialog),
                SurfaceId::DeviceNameField => Some(Message::FocusField(FormField::Name)),
                SurfaceId::MacAddressField => Some(Message::FocusField(FormField::MacAddress)),
                SurfaceId::AccessLevelGroup => Some(Message::FocusField(FormField::AccessLevel)),
                _ => None,
            },
            PointerTarget::Elsewhere => None,
        };
    }

    match target {
        PointerTarget::Surface(SurfaceId::AddDeviceButton) => Some(Message::OpenDialog),
        _ => None,
    }
}
