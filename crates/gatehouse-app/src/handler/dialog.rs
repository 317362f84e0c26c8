//! Add-device dialog handlers

use gatehouse_core::prelude::*;
use gatehouse_core::{AccessLevel, FormError, RenderInstruction};

use super::{DashboardEvent, UpdateResult};
use crate::state::{AppState, FormField};

pub fn handle_open(state: &mut AppState) -> UpdateResult {
    let instructions = state.controller.open_dialog();
    state.apply(instructions);
    state.focus = FormField::Name;
    state.access_cursor = AccessLevel::Guest;
    debug!("Add-device dialog opened");
    UpdateResult::publish(DashboardEvent::DialogOpened)
}

/// Close the dialog. Closing an already hidden dialog changes nothing
/// visible and publishes nothing.
pub fn handle_close(state: &mut AppState) -> UpdateResult {
    let was_visible = state.controller.is_dialog_visible();
    let instructions = state.controller.close_dialog();
    state.apply(instructions);
    state.focus = FormField::Name;

    if was_visible {
        debug!("Add-device dialog closed");
        UpdateResult::publish(DashboardEvent::DialogClosed)
    } else {
        UpdateResult::none()
    }
}

pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    if !state.controller.is_dialog_visible() {
        return UpdateResult::none();
    }
    let instructions = state.controller.submit_form();
    apply_submission(state, instructions)
}

/// Apply submission output and report what happened.
///
/// Shared by the dialog and the `device add` command.
pub(crate) fn apply_submission(
    state: &mut AppState,
    instructions: Vec<RenderInstruction>,
) -> UpdateResult {
    let event = instructions.iter().find_map(|i| match i {
        RenderInstruction::PrependDevice(device) => Some(DashboardEvent::DeviceAdded {
            name: device.name.clone(),
            mac_address: device.mac_address.clone(),
            access_level: device.access_level,
            active_devices: state.controller.active_devices(),
            added_at: device.added_at,
        }),
        RenderInstruction::ShowFormError(error) => {
            Some(DashboardEvent::FormRejected { error: *error })
        }
        _ => None,
    });
    state.apply(instructions);

    match event {
        Some(DashboardEvent::FormRejected { error }) => {
            warn!("Device form rejected: {}", error);
            state.focus = field_for_error(error);
            UpdateResult::publish(DashboardEvent::FormRejected { error })
        }
        Some(event) => {
            if let DashboardEvent::DeviceAdded { name, .. } = &event {
                info!(
                    "Device added: {} ({})",
                    name,
                    state.controller.device_count_label()
                );
                state.document.set_status(format!("Device added: {}", name));
            }
            state.focus = FormField::Name;
            UpdateResult::publish(event)
        }
        None => UpdateResult::none(),
    }
}

fn field_for_error(error: FormError) -> FormField {
    match error {
        FormError::NameRequired => FormField::Name,
        FormError::MacAddressRequired => FormField::MacAddress,
        FormError::AccessLevelRequired => FormField::AccessLevel,
    }
}

pub fn set_focus(state: &mut AppState, field: FormField) {
    if field == FormField::AccessLevel {
        if let Some(level) = state.controller.form().access_level {
            state.access_cursor = level;
        }
    }
    state.focus = field;
}

pub fn handle_input_char(state: &mut AppState, c: char) {
    if !state.controller.is_dialog_visible() {
        return;
    }
    let form = state.controller.form_mut();
    match state.focus {
        FormField::Name => form.name.push(c),
        FormField::MacAddress => form.mac_address.push(c),
        _ => {}
    }
}

pub fn handle_backspace(state: &mut AppState) {
    if !state.controller.is_dialog_visible() {
        return;
    }
    let form = state.controller.form_mut();
    match state.focus {
        FormField::Name => {
            form.name.pop();
        }
        FormField::MacAddress => {
            form.mac_address.pop();
        }
        _ => {}
    }
}

/// Check one radio option; the others are implicitly unchecked
pub fn select_access_level(state: &mut AppState, level: AccessLevel) {
    if !state.controller.is_dialog_visible() {
        return;
    }
    state.controller.form_mut().access_level = Some(level);
    state.access_cursor = level;
    state.focus = FormField::AccessLevel;
}

/// Arrow keys on the radio group move and check, like a browser does.
/// With nothing checked yet the highlighted option is checked first.
pub fn cycle_access_level(state: &mut AppState, forward: bool) {
    let level = match state.controller.form().access_level {
        Some(current) if forward => current.next(),
        Some(current) => current.previous(),
        None => state.access_cursor,
    };
    select_access_level(state, level);
}
