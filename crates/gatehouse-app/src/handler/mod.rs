//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes
//! - `pointer`: Pointer press handling
//! - `dialog`: Add-device dialog handlers
//! - `command`: Command bar and operator command handlers

pub(crate) mod command;
pub(crate) mod dialog;
pub(crate) mod keys;
pub(crate) mod pointer;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use chrono::{DateTime, Local};
use gatehouse_core::{AccessLevel, FormError, GateAction};

use crate::message::Message;

// Re-export main entry point
pub use update::update;

pub use keys::handle_key;
pub use pointer::handle_pointer;

/// Something observable happened on the dashboard
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEvent {
    DeviceAdded {
        name: String,
        mac_address: String,
        access_level: AccessLevel,
        active_devices: u32,
        added_at: DateTime<Local>,
    },
    GateAction {
        action: GateAction,
        message: String,
    },
    FormRejected {
        error: FormError,
    },
    CommandReply {
        command: String,
        reply: String,
        success: bool,
    },
    DialogOpened,
    DialogClosed,
}

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Report an event to whoever drives the loop (log file or NDJSON)
    Publish(DashboardEvent),
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }

    /// Shorthand for publishing an event
    pub fn publish(event: DashboardEvent) -> Self {
        Self::action(UpdateAction::Publish(event))
    }
}
