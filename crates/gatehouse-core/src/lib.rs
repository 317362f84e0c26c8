//! # gatehouse-core - Core Domain Types
//!
//! Foundation crate for Gatehouse. Provides domain types, error handling,
//! the device registration view controller and operator command parsing.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`DeviceEntry`] - A device card with name, MAC, access level and status
//! - [`AccessLogEntry`] - An audit line for a registration or gate event
//! - [`AccessLevel`] - Guest, Resident or Admin
//! - [`GateAction`] - Open, open half, close
//!
//! ### Surfaces (`surface`)
//! - [`SurfaceId`] - Named dashboard regions that must exist at startup
//! - [`PointerTarget`] - What a pointer press landed on
//!
//! ### View Controller (`controller`)
//! - [`ViewController`] - Dialog state, form and active-device counter
//! - [`RenderInstruction`] - Output applied by the front end
//!
//! ### Commands (`command`)
//! - [`Command`] - Parsed operator command
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with fatal-error classification
//! - [`FormError`], [`CommandError`] - User-facing input errors
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use gatehouse_core::prelude::*;
//! ```

pub mod command;
pub mod controller;
pub mod error;
pub mod logging;
pub mod surface;
pub mod types;

/// Prelude for common imports used throughout all Gatehouse crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

pub use command::Command;
pub use controller::{DeviceForm, DeviceSubmission, DialogState, RenderInstruction, ViewController};
pub use error::{CommandError, Error, FormError, Result, ResultExt};
pub use surface::{PointerTarget, SurfaceId};
pub use types::{
    AccessLevel, AccessLogEntry, AccessLogKind, DeviceEntry, DeviceStatus, GateAction, IconName,
    JUST_NOW,
};
