//! gatehouse-app - Application state and orchestration for Gatehouse
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! device dashboard: messages, state, the `update()` function, configuration
//! loading, the dashboard document that render instructions are applied to,
//! and the animated net background simulation.

pub mod background;
pub mod config;
pub mod document;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod signals;
pub mod state;

// Re-export primary types
pub use document::{DashboardDocument, DeviceCard, DialogPhase, Glyph, LogRow};
pub use handler::{update, DashboardEvent, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, FormField, UiMode};
