//! Gatehouse Library
//!
//! A terminal dashboard for registering gate access devices and driving the
//! gate. The TUI lives in `gatehouse-tui`; this crate adds the headless
//! NDJSON front end and re-exports both entry points.

pub mod headless;

// Re-export main entry points
pub use gatehouse_tui::run;
pub use headless::runner::{run_headless, HeadlessSession};
pub use headless::HeadlessEvent;
