//! gatehouse-tui - Terminal UI for Gatehouse
//!
//! This crate provides the ratatui-based dashboard: layout and surface
//! binding, widgets, event polling with mouse hit-testing, and the main
//! event loop driving `gatehouse-app`'s update function.

pub mod event;
pub mod layout;
pub mod process;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry points
pub use layout::{bind_surface, SurfaceMap};
pub use runner::run;
