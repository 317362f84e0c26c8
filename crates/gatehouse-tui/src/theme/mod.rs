//! Centralized theme for the dashboard.
//!
//! - `palette`: Raw color constants
//! - `styles`: Semantic style builder functions
//! - `icons`: Glyph resolution with Nerd Font and Unicode sets

pub mod icons;
pub mod palette;
pub mod styles;
