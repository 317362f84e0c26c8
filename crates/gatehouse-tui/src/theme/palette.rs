//! Color palette for the dashboard.
//!
//! Indigo accents on a dark slate background, taken from the web dashboard's
//! indigo-600 / gray scale.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Rgb(11, 13, 18);
pub const CARD_BG: Color = Color::Rgb(18, 21, 28);
pub const POPUP_BG: Color = Color::Rgb(28, 33, 43);

// --- Borders ---
pub const BORDER_DIM: Color = Color::Rgb(45, 51, 59);
pub const BORDER_ACTIVE: Color = Color::Rgb(99, 102, 241);

// --- Accent ---
pub const ACCENT: Color = Color::Rgb(79, 70, 229); // indigo-600
pub const ACCENT_SOFT: Color = Color::Rgb(129, 140, 248);

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::Rgb(229, 231, 235);
pub const TEXT_SECONDARY: Color = Color::Rgb(156, 163, 175);
pub const TEXT_MUTED: Color = Color::Rgb(107, 114, 128);
pub const CONTRAST_FG: Color = Color::Rgb(249, 250, 251);

// --- Status badges ---
pub const STATUS_GREEN: Color = Color::Rgb(16, 185, 129);
pub const STATUS_RED: Color = Color::Rgb(244, 63, 94);
pub const STATUS_YELLOW: Color = Color::Rgb(234, 179, 8);

// --- Effects ---
pub const SHADOW: Color = Color::Rgb(5, 6, 8);
pub const BACKDROP_DIM: Color = Color::Rgb(60, 60, 70);
