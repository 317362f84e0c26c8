//! Semantic style builders for the dashboard.

use gatehouse_core::DeviceStatus;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn text_bold() -> Style {
    text_primary().add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT_SOFT)
}

pub fn error() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

/// Filled indigo button, like the web page's primary button
pub fn button_primary(focused: bool) -> Style {
    let style = Style::default().fg(palette::CONTRAST_FG).bg(palette::ACCENT);
    if focused {
        style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        style
    }
}

pub fn button_secondary(focused: bool) -> Style {
    if focused {
        focused_selected()
    } else {
        Style::default().fg(palette::TEXT_SECONDARY).bg(palette::CARD_BG)
    }
}

/// Used for focused+selected items across widgets
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::BORDER_ACTIVE)
        .add_modifier(Modifier::BOLD)
}

/// Badge colour for a device status
pub fn status_badge(status: DeviceStatus) -> Style {
    let color = match status {
        DeviceStatus::Pending => palette::STATUS_YELLOW,
        DeviceStatus::Approved => palette::STATUS_GREEN,
        DeviceStatus::Blocked => palette::STATUS_RED,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}
