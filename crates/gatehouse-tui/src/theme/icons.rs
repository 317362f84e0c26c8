//! Icon set for the TUI.
//!
//! Resolves substituted [`Glyph`]s to terminal text based on `IconMode`.
//! - `IconMode::Unicode`: safe characters that work in all terminals
//! - `IconMode::NerdFonts`: rich Nerd Font glyphs (requires Nerd Font installed)
//!
//! Placeholders that have not been substituted yet are shown as their raw
//! marker, e.g. `[smartphone]`.

use gatehouse_app::config::IconMode;
use gatehouse_app::Glyph;
use gatehouse_core::IconName;

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Text for a glyph slot
    pub fn glyph(&self, glyph: Glyph) -> String {
        match glyph {
            Glyph::Placeholder(icon) => format!("[{}]", icon.as_str()),
            Glyph::Rendered(icon) => self.icon(icon).to_string(),
        }
    }

    pub fn icon(&self, icon: IconName) -> &'static str {
        match (self.mode, icon) {
            (IconMode::NerdFonts, IconName::Smartphone) => "\u{f3cd}", // nf-fa-mobile
            (IconMode::NerdFonts, IconName::MoreVertical) => "\u{f142}", // nf-fa-ellipsis_v
            (IconMode::NerdFonts, IconName::UserPlus) => "\u{f234}",   // nf-fa-user_plus
            (IconMode::NerdFonts, IconName::Unlock) => "\u{f09c}",     // nf-fa-unlock
            (IconMode::NerdFonts, IconName::Lock) => "\u{f023}",       // nf-fa-lock
            (IconMode::NerdFonts, IconName::DoorOpen) => "\u{f090}",   // nf-fa-sign_in
            (IconMode::NerdFonts, IconName::Terminal) => "\u{f120}",   // nf-fa-terminal
            (IconMode::NerdFonts, IconName::Plus) => "\u{f067}",       // nf-fa-plus
            (IconMode::NerdFonts, IconName::Close) => "\u{f00d}",      // nf-fa-close
            (IconMode::NerdFonts, IconName::Shield) => "\u{f132}",     // nf-fa-shield
            (IconMode::Unicode, IconName::Smartphone) => "\u{25af}",   // ▯
            (IconMode::Unicode, IconName::MoreVertical) => "\u{22ee}", // ⋮
            (IconMode::Unicode, IconName::UserPlus) => "+",
            (IconMode::Unicode, IconName::Unlock) => "\u{25cb}", // ○
            (IconMode::Unicode, IconName::Lock) => "\u{25cf}",   // ●
            (IconMode::Unicode, IconName::DoorOpen) => "\u{25d0}", // ◐
            (IconMode::Unicode, IconName::Terminal) => "\u{276f}", // ❯
            (IconMode::Unicode, IconName::Plus) => "+",
            (IconMode::Unicode, IconName::Close) => "\u{2717}", // ✗
            (IconMode::Unicode, IconName::Shield) => "\u{25c6}", // ◆
        }
    }
}

impl Default for IconSet {
    fn default() -> Self {
        Self::new(IconMode::Unicode)
    }
}
