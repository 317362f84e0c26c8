//! Header bar widget
//!
//! Title on the left, then the "N Active" counter and the add-device button
//! in the rects [`layout::header_columns`] assigns them.

use gatehouse_app::Glyph;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::layout;
use crate::theme::{icons::IconSet, styles};

/// Main header showing title, counter and the add button
pub struct DashboardHeader<'a> {
    title: &'a str,
    device_count: &'a str,
    shield: Glyph,
    add: Glyph,
    icons: IconSet,
}

impl<'a> DashboardHeader<'a> {
    pub fn new(title: &'a str, device_count: &'a str, icons: IconSet) -> Self {
        Self {
            title,
            device_count,
            shield: Glyph::Rendered(gatehouse_core::IconName::Shield),
            add: Glyph::Rendered(gatehouse_core::IconName::Plus),
            icons,
        }
    }

    /// Use the document's glyph slots for the fixed header icons
    pub fn glyphs(mut self, shield: Glyph, add: Glyph) -> Self {
        self.shield = shield;
        self.add = add;
        self
    }
}

impl Widget for DashboardHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let [title_area, count_area, button_area] = layout::header_columns(area);

        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled(self.icons.glyph(self.shield), styles::accent()),
            Span::raw(" "),
            Span::styled(self.title, styles::text_bold()),
            Span::styled("  Device Management", styles::text_muted()),
        ]);
        Paragraph::new(title).render(title_area, buf);

        Paragraph::new(Line::from(Span::styled(
            self.device_count,
            styles::accent().add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Right)
        .render(count_area, buf);

        let button = format!("{} Add Device", self.icons.glyph(self.add));
        Paragraph::new(Line::from(Span::styled(button, styles::button_primary(false))))
            .alignment(Alignment::Center)
            .style(styles::button_primary(false))
            .render(button_area, buf);
    }
}
