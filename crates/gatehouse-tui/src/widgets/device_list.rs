//! Device list panel: one three-line card per registered device, newest first

use gatehouse_app::DeviceCard;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::{icons::IconSet, styles};

/// Lines per card, separator included
const CARD_HEIGHT: usize = 4;

pub struct DeviceList<'a> {
    cards: &'a [DeviceCard],
    icons: IconSet,
}

impl<'a> DeviceList<'a> {
    pub fn new(cards: &'a [DeviceCard], icons: IconSet) -> Self {
        Self { cards, icons }
    }

    fn card_lines(&self, card: &'a DeviceCard, width: usize) -> Vec<Line<'a>> {
        let entry = &card.entry;
        let icon = self.icons.glyph(card.icon);
        let menu = self.icons.glyph(card.menu);
        let badge = format!(" {} ", entry.status.label());

        // " icon name" on the left, "badge menu " on the right
        let left = 1 + icon.width() + 1 + entry.name.width();
        let right = badge.width() + 1 + menu.width() + 1;
        let gap = width.saturating_sub(left + right).max(1);

        vec![
            Line::from(vec![
                Span::raw(" "),
                Span::styled(icon, styles::accent()),
                Span::raw(" "),
                Span::styled(entry.name.as_str(), styles::text_bold()),
                Span::raw(" ".repeat(gap)),
                Span::styled(badge, styles::status_badge(entry.status)),
                Span::raw(" "),
                Span::styled(menu, styles::text_muted()),
            ]),
            Line::from(vec![
                Span::raw("   "),
                Span::styled(entry.mac_line(), styles::text_secondary()),
                Span::styled(" \u{2022} ", styles::text_muted()),
                Span::styled(entry.access_level.label(), styles::text_secondary()),
            ]),
            Line::from(vec![
                Span::raw("   "),
                Span::styled(entry.added_label.as_str(), styles::text_muted()),
            ]),
            Line::default(),
        ]
    }
}

impl Widget for DeviceList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false)
            .title(Span::styled(" Registered Devices ", styles::text_bold()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        if self.cards.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                " No devices registered",
                styles::text_muted(),
            )))
            .render(inner, buf);
            return;
        }

        let visible = (usize::from(inner.height) + 1) / CARD_HEIGHT;
        let width = usize::from(inner.width);
        let lines: Vec<Line> = self
            .cards
            .iter()
            .take(visible.max(1))
            .flat_map(|card| self.card_lines(card, width))
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
