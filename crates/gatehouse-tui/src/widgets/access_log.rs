//! Access log panel, newest event at the top

use gatehouse_app::LogRow;
use gatehouse_core::AccessLogKind;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::{icons::IconSet, palette, styles};

const ROW_HEIGHT: usize = 3;

pub struct AccessLog<'a> {
    rows: &'a [LogRow],
    icons: IconSet,
}

impl<'a> AccessLog<'a> {
    pub fn new(rows: &'a [LogRow], icons: IconSet) -> Self {
        Self { rows, icons }
    }

    fn row_lines(&self, row: &'a LogRow, width: usize) -> Vec<Line<'a>> {
        let entry = &row.entry;
        let icon = self.icons.glyph(row.icon);
        let time = entry.formatted_time();
        let used = 1 + icon.width() + 1 + entry.message.width() + time.width() + 1;
        let gap = width.saturating_sub(used).max(1);

        vec![
            Line::from(vec![
                Span::raw(" "),
                Span::styled(icon, kind_style(entry.kind)),
                Span::raw(" "),
                Span::styled(entry.message.as_str(), styles::text_primary()),
                Span::raw(" ".repeat(gap)),
                Span::styled(time, styles::text_muted()),
            ]),
            Line::from(vec![
                Span::raw("   "),
                Span::styled(entry.detail.as_str(), styles::text_muted()),
            ]),
            Line::default(),
        ]
    }
}

fn kind_style(kind: AccessLogKind) -> Style {
    let color = match kind {
        AccessLogKind::DeviceAdded => palette::ACCENT_SOFT,
        AccessLogKind::GateOpened => palette::STATUS_GREEN,
        AccessLogKind::GateOpenedHalf => palette::STATUS_YELLOW,
        AccessLogKind::GateClosed => palette::STATUS_RED,
    };
    Style::default().fg(color)
}

impl Widget for AccessLog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block =
            styles::glass_block(false).title(Span::styled(" Access Logs ", styles::text_bold()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        if self.rows.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                " No access events yet",
                styles::text_muted(),
            )))
            .render(inner, buf);
            return;
        }

        let visible = ((usize::from(inner.height) + 1) / ROW_HEIGHT).max(1);
        let width = usize::from(inner.width);
        let lines: Vec<Line> = self
            .rows
            .iter()
            .take(visible)
            .flat_map(|row| self.row_lines(row, width))
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
