//! Footer line: command input while the bar is open, otherwise the latest
//! status message or key hints for the current mode.

use gatehouse_app::UiMode;
use gatehouse_core::IconName;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{icons::IconSet, palette, styles};

pub struct CommandBar<'a> {
    mode: UiMode,
    input: Option<&'a str>,
    status: Option<&'a str>,
    icons: IconSet,
}

impl<'a> CommandBar<'a> {
    pub fn new(
        mode: UiMode,
        input: Option<&'a str>,
        status: Option<&'a str>,
        icons: IconSet,
    ) -> Self {
        Self {
            mode,
            input,
            status,
            icons,
        }
    }

    fn hints(&self) -> &'static str {
        match self.mode {
            UiMode::Normal => "a add device  : command (try :help)  q quit",
            UiMode::DeviceDialog => "Tab next  Shift+Tab previous  Enter submit  Esc close",
            UiMode::CommandInput => "Enter run  Esc cancel",
        }
    }
}

impl Widget for CommandBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(palette::CARD_BG));

        let line = match (self.input, self.status) {
            (Some(input), _) => Line::from(vec![
                Span::styled(
                    format!(" {} ", self.icons.icon(IconName::Terminal)),
                    styles::accent(),
                ),
                Span::styled(format!("{}|", input), styles::text_primary()),
            ]),
            (None, Some(status)) => Line::from(vec![
                Span::raw(" "),
                Span::styled(status, styles::text_secondary()),
                Span::styled("  \u{2502}  ", styles::text_muted()),
                Span::styled(self.hints(), styles::text_muted()),
            ]),
            (None, None) => Line::from(vec![
                Span::raw(" "),
                Span::styled(self.hints(), styles::text_muted()),
            ]),
        };

        Paragraph::new(line).render(area, buf);
    }
}
