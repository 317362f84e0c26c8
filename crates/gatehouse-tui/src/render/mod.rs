//! Main render/view function (View in TEA pattern)


use gatehouse_app::AppState;
use gatehouse_core::IconName;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use super::{layout, widgets};
use crate::layout::SurfaceMap;
use crate::theme::{icons::IconSet, palette, styles};

/// Render the complete UI (View function in TEA)
///
/// Returns the surface map the frame was laid out with so pointer presses
/// can be hit-tested against it, or `None` when the terminal has shrunk
/// below what the dashboard needs and only a notice was drawn.
pub fn view(frame: &mut Frame, state: &AppState) -> Option<SurfaceMap> {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let map = match layout::bind_surface(area) {
        Ok(map) => map,
        Err(e) => {
            render_too_small(frame, area, &e.to_string());
            return None;
        }
    };

    if let Some(field) = &state.background {
        frame.render_widget(
            widgets::NetBackground::new(field, &state.settings.background),
            area,
        );
    }

    let icons = IconSet::new(state.settings.ui.icons);
    let document = &state.document;
    let areas = &map.screen;

    let header = widgets::DashboardHeader::new(
        &state.settings.ui.title,
        document.device_count(),
        icons,
    )
    .glyphs(
        document.chrome_glyph(IconName::Shield),
        document.chrome_glyph(IconName::Plus),
    );
    frame.render_widget(header, areas.header);

    frame.render_widget(
        widgets::DeviceList::new(document.devices(), icons),
        areas.device_list,
    );
    frame.render_widget(
        widgets::AccessLog::new(document.access_logs(), icons),
        areas.access_logs,
    );
    frame.render_widget(
        widgets::CommandBar::new(
            state.ui_mode(),
            state.command_input.as_deref(),
            document.status(),
            icons,
        ),
        areas.footer,
    );

    let dialog = widgets::DeviceDialog::new(
        state.controller.form(),
        state.focus,
        state.access_cursor,
        document.dialog(),
        icons,
    )
    .error(document.form_error())
    .close_glyph(document.chrome_glyph(IconName::Close));
    frame.render_widget(dialog, area);

    Some(map)
}

fn render_too_small(frame: &mut Frame, area: Rect, reason: &str) {
    let lines = vec![
        Line::from(Span::styled("Terminal too small", styles::text_bold())),
        Line::from(Span::styled(reason.to_string(), styles::text_muted())),
        Line::from(Span::styled(
            format!(
                "Need at least {}x{}",
                layout::DIALOG_WIDTH,
                layout::DIALOG_HEIGHT
            ),
            styles::text_secondary(),
        )),
    ];
    let y = area.y + area.height.saturating_sub(3) / 2;
    let notice = Rect::new(area.x, y, area.width, 3.min(area.height));
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        notice,
    );
}
