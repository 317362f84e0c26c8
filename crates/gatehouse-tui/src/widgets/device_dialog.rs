//! Add-device modal dialog
//!
//! Rendered over the whole frame: the backdrop is dimmed, then either an
//! empty frame at transition scale or the full form once the dialog is shown.

use gatehouse_app::document::DialogPresentation;
use gatehouse_app::{FormField, Glyph};
use gatehouse_core::{AccessLevel, DeviceForm, FormError, IconName};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use super::modal_overlay;
use crate::layout::{self, DialogAreas};
use crate::theme::{icons::IconSet, palette, styles};

pub struct DeviceDialog<'a> {
    form: &'a DeviceForm,
    focus: FormField,
    access_cursor: AccessLevel,
    error: Option<FormError>,
    presentation: DialogPresentation,
    close: Glyph,
    icons: IconSet,
}

impl<'a> DeviceDialog<'a> {
    pub fn new(
        form: &'a DeviceForm,
        focus: FormField,
        access_cursor: AccessLevel,
        presentation: DialogPresentation,
        icons: IconSet,
    ) -> Self {
        Self {
            form,
            focus,
            access_cursor,
            error: None,
            presentation,
            close: Glyph::Rendered(IconName::Close),
            icons,
        }
    }

    pub fn error(mut self, error: Option<FormError>) -> Self {
        self.error = error;
        self
    }

    pub fn close_glyph(mut self, glyph: Glyph) -> Self {
        self.close = glyph;
        self
    }

    fn frame_block() -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(styles::border_active())
            .style(Style::default().bg(palette::POPUP_BG))
    }

    fn render_input(
        &self,
        area: Rect,
        buf: &mut Buffer,
        value: &str,
        placeholder: &str,
        field: FormField,
    ) {
        let focused = self.focus == field;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if focused {
                styles::border_active()
            } else {
                styles::border_inactive()
            });
        let inner = block.inner(area);
        block.render(area, buf);

        let line = match (value.is_empty(), focused) {
            (true, false) => Line::from(Span::styled(
                placeholder.to_string(),
                styles::text_muted(),
            )),
            (_, true) => Line::from(Span::styled(format!("{}|", value), styles::text_primary())),
            (false, false) => Line::from(Span::styled(value.to_string(), styles::text_secondary())),
        };
        Paragraph::new(line).render(inner, buf);
    }

    fn render_access_options(&self, areas: &DialogAreas, buf: &mut Buffer) {
        let group_focused = self.focus == FormField::AccessLevel;
        for (level, area) in AccessLevel::ALL.iter().zip(areas.access_options) {
            let selected = self.form.access_level == Some(*level);
            let marker = if selected { "(\u{2022})" } else { "( )" };
            let style = if group_focused && self.access_cursor == *level {
                styles::focused_selected()
            } else if selected {
                styles::accent().add_modifier(Modifier::BOLD)
            } else {
                styles::text_secondary()
            };
            Paragraph::new(Line::from(Span::styled(
                format!("{} {}", marker, level.label()),
                style,
            )))
            .render(area, buf);
        }
    }

    fn render_button(area: Rect, buf: &mut Buffer, label: &str, style: Style) {
        Paragraph::new(label.to_string())
            .alignment(Alignment::Center)
            .style(style)
            .render(area, buf);
    }

    fn render_content(&self, areas: &DialogAreas, buf: &mut Buffer) {
        let block = Self::frame_block().title(Span::styled(
            " Add New Device ",
            Style::default()
                .fg(palette::ACCENT_SOFT)
                .add_modifier(Modifier::BOLD),
        ));
        block.render(areas.dialog, buf);

        Paragraph::new(Line::from(Span::styled(
            self.icons.glyph(self.close),
            styles::text_secondary(),
        )))
        .alignment(Alignment::Center)
        .render(areas.close_button, buf);

        Paragraph::new(Span::styled("Device Name", styles::text_primary()))
            .render(areas.name_label, buf);
        self.render_input(
            areas.name_field,
            buf,
            &self.form.name,
            "e.g. Living Room Hub",
            FormField::Name,
        );

        Paragraph::new(Span::styled("MAC Address", styles::text_primary()))
            .render(areas.mac_label, buf);
        self.render_input(
            areas.mac_field,
            buf,
            &self.form.mac_address,
            "AA:BB:CC:DD:EE:FF",
            FormField::MacAddress,
        );

        Paragraph::new(Span::styled("Access Level", styles::text_primary()))
            .render(areas.access_label, buf);
        self.render_access_options(areas, buf);

        if let Some(error) = self.error {
            Paragraph::new(Line::from(Span::styled(error.to_string(), styles::error())))
                .render(areas.error, buf);
        }

        Self::render_button(
            areas.cancel_button,
            buf,
            "Cancel",
            styles::button_secondary(self.focus == FormField::Cancel),
        );
        Self::render_button(
            areas.submit_button,
            buf,
            "Add Device",
            styles::button_primary(self.focus == FormField::Submit),
        );
    }
}

impl Widget for DeviceDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.presentation.is_drawn() {
            return;
        }

        let progress = self.presentation.progress();
        modal_overlay::dim_background(buf, area, progress);

        let areas = layout::create_dialog(area);

        if self.presentation.is_animating() {
            let rect = modal_overlay::scaled_rect(areas.dialog, progress);
            modal_overlay::clear_area(buf, rect);
            Self::frame_block().render(rect, buf);
            return;
        }

        modal_overlay::clear_area(buf, areas.dialog);
        modal_overlay::render_shadow(buf, areas.dialog);
        self.render_content(&areas, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_state, TestTerminal};
    use gatehouse_app::{update, Message};

    fn shown_state() -> gatehouse_app::AppState {
        let mut state = create_test_state();
        update(&mut state, Message::OpenDialog);
        for _ in 0..10 {
            update(&mut state, Message::Tick);
        }
        state
    }

    fn render(state: &gatehouse_app::AppState) -> TestTerminal {
        let mut term = TestTerminal::new();
        let dialog = DeviceDialog::new(
            state.controller.form(),
            state.focus,
            state.access_cursor,
            state.document.dialog(),
            IconSet::default(),
        )
        .error(state.document.form_error());
        let area = term.area();
        term.render_widget(dialog, area);
        term
    }

    #[test]
    fn test_hidden_dialog_draws_nothing() {
        let state = create_test_state();
        let term = render(&state);
        assert!(!term.buffer_contains("Add New Device"));
    }

    #[test]
    fn test_shown_dialog_has_form() {
        let state = shown_state();
        let term = render(&state);

        assert!(term.buffer_contains("Add New Device"));
        assert!(term.buffer_contains("Device Name"));
        assert!(term.buffer_contains("MAC Address"));
        assert!(term.buffer_contains("( ) Guest"));
        assert!(term.buffer_contains("( ) Resident"));
        assert!(term.buffer_contains("Cancel"));
    }

    #[test]
    fn test_focused_input_shows_cursor_and_value() {
        let mut state = shown_state();
        for c in "Hub".chars() {
            update(&mut state, Message::InputChar(c));
        }
        let term = render(&state);
        assert!(term.buffer_contains("Hub|"));
    }

    #[test]
    fn test_selected_access_level_marked() {
        let mut state = shown_state();
        update(&mut state, Message::SelectAccessLevel(AccessLevel::Resident));
        let term = render(&state);
        assert!(term.buffer_contains("(\u{2022}) Resident"));
    }

    #[test]
    fn test_form_error_shown() {
        let mut state = shown_state();
        update(&mut state, Message::SubmitDialog);
        let term = render(&state);
        assert!(term.buffer_contains("Device name is required"));
    }

    #[test]
    fn test_entering_dialog_draws_frame_only() {
        let mut state = create_test_state();
        update(&mut state, Message::OpenDialog);
        assert!(state.document.dialog().is_animating());

        let term = render(&state);
        assert!(!term.buffer_contains("Device Name"));
        assert!(term.buffer_contains("\u{256d}"));
    }
}
