//! Screen layout and surface binding for the dashboard
//!
//! Every named [`SurfaceId`] gets a rectangle here. [`bind_surface`] checks
//! that none of them is empty, which is how a too-small terminal is caught
//! at startup, and [`SurfaceMap::hit_test`] maps pointer presses back to the
//! surface under them.

use gatehouse_core::prelude::*;
use gatehouse_core::{AccessLevel, PointerTarget, SurfaceId};
use ratatui::layout::{Constraint, Layout, Position, Rect};

use crate::widgets::modal_overlay::centered_rect;

/// Fixed size of the add-device dialog
pub const DIALOG_WIDTH: u16 = 52;
pub const DIALOG_HEIGHT: u16 = 15;

/// Lists need their borders plus at least one row
const MIN_LIST_HEIGHT: u16 = 3;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Title bar with counter and add button
    pub header: Rect,
    pub device_count: Rect,
    pub add_button: Rect,
    pub device_list: Rect,
    pub access_logs: Rect,
    /// Status line / command bar
    pub footer: Rect,
}

/// Dialog areas, all inside `dialog`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogAreas {
    pub dialog: Rect,
    pub close_button: Rect,
    pub form: Rect,
    pub name_label: Rect,
    pub name_field: Rect,
    pub mac_label: Rect,
    pub mac_field: Rect,
    pub access_label: Rect,
    pub access_group: Rect,
    /// One rect per entry of [`AccessLevel::ALL`]
    pub access_options: [Rect; 3],
    pub error: Rect,
    pub cancel_button: Rect,
    pub submit_button: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let rows = Layout::vertical([
        Constraint::Length(3), // Header (glass container)
        Constraint::Min(MIN_LIST_HEIGHT),
        Constraint::Length(1), // Footer
    ])
    .split(area);

    let [_, device_count, add_button] = header_columns(rows[0]);

    let body = Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[1]);

    ScreenAreas {
        header: rows[0],
        device_count,
        add_button,
        device_list: body[0],
        access_logs: body[1],
        footer: rows[2],
    }
}

/// Split the header's inner row into title, counter and add button
pub fn header_columns(header: Rect) -> [Rect; 3] {
    let cols = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(12),
        Constraint::Length(1),
        Constraint::Length(18),
    ])
    .split(inner(header));
    [cols[0], cols[1], cols[3]]
}

/// Create the dialog layout centered in `area`
pub fn create_dialog(area: Rect) -> DialogAreas {
    let dialog = centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, area);
    let form = inner(dialog);

    let close_button = Rect::new(
        dialog.right().saturating_sub(5),
        dialog.y,
        3.min(dialog.width),
        1.min(dialog.height),
    );

    let rows = Layout::vertical([
        Constraint::Length(1), // Name label
        Constraint::Length(3), // Name input
        Constraint::Length(1), // MAC label
        Constraint::Length(3), // MAC input
        Constraint::Length(1), // Access label
        Constraint::Length(1), // Access options
        Constraint::Length(1), // Error
        Constraint::Length(1), // Buttons
        Constraint::Min(0),
    ])
    .split(form);

    let options = Layout::horizontal([
        Constraint::Length(11),
        Constraint::Length(14),
        Constraint::Length(11),
        Constraint::Min(0),
    ])
    .split(rows[5]);

    let buttons = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(10),
        Constraint::Length(1),
        Constraint::Length(14),
    ])
    .split(rows[7]);

    DialogAreas {
        dialog,
        close_button,
        form,
        name_label: rows[0],
        name_field: rows[1],
        mac_label: rows[2],
        mac_field: rows[3],
        access_label: rows[4],
        access_group: rows[5],
        access_options: [options[0], options[1], options[2]],
        error: rows[6],
        cancel_button: buttons[1],
        submit_button: buttons[3],
    }
}

fn inner(rect: Rect) -> Rect {
    Rect::new(
        rect.x.saturating_add(1),
        rect.y.saturating_add(1),
        rect.width.saturating_sub(2),
        rect.height.saturating_sub(2),
    )
}

/// Rectangles for every named surface of one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceMap {
    pub area: Rect,
    pub screen: ScreenAreas,
    pub dialog: DialogAreas,
}

impl SurfaceMap {
    /// Lay out `area` without checking anything
    pub fn compute(area: Rect) -> Self {
        Self {
            area,
            screen: create(area),
            dialog: create_dialog(area),
        }
    }

    pub fn rect(&self, surface: SurfaceId) -> Rect {
        match surface {
            SurfaceId::Dialog => self.dialog.dialog,
            SurfaceId::AddDeviceButton => self.screen.add_button,
            SurfaceId::CloseDialogButton => self.dialog.close_button,
            SurfaceId::CancelButton => self.dialog.cancel_button,
            SurfaceId::DeviceForm => self.dialog.form,
            SurfaceId::DeviceNameField => self.dialog.name_field,
            SurfaceId::MacAddressField => self.dialog.mac_field,
            SurfaceId::AccessLevelGroup => self.dialog.access_group,
            SurfaceId::SubmitButton => self.dialog.submit_button,
            SurfaceId::DeviceList => self.screen.device_list,
            SurfaceId::DeviceCount => self.screen.device_count,
            SurfaceId::AccessLogs => self.screen.access_logs,
        }
    }

    /// First required surface that has no room, if any
    pub fn first_missing(&self) -> Option<SurfaceId> {
        if self.area.width < DIALOG_WIDTH || self.area.height < DIALOG_HEIGHT {
            return Some(SurfaceId::Dialog);
        }
        SurfaceId::REQUIRED.into_iter().find(|surface| {
            let rect = self.rect(*surface);
            let min_height = match surface {
                SurfaceId::DeviceList | SurfaceId::AccessLogs => MIN_LIST_HEIGHT,
                SurfaceId::DeviceNameField | SurfaceId::MacAddressField => 3,
                _ => 1,
            };
            rect.width == 0 || rect.height < min_height
        })
    }

    /// Map a pointer press to what it landed on
    pub fn hit_test(&self, column: u16, row: u16, dialog_visible: bool) -> PointerTarget {
        let pos = Position::new(column, row);

        if dialog_visible {
            let d = &self.dialog;
            if !d.dialog.contains(pos) {
                return PointerTarget::Backdrop;
            }
            if d.close_button.contains(pos) {
                return PointerTarget::Surface(SurfaceId::CloseDialogButton);
            }
            if let Some(i) = d.access_options.iter().position(|r| r.contains(pos)) {
                return PointerTarget::AccessOption(AccessLevel::ALL[i]);
            }
            let controls = [
                (d.name_field, SurfaceId::DeviceNameField),
                (d.mac_field, SurfaceId::MacAddressField),
                (d.access_group, SurfaceId::AccessLevelGroup),
                (d.cancel_button, SurfaceId::CancelButton),
                (d.submit_button, SurfaceId::SubmitButton),
                (d.form, SurfaceId::DeviceForm),
            ];
            return controls
                .iter()
                .find(|(rect, _)| rect.contains(pos))
                .map(|(_, surface)| PointerTarget::Surface(*surface))
                .unwrap_or(PointerTarget::Surface(SurfaceId::Dialog));
        }

        let s = &self.screen;
        [
            (s.add_button, SurfaceId::AddDeviceButton),
            (s.device_count, SurfaceId::DeviceCount),
            (s.device_list, SurfaceId::DeviceList),
            (s.access_logs, SurfaceId::AccessLogs),
        ]
        .iter()
        .find(|(rect, _)| rect.contains(pos))
        .map(|(_, surface)| PointerTarget::Surface(*surface))
        .unwrap_or(PointerTarget::Elsewhere)
    }

    /// Pointer position as a fraction of the whole area
    pub fn normalize(&self, column: u16, row: u16) -> (f64, f64) {
        let fraction = |value: u16, origin: u16, size: u16| {
            if size <= 1 {
                0.0
            } else {
                f64::from(value.saturating_sub(origin)) / f64::from(size - 1)
            }
        };
        (
            fraction(column, self.area.x, self.area.width),
            fraction(row, self.area.y, self.area.height),
        )
    }
}

/// Lay out `area` and require every named surface to have room.
///
/// Fails with [`Error::MissingSurface`] naming the first surface that
/// cannot be placed.
pub fn bind_surface(area: Rect) -> Result<SurfaceMap> {
    let map = SurfaceMap::compute(area);
    if let Some(surface) = map.first_missing() {
        return Err(Error::missing_surface(surface, area.width, area.height));
    }
    debug!("Bound {} surfaces in {}x{}", SurfaceId::REQUIRED.len(), area.width, area.height);
    Ok(map)
}
