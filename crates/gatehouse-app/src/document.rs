//! Dashboard document: the retained surface render instructions apply to
//!
//! The view controller never touches this directly. It emits
//! [`RenderInstruction`]s and [`DashboardDocument::apply`] performs them,
//! which keeps the device list, access log and counter text in one place
//! for the TUI to draw.
//!
//! Icon substitution also lives here: new cards and rows carry
//! [`Glyph::Placeholder`] markers until a [`RenderInstruction::ReplaceIcons`]
//! pass turns them into [`Glyph::Rendered`] glyphs.

use gatehouse_core::prelude::*;
use gatehouse_core::{AccessLogEntry, DeviceEntry, FormError, IconName, RenderInstruction};

/// Number of ticks the dialog entrance/exit transition takes
pub const TRANSITION_FRAMES: u8 = 6;

/// An icon slot before or after substitution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Placeholder(IconName),
    Rendered(IconName),
}

impl Glyph {
    pub fn icon(&self) -> IconName {
        match self {
            Glyph::Placeholder(icon) | Glyph::Rendered(icon) => *icon,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Glyph::Placeholder(_))
    }

    fn render(&mut self) {
        *self = Glyph::Rendered(self.icon());
    }
}

/// A device card in the device list
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceCard {
    pub entry: DeviceEntry,
    pub icon: Glyph,
    pub menu: Glyph,
}

impl DeviceCard {
    fn new(entry: DeviceEntry) -> Self {
        Self {
            entry,
            icon: Glyph::Placeholder(IconName::Smartphone),
            menu: Glyph::Placeholder(IconName::MoreVertical),
        }
    }
}

/// A row in the access log
#[derive(Debug, Clone, PartialEq)]
pub struct LogRow {
    pub entry: AccessLogEntry,
    pub icon: Glyph,
}

impl LogRow {
    fn new(entry: AccessLogEntry) -> Self {
        let icon = Glyph::Placeholder(entry.icon);
        Self { entry, icon }
    }
}

/// Dialog transition phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogPhase {
    #[default]
    Hidden,
    /// Fading/scaling in; counts frames done
    Entering(u8),
    Shown,
    /// Fading/scaling out; counts frames done
    Leaving(u8),
}

/// Presentation state of the dialog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DialogPresentation {
    phase: DialogPhase,
}

impl DialogPresentation {
    pub fn phase(&self) -> DialogPhase {
        self.phase
    }

    /// Whether anything of the dialog is on screen
    pub fn is_drawn(&self) -> bool {
        self.phase != DialogPhase::Hidden
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, DialogPhase::Entering(_) | DialogPhase::Leaving(_))
    }

    /// Opacity/scale factor in `0.0..=1.0`
    pub fn progress(&self) -> f64 {
        let total = f64::from(TRANSITION_FRAMES);
        match self.phase {
            DialogPhase::Hidden => 0.0,
            DialogPhase::Entering(n) => f64::from(n) / total,
            DialogPhase::Shown => 1.0,
            DialogPhase::Leaving(n) => 1.0 - f64::from(n) / total,
        }
    }

    fn show(&mut self) {
        self.phase = match self.phase {
            DialogPhase::Shown | DialogPhase::Entering(_) => self.phase,
            _ => DialogPhase::Entering(0),
        };
    }

    fn hide(&mut self) {
        self.phase = match self.phase {
            DialogPhase::Hidden | DialogPhase::Leaving(_) => self.phase,
            _ => DialogPhase::Leaving(0),
        };
    }

    fn tick(&mut self) {
        self.phase = match self.phase {
            DialogPhase::Entering(n) if n + 1 >= TRANSITION_FRAMES => DialogPhase::Shown,
            DialogPhase::Entering(n) => DialogPhase::Entering(n + 1),
            DialogPhase::Leaving(n) if n + 1 >= TRANSITION_FRAMES => DialogPhase::Hidden,
            DialogPhase::Leaving(n) => DialogPhase::Leaving(n + 1),
            other => other,
        };
    }
}

/// Everything the dashboard shows
#[derive(Debug, Clone, Default)]
pub struct DashboardDocument {
    devices: Vec<DeviceCard>,
    access_logs: Vec<LogRow>,
    device_count: String,
    dialog: DialogPresentation,
    form_error: Option<FormError>,
    status: Option<String>,
    chrome_rendered: bool,
}

impl DashboardDocument {
    pub fn new(device_count: impl Into<String>) -> Self {
        Self {
            device_count: device_count.into(),
            ..Default::default()
        }
    }

    /// Insert pre-existing devices in list order, before any registration.
    /// Their icons stay placeholders until the startup substitution pass.
    pub fn seed_devices(&mut self, entries: impl IntoIterator<Item = DeviceEntry>) {
        self.devices.extend(entries.into_iter().map(DeviceCard::new));
    }

    pub fn devices(&self) -> &[DeviceCard] {
        &self.devices
    }

    pub fn access_logs(&self) -> &[LogRow] {
        &self.access_logs
    }

    pub fn device_count(&self) -> &str {
        &self.device_count
    }

    pub fn dialog(&self) -> DialogPresentation {
        self.dialog
    }

    pub fn form_error(&self) -> Option<FormError> {
        self.form_error
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
    }

    /// Glyph for a fixed UI icon (buttons, headings)
    pub fn chrome_glyph(&self, icon: IconName) -> Glyph {
        if self.chrome_rendered {
            Glyph::Rendered(icon)
        } else {
            Glyph::Placeholder(icon)
        }
    }

    /// Icon slots still waiting for substitution
    pub fn placeholder_count(&self) -> usize {
        let cards = self
            .devices
            .iter()
            .map(|c| usize::from(c.icon.is_placeholder()) + usize::from(c.menu.is_placeholder()))
            .sum::<usize>();
        let rows = self
            .access_logs
            .iter()
            .filter(|r| r.icon.is_placeholder())
            .count();
        cards + rows
    }

    pub fn apply(&mut self, instruction: RenderInstruction) {
        trace!("apply {:?}", instruction);
        match instruction {
            RenderInstruction::ShowDialog => {
                self.form_error = None;
                self.dialog.show();
            }
            RenderInstruction::HideDialog => self.dialog.hide(),
            RenderInstruction::ResetForm => self.form_error = None,
            RenderInstruction::PrependDevice(entry) => {
                self.devices.insert(0, DeviceCard::new(entry));
            }
            RenderInstruction::PrependAccessLog(entry) => {
                self.access_logs.insert(0, LogRow::new(entry));
            }
            RenderInstruction::SetDeviceCount(text) => self.device_count = text,
            RenderInstruction::ReplaceIcons => self.replace_icons(),
            RenderInstruction::ShowFormError(err) => self.form_error = Some(err),
        }
    }

    pub fn apply_all(&mut self, instructions: impl IntoIterator<Item = RenderInstruction>) {
        for instruction in instructions {
            self.apply(instruction);
        }
    }

    /// Advance the dialog transition by one frame
    pub fn tick(&mut self) {
        self.dialog.tick();
    }

    fn replace_icons(&mut self) {
        let mut replaced = 0usize;
        for card in &mut self.devices {
            for glyph in [&mut card.icon, &mut card.menu] {
                if glyph.is_placeholder() {
                    glyph.render();
                    replaced += 1;
                }
            }
        }
        for row in &mut self.access_logs {
            if row.icon.is_placeholder() {
                row.icon.render();
                replaced += 1;
            }
        }
        self.chrome_rendered = true;
        debug!("Replaced {} icon placeholders", replaced);
    }
}
