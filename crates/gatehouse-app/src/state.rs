//! Application state (Model in TEA pattern)

use gatehouse_core::prelude::*;
use gatehouse_core::{AccessLevel, RenderInstruction, ViewController};

use crate::background::NetField;
use crate::config::Settings;
use crate::document::DashboardDocument;

/// Current UI mode/screen, derived from state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Dashboard with no overlay
    Normal,
    /// Add-device dialog is open
    DeviceDialog,
    /// One-line operator command bar is open
    CommandInput,
}

/// Focusable controls of the add-device dialog, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    MacAddress,
    AccessLevel,
    Submit,
    Cancel,
}

impl FormField {
    const ORDER: [FormField; 5] = [
        FormField::Name,
        FormField::MacAddress,
        FormField::AccessLevel,
        FormField::Submit,
        FormField::Cancel,
    ];

    fn position(&self) -> usize {
        Self::ORDER.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn previous(&self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// True for fields that accept typed characters
    pub fn is_text(&self) -> bool {
        matches!(self, FormField::Name | FormField::MacAddress)
    }
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    /// Dialog state, form input and counter
    pub controller: ViewController,

    /// What is on screen
    pub document: DashboardDocument,

    /// Focused dialog control
    pub focus: FormField,

    /// Highlighted access level option (moved with arrow keys before selecting)
    pub access_cursor: AccessLevel,

    /// Command bar input; `Some` while the bar is open
    pub command_input: Option<String>,

    /// Net background simulation, when enabled
    pub background: Option<NetField>,

    pub settings: Settings,

    /// Should the application quit?
    pub should_quit: bool,
}

impl AppState {
    /// State with the counter seeded from the configured samples.
    /// Nothing is inserted until [`AppState::initialize`] runs.
    pub fn new(settings: Settings) -> Self {
        let seed = u32::try_from(settings.dashboard.samples.len()).unwrap_or(u32::MAX);
        let controller = ViewController::new(seed);
        let document = DashboardDocument::new(controller.device_count_label());

        Self {
            controller,
            document,
            focus: FormField::default(),
            access_cursor: AccessLevel::Guest,
            command_input: None,
            background: None,
            settings,
            should_quit: false,
        }
    }

    /// Startup wiring after the surface is bound: background, samples,
    /// then one icon substitution pass over everything inserted.
    pub fn initialize(&mut self) {
        if self.settings.ui.show_background {
            self.background = Some(NetField::new(&self.settings.background));
            debug!(
                "Net background enabled ({} points per side)",
                self.settings.background.points
            );
        }

        let samples: Vec<_> = self
            .settings
            .dashboard
            .samples
            .iter()
            .map(|s| s.to_entry())
            .collect();
        info!("Seeding {} sample devices", samples.len());
        self.document.seed_devices(samples);

        self.document.apply(RenderInstruction::ReplaceIcons);
    }

    pub fn ui_mode(&self) -> UiMode {
        if self.command_input.is_some() {
            UiMode::CommandInput
        } else if self.controller.is_dialog_visible() {
            UiMode::DeviceDialog
        } else {
            UiMode::Normal
        }
    }

    /// Apply controller output to the document
    pub fn apply(&mut self, instructions: Vec<RenderInstruction>) {
        self.document.apply_all(instructions);
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
