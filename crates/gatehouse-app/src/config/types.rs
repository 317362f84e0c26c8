//! Configuration types for Gatehouse
//!
//! Defines:
//! - `Settings` - Global application settings
//! - `UiSettings`, `BackgroundSettings`, `DashboardSettings` - Per-section types
//! - `SampleDevice` - A pre-existing device shown at startup

use gatehouse_core::{AccessLevel, DeviceEntry, DeviceStatus};
use serde::{Deserialize, Serialize};

/// Global settings from config.toml
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub background: BackgroundSettings,

    #[serde(default)]
    pub dashboard: DashboardSettings,
}

/// Icon rendering mode.
///
/// Controls whether the UI uses Nerd Font glyphs (requires a Nerd Font)
/// or safe Unicode characters (works in all terminals).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Safe Unicode characters that work in all terminals (default)
    #[default]
    Unicode,
    /// Nerd Font glyphs, requires a Nerd Font installed in the terminal
    NerdFonts,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

impl std::str::FromStr for IconMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unicode" => Ok(IconMode::Unicode),
            "nerd_fonts" | "nerd-fonts" => Ok(IconMode::NerdFonts),
            other => Err(format!("unknown icon mode '{}'", other)),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Icon mode: "unicode" (default) or "nerd_fonts"
    #[serde(default)]
    pub icons: IconMode,

    /// Draw the animated net behind the dashboard
    #[serde(default = "default_true")]
    pub show_background: bool,

    /// Header title
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            icons: IconMode::default(),
            show_background: true,
            title: default_title(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_title() -> String {
    "Gate Access".to_string()
}

/// Net background parameters.
///
/// Distances are in abstract field units; the widget maps the field onto
/// whatever braille resolution the terminal offers.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BackgroundSettings {
    /// Link the pointer position to nearby points
    pub mouse_controls: bool,
    /// Minimum area, in cells, before the net is drawn
    pub min_width: u16,
    pub min_height: u16,
    pub scale: f64,
    /// Net colour as 0xRRGGBB
    pub color: u32,
    pub background_color: u32,
    /// Points per grid side
    pub points: u16,
    pub max_distance: f64,
    pub spacing: f64,
}

impl Default for BackgroundSettings {
    fn default() -> Self {
        Self {
            mouse_controls: true,
            min_width: 20,
            min_height: 8,
            scale: 1.0,
            color: 0x4f46e5,
            background_color: 0x0b0d12,
            points: 12,
            max_distance: 22.0,
            spacing: 18.0,
        }
    }
}

/// Dashboard content settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DashboardSettings {
    /// Devices shown before any registration; their count seeds the counter
    #[serde(default = "default_samples")]
    pub samples: Vec<SampleDevice>,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            samples: default_samples(),
        }
    }
}

/// A pre-existing device entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SampleDevice {
    pub name: String,
    pub mac_address: String,
    pub access_level: AccessLevel,
    #[serde(default)]
    pub status: DeviceStatus,
    /// Relative-time label, e.g. "Added 2 weeks ago"
    #[serde(default = "default_added")]
    pub added: String,
}

impl SampleDevice {
    fn new(
        name: &str,
        mac_address: &str,
        access_level: AccessLevel,
        status: DeviceStatus,
        added: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            mac_address: mac_address.to_string(),
            access_level,
            status,
            added: added.to_string(),
        }
    }

    pub fn to_entry(&self) -> DeviceEntry {
        let mut entry = DeviceEntry::pending(&self.name, &self.mac_address, self.access_level);
        entry.status = self.status;
        entry.added_label = self.added.clone();
        entry
    }
}

fn default_added() -> String {
    "Added earlier".to_string()
}

fn default_samples() -> Vec<SampleDevice> {
    vec![
        SampleDevice::new(
            "Main Gate Controller",
            "3C:71:BF:4A:12:01",
            AccessLevel::Admin,
            DeviceStatus::Approved,
            "Added 2 weeks ago",
        ),
        SampleDevice::new(
            "Resident Phone",
            "A4:83:E7:2C:9F:10",
            AccessLevel::Resident,
            DeviceStatus::Approved,
            "Added 5 days ago",
        ),
        SampleDevice::new(
            "Courier Tablet",
            "F0:18:98:6B:33:7E",
            AccessLevel::Guest,
            DeviceStatus::Pending,
            "Added 1 hour ago",
        ),
    ]
}
