//! Core domain type definitions

use std::str::FromStr;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Relative-time label shown on freshly added entries
pub const JUST_NOW: &str = "just now";

/// Trust tier assigned to a device at registration time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    Guest,
    Resident,
    Admin,
}

impl AccessLevel {
    /// All levels, in the order they are presented in the dialog
    pub const ALL: [AccessLevel; 3] = [
        AccessLevel::Guest,
        AccessLevel::Resident,
        AccessLevel::Admin,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AccessLevel::Guest => "Guest",
            AccessLevel::Resident => "Resident",
            AccessLevel::Admin => "Admin",
        }
    }

    /// Position within [`AccessLevel::ALL`]
    pub fn index(&self) -> usize {
        match self {
            AccessLevel::Guest => 0,
            AccessLevel::Resident => 1,
            AccessLevel::Admin => 2,
        }
    }

    /// Next level, wrapping around
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous level, wrapping around
    pub fn previous(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for AccessLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "guest" => Ok(AccessLevel::Guest),
            "resident" => Ok(AccessLevel::Resident),
            "admin" => Ok(AccessLevel::Admin),
            other => Err(format!("unknown access level '{}'", other)),
        }
    }
}

/// Approval status of a registered device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceStatus {
    #[default]
    Pending,
    Approved,
    Blocked,
}

impl DeviceStatus {
    /// Badge text
    pub fn label(&self) -> &'static str {
        match self {
            DeviceStatus::Pending => "Pending",
            DeviceStatus::Approved => "Approved",
            DeviceStatus::Blocked => "Blocked",
        }
    }
}

/// Icon names understood by the glyph substitution pass.
///
/// Names follow the feather icon set the dashboard was designed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconName {
    Smartphone,
    MoreVertical,
    UserPlus,
    Unlock,
    Lock,
    DoorOpen,
    Terminal,
    Plus,
    Close,
    Shield,
}

impl IconName {
    /// The `data-feather` style marker used before substitution
    pub fn as_str(&self) -> &'static str {
        match self {
            IconName::Smartphone => "smartphone",
            IconName::MoreVertical => "more-vertical",
            IconName::UserPlus => "user-plus",
            IconName::Unlock => "unlock",
            IconName::Lock => "lock",
            IconName::DoorOpen => "log-in",
            IconName::Terminal => "terminal",
            IconName::Plus => "plus",
            IconName::Close => "x",
            IconName::Shield => "shield",
        }
    }
}

/// A device shown in the device list
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceEntry {
    pub name: String,
    pub mac_address: String,
    pub access_level: AccessLevel,
    pub status: DeviceStatus,
    /// Relative-time label ("Added just now", "Added 2 days ago")
    pub added_label: String,
    pub added_at: DateTime<Local>,
}

impl DeviceEntry {
    /// A freshly registered device awaiting approval
    pub fn pending(
        name: impl Into<String>,
        mac_address: impl Into<String>,
        access_level: AccessLevel,
    ) -> Self {
        Self {
            name: name.into(),
            mac_address: mac_address.into(),
            access_level,
            status: DeviceStatus::Pending,
            added_label: format!("Added {}", JUST_NOW),
            added_at: Local::now(),
        }
    }

    /// "MAC: AA:BB:.." line shown under the device name
    pub fn mac_line(&self) -> String {
        format!("MAC: {}", self.mac_address)
    }
}

/// What an access log row records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessLogKind {
    DeviceAdded,
    GateOpened,
    GateOpenedHalf,
    GateClosed,
}

/// A human-readable audit line
#[derive(Debug, Clone, PartialEq)]
pub struct AccessLogEntry {
    pub kind: AccessLogKind,
    pub icon: IconName,
    pub message: String,
    pub detail: String,
    pub recorded_at: DateTime<Local>,
}

impl AccessLogEntry {
    /// Audit line for a newly registered device
    pub fn device_added(device: &DeviceEntry) -> Self {
        Self {
            kind: AccessLogKind::DeviceAdded,
            icon: IconName::UserPlus,
            message: format!("New device added: {}", device.name),
            detail: format!("MAC: {} \u{2022} {}", device.mac_address, JUST_NOW),
            recorded_at: Local::now(),
        }
    }

    /// Audit line for an operator gate command
    pub fn gate(action: GateAction) -> Self {
        Self {
            kind: action.log_kind(),
            icon: action.icon(),
            message: action.reply().to_string(),
            detail: format!("Operator command \u{2022} {}", JUST_NOW),
            recorded_at: Local::now(),
        }
    }

    /// Format timestamp for display
    pub fn formatted_time(&self) -> String {
        self.recorded_at.format("%H:%M:%S").to_string()
    }
}

/// Physical gate actions an operator can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GateAction {
    /// Open fully for car passage
    Open,
    /// Open partially for pedestrian passage
    OpenHalf,
    Close,
}

impl GateAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            GateAction::Open => "open",
            GateAction::OpenHalf => "open-half",
            GateAction::Close => "close",
        }
    }

    /// Operator-facing confirmation text
    pub fn reply(&self) -> &'static str {
        match self {
            GateAction::Open => "Gate opens fully for car passage!",
            GateAction::OpenHalf => "Gate opens partially for pedestrian passage!",
            GateAction::Close => "Gate closes!",
        }
    }

    fn log_kind(&self) -> AccessLogKind {
        match self {
            GateAction::Open => AccessLogKind::GateOpened,
            GateAction::OpenHalf => AccessLogKind::GateOpenedHalf,
            GateAction::Close => AccessLogKind::GateClosed,
        }
    }

    fn icon(&self) -> IconName {
        match self {
            GateAction::Open => IconName::Unlock,
            GateAction::OpenHalf => IconName::DoorOpen,
            GateAction::Close => IconName::Lock,
        }
    }
}

impl FromStr for GateAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(GateAction::Open),
            "open-half" => Ok(GateAction::OpenHalf),
            "close" => Ok(GateAction::Close),
            other => Err(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_level_parse_case_insensitive() {
        assert_eq!("Guest".parse::<AccessLevel>(), Ok(AccessLevel::Guest));
        assert_eq!(" ADMIN ".parse::<AccessLevel>(), Ok(AccessLevel::Admin));
        assert!("root".parse::<AccessLevel>().is_err());
    }

    #[test]
    fn test_access_level_cycle_wraps() {
        assert_eq!(AccessLevel::Admin.next(), AccessLevel::Guest);
        assert_eq!(AccessLevel::Guest.previous(), AccessLevel::Admin);
        assert_eq!(AccessLevel::Guest.next(), AccessLevel::Resident);
    }

    #[test]
    fn test_pending_device_defaults() {
        let device =
            DeviceEntry::pending("Living Room Hub", "AA:BB:CC:11:22:33", AccessLevel::Guest);
        assert_eq!(device.status, DeviceStatus::Pending);
        assert_eq!(device.added_label, "Added just now");
        assert_eq!(device.mac_line(), "MAC: AA:BB:CC:11:22:33");
    }

    #[test]
    fn test_device_added_log_entry_text() {
        let device =
            DeviceEntry::pending("Living Room Hub", "AA:BB:CC:11:22:33", AccessLevel::Guest);
        let entry = AccessLogEntry::device_added(&device);
        assert_eq!(entry.message, "New device added: Living Room Hub");
        assert_eq!(entry.detail, "MAC: AA:BB:CC:11:22:33 • just now");
        assert_eq!(entry.icon, IconName::UserPlus);
    }

    #[test]
    fn test_gate_log_entry_uses_reply() {
        let entry = AccessLogEntry::gate(GateAction::OpenHalf);
        assert_eq!(entry.message, "Gate opens partially for pedestrian passage!");
        assert_eq!(entry.kind, AccessLogKind::GateOpenedHalf);
    }

    #[test]
    fn test_gate_action_parse() {
        assert_eq!("open-half".parse::<GateAction>(), Ok(GateAction::OpenHalf));
        assert_eq!("wide".parse::<GateAction>(), Err("wide".to_string()));
    }
}
