//! Headless mode - NDJSON event output for scripting
//!
//! Operator commands are read from stdin, one per line, and run through the
//! same `update()` as the TUI. Every published dashboard event is written to
//! stdout as one JSON object per line.
//!
//! # Example Output
//!
//! ```json
//! {"event":"ready","active_devices":3,"timestamp":1704700001000}
//! {"event":"device_added","name":"Living Room Hub","mac_address":"AA:BB:CC:DD:EE:FF","access_level":"resident","active_devices":4,"timestamp":1704700002000}
//! {"event":"gate_action","action":"open-half","message":"Gate opens partially for pedestrian passage!","timestamp":1704700003000}
//! ```

pub mod runner;

use chrono::Utc;
use gatehouse_app::DashboardEvent;
use gatehouse_core::{AccessLevel, GateAction, Result};
use serde::Serialize;
use std::io::{self, Write};
use tracing::error;

/// Events emitted in headless mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Samples are seeded and commands are accepted
    Ready { active_devices: u32, timestamp: i64 },

    DeviceAdded {
        name: String,
        mac_address: String,
        access_level: AccessLevel,
        active_devices: u32,
        timestamp: i64,
    },

    GateAction {
        action: GateAction,
        message: String,
        timestamp: i64,
    },

    /// A `device add` submission failed validation
    FormRejected { error: String, timestamp: i64 },

    CommandReply {
        command: String,
        reply: String,
        success: bool,
        timestamp: i64,
    },

    DialogOpened { timestamp: i64 },

    DialogClosed { timestamp: i64 },

    Shutdown { timestamp: i64 },
}

impl HeadlessEvent {
    /// Write this event as one NDJSON line
    pub fn write_to(&self, out: &mut impl Write) -> Result<()> {
        let json = serde_json::to_string(self)?;
        writeln!(out, "{}", json)?;
        out.flush()?;
        Ok(())
    }

    /// Emit this event to stdout
    pub fn emit(&self) {
        let mut stdout = io::stdout().lock();
        if let Err(e) = self.write_to(&mut stdout) {
            error!("Failed to write headless event to stdout: {}", e);
        }
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    pub fn ready(active_devices: u32) -> Self {
        Self::Ready {
            active_devices,
            timestamp: Self::now(),
        }
    }

    pub fn shutdown() -> Self {
        Self::Shutdown {
            timestamp: Self::now(),
        }
    }
}

impl From<DashboardEvent> for HeadlessEvent {
    fn from(event: DashboardEvent) -> Self {
        let timestamp = Self::now();
        match event {
            DashboardEvent::DeviceAdded {
                name,
                mac_address,
                access_level,
                active_devices,
                added_at,
            } => Self::DeviceAdded {
                name,
                mac_address,
                access_level,
                active_devices,
                timestamp: added_at.timestamp_millis(),
            },
            DashboardEvent::GateAction { action, message } => Self::GateAction {
                action,
                message,
                timestamp,
            },
            DashboardEvent::FormRejected { error } => Self::FormRejected {
                error: error.to_string(),
                timestamp,
            },
            DashboardEvent::CommandReply {
                command,
                reply,
                success,
            } => Self::CommandReply {
                command,
                reply,
                success,
                timestamp,
            },
            DashboardEvent::DialogOpened => Self::DialogOpened { timestamp },
            DashboardEvent::DialogClosed => Self::DialogClosed { timestamp },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;
    use gatehouse_core::FormError;

    fn to_json(event: &HeadlessEvent) -> serde_json::Value {
        let mut out = Vec::new();
        event.write_to(&mut out).expect("write failed");
        let line = String::from_utf8(out).expect("utf8");
        assert!(line.ends_with('\n'));
        assert_eq!(line.lines().count(), 1);
        serde_json::from_str(line.trim_end()).expect("invalid JSON")
    }

    #[test]
    fn test_ready_serialization() {
        let value = to_json(&HeadlessEvent::ready(3));
        assert_eq!(value["event"], "ready");
        assert_eq!(value["active_devices"], 3);
        assert!(value["timestamp"].is_number());
    }

    #[test]
    fn test_device_added_serialization() {
        let added_at = Local::now();
        let event = HeadlessEvent::from(DashboardEvent::DeviceAdded {
            name: "Living Room Hub".into(),
            mac_address: "AA:BB:CC:DD:EE:FF".into(),
            access_level: AccessLevel::Resident,
            active_devices: 4,
            added_at,
        });
        let value = to_json(&event);

        assert_eq!(value["event"], "device_added");
        assert_eq!(value["name"], "Living Room Hub");
        assert_eq!(value["access_level"], "resident");
        assert_eq!(value["active_devices"], 4);
        assert_eq!(value["timestamp"], added_at.timestamp_millis());
    }

    #[test]
    fn test_gate_action_serialization() {
        let event = HeadlessEvent::from(DashboardEvent::GateAction {
            action: GateAction::OpenHalf,
            message: GateAction::OpenHalf.reply().into(),
        });
        let value = to_json(&event);

        assert_eq!(value["event"], "gate_action");
        assert_eq!(value["action"], "open-half");
        assert_eq!(value["message"], "Gate opens partially for pedestrian passage!");
    }

    #[test]
    fn test_form_rejected_uses_message() {
        let event = HeadlessEvent::from(DashboardEvent::FormRejected {
            error: FormError::MacAddressRequired,
        });
        let value = to_json(&event);
        assert_eq!(value["event"], "form_rejected");
        assert_eq!(value["error"], "MAC address is required");
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_io_error() {
        let err = HeadlessEvent::shutdown()
            .write_to(&mut ClosedPipe)
            .unwrap_err();
        assert!(matches!(err, gatehouse_core::Error::Io(_)));
    }
}
