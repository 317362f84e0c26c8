//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use gatehouse_core::{AccessLevel, PointerTarget};

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // ─────────────────────────────────────────────────────────
    // Raw input
    // ─────────────────────────────────────────────────────────
    /// Keyboard event from terminal
    Key(InputKey),
    /// Pointer press, already hit-tested against the surface map
    Pointer(PointerTarget),
    /// Pointer moved, as a fraction (0.0..=1.0) of the dashboard area
    PointerMoved { x: f64, y: f64 },
    /// Poll timeout; drives animations
    Tick,

    // ─────────────────────────────────────────────────────────
    // Dialog
    // ─────────────────────────────────────────────────────────
    OpenDialog,
    CloseDialog,
    SubmitDialog,
    FocusNextField,
    FocusPreviousField,
    /// Focus a specific dialog control
    FocusField(crate::state::FormField),
    /// Type into the focused text field (or the command bar)
    InputChar(char),
    Backspace,
    SelectAccessLevel(AccessLevel),
    /// Move the access level selection; `true` moves forward
    CycleAccessLevel(bool),

    // ─────────────────────────────────────────────────────────
    // Operator commands
    // ─────────────────────────────────────────────────────────
    OpenCommandBar,
    CancelCommandBar,
    SubmitCommandBar,
    /// Run one command line (from the command bar or stdin)
    RunCommand(String),

    // ─────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────
    RequestQuit,
    Quit,
}
