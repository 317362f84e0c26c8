//! Terminal setup and restoration

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use gatehouse_core::prelude::*;
use ratatui::DefaultTerminal;

/// Install a panic hook that restores the terminal
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(std::io::stdout(), DisableMouseCapture);
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Enter the alternate screen with mouse capture on
pub fn init() -> Result<DefaultTerminal> {
    let terminal = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    execute!(std::io::stdout(), EnableMouseCapture)
        .map_err(|e| Error::TerminalInit(format!("mouse capture: {}", e)))?;
    Ok(terminal)
}

pub fn restore() -> Result<()> {
    execute!(std::io::stdout(), DisableMouseCapture)
        .map_err(|e| Error::TerminalRestore(e.to_string()))?;
    ratatui::try_restore().map_err(|e| Error::TerminalRestore(e.to_string()))
}
