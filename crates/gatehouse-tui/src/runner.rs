//! Main TUI runner - entry point and event loop

use gatehouse_app::config::Settings;
use gatehouse_app::{signals, AppState, Message};
use gatehouse_core::prelude::*;
use ratatui::layout::Rect;
use tokio::sync::mpsc;

use crate::layout::{self, SurfaceMap};
use crate::{event, process, render, terminal};

/// Run the dashboard until the operator quits.
///
/// Every named surface is bound against the initial terminal size before
/// any state is built; a missing one aborts startup with
/// [`Error::MissingSurface`].
pub async fn run(settings: Settings) -> Result<()> {
    terminal::install_panic_hook();
    let mut term = terminal::init()?;

    let size = term.size().context("reading terminal size")?;
    let area = Rect::new(0, 0, size.width, size.height);
    if let Err(e) = layout::bind_surface(area) {
        error!("Startup aborted: {}", e);
        terminal::restore()?;
        return Err(e);
    }

    let mut state = AppState::new(settings);
    state.initialize();
    info!(
        "Dashboard ready: {}",
        state.controller.device_count_label()
    );

    // Unified message channel (signal handler)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(64);
    let signal_task = signals::spawn_signal_handler(msg_tx);

    let result = run_loop(&mut term, &mut state, msg_rx);

    signal_task.abort();
    terminal::restore()?;
    info!("Dashboard closed");

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
) -> Result<()> {
    while !state.should_quit() {
        while let Ok(msg) = msg_rx.try_recv() {
            process::process_message(state, msg);
        }

        let mut map: Option<SurfaceMap> = None;
        terminal.draw(|frame| map = render::view(frame, state))?;

        let dialog_visible = state.controller.is_dialog_visible();
        if let Some(message) = event::poll(map.as_ref(), dialog_visible)? {
            process::process_message(state, message);
        }
    }

    Ok(())
}
