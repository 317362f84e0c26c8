//! Headless mode runner - main event loop without TUI

use tokio::sync::mpsc;
use tracing::{error, info};

use gatehouse_app::config::Settings;
use gatehouse_app::{signals, update, AppState, Message, UpdateAction};
use gatehouse_core::prelude::Result;

use super::HeadlessEvent;

/// Dashboard state driven by text commands instead of a terminal
pub struct HeadlessSession {
    state: AppState,
}

impl HeadlessSession {
    /// Initialized session; the net background is never simulated here
    pub fn new(mut settings: Settings) -> Self {
        settings.ui.show_background = false;
        let mut state = AppState::new(settings);
        state.initialize();
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    pub fn ready_event(&self) -> HeadlessEvent {
        HeadlessEvent::ready(self.state.controller.active_devices())
    }

    /// Run a message and its follow-ups, collecting published events
    pub fn process(&mut self, message: Message) -> Vec<HeadlessEvent> {
        let mut events = Vec::new();
        let mut msg = Some(message);
        while let Some(m) = msg {
            let result = update(&mut self.state, m);
            if let Some(UpdateAction::Publish(event)) = result.action {
                events.push(HeadlessEvent::from(event));
            }
            msg = result.message;
        }
        events
    }

    /// One operator command line
    pub fn run_line(&mut self, line: &str) -> Vec<HeadlessEvent> {
        self.process(Message::RunCommand(line.to_string()))
    }
}

/// Run in headless mode - output NDJSON events instead of TUI
pub async fn run_headless(settings: Settings) -> Result<()> {
    info!("═══════════════════════════════════════════════════════");
    info!("Gatehouse starting in HEADLESS mode");
    info!("═══════════════════════════════════════════════════════");

    let mut session = HeadlessSession::new(settings);
    session.ready_event().emit();

    let (msg_tx, mut msg_rx) = mpsc::channel::<Message>(256);

    let stdin_tx = msg_tx.clone();
    std::thread::spawn(move || {
        spawn_stdin_reader_blocking(stdin_tx);
    });
    let signal_task = signals::spawn_signal_handler(msg_tx);

    while let Some(msg) = msg_rx.recv().await {
        for event in session.process(msg) {
            event.emit();
        }
        if session.should_quit() {
            info!("Quit requested");
            break;
        }
    }

    signal_task.abort();
    HeadlessEvent::shutdown().emit();
    info!("Gatehouse headless mode exiting");
    Ok(())
}

/// Forward stdin lines as commands; EOF quits
fn spawn_stdin_reader_blocking(msg_tx: mpsc::Sender<Message>) {
    use std::io::BufRead;

    let stdin = std::io::stdin();
    let reader = stdin.lock();

    for line in reader.lines() {
        match line {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                if msg_tx
                    .blocking_send(Message::RunCommand(trimmed.to_string()))
                    .is_err()
                {
                    return;
                }
            }
            Err(e) => {
                error!("Failed to read stdin: {}", e);
                break;
            }
        }
    }

    info!("Stdin closed");
    let _ = msg_tx.blocking_send(Message::Quit);
}
