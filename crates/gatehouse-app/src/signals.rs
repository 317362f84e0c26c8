//! OS signal handling: any termination signal becomes `Message::Quit`

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::message::Message;
use gatehouse_core::prelude::*;

/// Listen for SIGINT/SIGTERM (Ctrl+C on Windows) in the background and
/// forward a single quit message to the dashboard loop.
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let signal_name = match wait_for_signal().await {
            Ok(name) => name,
            Err(e) => {
                error!("Signal handler error: {}", e);
                return;
            }
        };

        info!("{} received, shutting down dashboard", signal_name);
        if tx.send(Message::Quit).await.is_err() {
            debug!("Dashboard loop already gone, dropping quit message");
        }
    })
}

#[cfg(unix)]
async fn wait_for_signal() -> Result<&'static str> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut interrupt = signal(SignalKind::interrupt())
        .map_err(|e| Error::terminal(format!("cannot listen for SIGINT: {}", e)))?;
    let mut terminate = signal(SignalKind::terminate())
        .map_err(|e| Error::terminal(format!("cannot listen for SIGTERM: {}", e)))?;

    let name = tokio::select! {
        _ = interrupt.recv() => "SIGINT",
        _ = terminate.recv() => "SIGTERM",
    };
    Ok(name)
}

#[cfg(windows)]
async fn wait_for_signal() -> Result<&'static str> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::terminal(format!("cannot listen for Ctrl+C: {}", e)))?;
    Ok("Ctrl+C")
}
