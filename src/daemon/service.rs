//! Daemon service loop for the Hourglass timer.
//!
//! Wires the pieces together for `hourglass daemon`:
//! - Owns the CountdownTimer for the lifetime of the process
//! - Serves IPC requests from the CLI over the Unix socket
//! - Reacts to timer events: logs transitions and plays the completion
//!   sound when a countdown reaches zero
//! - Tears the timer down on ctrl-c so no tick task outlives the session

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::sound::{try_create_player, SoundPlayer, SoundSource};
use crate::types::format_hms;

use super::ipc::{default_socket_path, IpcServer, RequestHandler};
use super::timer::{CountdownTimer, TimerEvent};

// ============================================================================
// DaemonOptions
// ============================================================================

/// Options for running the daemon.
#[derive(Debug, Clone, Default)]
pub struct DaemonOptions {
    /// Socket path override; defaults to `~/.hourglass/hourglass.sock`
    pub socket_path: Option<PathBuf>,
    /// Audio file to play on completion instead of the built-in chime
    pub sound_file: Option<PathBuf>,
    /// Disable the completion sound entirely
    pub no_sound: bool,
}

// ============================================================================
// Daemon entry point
// ============================================================================

/// Runs the daemon until a shutdown signal arrives.
///
/// # Errors
///
/// Returns an error if the socket cannot be bound or a configured sound
/// file does not exist.
pub async fn run(options: DaemonOptions) -> Result<()> {
    let socket_path = match options.socket_path {
        Some(path) => path,
        None => default_socket_path()?,
    };

    let completion_sound = match options.sound_file {
        Some(path) => SoundSource::file_validated(path)?,
        None => SoundSource::Chime,
    };
    let player = try_create_player(options.no_sound);

    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let timer = CountdownTimer::new(event_tx);

    let server = IpcServer::new(&socket_path)?;
    let handler = Arc::new(RequestHandler::new(timer.clone()));
    info!("hourglass daemon listening on {:?}", server.socket_path());

    // The event loop stays on this task: the rodio player is not Send.
    tokio::select! {
        result = serve(&server, handler) => {
            result?;
        }
        _ = run_event_loop(event_rx, player, completion_sound) => {}
        _ = tokio::signal::ctrl_c() => {
            info!("shutdown signal received");
        }
    }

    // Session over: no tick may fire past this point.
    timer.teardown().await;
    info!("hourglass daemon stopped");
    Ok(())
}

/// Accepts connections and serves one request per connection.
async fn serve(server: &IpcServer, handler: Arc<RequestHandler>) -> Result<()> {
    loop {
        let mut stream = server
            .accept()
            .await
            .context("Failed to accept IPC connection")?;
        let handler = Arc::clone(&handler);

        tokio::spawn(async move {
            match IpcServer::receive_request(&mut stream).await {
                Ok(request) => {
                    debug!(?request, "handling request");
                    let response = handler.handle(request).await;
                    if let Err(e) = IpcServer::send_response(&mut stream, &response).await {
                        warn!("failed to send response: {e:#}");
                    }
                }
                Err(e) => warn!("failed to read request: {e:#}"),
            }
        });
    }
}

/// Consumes timer events until the channel closes.
///
/// This is the presentation side of the timer: it only observes state and
/// triggers the completion sound; it never mutates the countdown.
pub async fn run_event_loop(
    mut events: mpsc::UnboundedReceiver<TimerEvent>,
    player: impl SoundPlayer,
    completion_sound: SoundSource,
) {
    while let Some(event) = events.recv().await {
        match event {
            TimerEvent::Started { total_millis } => {
                info!("countdown started: {}", format_hms(total_millis));
            }
            TimerEvent::Tick { remaining_millis } => {
                debug!("remaining: {}", format_hms(remaining_millis));
            }
            TimerEvent::Completed => {
                info!("countdown completed");
                if let Err(e) = player.play(&completion_sound) {
                    warn!("failed to play completion sound: {}", e);
                }
            }
            TimerEvent::Cancelled => {
                info!("countdown cancelled");
            }
            TimerEvent::Reset { total_millis } => {
                info!("countdown reset to {}", format_hms(total_millis));
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
