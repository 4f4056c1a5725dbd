//! IPC server for the Hourglass daemon.
//!
//! This module provides Unix Domain Socket IPC functionality:
//! - Server that listens on a Unix socket
//! - Request/response handling for timer commands
//! - Dispatch into the CountdownTimer

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{UnixListener, UnixStream};
use tokio::time::{timeout, Duration};

use crate::types::{IpcRequest, IpcResponse, ResponseData, SelectParams, StartParams};

use super::timer::CountdownTimer;

// ============================================================================
// Constants
// ============================================================================

/// Socket path relative to the user's home directory.
const SOCKET_PATH_SUFFIX: &str = ".hourglass/hourglass.sock";

/// Maximum request size in bytes (4KB)
const MAX_REQUEST_SIZE: usize = 4096;

/// Read timeout in seconds
const READ_TIMEOUT_SECS: u64 = 5;

/// Returns the default socket path (`~/.hourglass/hourglass.sock`).
///
/// # Errors
///
/// Returns an error if the HOME environment variable is not set.
pub fn default_socket_path() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable is not set")?;
    Ok(PathBuf::from(home).join(SOCKET_PATH_SUFFIX))
}

// ============================================================================
// IpcError
// ============================================================================

/// IPC-specific error types.
#[derive(Debug, thiserror::Error)]
pub enum IpcError {
    /// Read error
    #[error("Failed to read request: {0}")]
    ReadError(String),

    /// Timeout error
    #[error("Operation timed out")]
    Timeout,

    /// Request too large
    #[error("Request too large (max {MAX_REQUEST_SIZE} bytes)")]
    RequestTooLarge,
}

// ============================================================================
// IpcServer
// ============================================================================

/// Unix Domain Socket IPC server.
pub struct IpcServer {
    /// Unix socket listener
    listener: UnixListener,
    /// Socket path (for cleanup)
    socket_path: PathBuf,
}

impl IpcServer {
    /// Creates a new IPC server bound to the specified socket path.
    ///
    /// If the socket file already exists, it will be removed before binding.
    ///
    /// # Errors
    ///
    /// Returns an error if the socket cannot be bound.
    pub fn new(socket_path: &Path) -> Result<Self> {
        // Remove existing socket file if present
        if socket_path.exists() {
            std::fs::remove_file(socket_path)
                .with_context(|| format!("Failed to remove existing socket: {:?}", socket_path))?;
        }

        // Ensure parent directory exists
        if let Some(parent) = socket_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create socket directory: {:?}", parent))?;
        }

        let listener = UnixListener::bind(socket_path)
            .with_context(|| format!("Failed to bind Unix socket: {:?}", socket_path))?;

        Ok(Self {
            listener,
            socket_path: socket_path.to_path_buf(),
        })
    }

    /// Accepts an incoming client connection.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be accepted.
    pub async fn accept(&self) -> Result<UnixStream> {
        let (stream, _addr) = self
            .listener
            .accept()
            .await
            .context("Failed to accept connection")?;
        Ok(stream)
    }

    /// Receives and deserializes an IPC request from the stream.
    ///
    /// Applies a read timeout to prevent blocking indefinitely.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or deserialization fails.
    pub async fn receive_request(stream: &mut UnixStream) -> Result<IpcRequest> {
        let mut buffer = vec![0u8; MAX_REQUEST_SIZE];

        let read_result = timeout(
            Duration::from_secs(READ_TIMEOUT_SECS),
            stream.read(&mut buffer),
        )
        .await;

        let n = match read_result {
            Ok(Ok(n)) => n,
            Ok(Err(e)) => return Err(IpcError::ReadError(e.to_string()).into()),
            Err(_) => return Err(IpcError::Timeout.into()),
        };

        if n == 0 {
            anyhow::bail!("Connection closed by client");
        }
        if n == MAX_REQUEST_SIZE {
            return Err(IpcError::RequestTooLarge.into());
        }

        let request: IpcRequest = serde_json::from_slice(&buffer[..n])
            .with_context(|| "Failed to deserialize IPC request")?;

        Ok(request)
    }

    /// Serializes and sends an IPC response to the stream.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub async fn send_response(stream: &mut UnixStream, response: &IpcResponse) -> Result<()> {
        let json = serde_json::to_vec(response).context("Failed to serialize IPC response")?;

        stream
            .write_all(&json)
            .await
            .context("Failed to write response")?;
        stream.flush().await.context("Failed to flush response")?;

        Ok(())
    }

    /// Returns the socket path.
    pub fn socket_path(&self) -> &Path {
        &self.socket_path
    }
}

impl Drop for IpcServer {
    fn drop(&mut self) {
        // Clean up socket file on drop
        let _ = std::fs::remove_file(&self.socket_path);
    }
}

// ============================================================================
// RequestHandler
// ============================================================================

/// Handles IPC requests by dispatching to the CountdownTimer.
///
/// The timer is internally synchronized, so the handler can be shared freely
/// across connections. Commands issued from an invalid phase are no-ops in
/// the core; the handler turns the not-applied case into a descriptive
/// error response for the client.
pub struct RequestHandler {
    /// Shared timer handle
    timer: CountdownTimer,
}

impl RequestHandler {
    /// Creates a new request handler around the given timer.
    pub fn new(timer: CountdownTimer) -> Self {
        Self { timer }
    }

    /// Handles an IPC request and returns the appropriate response.
    pub async fn handle(&self, request: IpcRequest) -> IpcResponse {
        match request {
            IpcRequest::Select { params } => self.handle_select(params).await,
            IpcRequest::Start { params } => self.handle_start(params).await,
            IpcRequest::Cancel => self.handle_cancel().await,
            IpcRequest::Reset => self.handle_reset().await,
            IpcRequest::Status => self.handle_status().await,
        }
    }

    /// Handles the select command.
    async fn handle_select(&self, params: SelectParams) -> IpcResponse {
        let selection = match params.to_selection() {
            Ok(selection) => selection,
            Err(e) => return IpcResponse::error(e),
        };

        let applied = self
            .timer
            .select_time(selection.hours, selection.minutes, selection.seconds)
            .await;
        let state = self.timer.snapshot().await;

        let message = if applied {
            "duration selected"
        } else {
            "countdown is running; selection unchanged"
        };
        IpcResponse::success(message, Some(ResponseData::from_timer_state(&state)))
    }

    /// Handles the start command.
    async fn handle_start(&self, params: StartParams) -> IpcResponse {
        if params.has_selection() {
            let selection = match params.to_selection() {
                Ok(selection) => selection,
                Err(e) => return IpcResponse::error(e),
            };
            // No-op while running; the start below reports the conflict.
            self.timer
                .select_time(selection.hours, selection.minutes, selection.seconds)
                .await;
        }

        let started = self.timer.start().await;
        let state = self.timer.snapshot().await;

        if started {
            IpcResponse::success(
                "countdown started",
                Some(ResponseData::from_timer_state(&state)),
            )
        } else if state.is_running() {
            IpcResponse::error("a countdown is already running")
        } else {
            IpcResponse::error("cannot start a zero-duration countdown")
        }
    }

    /// Handles the cancel command.
    async fn handle_cancel(&self) -> IpcResponse {
        let cancelled = self.timer.cancel().await;
        let state = self.timer.snapshot().await;

        if cancelled {
            IpcResponse::success(
                "countdown cancelled",
                Some(ResponseData::from_timer_state(&state)),
            )
        } else {
            IpcResponse::error("no countdown is running")
        }
    }

    /// Handles the reset command.
    async fn handle_reset(&self) -> IpcResponse {
        let reset = self.timer.reset().await;
        let state = self.timer.snapshot().await;

        if reset {
            IpcResponse::success(
                "countdown reset",
                Some(ResponseData::from_timer_state(&state)),
            )
        } else {
            IpcResponse::error("no countdown is running")
        }
    }

    /// Handles the status command.
    async fn handle_status(&self) -> IpcResponse {
        let state = self.timer.snapshot().await;
        IpcResponse::success("", Some(ResponseData::from_timer_state(&state)))
    }
}

// ============================================================================
// Tests
// ============================================================================
