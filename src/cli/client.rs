//! IPC client for communicating with the Hourglass daemon.
//!
//! This module provides:
//! - Unix Domain Socket client
//! - Request/response handling
//! - Connection retry logic
//! - Timeout handling

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::UnixStream;
use tokio::time::timeout;

use crate::cli::commands::{SelectArgs, StartArgs};
use crate::daemon::ipc::default_socket_path;
use crate::types::{IpcRequest, IpcResponse, SelectParams, StartParams};

// ============================================================================
// Constants
// ============================================================================

/// Connection timeout in seconds
const CONNECTION_TIMEOUT_SECS: u64 = 5;

/// Read/write timeout in seconds
const IO_TIMEOUT_SECS: u64 = 5;

/// Maximum response size in bytes (64KB)
const MAX_RESPONSE_SIZE: usize = 65536;

/// Maximum retry attempts
const MAX_RETRIES: u32 = 3;

/// Retry delay in milliseconds (base delay, multiplied by attempt number)
const RETRY_DELAY_MS: u64 = 500;

// ============================================================================
// IpcClient
// ============================================================================

/// IPC client for daemon communication.
pub struct IpcClient {
    /// Socket path
    socket_path: PathBuf,
    /// Connection timeout
    timeout: Duration,
}

impl IpcClient {
    /// Creates a new IPC client with the default socket path.
    pub fn new() -> Result<Self> {
        Ok(Self::with_socket_path(default_socket_path()?))
    }

    /// Creates a new IPC client with a custom socket path.
    pub fn with_socket_path(socket_path: PathBuf) -> Self {
        Self {
            socket_path,
            timeout: Duration::from_secs(CONNECTION_TIMEOUT_SECS),
        }
    }

    /// Returns the socket path.
    pub fn socket_path(&self) -> &PathBuf {
        &self.socket_path
    }

    /// Sends a select command to the daemon.
    pub async fn select(&self, args: &SelectArgs) -> Result<IpcResponse> {
        let request = IpcRequest::Select {
            params: SelectParams {
                hours: args.hours,
                minutes: args.minutes,
                seconds: args.seconds,
            },
        };
        self.send_request_with_retry(&request).await
    }

    /// Sends a start command to the daemon.
    pub async fn start(&self, args: &StartArgs) -> Result<IpcResponse> {
        let request = IpcRequest::Start {
            params: StartParams {
                hours: args.hours,
                minutes: args.minutes,
                seconds: args.seconds,
            },
        };
        self.send_request_with_retry(&request).await
    }

    /// Sends a cancel command to the daemon.
    pub async fn cancel(&self) -> Result<IpcResponse> {
        self.send_request_with_retry(&IpcRequest::Cancel).await
    }

    /// Sends a reset command to the daemon.
    pub async fn reset(&self) -> Result<IpcResponse> {
        self.send_request_with_retry(&IpcRequest::Reset).await
    }

    /// Sends a status query to the daemon.
    pub async fn status(&self) -> Result<IpcResponse> {
        self.send_request_with_retry(&IpcRequest::Status).await
    }

    /// Sends a request to the daemon with retry logic.
    async fn send_request_with_retry(&self, request: &IpcRequest) -> Result<IpcResponse> {
        let mut last_error = None;

        for attempt in 1..=MAX_RETRIES {
            match self.send_request(request).await {
                Ok(response) => return Ok(response),
                Err(e) => {
                    tracing::warn!("request failed (attempt {}/{}): {}", attempt, MAX_RETRIES, e);
                    last_error = Some(e);

                    if attempt < MAX_RETRIES {
                        let delay = Duration::from_millis(RETRY_DELAY_MS * u64::from(attempt));
                        tokio::time::sleep(delay).await;
                    }
                }
            }
        }

        Err(last_error.context("request failed with no recorded error")?)
    }

    /// Sends a single request to the daemon.
    async fn send_request(&self, request: &IpcRequest) -> Result<IpcResponse> {
        // Connect with timeout
        let mut stream = timeout(self.timeout, UnixStream::connect(&self.socket_path))
            .await
            .context("connection timed out")?
            .context("cannot reach the daemon; run 'hourglass daemon' first")?;

        // Serialize request
        let request_json =
            serde_json::to_string(request).context("failed to serialize request")?;

        // Send request with timeout
        timeout(
            Duration::from_secs(IO_TIMEOUT_SECS),
            stream.write_all(request_json.as_bytes()),
        )
        .await
        .context("write timed out")?
        .context("failed to send request")?;

        // Flush
        timeout(Duration::from_secs(IO_TIMEOUT_SECS), stream.flush())
            .await
            .context("flush timed out")?
            .context("failed to flush request")?;

        // Shutdown write side to signal end of request
        stream
            .shutdown()
            .await
            .context("failed to shut down the write side")?;

        // Read response with timeout
        let mut buffer = vec![0u8; MAX_RESPONSE_SIZE];
        let n = timeout(
            Duration::from_secs(IO_TIMEOUT_SECS),
            stream.read(&mut buffer),
        )
        .await
        .context("read timed out")?
        .context("failed to read response")?;

        if n == 0 {
            anyhow::bail!("the daemon closed the connection without responding");
        }

        // Deserialize response
        let response: IpcResponse =
            serde_json::from_slice(&buffer[..n]).context("failed to parse response")?;

        // Check for error response
        if response.status == "error" {
            anyhow::bail!("{}", response.message);
        }

        Ok(response)
    }
}

// ============================================================================
// Tests
// ============================================================================
