//! Core data types for the Hourglass countdown timer.
//!
//! This module defines the data structures used for:
//! - Countdown state management
//! - Duration selection with validation
//! - Remaining-time display formatting
//! - IPC request/response serialization

use serde::{Deserialize, Serialize};

// ============================================================================
// Constants
// ============================================================================

/// Length of one countdown step in milliseconds.
pub const TICK_MILLIS: u64 = 1_000;

/// Maximum selectable hours.
pub const MAX_HOURS: u32 = 99;

/// Maximum selectable minutes.
pub const MAX_MINUTES: u32 = 59;

/// Maximum selectable seconds.
pub const MAX_SECONDS: u32 = 59;

// ============================================================================
// TimerPhase
// ============================================================================

/// Represents the current phase of the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerPhase {
    /// No countdown is active
    Idle,
    /// A countdown is in progress
    Running,
    /// The last countdown ran down to zero naturally
    Completed,
}

impl TimerPhase {
    /// Returns the string representation of the phase.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerPhase::Idle => "idle",
            TimerPhase::Running => "running",
            TimerPhase::Completed => "completed",
        }
    }
}

impl Default for TimerPhase {
    fn default() -> Self {
        TimerPhase::Idle
    }
}

// ============================================================================
// TimerSelection
// ============================================================================

/// The duration picked by the user, decomposed into clock components.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerSelection {
    /// Hours component (0-99)
    pub hours: u32,
    /// Minutes component (0-59)
    pub minutes: u32,
    /// Seconds component (0-59)
    pub seconds: u32,
}

impl TimerSelection {
    /// Creates a new selection from clock components.
    pub fn new(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Validates the selection against the picker ranges.
    ///
    /// Returns an error message if validation fails.
    pub fn validate(&self) -> Result<(), String> {
        if self.hours > MAX_HOURS {
            return Err(format!("hours must be in the range 0-{MAX_HOURS}"));
        }
        if self.minutes > MAX_MINUTES {
            return Err(format!("minutes must be in the range 0-{MAX_MINUTES}"));
        }
        if self.seconds > MAX_SECONDS {
            return Err(format!("seconds must be in the range 0-{MAX_SECONDS}"));
        }
        Ok(())
    }

    /// Converts the selection to a total duration in milliseconds.
    pub fn total_millis(&self) -> u64 {
        u64::from(self.hours * 3600 + self.minutes * 60 + self.seconds) * TICK_MILLIS
    }

    /// Returns true if the selection represents a zero duration.
    pub fn is_zero(&self) -> bool {
        self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }
}

// ============================================================================
// TimerState
// ============================================================================

/// Observable state of the countdown timer.
///
/// The phase encodes the running/completed flags so the two can never be
/// true at the same time. All mutators are no-ops from invalid phases and
/// report whether they applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerState {
    /// Current phase of the countdown
    pub phase: TimerPhase,
    /// Duration currently selected in the picker
    pub selection: TimerSelection,
    /// Total milliseconds of the current/last run, fixed at start
    pub total_millis: u64,
    /// Milliseconds left in the current run
    pub remaining_millis: u64,
}

impl TimerState {
    /// Creates a new state with nothing selected and nothing running.
    pub fn new() -> Self {
        Self {
            phase: TimerPhase::Idle,
            selection: TimerSelection::default(),
            total_millis: 0,
            remaining_millis: 0,
        }
    }

    /// Stores a new duration selection.
    ///
    /// Ignored while a countdown is running. Returns true if the selection
    /// was applied.
    pub fn select(&mut self, hours: u32, minutes: u32, seconds: u32) -> bool {
        if self.is_running() {
            return false;
        }
        self.selection = TimerSelection::new(hours, minutes, seconds);
        true
    }

    /// Begins a countdown over the selected duration.
    ///
    /// A no-op while already running (a second task must never be spawned)
    /// and for a zero selection. Returns true if a run was started.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        let total = self.selection.total_millis();
        if total == 0 {
            return false;
        }
        self.phase = TimerPhase::Running;
        self.total_millis = total;
        self.remaining_millis = total;
        true
    }

    /// Advances the countdown by one step.
    ///
    /// The final step clamps to exactly zero rather than going negative.
    /// Returns true if the countdown completed on this step.
    pub fn tick(&mut self) -> bool {
        self.remaining_millis = self.remaining_millis.saturating_sub(TICK_MILLIS);
        if self.remaining_millis == 0 {
            self.phase = TimerPhase::Completed;
            true
        } else {
            false
        }
    }

    /// Cancels the running countdown, dropping the remaining time to zero.
    ///
    /// A no-op when not running. Returns true if a run was cancelled.
    pub fn cancel(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.phase = TimerPhase::Idle;
        self.remaining_millis = 0;
        true
    }

    /// Resets the running countdown back to its starting duration.
    ///
    /// Unlike [`cancel`](Self::cancel) the remaining time is restored to the
    /// total of the current run. A no-op when not running. Returns true if a
    /// run was reset.
    pub fn reset(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.phase = TimerPhase::Idle;
        self.remaining_millis = self.total_millis;
        true
    }

    /// Returns true if a countdown is in progress.
    pub fn is_running(&self) -> bool {
        self.phase == TimerPhase::Running
    }

    /// Returns true if the last countdown ran down to zero naturally.
    pub fn is_completed(&self) -> bool {
        self.phase == TimerPhase::Completed
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Formatting
// ============================================================================

/// Formats a millisecond count as a zero-padded `HH:MM:SS` string.
pub fn format_hms(millis: u64) -> String {
    let hours = millis / 3_600_000;
    let minutes = (millis / 60_000) % 60;
    let seconds = (millis / 1_000) % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

// ============================================================================
// IPC Types
// ============================================================================

/// Parameters for the select command.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SelectParams {
    /// Hours component (0-99)
    #[serde(default)]
    pub hours: u32,
    /// Minutes component (0-59)
    #[serde(default)]
    pub minutes: u32,
    /// Seconds component (0-59)
    #[serde(default)]
    pub seconds: u32,
}

impl SelectParams {
    /// Converts the parameters into a validated selection.
    pub fn to_selection(self) -> Result<TimerSelection, String> {
        let selection = TimerSelection::new(self.hours, self.minutes, self.seconds);
        selection.validate()?;
        Ok(selection)
    }
}

/// Parameters for the start command.
///
/// All fields are optional; when any is present the daemon applies the
/// selection before starting (only possible while idle).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct StartParams {
    /// Hours component (0-99)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<u32>,
    /// Minutes component (0-59)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes: Option<u32>,
    /// Seconds component (0-59)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seconds: Option<u32>,
}

impl StartParams {
    /// Returns true if the request carries an inline duration selection.
    pub fn has_selection(&self) -> bool {
        self.hours.is_some() || self.minutes.is_some() || self.seconds.is_some()
    }

    /// Converts the parameters into a validated selection, defaulting
    /// missing components to zero.
    pub fn to_selection(self) -> Result<TimerSelection, String> {
        let selection = TimerSelection::new(
            self.hours.unwrap_or(0),
            self.minutes.unwrap_or(0),
            self.seconds.unwrap_or(0),
        );
        selection.validate()?;
        Ok(selection)
    }
}

/// IPC request from client to daemon.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "lowercase")]
pub enum IpcRequest {
    /// Store a duration selection
    Select {
        /// Selection parameters
        #[serde(flatten)]
        params: SelectParams,
    },
    /// Start the countdown
    Start {
        /// Optional inline selection
        #[serde(flatten)]
        params: StartParams,
    },
    /// Cancel the running countdown
    Cancel,
    /// Reset the running countdown to its starting duration
    Reset,
    /// Query the current state
    Status,
}

/// Response data for IPC responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponseData {
    /// Current phase
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Milliseconds left in the current run
    #[serde(rename = "remainingMillis", skip_serializing_if = "Option::is_none")]
    pub remaining_millis: Option<u64>,
    /// Total milliseconds of the current/last run
    #[serde(rename = "totalMillis", skip_serializing_if = "Option::is_none")]
    pub total_millis: Option<u64>,
    /// Whether a countdown is in progress
    #[serde(skip_serializing_if = "Option::is_none")]
    pub running: Option<bool>,
    /// Whether the last countdown completed naturally
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    /// Selected hours component
    #[serde(rename = "selectedHours", skip_serializing_if = "Option::is_none")]
    pub selected_hours: Option<u32>,
    /// Selected minutes component
    #[serde(rename = "selectedMinutes", skip_serializing_if = "Option::is_none")]
    pub selected_minutes: Option<u32>,
    /// Selected seconds component
    #[serde(rename = "selectedSeconds", skip_serializing_if = "Option::is_none")]
    pub selected_seconds: Option<u32>,
}

impl ResponseData {
    /// Creates response data from timer state.
    pub fn from_timer_state(state: &TimerState) -> Self {
        Self {
            state: Some(state.phase.as_str().to_string()),
            remaining_millis: Some(state.remaining_millis),
            total_millis: Some(state.total_millis),
            running: Some(state.is_running()),
            completed: Some(state.is_completed()),
            selected_hours: Some(state.selection.hours),
            selected_minutes: Some(state.selection.minutes),
            selected_seconds: Some(state.selection.seconds),
        }
    }
}

/// IPC response from daemon to client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpcResponse {
    /// Response status ("success" or "error")
    pub status: String,
    /// Human-readable message
    pub message: String,
    /// Optional response data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ResponseData>,
}

impl IpcResponse {
    /// Creates a success response.
    pub fn success(message: impl Into<String>, data: Option<ResponseData>) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
            data,
        }
    }

    /// Creates an error response.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
            data: None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
