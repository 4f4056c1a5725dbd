//! Countdown engine for the Hourglass timer.
//!
//! This module provides the core timer functionality:
//! - Duration selection and the Idle → Running → Completed state machine
//! - A periodic tick task driven by tokio::time::interval
//! - Cancellation and reset of a running countdown
//! - Event firing for the presentation layer (display updates, sound)

use std::sync::{Arc, Weak};

use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::debug;

use crate::types::{TimerState, TICK_MILLIS};

// ============================================================================
// TimerEvent
// ============================================================================

/// Timer events pushed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    /// A countdown run started
    Started {
        /// Total milliseconds of the run
        total_millis: u64,
    },
    /// One period elapsed
    Tick {
        /// Milliseconds left after this step
        remaining_millis: u64,
    },
    /// The countdown reached zero naturally; fired exactly once per run
    Completed,
    /// The countdown was cancelled, remaining time dropped to zero
    Cancelled,
    /// The countdown was reset back to its starting duration
    Reset {
        /// The duration the remaining time was restored to
        total_millis: u64,
    },
}

// ============================================================================
// CountdownTimer
// ============================================================================

/// Shared state behind the timer handle.
///
/// The tick task and every command serialize on the mutex around this
/// struct, so a tick can never commit state after a cancel/reset returned.
struct TimerInner {
    /// Observable countdown state
    state: TimerState,
    /// Handle to the active tick task; exists iff the state is running
    task: Option<JoinHandle<()>>,
    /// Event sender channel
    event_tx: mpsc::UnboundedSender<TimerEvent>,
}

impl TimerInner {
    /// Sends an event, tolerating a dropped receiver.
    ///
    /// Pollers read state via `snapshot`, so a closed event channel must not
    /// stop the countdown.
    fn emit(&self, event: TimerEvent) {
        if self.event_tx.send(event).is_err() {
            debug!("timer event channel closed, event dropped");
        }
    }

    /// Aborts and releases the tick task, if any.
    fn abort_task(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

/// Handle to the countdown timer.
///
/// Cloning is cheap; all clones share the same state. Commands are no-ops
/// when issued from an invalid phase and return whether they applied, so
/// callers never need to check state first.
#[derive(Clone)]
pub struct CountdownTimer {
    inner: Arc<Mutex<TimerInner>>,
}

impl CountdownTimer {
    /// Creates a new idle timer with the given event channel.
    pub fn new(event_tx: mpsc::UnboundedSender<TimerEvent>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(TimerInner {
                state: TimerState::new(),
                task: None,
                event_tx,
            })),
        }
    }

    /// Stores the duration for the next countdown run.
    ///
    /// Silently ignored while a countdown is running. Returns true if the
    /// selection was applied.
    pub async fn select_time(&self, hours: u32, minutes: u32, seconds: u32) -> bool {
        let mut inner = self.inner.lock().await;
        let applied = inner.state.select(hours, minutes, seconds);
        if applied {
            debug!(hours, minutes, seconds, "duration selected");
        } else {
            debug!("selection ignored while countdown is running");
        }
        applied
    }

    /// Starts a countdown over the selected duration.
    ///
    /// A no-op when a countdown is already running (the existing run and its
    /// task are left untouched) or when the selected duration is zero.
    /// Returns true if a run was started.
    pub async fn start(&self) -> bool {
        let mut inner = self.inner.lock().await;
        if !inner.state.start() {
            debug!("start ignored: countdown running or zero duration selected");
            return false;
        }

        let total_millis = inner.state.total_millis;
        debug!(total_millis, "countdown started");
        inner.emit(TimerEvent::Started { total_millis });

        // The task holds only a weak reference so a dropped timer cannot be
        // kept alive by its own countdown.
        let task = tokio::spawn(run_countdown(Arc::downgrade(&self.inner)));
        inner.task = Some(task);
        true
    }

    /// Cancels the running countdown, dropping the remaining time to zero.
    ///
    /// No tick mutates state after this returns. A no-op when not running.
    /// Returns true if a run was cancelled.
    pub async fn cancel(&self) -> bool {
        let mut inner = self.inner.lock().await;
        if !inner.state.is_running() {
            return false;
        }
        inner.abort_task();
        inner.state.cancel();
        debug!("countdown cancelled");
        inner.emit(TimerEvent::Cancelled);
        true
    }

    /// Resets the running countdown back to its starting duration.
    ///
    /// The timer stops and the remaining time is restored to the total of
    /// the run, unlike [`cancel`](Self::cancel) which drops it to zero. A
    /// no-op when not running. Returns true if a run was reset.
    pub async fn reset(&self) -> bool {
        let mut inner = self.inner.lock().await;
        if !inner.state.is_running() {
            return false;
        }
        inner.abort_task();
        inner.state.reset();
        let total_millis = inner.state.total_millis;
        debug!(total_millis, "countdown reset");
        inner.emit(TimerEvent::Reset { total_millis });
        true
    }

    /// Tears the timer down when the owning session ends.
    ///
    /// Unconditionally cancels any active tick task; no tick fires after
    /// this returns. Safe to call repeatedly.
    pub async fn teardown(&self) {
        let mut inner = self.inner.lock().await;
        inner.abort_task();
        if inner.state.is_running() {
            inner.state.cancel();
            debug!("countdown torn down mid-run");
        }
    }

    /// Returns a snapshot of the observable state.
    pub async fn snapshot(&self) -> TimerState {
        self.inner.lock().await.state.clone()
    }
}

// ============================================================================
// Tick task
// ============================================================================

/// Runs the countdown loop until completion, cancellation, or timer drop.
///
/// Each period the loop re-acquires the lock and re-checks that the run is
/// still live before mutating, so a cancel that aborted this task between
/// ticks can never be overwritten.
async fn run_countdown(inner: Weak<Mutex<TimerInner>>) {
    let mut ticker = interval(Duration::from_millis(TICK_MILLIS));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    // The first interval tick resolves immediately; consume it so every
    // decrement happens a full period after start.
    ticker.tick().await;

    loop {
        ticker.tick().await;

        let Some(inner) = inner.upgrade() else {
            return;
        };
        let mut guard = inner.lock().await;

        if !guard.state.is_running() {
            return;
        }

        let completed = guard.state.tick();
        let remaining_millis = guard.state.remaining_millis;
        guard.emit(TimerEvent::Tick { remaining_millis });

        if completed {
            // Release our own handle; dropping it here just detaches the
            // already-finishing task.
            guard.task = None;
            guard.emit(TimerEvent::Completed);
            debug!("countdown completed");
            return;
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
