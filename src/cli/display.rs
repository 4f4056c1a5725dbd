//! Display utilities for the Hourglass CLI.
//!
//! This module provides formatted output for:
//! - Success messages
//! - Error messages
//! - Status display with remaining time and progress

use crate::types::{format_hms, IpcResponse};

// ============================================================================
// Display
// ============================================================================

/// Display utilities for CLI output.
pub struct Display;

impl Display {
    /// Shows a success message for a duration selection.
    pub fn show_select_success(response: &IpcResponse) {
        println!("* {}", response.message);

        if let Some(data) = &response.data {
            if let (Some(h), Some(m), Some(s)) = (
                data.selected_hours,
                data.selected_minutes,
                data.selected_seconds,
            ) {
                println!("  duration: {:02}:{:02}:{:02}", h, m, s);
            }
        }
    }

    /// Shows a success message for countdown start.
    pub fn show_start_success(response: &IpcResponse) {
        println!("> countdown started");

        if let Some(data) = &response.data {
            if let Some(total) = data.total_millis {
                println!("  duration: {}", format_hms(total));
            }
        }
    }

    /// Shows a success message for countdown cancel.
    pub fn show_cancel_success(_response: &IpcResponse) {
        println!("[] countdown cancelled");
    }

    /// Shows a success message for countdown reset.
    pub fn show_reset_success(response: &IpcResponse) {
        println!("|< countdown reset");

        if let Some(data) = &response.data {
            if let Some(remaining) = data.remaining_millis {
                println!("  remaining: {}", format_hms(remaining));
            }
        }
    }

    /// Shows the current countdown status.
    pub fn show_status(response: &IpcResponse) {
        println!("hourglass status");
        println!("────────────────");

        let Some(data) = &response.data else {
            println!("the daemon returned no state");
            return;
        };

        let state = data.state.as_deref().unwrap_or("unknown");
        println!("state: {}", state);

        if state == "running" {
            if let Some(remaining) = data.remaining_millis {
                println!("remaining: {}", format_hms(remaining));
            }
            if let (Some(remaining), Some(total)) = (data.remaining_millis, data.total_millis) {
                println!("progress: {}%", Self::progress_percent(remaining, total));
            }
        } else {
            if let (Some(h), Some(m), Some(s)) = (
                data.selected_hours,
                data.selected_minutes,
                data.selected_seconds,
            ) {
                println!("selected: {:02}:{:02}:{:02}", h, m, s);
            }
            if state == "completed" {
                println!("the countdown reached zero");
            }
        }
    }

    /// Shows an error message.
    pub fn show_error(message: &str) {
        eprintln!("error: {}", message);
    }

    /// Percentage of the run already elapsed, rounded down.
    fn progress_percent(remaining_millis: u64, total_millis: u64) -> u64 {
        if total_millis == 0 {
            return 0;
        }
        (total_millis - remaining_millis) * 100 / total_millis
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_percent() {
        assert_eq!(Display::progress_percent(7_000, 7_000), 0);
        assert_eq!(Display::progress_percent(3_500, 7_000), 50);
        assert_eq!(Display::progress_percent(0, 7_000), 100);
    }

    #[test]
    fn test_progress_percent_zero_total() {
        assert_eq!(Display::progress_percent(0, 0), 0);
    }

    #[test]
    fn test_progress_percent_rounds_down() {
        assert_eq!(Display::progress_percent(2_000, 3_000), 33);
    }
}
