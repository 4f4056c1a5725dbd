//! Hourglass Timer Library
//!
//! This library provides the core functionality for the Hourglass countdown
//! timer CLI. It includes:
//! - Countdown engine with a cancellable periodic tick task
//! - IPC server/client for daemon-CLI communication
//! - CLI command parsing and display utilities
//! - Type definitions for selection, state, and the IPC protocol
//! - Sound playback for the completion notification

pub mod cli;
pub mod daemon;
pub mod sound;
pub mod types;

// Re-export commonly used types for convenience
pub use types::{
    format_hms, IpcRequest, IpcResponse, ResponseData, SelectParams, StartParams, TimerPhase,
    TimerSelection, TimerState,
};

// Re-export the countdown engine
pub use daemon::{CountdownTimer, TimerEvent};

// Re-export sound types
pub use sound::{
    try_create_player, MockSoundPlayer, NullSoundPlayer, RodioSoundPlayer, SoundError,
    SoundPlayer, SoundSource,
};
