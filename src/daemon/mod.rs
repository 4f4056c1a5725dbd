//! Daemon module for the Hourglass timer.
//!
//! This module contains the core daemon functionality:
//! - `timer`: Countdown engine with the tick task and cancellation
//! - `ipc`: Unix Domain Socket server and request handling
//! - `service`: Daemon main loop wiring timer, IPC, and the sound trigger

pub mod ipc;
pub mod service;
pub mod timer;

pub use timer::{CountdownTimer, TimerEvent};
