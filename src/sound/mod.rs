//! Sound playback for the countdown completion notification.
//!
//! This module provides the audio side effect the presentation layer fires
//! when a countdown reaches zero:
//!
//! - A `SoundPlayer` trait so the daemon and tests stay device-independent
//! - A rodio-backed player with a synthesized chime and file playback
//! - Graceful degradation when no audio device is available
//!
//! The countdown core never plays audio itself; only the daemon event loop
//! calls into this module, on the `Completed` event.

mod error;
mod player;
mod source;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tracing::warn;

pub use error::SoundError;
pub use player::RodioSoundPlayer;
pub use source::SoundSource;

/// Trait for sound playback implementations.
///
/// Playback must be non-blocking; implementations queue the sound and
/// return immediately. The rodio player owns an audio stream that must stay
/// on its creating thread, so the trait carries no `Send` bound; the daemon
/// keeps its player on the main task.
pub trait SoundPlayer {
    /// Plays a sound from the given source.
    ///
    /// # Errors
    ///
    /// Returns an error if the sound cannot be decoded or queued for
    /// playback.
    fn play(&self, source: &SoundSource) -> Result<(), SoundError>;
}

impl SoundPlayer for Box<dyn SoundPlayer> {
    fn play(&self, source: &SoundSource) -> Result<(), SoundError> {
        self.as_ref().play(source)
    }
}

/// A player that silently discards every sound.
///
/// Used when sound is disabled or no audio device exists.
pub struct NullSoundPlayer;

impl SoundPlayer for NullSoundPlayer {
    fn play(&self, _source: &SoundSource) -> Result<(), SoundError> {
        Ok(())
    }
}

/// A test player that records how many times it was asked to play.
#[derive(Clone, Default)]
pub struct MockSoundPlayer {
    play_count: Arc<AtomicUsize>,
}

impl MockSoundPlayer {
    /// Creates a new mock player with a zero play count.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns how many sounds have been played.
    pub fn play_count(&self) -> usize {
        self.play_count.load(Ordering::SeqCst)
    }
}

impl SoundPlayer for MockSoundPlayer {
    fn play(&self, _source: &SoundSource) -> Result<(), SoundError> {
        self.play_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Creates the best available sound player.
///
/// Returns the rodio player when an audio device is present, and the null
/// player when sound is disabled or device initialization fails; a missing
/// audio device must never keep the daemon from running.
pub fn try_create_player(disabled: bool) -> Box<dyn SoundPlayer> {
    if disabled {
        return Box::new(NullSoundPlayer);
    }
    match RodioSoundPlayer::new() {
        Ok(player) => Box::new(player),
        Err(e) => {
            warn!("sound disabled: {}", e);
            Box::new(NullSoundPlayer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_player_discards() {
        let player = NullSoundPlayer;
        assert!(player.play(&SoundSource::Chime).is_ok());
        assert!(player.play(&SoundSource::file("/does/not/exist.wav")).is_ok());
    }

    #[test]
    fn test_mock_player_records_plays() {
        let player = MockSoundPlayer::new();
        assert_eq!(player.play_count(), 0);

        player.play(&SoundSource::Chime).unwrap();
        player.play(&SoundSource::Chime).unwrap();

        assert_eq!(player.play_count(), 2);
    }

    #[test]
    fn test_mock_player_clones_share_count() {
        let player = MockSoundPlayer::new();
        let clone = player.clone();

        clone.play(&SoundSource::Chime).unwrap();

        assert_eq!(player.play_count(), 1);
    }

    #[test]
    fn test_try_create_player_disabled() {
        // Must not touch audio hardware when disabled.
        let player = try_create_player(true);
        assert!(player.play(&SoundSource::Chime).is_ok());
    }
}
