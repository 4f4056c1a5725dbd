//! Sound player implementation using rodio.

use std::fs::File;
use std::io::BufReader;
use std::time::Duration;

use rodio::source::SineWave;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};
use tracing::debug;

use super::error::SoundError;
use super::source::SoundSource;
use super::SoundPlayer;

/// Frequencies and note length of the synthesized completion chime.
const CHIME_TONES_HZ: [f32; 2] = [880.0, 660.0];
const CHIME_TONE_MILLIS: u64 = 180;

/// A sound player backed by a rodio output stream.
///
/// Playback is non-blocking; sounds continue playing in the background.
/// The player can be shared across threads using `Arc`.
pub struct RodioSoundPlayer {
    /// The audio output stream (must be kept alive for playback).
    _stream: OutputStream,
    /// Handle to the output stream for creating sinks.
    stream_handle: OutputStreamHandle,
}

impl RodioSoundPlayer {
    /// Creates a new sound player on the default audio output.
    ///
    /// # Errors
    ///
    /// Returns `SoundError::DeviceNotAvailable` if no audio output device
    /// is available.
    pub fn new() -> Result<Self, SoundError> {
        let (stream, stream_handle) = OutputStream::try_default()
            .map_err(|e| SoundError::DeviceNotAvailable(e.to_string()))?;

        debug!("audio output stream initialized");

        Ok(Self {
            _stream: stream,
            stream_handle,
        })
    }

    /// Plays the synthesized two-tone chime.
    fn play_chime(&self) -> Result<(), SoundError> {
        let sink = Sink::try_new(&self.stream_handle)
            .map_err(|e| SoundError::PlaybackError(e.to_string()))?;

        for freq in CHIME_TONES_HZ {
            let tone = SineWave::new(freq)
                .take_duration(Duration::from_millis(CHIME_TONE_MILLIS))
                .amplify(0.5);
            sink.append(tone);
        }
        sink.detach();
        Ok(())
    }

    /// Decodes and plays an audio file.
    fn play_file(&self, path: &std::path::Path) -> Result<(), SoundError> {
        let file =
            File::open(path).map_err(|_| SoundError::FileNotFound(path.display().to_string()))?;
        let decoder = Decoder::new(BufReader::new(file))
            .map_err(|e| SoundError::DecodeError(e.to_string()))?;

        let sink = Sink::try_new(&self.stream_handle)
            .map_err(|e| SoundError::PlaybackError(e.to_string()))?;
        sink.append(decoder);
        sink.detach();
        Ok(())
    }
}

impl SoundPlayer for RodioSoundPlayer {
    fn play(&self, source: &SoundSource) -> Result<(), SoundError> {
        debug!("playing completion sound: {}", source.describe());
        match source {
            SoundSource::Chime => self.play_chime(),
            SoundSource::File { path } => self.play_file(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Creating the player requires real audio hardware, so these tests only
    // run when a device is present (CI machines typically have none).

    #[test]
    fn test_play_chime_if_device_available() {
        if let Ok(player) = RodioSoundPlayer::new() {
            assert!(player.play(&SoundSource::Chime).is_ok());
        }
    }

    #[test]
    fn test_play_missing_file_if_device_available() {
        if let Ok(player) = RodioSoundPlayer::new() {
            let source = SoundSource::file("/nonexistent/ding.wav");
            let result = player.play(&source);
            assert!(matches!(result, Err(SoundError::FileNotFound(_))));
        }
    }
}
