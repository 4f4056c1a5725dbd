//! Sound system error types.

use thiserror::Error;

/// Errors that can occur in the sound playback system.
#[derive(Debug, Error)]
pub enum SoundError {
    /// Audio device is not available (e.g., no output device connected).
    #[error("audio device is not available: {0}")]
    DeviceNotAvailable(String),

    /// Sound file was not found at the specified path.
    #[error("sound file not found: {0}")]
    FileNotFound(String),

    /// Failed to decode the audio file.
    #[error("failed to decode sound file: {0}")]
    DecodeError(String),

    /// Generic sound playback error.
    #[error("sound playback error: {0}")]
    PlaybackError(String),
}

impl SoundError {
    /// Returns true if this error is related to device availability.
    #[must_use]
    pub fn is_device_error(&self) -> bool {
        matches!(self, Self::DeviceNotAvailable(_))
    }

    /// Returns true if this error is related to the audio file.
    #[must_use]
    pub fn is_file_error(&self) -> bool {
        matches!(self, Self::FileNotFound(_) | Self::DecodeError(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SoundError::DeviceNotAvailable("no device".to_string());
        assert!(err.to_string().contains("no device"));
        assert!(err.to_string().contains("audio device"));

        let err = SoundError::FileNotFound("/path/to/chime.wav".to_string());
        assert!(err.to_string().contains("/path/to/chime.wav"));

        let err = SoundError::DecodeError("invalid format".to_string());
        assert!(err.to_string().contains("invalid format"));

        let err = SoundError::PlaybackError("unknown error".to_string());
        assert!(err.to_string().contains("unknown error"));
    }

    #[test]
    fn test_is_device_error() {
        assert!(SoundError::DeviceNotAvailable("x".into()).is_device_error());
        assert!(!SoundError::FileNotFound("x".into()).is_device_error());
        assert!(!SoundError::PlaybackError("x".into()).is_device_error());
    }

    #[test]
    fn test_is_file_error() {
        assert!(SoundError::FileNotFound("x".into()).is_file_error());
        assert!(SoundError::DecodeError("x".into()).is_file_error());
        assert!(!SoundError::DeviceNotAvailable("x".into()).is_file_error());
    }
}
