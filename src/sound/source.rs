//! Sound source selection for the completion notification.

use std::path::{Path, PathBuf};

use super::error::SoundError;

/// The sound played when a countdown completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SoundSource {
    /// The built-in two-tone chime, synthesized at playback time.
    Chime,
    /// A user-supplied audio file.
    File {
        /// Path to the audio file.
        path: PathBuf,
    },
}

impl SoundSource {
    /// Creates a file-backed sound source.
    ///
    /// # Note
    ///
    /// This constructor does not check that the file exists. Use
    /// [`file_validated`](Self::file_validated) to check up front.
    #[must_use]
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File { path: path.into() }
    }

    /// Creates a file-backed sound source, verifying the file exists.
    ///
    /// # Errors
    ///
    /// Returns `SoundError::FileNotFound` if the path does not point at a
    /// readable file.
    pub fn file_validated(path: impl Into<PathBuf>) -> Result<Self, SoundError> {
        let path = path.into();
        if !path.is_file() {
            return Err(SoundError::FileNotFound(path.display().to_string()));
        }
        Ok(Self::File { path })
    }

    /// Returns a short description for logging.
    pub fn describe(&self) -> String {
        match self {
            Self::Chime => "built-in chime".to_string(),
            Self::File { path } => path.display().to_string(),
        }
    }

    /// Returns the file path, if this source is file-backed.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Chime => None,
            Self::File { path } => Some(path),
        }
    }
}

impl Default for SoundSource {
    fn default() -> Self {
        Self::Chime
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_chime() {
        assert_eq!(SoundSource::default(), SoundSource::Chime);
        assert!(SoundSource::Chime.path().is_none());
    }

    #[test]
    fn test_file_source() {
        let source = SoundSource::file("/tmp/ding.wav");
        assert_eq!(source.path(), Some(Path::new("/tmp/ding.wav")));
        assert_eq!(source.describe(), "/tmp/ding.wav");
    }

    #[test]
    fn test_file_validated_missing() {
        let result = SoundSource::file_validated("/nonexistent/path/ding.wav");
        assert!(matches!(result, Err(SoundError::FileNotFound(_))));
    }

    #[test]
    fn test_file_validated_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ding.wav");
        std::fs::write(&path, b"RIFF").unwrap();

        let source = SoundSource::file_validated(&path).unwrap();
        assert_eq!(source.path(), Some(path.as_path()));
    }

    #[test]
    fn test_describe_chime() {
        assert_eq!(SoundSource::Chime.describe(), "built-in chime");
    }
}
