//! Error types for Daily Muse

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for Daily Muse operations
#[derive(Error, Debug)]
pub enum MuseError {
    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Edition or library JSON could not be parsed or written
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Edition data is structurally unusable
    #[error("Invalid edition: {0}")]
    InvalidEdition(String),

    /// An existing RSS file has no channel to add entries to
    #[error("Malformed feed {}: no </channel> element", .0.display())]
    MalformedFeed(PathBuf),

    /// A text pattern failed to compile
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

/// Result type alias using MuseError
pub type MuseResult<T> = Result<T, MuseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MuseError::InvalidEdition("no movies to feature".to_string());
        assert_eq!(format!("{}", err), "Invalid edition: no movies to feature");
    }

    #[test]
    fn test_malformed_feed_names_the_file() {
        let err = MuseError::MalformedFeed(PathBuf::from("site/feed.xml"));
        assert_eq!(err.to_string(), "Malformed feed site/feed.xml: no </channel> element");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: MuseError = io_err.into();
        assert!(matches!(err, MuseError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: MuseError = json_err.into();
        assert!(matches!(err, MuseError::Json(_)));
    }
}
