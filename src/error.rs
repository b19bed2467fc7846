//! Error types for the screenshot generator

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading fonts, drawing or writing screenshots
#[derive(Error, Debug)]
pub enum Error {
    /// A configured font file is missing and no fallback could be found
    #[error("{role} font not found at {}", .path.display())]
    FontNotFound { role: &'static str, path: PathBuf },

    /// Font data could not be parsed
    #[error("Failed to parse font: {0}")]
    FontParse(String),

    /// Invalid drawing arguments
    #[error("Invalid shape: {0}")]
    InvalidShape(String),

    /// PNG encoding failed
    #[error("Image encoding failed: {0}")]
    Encode(String),

    /// Filesystem error while reading fonts or writing outputs
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Report serialization failed
    #[error("Report error: {0}")]
    Report(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::Encode(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Report(err.to_string())
    }
}
