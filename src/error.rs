//! Crate-wide error type.
//!
//! Only I/O, decoding and configuration can fail. The geometry stages and the
//! occupancy tracker are total: an empty detection is a normal return value,
//! not an error.

use std::path::PathBuf;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Filesystem failure with the offending path.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Image decode or encode failure.
    #[error("image error on {}: {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// JSON (de)serialization failure for slot files and reports.
    #[error("JSON error on {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration could not be read or parsed.
    #[error("config error: {0}")]
    Config(String),

    /// The frame source cannot be opened or read.
    #[error("frame source error: {0}")]
    FrameSource(String),

    /// A buffer does not match its declared dimensions.
    #[error("invalid frame: {0}")]
    InvalidFrame(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn image(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        Error::Image {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Error::Json {
            path: path.into(),
            source,
        }
    }
}
