//! Error taxonomy shared by every stage of the page pipeline.
//!
//! Cyclic reading graphs are not an error: the traversal recovers from
//! them and only logs a warning.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by blob extraction, geometry and view composition.
#[derive(Debug, Error)]
pub enum PanelError {
    /// An internal invariant was broken (e.g. a run owned by two live blobs).
    #[error("consistency error: {0}")]
    Consistency(String),

    /// The pixel buffer does not match the expected single-channel layout.
    #[error("unsupported pixel format: {0}")]
    Format(String),

    /// An operation that needs at least one element received none.
    #[error("empty input: {0}")]
    EmptyInput(&'static str),

    /// A configuration file could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Filesystem access failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Decoding or encoding an image failed.
    #[error(transparent)]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, PanelError>;

impl PanelError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PanelError::Io {
            path: path.into(),
            source,
        }
    }
}
