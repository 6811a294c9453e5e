//! Error types for the numeric core and configuration layer.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid decimal coordinate {text:?}: {source}")]
    InvalidCoordinate {
        text: String,
        #[source]
        source: dashu_base::ParseError,
    },

    #[error("working precision must be at least one decimal digit")]
    ZeroPrecision,

    #[error("invalid render parameters: {0}")]
    InvalidParameters(String),

    #[error("failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("pixel buffer holds {actual} bytes, expected {expected}")]
    PixelBufferSize { expected: usize, actual: usize },

    #[error("failed to create output directory {}: {source}", .path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode image: {0}")]
    Image(#[from] image::ImageError),
}
