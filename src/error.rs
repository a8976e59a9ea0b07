//! Startup error types
//!
//! Every variant is a resource-load failure: the game refuses to start.
//! Nothing inside the frame loop returns an error.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal startup error
#[derive(Debug, Error)]
pub enum GameError {
    /// Asset file not present in any search directory
    #[error("asset not found: {name} (searched {searched:?})")]
    AssetNotFound { name: String, searched: Vec<PathBuf> },

    /// Asset file could not be read
    #[error("failed to load {path}: {source}")]
    ResourceLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Image bytes could not be decoded
    #[error("failed to decode image {path}: {reason}")]
    ImageDecode { path: PathBuf, reason: String },

    /// Audio bytes could not be decoded
    #[error("failed to decode audio {path}: {reason}")]
    AudioDecode { path: PathBuf, reason: String },

    /// No usable audio output
    #[error("audio device unavailable: {0}")]
    AudioDevice(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
