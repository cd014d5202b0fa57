use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to create report directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write report '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to render report '{path}': {message}")]
    Render { path: PathBuf, message: String },
    #[error("Failed to decode chart for '{target}': {source}")]
    DecodeChart {
        target: String,
        #[source]
        source: image::ImageError,
    },
    #[error("Failed to serialize results for '{path}': {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
