//! Unified error type for the viewer.

use thiserror::Error;

/// All errors that can occur between start-up and the window closing.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(String),
    #[error("HTTP client failed to initialise: {0}")]
    ClientInit(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP error {status} for {url}")]
    HttpStatus { status: u16, url: String },
    #[error("Empty response from {0}")]
    EmptyResponse(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Response has no string `url` field")]
    MissingUrlField,
    #[error("Gave up after {attempts} attempts: {last}")]
    RetriesExhausted {
        attempts: u32,
        #[source]
        last: Box<AppError>,
    },
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Image has no pixels")]
    EmptyImage,
    #[error("Display error: {0}")]
    Display(String),
}
