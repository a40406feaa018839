//! Error types for the core generation pipeline.

/// All errors that can occur while shaping, sending, or persisting a
/// generation request.
#[derive(thiserror::Error, Debug)]
pub enum PictorError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Model returned no usable content: {0}")]
    EmptyResponse(String),

    #[error("Model API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Base64 decode error: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PictorResult<T> = Result<T, PictorError>;
