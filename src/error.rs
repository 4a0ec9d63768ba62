//! API Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("HTTP error: status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Invalid response body: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;
