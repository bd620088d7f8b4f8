use thiserror::Error;

use crate::models::{ConfigError, DraftValidation, Field};

/// Main error type for UserDesk
#[derive(Error, Debug)]
pub enum UserDeskError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Backend error: {0}")]
    Api(#[from] ApiError),

    #[error("{0}")]
    Validation(#[from] DraftValidation),

    #[error("Field '{0}' is read-only")]
    ReadOnlyField(Field),

    #[error("{0}")]
    ViewFailed(String),

    #[error("User {0} not found")]
    UserNotFound(i64),

    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by the users REST backend
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Connection refused: {0}")]
    ConnectionRefused(String),

    #[error("Request timeout after {0} seconds")]
    Timeout(u64),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("HTTP error: {status} - {message}")]
    HttpError { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        // Timeouts are mapped by the backend, which knows the configured limit
        if err.is_connect() {
            ApiError::ConnectionRefused(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::HttpError {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else if err.is_decode() {
            ApiError::ParseError(err.to_string())
        } else {
            ApiError::RequestFailed(err.to_string())
        }
    }
}

impl UserDeskError {
    /// Whether the error came from the client-side validity gate
    pub fn is_validation(&self) -> bool {
        matches!(self, UserDeskError::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, UserDeskError>;
