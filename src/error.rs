//! Error types for the Sleeper Fantasy Football CLI

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, SleeperError>;

#[derive(Error, Debug)]
pub enum SleeperError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("League ID not provided and {env_var} environment variable not set")]
    MissingLeagueId { env_var: String },

    #[error("Failed to parse numeric value: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Sleeper API returned no data for {resource}")]
    NoData { resource: String },

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Invalid scoring format: {value}")]
    InvalidScoring { value: String },

    #[error("Validation failed for `{field}`: {message}")]
    Validation { field: String, message: String },

    #[error("Unauthorized: {reason}")]
    Unauthorized { reason: String },

    #[error("System time error: {0}")]
    SystemTime(#[from] std::time::SystemTimeError),

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

impl SleeperError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        SleeperError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// True for failures caused by the caller's payload rather than the system.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            SleeperError::Validation { .. } | SleeperError::Unauthorized { .. }
        )
    }
}
