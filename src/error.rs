//! Failure kinds of a lookup cycle.
//!
//! The session absorbs all of them; they stay first-class so callers can
//! tell them apart when reporting.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// Submitted input was empty after trimming.
    #[error("Please enter a username")]
    EmptyHandle,

    /// The API answered with a non-success status.
    #[error("User not found: {handle} (HTTP {status})")]
    NotFound { handle: String, status: u16 },

    /// DNS, connection, timeout or undecodable body.
    #[error("Network error: {message}")]
    Transport { message: String },
}

impl LookupError {
    pub fn transport(err: impl std::fmt::Display) -> Self {
        LookupError::Transport {
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        LookupError::transport(err)
    }
}

pub type Result<T> = std::result::Result<T, LookupError>;
