//! Crate-wide error type.

use thiserror::Error;

use crate::config::{ConfigError, ValidationError};
use crate::domain::ApiError;
use crate::ports::TransportError;

/// Everything a client call can fail with.
#[derive(Debug, Error)]
pub enum Error {
    /// The client could not be constructed from its configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// No response was received.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A 200 response whose body did not match the expected shape.
    #[error("failed to decode response (status {status}): {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    /// The API answered with a non-200 status.
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl Error {
    /// The API error, when the failure was reported by the API.
    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api(err) => Some(err),
            _ => None,
        }
    }

    /// HTTP status of the response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api(err) => Some(err.status),
            Error::Decode { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Error::Config(ConfigError::ValidationFailed(err))
    }
}
