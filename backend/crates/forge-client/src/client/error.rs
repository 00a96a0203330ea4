use crate::StorageError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors raised by the client-side components.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Endpoint responded with HTTP {status} {location}")]
    Status { status: u16, location: ErrorLocation },

    #[error("Invalid URL {url}: {message} {location}")]
    Url {
        url: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Malformed response: {source} {location}")]
    Body {
        #[source]
        source: forge_core::CoreError,
        location: ErrorLocation,
    },

    #[error("Local storage error: {source}")]
    Storage {
        #[source]
        source: StorageError,
    },
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn status(status: u16) -> Self {
        ClientError::Status {
            status,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn url(url: &str, message: impl Into<String>) -> Self {
        ClientError::Url {
            url: url.to_string(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<forge_core::CoreError> for ClientError {
    #[track_caller]
    fn from(source: forge_core::CoreError) -> Self {
        ClientError::Body {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<StorageError> for ClientError {
    fn from(source: StorageError) -> Self {
        ClientError::Storage { source }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
