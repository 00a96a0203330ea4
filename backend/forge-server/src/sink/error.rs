use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SinkError {
    /// The sink answered with a non-2xx status
    #[error("Sink responded with HTTP {status} {location}")]
    Rejected { status: u16, location: ErrorLocation },

    /// The request never produced a response
    #[error("Sink unreachable: {message} {location}")]
    Unreachable {
        message: String,
        location: ErrorLocation,
    },
}

impl SinkError {
    #[track_caller]
    pub fn rejected(status: u16) -> Self {
        SinkError::Rejected {
            status,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unreachable(message: impl Into<String>) -> Self {
        SinkError::Unreachable {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Message carries the full cause chain. The URL is dropped so the
/// webhook address never reaches the logs.
impl From<reqwest::Error> for SinkError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        let err = err.without_url();
        let mut message = err.to_string();

        let mut cause = std::error::Error::source(&err);
        while let Some(inner) = cause {
            message.push_str(": ");
            message.push_str(&inner.to_string());
            cause = inner.source();
        }

        SinkError::unreachable(message)
    }
}

pub type Result<T> = std::result::Result<T, SinkError>;
