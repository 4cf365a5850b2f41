//! Failure taxonomy for talking to the campus service.

use serde::{Deserialize, Serialize};

/// A request to the campus service did not produce a usable answer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
pub enum NetworkError {
    /// The service could not be reached.
    #[error("campus service unreachable: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("campus service returned status {0}")]
    Status(u16),

    /// The service answered with a body that does not parse.
    #[error("malformed campus service response: {0}")]
    Decode(String),

    /// A replayed cassette cannot answer the request.
    #[error("cassette replay failed: {0}")]
    Replay(String),
}

impl NetworkError {
    /// Text shown to the user when this failure is reported.
    ///
    /// Only a response that arrived with a non-success status is reported as
    /// a plain error; anything that never yields a usable body reads as the
    /// server being down.
    #[must_use]
    pub fn alert_message(&self) -> &'static str {
        match self {
            Self::Transport(_) | Self::Decode(_) => "Server is not running.",
            Self::Status(_) | Self::Replay(_) => "Error.",
        }
    }
}

impl From<reqwest::Error> for NetworkError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            Self::Status(status.as_u16())
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

/// A find-path action that must not reach the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidQuery {
    /// No starting building is selected.
    #[error("no starting building selected")]
    NoStart,

    /// No ending building is selected.
    #[error("no ending building selected")]
    NoEnd,
}

/// A selection names a building the directory does not list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown building: {0}")]
pub struct UnknownBuilding(pub String);
