use crate::sync::SyncState;
use thiserror::Error;

/// Result type for ranking store and decoding operations
pub type RankingResult<T> = Result<T, RankingError>;

/// Errors that can occur while fetching, decoding or submitting
/// rankings
#[derive(Debug, Error)]
pub enum RankingError {
    /// The fetched body could not be decoded into a ranking
    #[error("Malformed ranking payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    /// The request failed at the network or HTTP level
    #[error("Ranking request failed: {0}")]
    Transport(#[from] TransportError),
}

impl From<reqwest::Error> for RankingError {
    fn from(err: reqwest::Error) -> Self {
        RankingError::Transport(err.into())
    }
}

/// Details about a failed network round trip
#[derive(Debug, Error)]
#[error("{message}")]
pub struct TransportError {
    /// HTTP status code when the server responded with an error status
    pub status: Option<u16>,
    /// Diagnostic message describing the failure
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self {
            status: err.status().map(|status| status.as_u16()),
            message: err.to_string(),
        }
    }
}

/// Errors returned when the sync controller refuses an operation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SyncError {
    /// The operation is not permitted in the current state
    #[error("Operation not permitted while {0:?}")]
    Busy(SyncState),

    /// The session has already been closed
    #[error("Ranking session is closed")]
    Closed,
}

/// Errors that can occur while setting up logging
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The rolling file name pattern was rejected
    #[error("Unable to create log roller: {0}")]
    Roller(String),

    /// The log file couldn't be created
    #[error("Unable to create log file: {0}")]
    File(#[from] std::io::Error),

    /// The appender and logger configuration was invalid
    #[error("Invalid logging config: {0}")]
    Config(String),

    /// A logger was already installed
    #[error("Unable to initialize logger: {0}")]
    Init(#[from] log::SetLoggerError),
}
