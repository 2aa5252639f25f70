//! Error types for resolvr-core

use thiserror::Error;

/// Result type alias for resolvr operations
pub type Result<T> = std::result::Result<T, EventError>;

/// Error types for event operations.
///
/// Every state-changing call either fully commits or fails with one of these
/// before touching any state. The reason strings carried by the string-payload
/// variants are part of the contract; tests assert on their exact wording.
#[derive(Error, Debug)]
pub enum EventError {
    /// Event construction invariant violations
    #[error("Invalid event: {0}")]
    InvalidEvent(String),

    /// Betting precondition violations
    #[error("Invalid bet: {0}")]
    InvalidBet(String),

    /// Result-setting precondition violations
    #[error("Invalid result set: {0}")]
    InvalidResultSet(String),

    /// Arbitration vote precondition violations
    #[error("Invalid vote: {0}")]
    InvalidVote(String),

    /// Withdrawal precondition violations
    #[error("Withdrawal error: {0}")]
    Withdrawal(String),

    /// Malformed or unrecognized transfer-callback payloads
    #[error("Payload error: {0}")]
    Payload(String),

    /// Hex decoding errors
    #[error("Hex decoding error: {0}")]
    Hex(#[from] hex::FromHexError),

    /// Serde JSON errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Event error: {0}")]
    Other(String),
}

impl EventError {
    /// The human-readable precondition reason, without the variant prefix.
    pub fn reason(&self) -> String {
        match self {
            Self::InvalidEvent(s)
            | Self::InvalidBet(s)
            | Self::InvalidResultSet(s)
            | Self::InvalidVote(s)
            | Self::Withdrawal(s)
            | Self::Payload(s)
            | Self::Other(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

impl From<&str> for EventError {
    fn from(msg: &str) -> Self {
        Self::Other(msg.to_string())
    }
}

impl From<String> for EventError {
    fn from(msg: String) -> Self {
        Self::Other(msg)
    }
}
