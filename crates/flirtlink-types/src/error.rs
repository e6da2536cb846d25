use thiserror::Error;

/// Failure talking to the agent service.
///
/// The page treats every variant the same way ("request failed"); the
/// variants only exist so the console log says what actually went wrong.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}
