use thiserror::Error;

/// Reported when either login field is empty; no request is sent.
pub const EMPTY_FIELDS_MESSAGE: &str = "Username or password field cannot be empty.";

/// Used when a rejection carries no message of its own.
pub const REJECTED_FALLBACK_MESSAGE: &str = "Authentication failed.";

/// Failures that prevent a usable reply from the authentication endpoint.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("unable to reach the server: {0}")]
    Network(String),
    #[error("request timed out")]
    Timeout,
    #[error("failed to decode response: {0}")]
    Parse(String),
    #[error("server returned an empty response")]
    EmptyResponse,
    #[error("invalid client configuration: {0}")]
    Config(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::Parse(err.to_string())
        } else if err.is_builder() {
            Self::Config(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}
