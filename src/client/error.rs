use reqwest::StatusCode;
use std::fmt;

/// Errors returned by Events API operations.
///
/// Every failure is a distinct outcome handed back to the caller; the
/// client never downgrades one to a log line.
#[derive(Debug)]
pub enum ClientError {
    /// The request could not be sent or completed (DNS, connect, timeout)
    Network(reqwest::Error),
    /// The server answered with a non-2xx status
    Server { status: StatusCode, body: String },
    /// The response body was not valid JSON or was missing expected fields
    Parse(String),
}

impl ClientError {
    /// True if this is a network failure caused by the request timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, ClientError::Network(e) if e.is_timeout())
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Network(e) => write!(f, "request failed: {}", e),
            ClientError::Server { status, body } => {
                write!(f, "server returned status {}: {}", status, body)
            }
            ClientError::Parse(msg) => write!(f, "invalid response body: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Network(e) => Some(e),
            _ => None,
        }
    }
}
