//! Failure taxonomy for calls against the review backend.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

/// Error returned by any REST helper, independent of the HTTP library.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No response arrived (DNS, refused connection, CORS, offline).
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status.
    #[error("HTTP error! status: {status}")]
    Rejected { status: u16, message: Option<String> },
    /// A 2xx response whose body could not be read.
    #[error("unreadable response: {0}")]
    Decode(String),
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

impl ApiError {
    /// Build a [`ApiError::Rejected`] from a status and raw body text.
    ///
    /// The body is read as `{ error?, message? }`; the first non-blank field
    /// wins. Non-JSON bodies produce no message.
    #[must_use]
    pub fn rejected(status: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<ErrorBody>(body).unwrap_or_default();
        let message = [parsed.error, parsed.message]
            .into_iter()
            .flatten()
            .find(|m| !m.trim().is_empty());
        Self::Rejected { status, message }
    }

    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    #[must_use]
    pub fn is_bad_request(&self) -> bool {
        self.status() == Some(400)
    }

    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// Message supplied by the backend, if any.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message, .. } => message.as_deref(),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }
}
