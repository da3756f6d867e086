//! Upstream error types

use thiserror::Error;

/// Errors from the upstream generation call
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("upstream API key is not configured")]
    MissingApiKey,
    #[error("upstream returned status {status}: {message}")]
    Upstream { status: u16, message: String },
    #[error("network error calling upstream: {source}")]
    Network {
        #[source]
        source: reqwest::Error,
    },
    #[error("upstream returned an invalid body: {reason}")]
    InvalidResponse { reason: String },
}

impl ModelError {
    pub fn upstream(status: u16, message: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            message: message.into(),
        }
    }

    /// Strips the request URL from the error so the query credential never
    /// reaches a log line or response body.
    pub fn network(source: reqwest::Error) -> Self {
        Self::Network {
            source: source.without_url(),
        }
    }

    pub fn invalid_response(reason: impl Into<String>) -> Self {
        Self::InvalidResponse {
            reason: reason.into(),
        }
    }
}
