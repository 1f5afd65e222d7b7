//! Error types for the API access layer.
//!
//! Failures are classified once, at the boundary, and handed to the caller
//! unchanged: the server's response body is kept verbatim and nothing here
//! retries or logs.

use std::error::Error as StdError;

use serde::Deserialize;

use crate::ports::ApiResponse;

/// No response could be obtained (connection refused, DNS, TLS, timeout, …).
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
    #[source]
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl TransportError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Wrap an adapter-specific error.
    #[must_use]
    pub fn with_source(
        message: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Coarse failure class, for callers that only need to pick a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The server could not be reached.
    Network,
    /// The server rejected the request (4xx).
    Client,
    /// The server failed to handle the request (5xx or unexpected status).
    Server,
    /// A JSON body could not be encoded or decoded.
    Codec,
}

/// Error returned by every API call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed")]
    Transport(#[from] TransportError),

    #[error("client error: HTTP {status}")]
    Client { status: u16, body: String },

    #[error("server error: HTTP {status}")]
    Server { status: u16, body: String },

    #[error("failed to encode request body")]
    Encode(#[source] serde_json::Error),

    #[error("failed to decode response body")]
    Decode(#[source] serde_json::Error),
}

/// Error body produced by the API server.
#[derive(Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

impl ApiError {
    /// Classify a non-2xx response, keeping its body as-is.
    #[must_use]
    pub fn from_response(response: &ApiResponse) -> Self {
        let status = response.status;
        let body = response.text();
        if (400..500).contains(&status) {
            Self::Client { status, body }
        } else {
            Self::Server { status, body }
        }
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport(_) => ErrorKind::Network,
            Self::Client { .. } => ErrorKind::Client,
            Self::Server { .. } => ErrorKind::Server,
            Self::Encode(_) | Self::Decode(_) => ErrorKind::Codec,
        }
    }

    /// HTTP status, when the server answered.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Client { status, .. } | Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Response body exactly as the server sent it.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Client { body, .. } | Self::Server { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Human-readable message from a `{"detail": ...}` error body.
    ///
    /// Validation failures carry a structured `detail`; it is returned as
    /// compact JSON.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        let body: ErrorBody = serde_json::from_str(self.body()?).ok()?;
        match body.detail {
            serde_json::Value::String(message) => Some(message),
            other => Some(other.to_string()),
        }
    }
}
