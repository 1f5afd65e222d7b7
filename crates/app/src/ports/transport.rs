//! Transport port — carries one request to the remote API.
//!
//! Connection pooling, TLS, and timeouts belong to the adapter. The port only
//! moves a fully built request out and the raw response back.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use crate::config::ApiConfig;
use crate::error::TransportError;

/// HTTP methods used by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request ready to dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the base address, e.g. `/rooms/42`.
    pub path: String,
    /// Absolute URL: base address followed by `path`.
    pub url: String,
    /// JSON body; only set for `POST` and `PUT`.
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    /// Build a request for `path` against the configured base address.
    #[must_use]
    pub fn new(
        config: &ApiConfig,
        method: Method,
        path: impl Into<String>,
        body: Option<serde_json::Value>,
    ) -> Self {
        let path = path.into();
        Self {
            method,
            url: config.url(&path),
            path,
            body,
        }
    }
}

/// Raw response as received from the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ApiResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as text, replacing invalid UTF-8 sequences.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Sends [`ApiRequest`]s to the remote API.
///
/// Implementations return any HTTP status as an `Ok` response; only failures
/// to obtain a response at all are a [`TransportError`].
pub trait HttpTransport {
    /// Dispatch a single request and wait for its response.
    fn send(
        &self,
        request: ApiRequest,
    ) -> impl Future<Output = Result<ApiResponse, TransportError>> + Send;
}

impl<T: HttpTransport + Send + Sync> HttpTransport for Arc<T> {
    fn send(
        &self,
        request: ApiRequest,
    ) -> impl Future<Output = Result<ApiResponse, TransportError>> + Send {
        (**self).send(request)
    }
}

impl<T: HttpTransport + Sync> HttpTransport for &T {
    fn send(
        &self,
        request: ApiRequest,
    ) -> impl Future<Output = Result<ApiResponse, TransportError>> + Send {
        (**self).send(request)
    }
}
