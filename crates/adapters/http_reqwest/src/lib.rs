//! # hostel-adapter-http-reqwest
//!
//! [`HttpTransport`] implementation on top of `reqwest`.
//!
//! ## Responsibilities
//! - Translate an [`ApiRequest`] into an HTTP request (JSON body when present)
//! - Hand back every HTTP response, whatever its status, as an [`ApiResponse`]
//! - Report failures to get a response at all as [`TransportError`]
//! - Own connection pooling, TLS, and the optional request timeout
//!
//! ## Dependency rule
//! Depends on `hostel-app` (port traits) only.

mod config;

pub use config::TransportConfig;

use std::time::Duration;

use hostel_app::error::TransportError;
use hostel_app::ports::{ApiRequest, ApiResponse, HttpTransport, Method};

/// Sends API requests with a pooled [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the TLS backend cannot be initialised.
    pub fn new(config: &TransportConfig) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|err| TransportError::with_source("failed to build HTTP client", err))?;
        Ok(Self { client })
    }

    /// Wrap an already configured client.
    #[must_use]
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

fn to_reqwest(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
    }
}

fn transport_error(err: reqwest::Error) -> TransportError {
    let message = if err.is_timeout() {
        "request timed out"
    } else if err.is_connect() {
        "failed to connect to API server"
    } else if err.is_body() || err.is_decode() {
        "failed to read response body"
    } else {
        "HTTP request failed"
    };
    TransportError::with_source(message, err)
}

impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let ApiRequest {
            method, url, body, ..
        } = request;

        let mut builder = self.client.request(to_reqwest(method), &url);
        if let Some(body) = &body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|err| {
            tracing::debug!(%method, %url, error = %err, "API request failed");
            transport_error(err)
        })?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(transport_error)?;

        tracing::debug!(%method, %url, status, len = bytes.len(), "API request completed");
        Ok(ApiResponse::new(status, bytes.to_vec()))
    }
}
