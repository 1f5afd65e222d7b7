//! In-memory transport double for unit tests.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;

use crate::error::TransportError;
use crate::ports::{ApiRequest, ApiResponse, HttpTransport, Method};

/// Answers requests from a fixed `(method, path)` table and records every
/// request it receives. Unknown routes answer like the API server does:
/// `404 {"detail":"Not Found"}`.
#[derive(Default)]
pub(crate) struct StubTransport {
    routes: HashMap<(Method, String), ApiResponse>,
    requests: Mutex<Vec<ApiRequest>>,
    unreachable: bool,
}

impl StubTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn on(self, method: Method, path: &str, status: u16, body: serde_json::Value) -> Self {
        self.on_raw(method, path, status, body.to_string())
    }

    pub(crate) fn on_raw(
        mut self,
        method: Method,
        path: &str,
        status: u16,
        body: impl Into<Vec<u8>>,
    ) -> Self {
        self.routes
            .insert((method, path.to_string()), ApiResponse::new(status, body));
        self
    }

    /// Fail every request as if the server could not be reached.
    pub(crate) fn unreachable(mut self) -> Self {
        self.unreachable = true;
        self
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn paths(&self) -> Vec<String> {
        self.requests()
            .into_iter()
            .map(|r| format!("{} {}", r.method, r.path))
            .collect()
    }
}

impl HttpTransport for StubTransport {
    fn send(
        &self,
        request: ApiRequest,
    ) -> impl Future<Output = Result<ApiResponse, TransportError>> + Send {
        let result = if self.unreachable {
            Err(TransportError::new("connection refused"))
        } else {
            Ok(self
                .routes
                .get(&(request.method, request.path.clone()))
                .cloned()
                .unwrap_or_else(|| ApiResponse::new(404, r#"{"detail":"Not Found"}"#)))
        };
        self.requests.lock().unwrap().push(request);
        async { result }
    }
}
