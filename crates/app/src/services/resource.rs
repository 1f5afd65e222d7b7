//! Generic CRUD call group shared by rooms, guests, and bookings.

use std::marker::PhantomData;

use hostel_domain::id::RecordId;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::ports::{ApiRequest, ApiResponse, HttpTransport, Method};

/// A server-managed collection addressed by a base path.
pub trait Resource {
    /// Collection path relative to the base address, e.g. `/rooms`.
    const COLLECTION: &'static str;

    /// Record shape exchanged with the collection.
    type Record: Serialize + DeserializeOwned + Send + Sync;
}

/// CRUD calls for resource `R` over transport `T`.
///
/// Every method builds its path from [`Resource::COLLECTION`] and, where
/// applicable, the record id, then dispatches exactly one request. Calls are
/// independent: no caching, retrying, or ordering between them.
pub struct ResourceService<T, R> {
    transport: T,
    config: ApiConfig,
    resource: PhantomData<fn() -> R>,
}

impl<T: Clone, R> Clone for ResourceService<T, R> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            config: self.config.clone(),
            resource: PhantomData,
        }
    }
}

impl<T, R: Resource> ResourceService<T, R> {
    /// Create a call group sending through `transport` to `config`'s base
    /// address.
    pub fn new(transport: T, config: ApiConfig) -> Self {
        Self {
            transport,
            config,
            resource: PhantomData,
        }
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// `/<collection>/<id>`.
    #[must_use]
    pub fn item_path(id: &RecordId) -> String {
        format!("{}/{id}", R::COLLECTION)
    }

    /// `/<collection>/<segment>` for sub-collections and aggregates.
    #[must_use]
    pub fn sub_path(segment: &str) -> String {
        format!("{}/{segment}", R::COLLECTION)
    }
}

impl<T: HttpTransport + Sync, R: Resource> ResourceService<T, R> {
    /// `GET /<collection>`.
    ///
    /// # Errors
    ///
    /// Returns the transport failure, the non-2xx status with its body, or a
    /// decode error.
    pub async fn list(&self) -> Result<Vec<R::Record>, ApiError> {
        self.fetch(R::COLLECTION.to_string()).await
    }

    /// `GET /<collection>/<id>`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Client`] with status 404 when the record does not
    /// exist, or any other failure as for [`list`](Self::list).
    pub async fn get(&self, id: &RecordId) -> Result<R::Record, ApiError> {
        self.fetch(Self::item_path(id)).await
    }

    /// `POST /<collection>` with `record` as the body. Returns the created
    /// record including its server-assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Encode`] when `record` cannot be serialized, or any
    /// failure as for [`list`](Self::list).
    pub async fn create(&self, record: &R::Record) -> Result<R::Record, ApiError> {
        let body = serde_json::to_value(record).map_err(ApiError::Encode)?;
        let response = self
            .dispatch(Method::Post, R::COLLECTION.to_string(), Some(body))
            .await?;
        decode(&response)
    }

    /// `PUT /<collection>/<id>` with `record` as the body.
    ///
    /// # Errors
    ///
    /// As for [`create`](Self::create); a missing record yields status 404.
    pub async fn update(&self, id: &RecordId, record: &R::Record) -> Result<R::Record, ApiError> {
        let body = serde_json::to_value(record).map_err(ApiError::Encode)?;
        let response = self
            .dispatch(Method::Put, Self::item_path(id), Some(body))
            .await?;
        decode(&response)
    }

    /// `DELETE /<collection>/<id>`. The confirmation body is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Client`] with status 404 when the record does not
    /// exist, or the transport failure.
    pub async fn delete(&self, id: &RecordId) -> Result<(), ApiError> {
        self.dispatch(Method::Delete, Self::item_path(id), None)
            .await
            .map(|_| ())
    }

    /// `GET` an arbitrary path under this collection and decode it as `U`.
    pub(crate) async fn fetch<U: DeserializeOwned>(&self, path: String) -> Result<U, ApiError> {
        let response = self.dispatch(Method::Get, path, None).await?;
        decode(&response)
    }

    async fn dispatch(
        &self,
        method: Method,
        path: String,
        body: Option<serde_json::Value>,
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(&self.config, method, path, body);
        let response = self.transport.send(request).await?;
        if response.is_success() {
            Ok(response)
        } else {
            Err(ApiError::from_response(&response))
        }
    }
}

fn decode<U: DeserializeOwned>(response: &ApiResponse) -> Result<U, ApiError> {
    serde_json::from_slice(&response.body).map_err(ApiError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::test_support::StubTransport;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Widget {
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<RecordId>,
        name: String,
    }

    struct Widgets;

    impl Resource for Widgets {
        const COLLECTION: &'static str = "/widgets";
        type Record = Widget;
    }

    fn service(transport: &StubTransport) -> ResourceService<&StubTransport, Widgets> {
        ResourceService::new(transport, ApiConfig::new("http://api.test/api"))
    }

    fn id(s: &str) -> RecordId {
        RecordId::parse(s).unwrap()
    }

    #[tokio::test]
    async fn should_list_collection() {
        let transport =
            StubTransport::new().on(Method::Get, "/widgets", 200, json!([{"id": 1, "name": "a"}]));

        let widgets = service(&transport).list().await.unwrap();

        assert_eq!(widgets.len(), 1);
        assert_eq!(widgets[0].id, Some(RecordId::from(1)));
        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, "http://api.test/api/widgets");
    }

    #[tokio::test]
    async fn should_get_item_with_single_bodiless_request() {
        let transport =
            StubTransport::new().on(Method::Get, "/widgets/42", 200, json!({"id": 42, "name": "x"}));

        service(&transport).get(&id("42")).await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::Get);
        assert_eq!(requests[0].path, "/widgets/42");
        assert!(requests[0].body.is_none());
    }

    #[test]
    fn should_interpolate_distinct_ids_into_distinct_paths() {
        assert_eq!(
            ResourceService::<&StubTransport, Widgets>::item_path(&id("42")),
            "/widgets/42"
        );
        assert_ne!(
            ResourceService::<&StubTransport, Widgets>::item_path(&id("42")),
            ResourceService::<&StubTransport, Widgets>::item_path(&id("43"))
        );
    }

    #[tokio::test]
    async fn should_post_record_and_return_server_response() {
        let transport =
            StubTransport::new().on(Method::Post, "/widgets", 200, json!({"id": 7, "name": "new"}));
        let widget = Widget {
            id: None,
            name: "new".to_string(),
        };

        let created = service(&transport).create(&widget).await.unwrap();

        assert_eq!(created.id, Some(RecordId::from(7)));
        let requests = transport.requests();
        assert_eq!(requests[0].method, Method::Post);
        assert_eq!(requests[0].path, "/widgets");
        assert_eq!(requests[0].body, Some(json!({"name": "new"})));
    }

    #[tokio::test]
    async fn should_put_record_to_item_path() {
        let transport =
            StubTransport::new().on(Method::Put, "/widgets/3", 200, json!({"id": 3, "name": "renamed"}));
        let widget = Widget {
            id: Some(RecordId::from(3)),
            name: "renamed".to_string(),
        };

        let updated = service(&transport).update(&id("3"), &widget).await.unwrap();

        assert_eq!(updated.name, "renamed");
        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::Put);
        assert_eq!(requests[0].path, "/widgets/3");
        assert_eq!(requests[0].body, Some(json!({"id": 3, "name": "renamed"})));
    }

    #[tokio::test]
    async fn should_delete_item_without_body() {
        let transport = StubTransport::new().on(
            Method::Delete,
            "/widgets/3",
            200,
            json!({"message": "deleted"}),
        );

        service(&transport).delete(&id("3")).await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::Delete);
        assert!(requests[0].body.is_none());
    }

    #[tokio::test]
    async fn should_accept_empty_delete_response() {
        let transport = StubTransport::new().on_raw(Method::Delete, "/widgets/3", 204, "");
        assert!(service(&transport).delete(&id("3")).await.is_ok());
    }

    #[tokio::test]
    async fn should_propagate_not_found_on_get() {
        let transport = StubTransport::new();

        let err = service(&transport).get(&id("99")).await.unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.body(), Some(r#"{"detail":"Not Found"}"#));
    }

    #[tokio::test]
    async fn should_propagate_not_found_on_delete() {
        let transport = StubTransport::new();
        let err = service(&transport).delete(&id("99")).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn should_propagate_server_error() {
        let transport = StubTransport::new().on_raw(Method::Get, "/widgets", 500, "boom");
        let err = service(&transport).list().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Server);
        assert_eq!(err.body(), Some("boom"));
    }

    #[tokio::test]
    async fn should_propagate_transport_failure() {
        let transport = StubTransport::new().unreachable();
        let err = service(&transport).list().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Network);
    }

    #[tokio::test]
    async fn should_report_decode_error_for_unexpected_shape() {
        let transport = StubTransport::new().on(Method::Get, "/widgets", 200, json!({"oops": true}));
        let err = service(&transport).list().await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
