//! The API client — one shared transport and the three resource groups.

use std::sync::Arc;

use crate::config::ApiConfig;
use crate::ports::HttpTransport;
use crate::services::{BookingService, GuestService, RoomService};

/// Entry point for all API calls.
///
/// Holds a single transport, shared by the rooms, guests, and bookings call
/// groups, and the base address they were built with. Cloning is cheap and
/// clones share the transport.
pub struct ApiClient<T> {
    config: ApiConfig,
    rooms: RoomService<Arc<T>>,
    guests: GuestService<Arc<T>>,
    bookings: BookingService<Arc<T>>,
}

impl<T> Clone for ApiClient<T> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            rooms: self.rooms.clone(),
            guests: self.guests.clone(),
            bookings: self.bookings.clone(),
        }
    }
}

impl<T: HttpTransport + Send + Sync> ApiClient<T> {
    /// Build the client, handing `config` to each resource group.
    pub fn new(config: ApiConfig, transport: T) -> Self {
        let transport = Arc::new(transport);
        Self {
            rooms: RoomService::new(Arc::clone(&transport), config.clone()),
            guests: GuestService::new(Arc::clone(&transport), config.clone()),
            bookings: BookingService::new(transport, config.clone()),
            config,
        }
    }
}

impl<T> ApiClient<T> {
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    #[must_use]
    pub fn rooms(&self) -> &RoomService<Arc<T>> {
        &self.rooms
    }

    #[must_use]
    pub fn guests(&self) -> &GuestService<Arc<T>> {
        &self.guests
    }

    #[must_use]
    pub fn bookings(&self) -> &BookingService<Arc<T>> {
        &self.bookings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::Method;
    use crate::services::{Resource, ResourceService};
    use crate::test_support::StubTransport;
    use hostel_domain::id::RecordId;
    use serde_json::json;

    fn room_json(id: i64, number: &str) -> serde_json::Value {
        json!({"id": id, "number": number, "type": "single", "capacity": 1, "price": 20.0, "status": "available"})
    }

    #[tokio::test]
    async fn should_share_base_address_across_groups() {
        let client = ApiClient::new(ApiConfig::new("http://front.test/api"), StubTransport::new());

        assert_eq!(client.config().base_url(), "http://front.test/api");
        assert_eq!(client.rooms().config(), client.config());
        assert_eq!(client.guests().config(), client.config());
        assert_eq!(client.bookings().config(), client.config());
    }

    #[tokio::test]
    async fn should_route_each_group_to_its_collection() {
        let transport = Arc::new(
            StubTransport::new()
                .on(Method::Get, "/rooms", 200, json!([]))
                .on(Method::Get, "/guests", 200, json!([]))
                .on(Method::Get, "/bookings", 200, json!([])),
        );
        let client = ApiClient::new(ApiConfig::default(), Arc::clone(&transport));

        client.rooms().list().await.unwrap();
        client.guests().list().await.unwrap();
        client.bookings().list().await.unwrap();

        assert_eq!(
            transport.paths(),
            vec!["GET /rooms", "GET /guests", "GET /bookings"]
        );
    }

    fn guest_json(id: i64) -> serde_json::Value {
        json!({"id": id, "first_name": "Ana", "last_name": "Lima", "email": "ana@example.com", "phone": "+351 900", "country": "PT", "document_id": "P123"})
    }

    fn booking_json(id: i64) -> serde_json::Value {
        json!({"id": id, "guest_id": 1, "room_id": 2, "check_in": "2026-05-01", "check_out": "2026-05-03", "status": "active"})
    }

    async fn exercise_crud<R: Resource>(
        service: &ResourceService<Arc<Arc<StubTransport>>, R>,
        record: &R::Record,
    ) {
        let id = RecordId::from(5);
        service.list().await.unwrap();
        service.get(&id).await.unwrap();
        service.create(record).await.unwrap();
        service.update(&id, record).await.unwrap();
        service.delete(&id).await.unwrap();
    }

    #[tokio::test]
    async fn should_address_every_resource_by_collection_and_id() {
        let table = [
            ("/rooms", room_json(5, "105")),
            ("/guests", guest_json(5)),
            ("/bookings", booking_json(5)),
        ];
        let mut stub = StubTransport::new();
        for (collection, record) in &table {
            let item = format!("{collection}/5");
            stub = stub
                .on(Method::Get, collection, 200, json!([record]))
                .on(Method::Get, &item, 200, record.clone())
                .on(Method::Post, collection, 200, record.clone())
                .on(Method::Put, &item, 200, record.clone())
                .on(Method::Delete, &item, 200, json!({"message": "deleted"}));
        }
        let transport = Arc::new(stub);
        let client = ApiClient::new(ApiConfig::default(), Arc::clone(&transport));

        let room = serde_json::from_value(table[0].1.clone()).unwrap();
        exercise_crud(client.rooms(), &room).await;
        let guest = serde_json::from_value(table[1].1.clone()).unwrap();
        exercise_crud(client.guests(), &guest).await;
        let booking = serde_json::from_value(table[2].1.clone()).unwrap();
        exercise_crud(client.bookings(), &booking).await;

        let requests = transport.requests();
        assert_eq!(requests.len(), 15);
        for (chunk, (collection, _)) in requests.chunks(5).zip(&table) {
            let expected = [
                (Method::Get, collection.to_string()),
                (Method::Get, format!("{collection}/5")),
                (Method::Post, collection.to_string()),
                (Method::Put, format!("{collection}/5")),
                (Method::Delete, format!("{collection}/5")),
            ];
            for (request, (method, path)) in chunk.iter().zip(expected) {
                assert_eq!((request.method, request.path.as_str()), (method, path.as_str()));
                assert_eq!(request.url, format!("http://localhost:8000/api{path}"));
                let carries_body = matches!(method, Method::Post | Method::Put);
                assert_eq!(request.body.is_some(), carries_body, "{method} {path}");
            }
        }
    }

    #[tokio::test]
    async fn should_issue_concurrent_calls_independently() {
        let transport = Arc::new(
            StubTransport::new()
                .on(Method::Get, "/rooms/1", 200, room_json(1, "101"))
                .on(Method::Get, "/rooms/2", 200, room_json(2, "102")),
        );
        let client = ApiClient::new(ApiConfig::default(), Arc::clone(&transport));
        let first = RecordId::from(1);
        let second = RecordId::from(2);

        let (a, b) = tokio::join!(client.rooms().get(&first), client.rooms().get(&second));

        assert_eq!(a.unwrap().number, "101");
        assert_eq!(b.unwrap().number, "102");
        let mut paths = transport.paths();
        paths.sort();
        assert_eq!(paths, vec!["GET /rooms/1", "GET /rooms/2"]);
    }

    #[tokio::test]
    async fn should_share_transport_between_clones() {
        let transport = Arc::new(StubTransport::new().on(Method::Get, "/rooms/stats", 200, json!({})));
        let client = ApiClient::new(ApiConfig::default(), Arc::clone(&transport));
        let clone = client.clone();

        client.rooms().stats().await.unwrap();
        clone.rooms().stats().await.unwrap();

        assert_eq!(transport.requests().len(), 2);
    }
}
