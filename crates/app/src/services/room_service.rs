//! Room call group — CRUD plus availability and occupancy statistics.

use hostel_domain::room::Room;
use hostel_domain::stats::RoomStats;

use super::resource::{Resource, ResourceService};
use crate::error::ApiError;
use crate::ports::HttpTransport;

/// Marker for the `/rooms` collection.
pub struct Rooms;

impl Resource for Rooms {
    const COLLECTION: &'static str = "/rooms";
    type Record = Room;
}

/// Calls against `/rooms`.
pub type RoomService<T> = ResourceService<T, Rooms>;

impl<T: HttpTransport + Sync> ResourceService<T, Rooms> {
    /// `GET /rooms/available`. The filter is applied by the server.
    ///
    /// # Errors
    ///
    /// Propagates any failure unchanged, including a 404.
    pub async fn available(&self) -> Result<Vec<Room>, ApiError> {
        self.fetch(Self::sub_path("available")).await
    }

    /// `GET /rooms/stats`.
    ///
    /// # Errors
    ///
    /// Propagates any failure unchanged.
    pub async fn stats(&self) -> Result<RoomStats, ApiError> {
        self.fetch(Self::sub_path("stats")).await
    }
}
