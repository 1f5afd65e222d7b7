//! Booking call group — CRUD plus today's arrivals and departures.

use hostel_domain::booking::Booking;
use hostel_domain::stats::TodayStats;

use super::resource::{Resource, ResourceService};
use crate::error::ApiError;
use crate::ports::HttpTransport;

/// Marker for the `/bookings` collection.
pub struct Bookings;

impl Resource for Bookings {
    const COLLECTION: &'static str = "/bookings";
    type Record = Booking;
}

/// Calls against `/bookings`.
pub type BookingService<T> = ResourceService<T, Bookings>;

impl<T: HttpTransport + Sync> ResourceService<T, Bookings> {
    /// `GET /bookings/today`. "Today" is the server's date.
    ///
    /// # Errors
    ///
    /// Propagates any failure unchanged.
    pub async fn today_stats(&self) -> Result<TodayStats, ApiError> {
        self.fetch(Self::sub_path("today")).await
    }
}
