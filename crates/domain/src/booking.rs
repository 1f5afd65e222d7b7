//! Booking — a guest's stay in a room between two dates.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::Extra;
use crate::id::RecordId;

/// Lifecycle status of a [`Booking`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Active,
    #[serde(untagged)]
    Other(String),
}

impl BookingStatus {
    /// Wire representation of this status.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Active => "active",
            Self::Other(value) => value,
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A booking as exchanged with `/bookings`.
///
/// The server may report the foreign keys under their relation names
/// (`guest`, `room`); both spellings are accepted when decoding. Listing
/// responses join guest and room columns into each booking; those land in
/// `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(alias = "guest")]
    pub guest_id: RecordId,
    #[serde(alias = "room")]
    pub room_id: RecordId,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    #[serde(default)]
    pub status: BookingStatus,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Booking {
    /// Create a booking for `guest_id` in `room_id` with status `active`.
    #[must_use]
    pub fn new(
        guest_id: RecordId,
        room_id: RecordId,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Self {
        Self {
            id: None,
            guest_id,
            room_id,
            check_in,
            check_out,
            status: BookingStatus::Active,
            extra: Extra::new(),
        }
    }
}
