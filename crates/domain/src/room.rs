//! Room — a bookable unit with a number, type, capacity, and nightly price.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Extra;
use crate::id::RecordId;

/// Occupancy status of a [`Room`].
///
/// Values the client does not know about are kept as [`RoomStatus::Other`]
/// and sent back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    #[default]
    Available,
    Occupied,
    Maintenance,
    #[serde(untagged)]
    Other(String),
}

impl RoomStatus {
    /// Wire representation of this status.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Available => "available",
            Self::Occupied => "occupied",
            Self::Maintenance => "maintenance",
            Self::Other(value) => value,
        }
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A room as exchanged with `/rooms`.
///
/// `id` is absent on records that have not been created yet; the server
/// assigns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub number: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub capacity: u32,
    pub price: f64,
    #[serde(default)]
    pub status: RoomStatus,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Room {
    /// Create a builder for constructing a [`Room`].
    #[must_use]
    pub fn builder() -> RoomBuilder {
        RoomBuilder::default()
    }
}

/// Step-by-step builder for [`Room`].
#[derive(Debug, Default)]
pub struct RoomBuilder {
    id: Option<RecordId>,
    number: Option<String>,
    kind: Option<String>,
    capacity: u32,
    price: f64,
    status: RoomStatus,
}

impl RoomBuilder {
    #[must_use]
    pub fn id(mut self, id: RecordId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn number(mut self, number: impl Into<String>) -> Self {
        self.number = Some(number.into());
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    #[must_use]
    pub fn capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    #[must_use]
    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    #[must_use]
    pub fn status(mut self, status: RoomStatus) -> Self {
        self.status = status;
        self
    }

    /// Consume the builder and return a [`Room`].
    #[must_use]
    pub fn build(self) -> Room {
        Room {
            id: self.id,
            number: self.number.unwrap_or_default(),
            kind: self.kind.unwrap_or_default(),
            capacity: self.capacity,
            price: self.price,
            status: self.status,
            extra: Extra::new(),
        }
    }
}
