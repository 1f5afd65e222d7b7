//! Aggregate statistics reported by the server.

use serde::{Deserialize, Serialize};

use crate::Extra;

/// Room counts by status, from `GET /rooms/stats`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomStats {
    pub total: u64,
    pub available: u64,
    pub occupied: u64,
    pub maintenance: u64,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Check-ins and check-outs falling on the current day, from
/// `GET /bookings/today`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TodayStats {
    pub checkins: u64,
    pub checkouts: u64,
    #[serde(flatten)]
    pub extra: Extra,
}
