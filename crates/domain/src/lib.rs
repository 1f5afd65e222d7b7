//! # hostel-domain
//!
//! Record shapes exchanged with the hostel reservation API.
//!
//! ## Responsibilities
//! - Foundational types: opaque record identifiers and their error type
//! - Define **Rooms** (number, type, capacity, price, occupancy status)
//! - Define **Guests** (contact and identity details)
//! - Define **Bookings** (a guest staying in a room between two dates)
//! - Define the aggregate statistics the server reports
//!
//! Records carry no business validation: whatever the server sends is kept,
//! including fields this crate does not know about, and sent back unchanged.
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or IO crates.

pub mod error;
pub mod id;

pub mod booking;
pub mod guest;
pub mod room;
pub mod stats;

/// Server fields not modelled by a record, kept for pass-through.
pub type Extra = serde_json::Map<String, serde_json::Value>;
