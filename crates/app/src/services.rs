//! Resource call groups — one per server collection.
//!
//! Every group is a [`ResourceService`](resource::ResourceService) that
//! accepts the transport via a generic parameter (constructor injection),
//! keeping this layer decoupled from concrete adapters.

pub mod booking_service;
pub mod guest_service;
pub mod resource;
pub mod room_service;

pub use booking_service::{BookingService, Bookings};
pub use guest_service::{GuestService, Guests};
pub use resource::{Resource, ResourceService};
pub use room_service::{RoomService, Rooms};
