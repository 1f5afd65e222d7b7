//! Guest call group.

use hostel_domain::guest::Guest;

use super::resource::{Resource, ResourceService};

/// Marker for the `/guests` collection.
pub struct Guests;

impl Resource for Guests {
    const COLLECTION: &'static str = "/guests";
    type Record = Guest;
}

/// Calls against `/guests`.
pub type GuestService<T> = ResourceService<T, Guests>;
