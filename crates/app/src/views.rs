//! Page views and the registry that instantiates them on demand.
//!
//! A view knows which API data its page needs. Views are created by the
//! [`ViewRegistry`] the first time a route resolves to them, never up front
//! (the home view excepted, as the landing page).

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use hostel_domain::booking::Booking;
use hostel_domain::error::InvalidIdError;
use hostel_domain::guest::Guest;
use hostel_domain::room::Room;
use hostel_domain::stats::{RoomStats, TodayStats};
use serde::Serialize;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::ports::HttpTransport;
use crate::routes::RouteParams;

/// Identity of a view. Several pages may share one (new/edit forms).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewKind {
    Home,
    RoomList,
    RoomForm,
    BookingList,
    BookingForm,
    GuestList,
    GuestForm,
}

impl ViewKind {
    pub const ALL: [Self; 7] = [
        Self::Home,
        Self::RoomList,
        Self::RoomForm,
        Self::BookingList,
        Self::BookingForm,
        Self::GuestList,
        Self::GuestForm,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::RoomList => "room-list",
            Self::RoomForm => "room-form",
            Self::BookingList => "booking-list",
            Self::BookingForm => "booking-form",
            Self::GuestList => "guest-list",
            Self::GuestForm => "guest-form",
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Data a view loaded for its page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "kebab-case")]
pub enum PageData {
    Dashboard {
        rooms: RoomStats,
        today: TodayStats,
    },
    RoomList {
        rooms: Vec<Room>,
    },
    RoomForm {
        room: Option<Room>,
    },
    BookingList {
        bookings: Vec<Booking>,
    },
    /// `rooms` holds the rooms that can be picked: only available ones for a
    /// new booking, all of them when editing (the booked room is occupied).
    BookingForm {
        booking: Option<Booking>,
        rooms: Vec<Room>,
        guests: Vec<Guest>,
    },
    GuestList {
        guests: Vec<Guest>,
    },
    GuestForm {
        guest: Option<Guest>,
    },
}

/// Errors raised while loading a view or its data.
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error("no view registered for {0}")]
    Unregistered(ViewKind),

    #[error("invalid record id in path")]
    InvalidId(#[from] InvalidIdError),

    #[error("failed to load page data")]
    Api(#[from] ApiError),
}

/// An instantiated view.
#[derive(Debug, PartialEq, Eq)]
pub struct View {
    kind: ViewKind,
}

impl View {
    #[must_use]
    pub fn new(kind: ViewKind) -> Self {
        Self { kind }
    }

    #[must_use]
    pub fn kind(&self) -> ViewKind {
        self.kind
    }

    /// Fetch the data this view shows. Form views fetch the record named by
    /// the `:id` parameter when editing and nothing when creating.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::InvalidId`] for a malformed `:id`, or
    /// [`ViewError::Api`] with the failing call's error.
    pub async fn load<T: HttpTransport + Send + Sync>(
        &self,
        client: &ApiClient<T>,
        params: &RouteParams,
    ) -> Result<PageData, ViewError> {
        let id = params.id()?;
        let data = match self.kind {
            ViewKind::Home => PageData::Dashboard {
                rooms: client.rooms().stats().await?,
                today: client.bookings().today_stats().await?,
            },
            ViewKind::RoomList => PageData::RoomList {
                rooms: client.rooms().list().await?,
            },
            ViewKind::RoomForm => PageData::RoomForm {
                room: match id {
                    Some(id) => Some(client.rooms().get(&id).await?),
                    None => None,
                },
            },
            ViewKind::BookingList => PageData::BookingList {
                bookings: client.bookings().list().await?,
            },
            ViewKind::BookingForm => {
                let booking = match id {
                    Some(id) => Some(client.bookings().get(&id).await?),
                    None => None,
                };
                let rooms = if booking.is_some() {
                    client.rooms().list().await?
                } else {
                    client.rooms().available().await?
                };
                PageData::BookingForm {
                    booking,
                    rooms,
                    guests: client.guests().list().await?,
                }
            }
            ViewKind::GuestList => PageData::GuestList {
                guests: client.guests().list().await?,
            },
            ViewKind::GuestForm => PageData::GuestForm {
                guest: match id {
                    Some(id) => Some(client.guests().get(&id).await?),
                    None => None,
                },
            },
        };
        Ok(data)
    }
}

/// Creates a view.
pub type ViewFactory = fn() -> View;

/// On-demand view registry keyed by [`ViewKind`].
///
/// [`load`](Self::load) runs a view's factory the first time the view is
/// requested and hands out the same instance afterwards.
#[derive(Default)]
pub struct ViewRegistry {
    factories: HashMap<ViewKind, ViewFactory>,
    loaded: Mutex<HashMap<ViewKind, Arc<View>>>,
}

impl ViewRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the factory for `kind`, replacing any earlier one.
    #[must_use]
    pub fn with(mut self, kind: ViewKind, factory: ViewFactory) -> Self {
        self.factories.insert(kind, factory);
        self
    }

    /// All front-desk views. Only the home view is instantiated up front.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new()
            .with(ViewKind::Home, || View::new(ViewKind::Home))
            .with(ViewKind::RoomList, || View::new(ViewKind::RoomList))
            .with(ViewKind::RoomForm, || View::new(ViewKind::RoomForm))
            .with(ViewKind::BookingList, || View::new(ViewKind::BookingList))
            .with(ViewKind::BookingForm, || View::new(ViewKind::BookingForm))
            .with(ViewKind::GuestList, || View::new(ViewKind::GuestList))
            .with(ViewKind::GuestForm, || View::new(ViewKind::GuestForm));
        // Landing page.
        registry.loaded = Mutex::new(HashMap::from([(
            ViewKind::Home,
            Arc::new(View::new(ViewKind::Home)),
        )]));
        registry
    }

    /// Return the view for `kind`, instantiating it on first use.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Unregistered`] when no factory exists for `kind`.
    pub fn load(&self, kind: ViewKind) -> Result<Arc<View>, ViewError> {
        let mut loaded = self.loaded.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(view) = loaded.get(&kind) {
            return Ok(Arc::clone(view));
        }
        let factory = self
            .factories
            .get(&kind)
            .ok_or(ViewError::Unregistered(kind))?;
        let view = Arc::new(factory());
        loaded.insert(kind, Arc::clone(&view));
        Ok(view)
    }

    #[must_use]
    pub fn is_registered(&self, kind: ViewKind) -> bool {
        self.factories.contains_key(&kind)
    }

    #[must_use]
    pub fn is_loaded(&self, kind: ViewKind) -> bool {
        self.loaded
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&kind)
    }

    /// Views instantiated so far, in declaration order.
    #[must_use]
    pub fn loaded(&self) -> Vec<ViewKind> {
        let mut kinds: Vec<ViewKind> = self
            .loaded
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .copied()
            .collect();
        kinds.sort();
        kinds
    }
}
