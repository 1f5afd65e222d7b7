//! Client-side route table — maps navigable paths to logical pages.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use hostel_domain::error::InvalidIdError;
use hostel_domain::id::RecordId;
use serde::Serialize;

use crate::views::ViewKind;

/// A named, routable page, independent of how its view is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    Home,
    Rooms,
    RoomNew,
    RoomEdit,
    Bookings,
    BookingNew,
    BookingEdit,
    Guests,
    GuestNew,
    GuestEdit,
}

impl Page {
    /// Logical page name, e.g. `room-edit`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Rooms => "rooms",
            Self::RoomNew => "room-new",
            Self::RoomEdit => "room-edit",
            Self::Bookings => "bookings",
            Self::BookingNew => "booking-new",
            Self::BookingEdit => "booking-edit",
            Self::Guests => "guests",
            Self::GuestNew => "guest-new",
            Self::GuestEdit => "guest-edit",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// A path pattern such as `/rooms/:id/edit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    /// Parse a pattern. Segments starting with `:` capture a parameter.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::InvalidPattern`] when the pattern does not start
    /// with `/`, has an empty segment, or has an unnamed or repeated
    /// parameter.
    pub fn parse(raw: &str) -> Result<Self, RouteError> {
        let invalid = |reason| RouteError::InvalidPattern {
            pattern: raw.to_string(),
            reason,
        };
        let Some(rest) = raw.strip_prefix('/') else {
            return Err(invalid("must start with '/'"));
        };
        let pattern = Self::from_parts(raw, rest);
        let mut names = HashSet::new();
        for segment in &pattern.segments {
            match segment {
                Segment::Literal(s) if s.is_empty() => return Err(invalid("empty segment")),
                Segment::Param(name) if name.is_empty() => {
                    return Err(invalid("unnamed parameter"));
                }
                Segment::Param(name) if !names.insert(name.as_str()) => {
                    return Err(invalid("repeated parameter"));
                }
                _ => {}
            }
        }
        Ok(pattern)
    }

    fn from_parts(raw: &str, rest: &str) -> Self {
        let segments = if rest.is_empty() {
            Vec::new()
        } else {
            rest.split('/')
                .map(|s| match s.strip_prefix(':') {
                    Some(name) => Segment::Param(name.to_string()),
                    None => Segment::Literal(s.to_string()),
                })
                .collect()
        };
        Self {
            raw: raw.to_string(),
            segments,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Shape with parameter names erased; equal shapes match the same paths.
    fn shape(&self) -> Vec<Option<&str>> {
        self.segments
            .iter()
            .map(|s| match s {
                Segment::Literal(l) => Some(l.as_str()),
                Segment::Param(_) => None,
            })
            .collect()
    }

    /// Literal segments rank above parameters, position by position.
    fn specificity(&self) -> Vec<bool> {
        self.segments
            .iter()
            .map(|s| matches!(s, Segment::Literal(_)))
            .collect()
    }

    fn matches(&self, parts: &[&str]) -> Option<RouteParams> {
        if parts.len() != self.segments.len() {
            return None;
        }
        let mut params = RouteParams::default();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Literal(l) if l == part => {}
                Segment::Param(name) if !part.is_empty() => {
                    params.0.insert(name.clone(), (*part).to_string());
                }
                _ => return None,
            }
        }
        Some(params)
    }

    fn render(&self, params: &RouteParams) -> Option<String> {
        if self.segments.is_empty() {
            return Some("/".to_string());
        }
        let mut path = String::new();
        for segment in &self.segments {
            path.push('/');
            match segment {
                Segment::Literal(l) => path.push_str(l),
                Segment::Param(name) => {
                    let value = params.get(name)?;
                    if value.is_empty() || value.contains(['/', '?', '#']) {
                        return None;
                    }
                    path.push_str(value);
                }
            }
        }
        Some(path)
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Parameters captured from dynamic segments, keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RouteParams(BTreeMap<String, String>);

impl RouteParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter, for reverse routing.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// The `:id` segment as a record id, if the route has one.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidIdError`] when the captured value is not a
    /// well-formed id.
    pub fn id(&self) -> Result<Option<RecordId>, InvalidIdError> {
        self.get("id").map(RecordId::parse).transpose()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One row of the route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub pattern: RoutePattern,
    pub page: Page,
    pub view: ViewKind,
}

impl RouteEntry {
    /// # Errors
    ///
    /// Returns [`RouteError::InvalidPattern`] when `pattern` is malformed.
    pub fn new(pattern: &str, page: Page, view: ViewKind) -> Result<Self, RouteError> {
        Ok(Self {
            pattern: RoutePattern::parse(pattern)?,
            page,
            view,
        })
    }
}

/// Result of resolving a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub page: Page,
    pub view: ViewKind,
    pub params: RouteParams,
}

/// Route table construction errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("invalid route pattern {pattern:?}: {reason}")]
    InvalidPattern {
        pattern: String,
        reason: &'static str,
    },

    #[error("route pattern {0:?} duplicates an earlier route")]
    DuplicatePattern(String),

    #[error("page {0} is routed more than once")]
    DuplicatePage(Page),
}

const STANDARD_ROUTES: [(&str, Page, ViewKind); 10] = [
    ("/", Page::Home, ViewKind::Home),
    ("/rooms", Page::Rooms, ViewKind::RoomList),
    ("/rooms/new", Page::RoomNew, ViewKind::RoomForm),
    ("/rooms/:id/edit", Page::RoomEdit, ViewKind::RoomForm),
    ("/bookings", Page::Bookings, ViewKind::BookingList),
    ("/bookings/new", Page::BookingNew, ViewKind::BookingForm),
    ("/bookings/:id/edit", Page::BookingEdit, ViewKind::BookingForm),
    ("/guests", Page::Guests, ViewKind::GuestList),
    ("/guests/new", Page::GuestNew, ViewKind::GuestForm),
    ("/guests/:id/edit", Page::GuestEdit, ViewKind::GuestForm),
];

/// Static mapping from path pattern to page and view.
///
/// Each well-formed path matches at most one entry: patterns that would
/// match the same paths are rejected at construction, and when a literal and
/// a parameter segment both fit, the literal wins.
#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Build a table from `entries`.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::DuplicatePattern`] or
    /// [`RouteError::DuplicatePage`] when an entry repeats an earlier one.
    pub fn new(entries: Vec<RouteEntry>) -> Result<Self, RouteError> {
        let mut shapes = HashSet::new();
        let mut pages = HashSet::new();
        for entry in &entries {
            if !shapes.insert(entry.pattern.shape()) {
                return Err(RouteError::DuplicatePattern(entry.pattern.raw.clone()));
            }
            if !pages.insert(entry.page) {
                return Err(RouteError::DuplicatePage(entry.page));
            }
        }
        Ok(Self { entries })
    }

    /// The front desk's pages: home, and list/new/edit for rooms, bookings,
    /// and guests.
    #[must_use]
    pub fn standard() -> Self {
        let entries = STANDARD_ROUTES
            .iter()
            .map(|&(pattern, page, view)| RouteEntry {
                pattern: RoutePattern::from_parts(pattern, &pattern[1..]),
                page,
                view,
            })
            .collect();
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// Resolve a requested path. Query string, fragment, and one trailing
    /// `/` are ignored. `None` means no page matches.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<RouteMatch> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let rest = path.strip_prefix('/')?;
        let rest = match rest.strip_suffix('/') {
            Some(inner) if !inner.is_empty() && !inner.ends_with('/') => inner,
            Some(_) => return None,
            None => rest,
        };
        let parts: Vec<&str> = if rest.is_empty() {
            Vec::new()
        } else {
            rest.split('/').collect()
        };

        self.entries
            .iter()
            .filter_map(|entry| entry.pattern.matches(&parts).map(|params| (entry, params)))
            .max_by_key(|(entry, _)| entry.pattern.specificity())
            .map(|(entry, params)| RouteMatch {
                page: entry.page,
                view: entry.view,
                params,
            })
    }

    /// Build the path for `page`, filling its parameters from `params`.
    /// `None` when the page is not routed or a parameter is missing, empty,
    /// or contains `/`, `?`, or `#`.
    #[must_use]
    pub fn path_for(&self, page: Page, params: &RouteParams) -> Option<String> {
        self.entries
            .iter()
            .find(|entry| entry.page == page)
            .and_then(|entry| entry.pattern.render(params))
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::standard()
    }
}
