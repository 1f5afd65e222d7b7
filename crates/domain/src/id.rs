//! Opaque record identifiers assigned by the server.

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::InvalidIdError;

const RESERVED: [char; 3] = ['/', '?', '#'];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum Repr {
    Number(i64),
    Text(String),
}

/// Identifier of a room, guest, or booking.
///
/// Ids are opaque: they are forwarded verbatim into request paths and keep
/// the JSON form (number or string) the server used, so a record read from
/// the server serializes back exactly as it arrived. Identity follows the
/// path form: `42` and `"42"` are the same id.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct RecordId(Repr);

impl RecordId {
    /// Parse a textual id, as captured from a route or typed by a user.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidIdError`] when `s` is empty or contains `/`, `?`,
    /// or `#`.
    pub fn parse(s: &str) -> Result<Self, InvalidIdError> {
        if s.is_empty() {
            return Err(InvalidIdError::Empty);
        }
        if let Some(ch) = s.chars().find(|c| RESERVED.contains(c)) {
            return Err(InvalidIdError::ReservedChar {
                id: s.to_string(),
                ch,
            });
        }
        Ok(Self(Repr::Text(s.to_string())))
    }

    /// Text as interpolated into request paths.
    #[must_use]
    pub fn as_path_segment(&self) -> Cow<'_, str> {
        match &self.0 {
            Repr::Number(n) => Cow::Owned(n.to_string()),
            Repr::Text(s) => Cow::Borrowed(s),
        }
    }

    /// Return the numeric value when the server issued a numeric id.
    #[must_use]
    pub fn as_number(&self) -> Option<i64> {
        match self.0 {
            Repr::Number(n) => Some(n),
            Repr::Text(_) => None,
        }
    }
}

impl PartialEq for RecordId {
    fn eq(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (Repr::Number(a), Repr::Number(b)) => a == b,
            (Repr::Text(a), Repr::Text(b)) => a == b,
            _ => self.as_path_segment() == other.as_path_segment(),
        }
    }
}

impl Eq for RecordId {}

impl Hash for RecordId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_path_segment().hash(state);
    }
}

impl From<i64> for RecordId {
    fn from(n: i64) -> Self {
        Self(Repr::Number(n))
    }
}

impl FromStr for RecordId {
    type Err = InvalidIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_path_segment())
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(n) => Ok(Self::from(n)),
            Repr::Text(s) => Self::parse(&s).map_err(serde::de::Error::custom),
        }
    }
}
