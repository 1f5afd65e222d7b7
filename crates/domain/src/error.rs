//! Domain error types.

/// A string that cannot be used as a [`RecordId`](crate::id::RecordId).
///
/// Ids are interpolated into request paths, so they must be non-empty and
/// free of path, query, and fragment delimiters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidIdError {
    #[error("record id must not be empty")]
    Empty,

    #[error("record id {id:?} contains reserved character {ch:?}")]
    ReservedChar { id: String, ch: char },
}
