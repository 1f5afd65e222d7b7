//! Guest — a person who stays at the hostel.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::Extra;
use crate::id::RecordId;

/// A guest as exchanged with `/guests`.
///
/// `total_stays` and `last_visit` are maintained by the server and are
/// omitted from outgoing bodies when unknown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub country: String,
    pub document_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_stays: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_visit: Option<NaiveDate>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Guest {
    /// Create a builder for constructing a [`Guest`].
    #[must_use]
    pub fn builder() -> GuestBuilder {
        GuestBuilder::default()
    }

    /// `first_name last_name`, as shown in listings and pickers.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Step-by-step builder for [`Guest`].
#[derive(Debug, Default)]
pub struct GuestBuilder {
    id: Option<RecordId>,
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    country: String,
    document_id: String,
}

impl GuestBuilder {
    #[must_use]
    pub fn id(mut self, id: RecordId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, first: impl Into<String>, last: impl Into<String>) -> Self {
        self.first_name = first.into();
        self.last_name = last.into();
        self
    }

    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    #[must_use]
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    #[must_use]
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    #[must_use]
    pub fn document_id(mut self, document_id: impl Into<String>) -> Self {
        self.document_id = document_id.into();
        self
    }

    /// Consume the builder and return a [`Guest`].
    #[must_use]
    pub fn build(self) -> Guest {
        Guest {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            country: self.country,
            document_id: self.document_id,
            total_stays: None,
            last_visit: None,
            extra: Extra::new(),
        }
    }
}
