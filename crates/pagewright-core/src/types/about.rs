//! About Record Type - the site's "About" page content
//!
//! Stores the editable page body plus an optional image URL produced by the
//! upload endpoint. Timestamps are managed by the store, never by callers.

use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::schema::{CollectionSchema, FieldSpec};

/// A persisted About record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutRecord {
    /// ULID assigned by the store at create time
    pub id: String,

    /// Page title
    pub title: String,

    /// Page body text
    pub content: String,

    /// URL of the page image, as returned by the upload endpoint.
    /// Held by convention only; the format is unconstrained.
    pub image: Option<String>,

    /// Whether this record is the one currently served
    pub is_active: bool,

    /// Unix timestamp when the record was created
    pub created_at: i64,

    /// Unix timestamp of last update
    pub updated_at: i64,
}

/// Caller-supplied fields for creating or updating an About record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutDraft {
    /// Page title, required non-blank
    pub title: String,

    /// Page body, required non-blank
    pub content: String,

    /// Optional image URL
    #[serde(default)]
    pub image: Option<String>,

    /// Active flag, defaults to true when omitted
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl AboutDraft {
    /// Create a draft with just title and body, other fields defaulted
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            image: None,
            is_active: true,
        }
    }
}

impl AboutRecord {
    /// Collection name this type is registered under
    pub const COLLECTION: &'static str = "About";

    /// Declarative schema for the About collection
    pub fn schema() -> CollectionSchema {
        CollectionSchema::new(Self::COLLECTION)
            .field(FieldSpec::required_text("title"))
            .field(FieldSpec::required_text("content"))
            .field(FieldSpec::optional_text("image"))
            .field(FieldSpec::bool_with_default("is_active", true))
            .with_timestamps()
    }

    /// Materialize a new record from a validated draft
    pub(crate) fn from_draft(draft: &AboutDraft) -> Self {
        let now = chrono::Utc::now().timestamp();
        Self {
            id: Ulid::new().to_string(),
            title: draft.title.clone(),
            content: draft.content.clone(),
            image: draft.image.clone(),
            is_active: draft.is_active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite the editable fields from a draft and refresh `updated_at`
    pub(crate) fn apply(&mut self, draft: &AboutDraft) {
        self.title = draft.title.clone();
        self.content = draft.content.clone();
        self.image = draft.image.clone();
        self.is_active = draft.is_active;
        self.touch();
    }

    /// Refresh the record's update timestamp
    pub fn touch(&mut self) {
        self.updated_at = chrono::Utc::now().timestamp();
    }
}
