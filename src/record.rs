//! Record and Draft traits - the shapes managed by a collection.
//!
//! A collection manages one record type. The store owns the meta envelope
//! (id + timestamps); everything else is domain data defined by the caller.
//! The usual layout embeds a `RecordMeta` in the record struct and
//! delegates, with a companion draft struct carrying just the editable
//! fields.
//!
//! ## Example
//!
//! ```ignore
//! use collected_rust::{Draft, Record, RecordMeta};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Clone, Debug, Serialize, Deserialize)]
//! struct Article {
//!     #[serde(flatten)]
//!     meta: RecordMeta,
//!     title: String,
//!     status: String,
//! }
//!
//! impl Record for Article {
//!     const COLLECTION: &'static str = "articles";
//!     fn meta(&self) -> &RecordMeta { &self.meta }
//!     fn meta_mut(&mut self) -> &mut RecordMeta { &mut self.meta }
//!     fn search_fields(&self) -> Vec<&str> { vec![&self.title] }
//!     fn field(&self, name: &str) -> Option<&str> {
//!         match name {
//!             "status" => Some(&self.status),
//!             _ => None,
//!         }
//!     }
//! }
//! ```

use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Store-owned envelope carried by every record: the unique id and the
/// creation/update timestamps.
///
/// Timestamps are opaque display strings. The controller fills them in
/// from its [`Clock`](crate::Clock), so their format is whatever the
/// clock produces; the store and filters never interpret them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordMeta {
    id: String,
    created_at: String,
    updated_at: String,
}

impl RecordMeta {
    /// Create a fresh envelope: `created_at` and `updated_at` start equal.
    pub fn new(id: impl Into<String>, timestamp: impl Into<String>) -> Self {
        let timestamp = timestamp.into();
        RecordMeta {
            id: id.into(),
            created_at: timestamp.clone(),
            updated_at: timestamp,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Set once at creation, never mutated afterwards.
    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    /// Refreshed on every successful update via [`touch`](Self::touch).
    pub fn updated_at(&self) -> &str {
        &self.updated_at
    }

    /// Refresh the update timestamp. `id` and `created_at` are untouched.
    pub fn touch(&mut self, timestamp: impl Into<String>) {
        self.updated_at = timestamp.into();
    }
}

/// Trait for types managed by a record store.
pub trait Record: Clone + Send + Sync + Serialize + DeserializeOwned {
    /// The collection name for this record type (e.g. "users",
    /// "data_records"). Used in error reporting and seed import.
    const COLLECTION: &'static str;

    /// The store-owned envelope.
    fn meta(&self) -> &RecordMeta;

    /// Mutable access to the envelope. Only the controller should touch it.
    fn meta_mut(&mut self) -> &mut RecordMeta;

    /// Values matched (case-insensitively) against the search query.
    /// The set of searchable fields is fixed per record type.
    fn search_fields(&self) -> Vec<&str>;

    /// Exact-match lookup of a filterable field by name. Returns None for
    /// names this record type does not expose.
    fn field(&self, name: &str) -> Option<&str>;

    /// The record's unique identifier.
    fn id(&self) -> &str {
        self.meta().id()
    }
}

/// Trait for the in-progress, unsaved copy of a record's editable fields.
///
/// A draft has no id and no timestamps; the controller supplies the
/// envelope when the draft is submitted.
pub trait Draft: Clone + Send + Sync {
    /// The record type this draft edits.
    type Output: Record;

    /// Pre-seed a draft from an existing record (update mode).
    fn seed(record: &Self::Output) -> Self;

    /// Lookup of a draft field by name, for validation.
    fn field(&self, name: &str) -> Option<&str>;

    /// Build a new record from this draft and a fresh envelope.
    fn build(&self, meta: RecordMeta) -> Self::Output;

    /// Copy this draft's fields onto an existing record, leaving the
    /// envelope alone.
    fn apply(&self, record: &mut Self::Output);
}
