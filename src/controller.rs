//! CollectionController - create/edit/delete orchestration for one
//! collection.
//!
//! The controller owns the store, the validation schema, the filter state
//! and the edit session, and keeps the derived views (filtered list,
//! aggregate stats) consistent by recomputing them from the full record
//! sequence on demand. Every operation runs to completion synchronously;
//! there is no background work that could let a stale view race a
//! mutation.
//!
//! ## Example
//!
//! ```ignore
//! use collected_rust::{CollectionController, DraftSchema, InMemoryRecordStore};
//!
//! let store = InMemoryRecordStore::new();
//! let schema = DraftSchema::new()
//!     .required("name")
//!     .required("owner")
//!     .one_of("status", ["active", "inactive", "draft", "archived"]);
//!
//! let mut controller = CollectionController::new(store, schema);
//! controller.begin_create(RecordDraft::default());
//! controller.update_draft(|d| d.name = "Quota config".to_string());
//! let created = controller.submit()?;
//! ```

use std::fmt;

use crate::clock::Clock;
use crate::error::StoreError;
use crate::filter::{filter_records, FilterState};
use crate::ident::IdGenerator;
use crate::record::{Draft, Record, RecordMeta};
use crate::session::EditSession;
use crate::stats::CollectionStats;
use crate::store::RecordStore;
use crate::validate::{DraftSchema, ValidationError};

/// Error type for draft submission.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitError {
    /// The draft failed validation; the session keeps the draft and the
    /// errors so the interface can mark the offending fields.
    Invalid(Vec<ValidationError>),
    /// The store refused the mutation.
    Store(StoreError),
    /// Submit was called with no draft under edit.
    NotEditing,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Invalid(errors) => {
                let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
                write!(f, "draft is invalid: {}", fields.join(", "))
            }
            SubmitError::Store(err) => write!(f, "store rejected submit: {}", err),
            SubmitError::NotEditing => write!(f, "no draft under edit"),
        }
    }
}

impl std::error::Error for SubmitError {}

impl From<StoreError> for SubmitError {
    fn from(err: StoreError) -> Self {
        SubmitError::Store(err)
    }
}

/// Orchestrates one collection: CRUD against the store, gated by the
/// draft schema, with filter and session state for the interface.
pub struct CollectionController<D: Draft, S: RecordStore<D::Output>> {
    store: S,
    schema: DraftSchema,
    filter: FilterState,
    session: EditSession<D>,
    status_field: String,
    ids: Box<dyn IdGenerator>,
    clock: Box<dyn Clock>,
}

impl<D: Draft, S: RecordStore<D::Output>> CollectionController<D, S> {
    /// Create a controller over `store`, validating drafts against
    /// `schema`. Ids default to random UUIDs (feature `uuid-ids`) or a
    /// collection-prefixed counter, timestamps to the local system clock.
    pub fn new(store: S, schema: DraftSchema) -> Self {
        #[cfg(feature = "uuid-ids")]
        let ids: Box<dyn IdGenerator> = Box::new(crate::ident::UuidIds);
        #[cfg(not(feature = "uuid-ids"))]
        let ids: Box<dyn IdGenerator> = Box::new(crate::ident::SequentialIds::new(
            <D::Output as Record>::COLLECTION,
        ));

        CollectionController {
            store,
            schema,
            filter: FilterState::new(),
            session: EditSession::Idle,
            status_field: "status".to_string(),
            ids,
            clock: Box::new(crate::clock::SystemClock),
        }
    }

    /// Replace the id generator. Returns `self` for chaining.
    pub fn with_ids(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    /// Replace the clock. Returns `self` for chaining.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Change the field stats aggregate by (default "status").
    pub fn with_status_field(mut self, field: impl Into<String>) -> Self {
        self.status_field = field.into();
        self
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    // ---- derived views ----

    /// All records in stored order.
    pub fn records(&self) -> Result<Vec<D::Output>, StoreError> {
        self.store.get_all()
    }

    /// The records passing the current filter state, in stored order.
    pub fn visible(&self) -> Result<Vec<D::Output>, StoreError> {
        let records = self.store.get_all()?;
        Ok(filter_records(&records, &self.filter))
    }

    /// Aggregate counts over the full sequence, recomputed on every call.
    pub fn stats(&self) -> Result<CollectionStats, StoreError> {
        let records = self.store.get_all()?;
        Ok(CollectionStats::compute(&records, &self.status_field))
    }

    // ---- filter state ----

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.filter.set_search_query(query);
    }

    pub fn set_field_filter(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.filter.set_field_filter(field, value);
    }

    pub fn clear_filters(&mut self) {
        self.filter.clear();
    }

    // ---- edit session ----

    pub fn session(&self) -> &EditSession<D> {
        &self.session
    }

    /// Start a create session from a blank draft.
    pub fn begin_create(&mut self, draft: D) {
        self.session = EditSession::Editing {
            draft,
            target_id: None,
            errors: Vec::new(),
        };
    }

    fn not_found(id: &str) -> StoreError {
        StoreError::NotFound {
            collection: <D::Output as Record>::COLLECTION.to_string(),
            id: id.to_string(),
        }
    }

    /// Start an update session pre-seeded from the stored record.
    pub fn begin_edit(&mut self, id: &str) -> Result<(), StoreError> {
        let record = self.store.get(id)?.ok_or_else(|| Self::not_found(id))?;

        self.session = EditSession::Editing {
            draft: D::seed(&record),
            target_id: Some(id.to_string()),
            errors: Vec::new(),
        };
        Ok(())
    }

    /// Mutate the draft under edit. Ignored outside an edit session.
    pub fn update_draft(&mut self, f: impl FnOnce(&mut D)) {
        if let EditSession::Editing { draft, .. } = &mut self.session {
            f(draft);
        }
    }

    /// Drop whatever the session holds and return to idle.
    pub fn cancel(&mut self) {
        self.session = EditSession::Idle;
    }

    /// Validate and commit the draft under edit.
    ///
    /// On validation failure the session stays in `Editing` with the
    /// errors attached and the store is untouched. On success the record
    /// is inserted (create mode: fresh id, `created_at == updated_at`) or
    /// replaced (update mode: id and `created_at` preserved, `updated_at`
    /// refreshed) and the session returns to idle.
    pub fn submit(&mut self) -> Result<D::Output, SubmitError> {
        let session = std::mem::replace(&mut self.session, EditSession::Idle);
        let (draft, target_id) = match session {
            EditSession::Editing {
                draft, target_id, ..
            } => (draft, target_id),
            other => {
                self.session = other;
                return Err(SubmitError::NotEditing);
            }
        };

        let errors = self.schema.validate(&draft);
        if !errors.is_empty() {
            let reported = errors.clone();
            self.session = EditSession::Editing {
                draft,
                target_id,
                errors,
            };
            return Err(SubmitError::Invalid(reported));
        }

        let result = match target_id.as_deref() {
            None => {
                let meta = RecordMeta::new(self.ids.next_id(), self.clock.now());
                let record = draft.build(meta);
                self.store.insert(record.clone()).map(|_| record)
            }
            Some(id) => self.update_existing(id, &draft),
        };

        match result {
            Ok(record) => Ok(record),
            Err(err) => {
                // Keep the draft so a store refusal loses nothing.
                self.session = EditSession::Editing {
                    draft,
                    target_id,
                    errors: Vec::new(),
                };
                Err(SubmitError::Store(err))
            }
        }
    }

    fn update_existing(&self, id: &str, draft: &D) -> Result<D::Output, StoreError> {
        let mut record = self.store.get(id)?.ok_or_else(|| Self::not_found(id))?;

        draft.apply(&mut record);
        record.meta_mut().touch(self.clock.now());
        self.store.replace(id, record.clone())?;
        Ok(record)
    }

    // ---- delete ----

    /// Arm a delete for confirmation. Only honored from idle; returns
    /// whether the session is now confirming.
    pub fn request_delete(&mut self, id: impl Into<String>) -> bool {
        if self.session.is_idle() {
            self.session = EditSession::ConfirmingDelete {
                target_id: id.into(),
            };
            true
        } else {
            false
        }
    }

    /// Carry out the armed delete. Removing an id the store no longer
    /// holds is a no-op; returns whether a record was removed. Outside a
    /// confirming session this does nothing.
    pub fn confirm_delete(&mut self) -> Result<bool, StoreError> {
        let session = std::mem::replace(&mut self.session, EditSession::Idle);
        match session {
            EditSession::ConfirmingDelete { target_id } => self.store.remove(&target_id),
            other => {
                self.session = other;
                Ok(false)
            }
        }
    }
}
