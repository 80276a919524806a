//! EditSession - the per-record edit/delete state machine.

use crate::record::Draft;
use crate::validate::ValidationError;

/// State of one record-edit session.
///
/// `Idle` -> `Editing` via begin_create/begin_edit, back to `Idle` on a
/// successful submit or cancel; a rejected submit stays in `Editing` with
/// the validation errors attached. `Idle` -> `ConfirmingDelete` via
/// request_delete, back to `Idle` on confirm or cancel.
#[derive(Debug, Clone, PartialEq)]
pub enum EditSession<D: Draft> {
    /// No edit in progress.
    Idle,
    /// A draft is being edited. `target_id` is None in create mode and
    /// holds the existing record's id in update mode.
    Editing {
        draft: D,
        target_id: Option<String>,
        errors: Vec<ValidationError>,
    },
    /// A delete is awaiting confirmation.
    ConfirmingDelete { target_id: String },
}

impl<D: Draft> EditSession<D> {
    pub fn is_idle(&self) -> bool {
        matches!(self, EditSession::Idle)
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EditSession::Editing { .. })
    }

    /// The draft under edit, if any.
    pub fn draft(&self) -> Option<&D> {
        match self {
            EditSession::Editing { draft, .. } => Some(draft),
            _ => None,
        }
    }

    /// Validation errors from the last rejected submit. Empty while the
    /// draft has not been submitted or after it passed.
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            EditSession::Editing { errors, .. } => errors,
            _ => &[],
        }
    }

    /// The id a pending edit or delete targets, if any.
    pub fn target_id(&self) -> Option<&str> {
        match self {
            EditSession::Editing { target_id, .. } => target_id.as_deref(),
            EditSession::ConfirmingDelete { target_id } => Some(target_id),
            EditSession::Idle => None,
        }
    }
}
