//! Filter evaluation - the visible subset of a collection.
//!
//! A `FilterState` is a free-text search query plus zero or more
//! exact-match field filters. Evaluation is a pure function of
//! (records, filter state): stable, order-preserving, recomputed fresh on
//! every call. An empty filter state is the identity.

use crate::record::Record;

/// An exact-match constraint on one record field. An empty value means
/// "no constraint" and the filter is skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFilter {
    pub field: String,
    pub value: String,
}

/// Current filter state for a collection view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    search_query: String,
    field_filters: Vec<FieldFilter>,
}

impl FilterState {
    /// An empty filter state: everything is visible.
    pub fn new() -> Self {
        FilterState::default()
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn field_filters(&self) -> &[FieldFilter] {
        &self.field_filters
    }

    /// Set the free-text search query. Matching is case-insensitive
    /// substring containment over the record's searchable fields.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Set the filter for one field, replacing any previous filter on the
    /// same field. An empty value clears the constraint.
    pub fn set_field_filter(&mut self, field: impl Into<String>, value: impl Into<String>) {
        let field = field.into();
        let value = value.into();
        self.field_filters.retain(|f| f.field != field);
        if !value.is_empty() {
            self.field_filters.push(FieldFilter { field, value });
        }
    }

    /// Reset search and all field filters.
    pub fn clear(&mut self) {
        self.search_query.clear();
        self.field_filters.clear();
    }

    /// True when no constraint is active.
    pub fn is_empty(&self) -> bool {
        self.search_query.is_empty() && self.field_filters.is_empty()
    }

    /// Whether a record passes every active constraint.
    pub fn matches<R: Record>(&self, record: &R) -> bool {
        let matches_search = self.search_query.is_empty() || {
            let query = self.search_query.to_lowercase();
            record
                .search_fields()
                .iter()
                .any(|value| value.to_lowercase().contains(&query))
        };

        matches_search
            && self
                .field_filters
                .iter()
                .all(|f| record.field(&f.field) == Some(f.value.as_str()))
    }
}

/// Compute the visible subset of `records`, preserving order.
pub fn filter_records<R: Record>(records: &[R], filter: &FilterState) -> Vec<R> {
    records
        .iter()
        .filter(|record| filter.matches(*record))
        .cloned()
        .collect()
}
