//! Collection stats - aggregates derived from the full record sequence.
//!
//! Stats are a pure function of the records and are recomputed after
//! every mutation rather than stored, so they cannot drift from the
//! store's contents.

use std::collections::BTreeMap;

use crate::record::Record;

/// Counts over one collection: total plus a count per distinct value of
/// the aggregated field (usually "status").
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionStats {
    total: usize,
    by_status: BTreeMap<String, usize>,
}

impl CollectionStats {
    /// Compute stats over `records`, grouping by `status_field`. Records
    /// that do not expose the field are counted in the total only.
    pub fn compute<R: Record>(records: &[R], status_field: &str) -> Self {
        let mut by_status = BTreeMap::new();
        for record in records {
            if let Some(status) = record.field(status_field) {
                *by_status.entry(status.to_string()).or_insert(0) += 1;
            }
        }
        CollectionStats {
            total: records.len(),
            by_status,
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Count of records holding `status`. Unseen values count 0.
    pub fn count(&self, status: &str) -> usize {
        self.by_status.get(status).copied().unwrap_or(0)
    }

    /// All seen status values with their counts, in value order.
    pub fn by_status(&self) -> &BTreeMap<String, usize> {
        &self.by_status
    }

    /// Percentage of records holding `status`, 0.0 for an empty
    /// collection.
    pub fn rate(&self, status: &str) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(status) as f64 * 100.0 / self.total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RecordMeta;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, Serialize, Deserialize)]
    struct Row {
        #[serde(flatten)]
        meta: RecordMeta,
        status: String,
    }

    impl Row {
        fn new(id: &str, status: &str) -> Self {
            Row {
                meta: RecordMeta::new(id, "2026-01-01 00:00"),
                status: status.to_string(),
            }
        }
    }

    impl Record for Row {
        const COLLECTION: &'static str = "rows";

        fn meta(&self) -> &RecordMeta {
            &self.meta
        }

        fn meta_mut(&mut self) -> &mut RecordMeta {
            &mut self.meta
        }

        fn search_fields(&self) -> Vec<&str> {
            Vec::new()
        }

        fn field(&self, name: &str) -> Option<&str> {
            match name {
                "status" => Some(&self.status),
                _ => None,
            }
        }
    }

    #[test]
    fn counts_by_status() {
        let rows = vec![
            Row::new("1", "active"),
            Row::new("2", "inactive"),
            Row::new("3", "draft"),
            Row::new("4", "archived"),
        ];

        let stats = CollectionStats::compute(&rows, "status");
        assert_eq!(stats.total(), 4);
        assert_eq!(stats.count("active"), 1);
        assert_eq!(stats.count("draft"), 1);
        assert_eq!(stats.count("archived"), 1);
        assert_eq!(stats.count("pending"), 0);
    }

    #[test]
    fn rate_is_a_percentage_of_total() {
        let rows = vec![
            Row::new("1", "active"),
            Row::new("2", "active"),
            Row::new("3", "inactive"),
            Row::new("4", "draft"),
        ];

        let stats = CollectionStats::compute(&rows, "status");
        assert_eq!(stats.rate("active"), 50.0);
    }

    #[test]
    fn empty_collection_rates_zero() {
        let stats = CollectionStats::compute::<Row>(&[], "status");
        assert_eq!(stats.total(), 0);
        assert_eq!(stats.rate("active"), 0.0);
    }

    #[test]
    fn unknown_field_counts_total_only() {
        let rows = vec![Row::new("1", "active")];
        let stats = CollectionStats::compute(&rows, "category");
        assert_eq!(stats.total(), 1);
        assert!(stats.by_status().is_empty());
    }
}
