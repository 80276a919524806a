//! Id generation - collision-resistant identifiers for new records.
//!
//! Timestamp-derived ids collide under rapid double-submit, so new ids
//! come from either a prefixed monotonic counter (`SequentialIds`) or
//! random UUIDs (`UuidIds`, behind the default `uuid-ids` feature).

use std::sync::atomic::{AtomicU64, Ordering};

/// Source of unique record ids.
pub trait IdGenerator: Send + Sync {
    /// A fresh id, unique for the lifetime of this generator.
    fn next_id(&self) -> String;
}

/// Monotonic counter ids with a collection prefix, e.g. `"rec-7"`.
pub struct SequentialIds {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIds {
    /// Start counting at 1 with the given prefix.
    pub fn new(prefix: impl Into<String>) -> Self {
        SequentialIds {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }

    /// Start counting above the seed data's highest numeric suffix so
    /// generated ids never collide with seeded ones.
    pub fn starting_at(prefix: impl Into<String>, first: u64) -> Self {
        SequentialIds {
            prefix: prefix.into(),
            next: AtomicU64::new(first),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        let id = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}", self.prefix, id)
    }
}

/// Random UUID v4 ids.
#[cfg(feature = "uuid-ids")]
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

#[cfg(feature = "uuid-ids")]
impl IdGenerator for UuidIds {
    fn next_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}
