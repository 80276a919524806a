//! Seed import - initial record sequences from JSON.
//!
//! Admin pages start from a hard-coded record list. The JSON shape is a
//! flat array of records with camelCase envelope keys (`id`, `createdAt`,
//! `updatedAt`), the same shape the original pages embed.

use std::fmt;

use crate::record::Record;

/// Error type for seed import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedError {
    /// The JSON did not parse into the record type.
    Parse(String),
    /// The seed sequence repeats an id.
    DuplicateId { collection: String, id: String },
}

impl fmt::Display for SeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedError::Parse(msg) => write!(f, "seed parse error: {}", msg),
            SeedError::DuplicateId { collection, id } => {
                write!(f, "duplicate seed id in {}: {}", collection, id)
            }
        }
    }
}

impl std::error::Error for SeedError {}

/// Parse a JSON array into records, verifying id uniqueness.
pub fn records_from_json<R: Record>(json: &str) -> Result<Vec<R>, SeedError> {
    let records: Vec<R> =
        serde_json::from_str(json).map_err(|e| SeedError::Parse(e.to_string()))?;

    for (i, record) in records.iter().enumerate() {
        if records[..i].iter().any(|r| r.id() == record.id()) {
            return Err(SeedError::DuplicateId {
                collection: R::COLLECTION.to_string(),
                id: record.id().to_string(),
            });
        }
    }

    Ok(records)
}
