use std::fmt;

/// Error type for record store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Insert collision: the id is already present. Points at an
    /// id-generation bug upstream; fatal to the operation, not the process.
    DuplicateId { collection: String, id: String },
    /// Replace against an id the store does not hold.
    NotFound { collection: String, id: String },
    /// A store lock was poisoned by a panicking writer.
    LockPoisoned(&'static str),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::DuplicateId { collection, id } => {
                write!(f, "duplicate id in {}: {}", collection, id)
            }
            StoreError::NotFound { collection, id } => {
                write!(f, "record not found in {}: {}", collection, id)
            }
            StoreError::LockPoisoned(operation) => {
                write!(f, "store lock poisoned during {}", operation)
            }
        }
    }
}

impl std::error::Error for StoreError {}
