mod clock;
mod controller;
mod error;
mod filter;
mod ident;
mod record;
mod seed;
mod session;
mod stats;
mod store;
mod validate;

pub use clock::{Clock, ManualClock, SystemClock};
pub use controller::{CollectionController, SubmitError};
pub use error::StoreError;
pub use filter::{filter_records, FieldFilter, FilterState};
pub use ident::{IdGenerator, SequentialIds};
#[cfg(feature = "uuid-ids")]
pub use ident::UuidIds;
pub use record::{Draft, Record, RecordMeta};
pub use seed::{records_from_json, SeedError};
pub use session::EditSession;
pub use stats::CollectionStats;
pub use store::{InMemoryRecordStore, RecordStore};
pub use validate::{DraftSchema, ValidationError, ValidationReason};
