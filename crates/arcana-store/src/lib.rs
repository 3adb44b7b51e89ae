//! Append-only reading record store.
//!
//! Owns the durable shape of a completed reading ([`record::ReadingRecord`])
//! and a file-backed log with retrieval, filtering, and aggregate
//! statistics. The whole log is rewritten atomically on every append, with
//! writes serialized behind a mutex.

pub mod error;
pub mod record;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use record::{CombinedInterpretation, IndividualInterpretation, RECORD_VERSION, ReadingRecord};
pub use store::{RecordStore, StoreStatistics};
