//! Usage domain module.
//!
//! Append-only log of poem generation requests, persisted to SQLite.

mod error;
mod recorder;

pub use error::StorageError;
pub use recorder::{UsageRecord, UsageRecorder};
