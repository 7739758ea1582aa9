//! Durable per-user storage for course progress.
//!
//! The session persists exactly two small values (the completed-lesson set
//! and the trainer-mode flag), each under its own key. This crate provides
//! the storage capability behind that: a `ProgressStore` trait with a
//! file-backed implementation for real runs and an in-memory one for tests
//! and ephemeral sessions.
//!
//! Reads of a missing entry are `Ok(None)`, never an error; writes are
//! atomic (temp file + rename) so a crash mid-save leaves the previous
//! value intact.

mod error;
mod file;
mod memory;

pub use error::{Result, StoreError};
pub use file::FileStore;
pub use memory::MemoryStore;

/// Key-value storage capability for session state.
///
/// Values are already-serialized strings; the session owns the format.
pub trait ProgressStore {
    /// Read the value stored under `key`, or `None` if absent.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    fn save(&mut self, key: &str, value: &str) -> Result<()>;
}
