//! # Storage Layer
//!
//! The [`RecordStore`] trait abstracts how collections are persisted so the
//! command layer never touches the filesystem directly.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one JSON file per collection
//!   (`notes.json`, `tasks.json`, `contacts.json`, `finance.json`) inside
//!   the data directory. A missing file is an empty collection.
//! - [`memory::InMemoryStore`]: in-memory storage for tests, no persistence.
//!
//! ## Storage Format
//!
//! Each backing file holds a JSON array of field-keyed objects, preserving
//! field names and native types. `save` overwrites the whole file; after it
//! returns, the durable state equals the serialized form of the given slice.
//!
//! ## Identifier allocation
//!
//! [`RecordStore::next_id`] is recomputed from the currently persisted
//! records on every call, never cached, so allocation stays consistent even
//! if the backing file was edited externally between operations. It returns
//! `max(existing ids) + 1`, or `1` for an empty collection, and therefore
//! never produces zero.

use crate::error::Result;
use crate::model::Record;

pub mod fs;
pub mod memory;

/// Abstract interface for loading and saving whole collections.
pub trait RecordStore {
    /// Load every record of `R`'s collection. Missing backing store means
    /// an empty collection, never an error.
    fn load<R: Record>(&self) -> Result<Vec<R>>;

    /// Replace `R`'s collection with exactly the given records.
    fn save<R: Record>(&mut self, records: &[R]) -> Result<()>;

    /// Next free id for `R`'s collection, recomputed from current state.
    fn next_id<R: Record>(&self) -> Result<u32> {
        let records = self.load::<R>()?;
        Ok(records.iter().map(Record::id).max().map_or(1, |max| max + 1))
    }
}
