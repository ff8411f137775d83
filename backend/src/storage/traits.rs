//! # Storage Traits
//!
//! Storage abstractions used by the domain layer, so the in-memory store can
//! be swapped for another backend without touching the services.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::entry::{NewEntry, TimetableEntry};

/// Interface for timetable entry storage.
///
/// The store is append-only: entries are never updated or deleted.
#[async_trait]
pub trait EntryStorage: Send + Sync {
    /// Store a new entry, assigning it a fresh id
    async fn append(&self, entry: NewEntry) -> Result<TimetableEntry>;

    /// All entries in insertion order
    async fn list_all(&self) -> Result<Vec<TimetableEntry>>;

    /// Number of stored entries
    async fn count(&self) -> Result<usize>;
}

/// Interface for storage connections.
///
/// Hides the concrete connection type and acts as a factory for repositories.
pub trait Connection: Send + Sync + Clone {
    /// The type of EntryStorage this connection creates
    type EntryRepository: EntryStorage + Clone;

    /// Create a new entry repository for this connection
    fn create_entry_repository(&self) -> Self::EntryRepository;
}
