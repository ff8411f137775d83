//! In-process storage backend.
//!
//! Entries live for the lifetime of the process and are lost on restart.

pub mod entry_repository;

pub use entry_repository::EntryRepository;

use std::collections::BTreeMap;
use std::sync::atomic::AtomicU64;
use std::sync::{Arc, RwLock};

use crate::domain::models::entry::TimetableEntry;
use crate::storage::traits::Connection;

/// Shared state behind every repository created from one connection
#[derive(Debug, Default)]
pub(crate) struct MemoryStore {
    /// Ids are handed out in increasing order, so key order is insertion order
    pub(crate) entries: RwLock<BTreeMap<u64, TimetableEntry>>,
    pub(crate) last_id: AtomicU64,
}

/// Connection to an in-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryConnection {
    store: Arc<MemoryStore>,
}

impl MemoryConnection {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Connection for MemoryConnection {
    type EntryRepository = EntryRepository;

    fn create_entry_repository(&self) -> Self::EntryRepository {
        EntryRepository::new(self.store.clone())
    }
}
