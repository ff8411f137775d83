use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::debug;

use super::MemoryStore;
use crate::domain::models::entry::{NewEntry, TimetableEntry};
use crate::storage::traits::EntryStorage;

/// In-memory repository for timetable entries
#[derive(Debug, Clone)]
pub struct EntryRepository {
    store: Arc<MemoryStore>,
}

impl EntryRepository {
    pub(crate) fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl EntryStorage for EntryRepository {
    async fn append(&self, entry: NewEntry) -> Result<TimetableEntry> {
        let mut entries = self
            .store
            .entries
            .write()
            .map_err(|_| anyhow!("Timetable store lock poisoned"))?;

        // Allocated under the write lock so id order always matches insertion order
        let id = self.store.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        let stored = TimetableEntry::from_new(id, entry, Utc::now().to_rfc3339());
        entries.insert(id, stored.clone());

        debug!("Stored timetable entry {} ({} total)", id, entries.len());
        Ok(stored)
    }

    async fn list_all(&self) -> Result<Vec<TimetableEntry>> {
        let entries = self
            .store
            .entries
            .read()
            .map_err(|_| anyhow!("Timetable store lock poisoned"))?;
        Ok(entries.values().cloned().collect())
    }

    async fn count(&self) -> Result<usize> {
        let entries = self
            .store
            .entries
            .read()
            .map_err(|_| anyhow!("Timetable store lock poisoned"))?;
        Ok(entries.len())
    }
}
