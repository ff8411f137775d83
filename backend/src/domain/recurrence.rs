//! Recurrence expansion: turns a stored entry into its calendar occurrences.
//!
//! Expansion is lazy and pure. Each call to [`expand`] starts over from the
//! entry's first session, and the number of occurrences is capped by the
//! entry's horizon so iteration always terminates.

use chrono::{Days, NaiveDateTime};
use tracing::{debug, warn};

use crate::domain::models::entry::TimetableEntry;
use crate::domain::models::occurrence::Occurrence;
use crate::domain::time_format;

/// Lazy iterator over the occurrences of one entry
#[derive(Debug, Clone)]
pub struct Expansion<'a> {
    entry: &'a TimetableEntry,
    title: String,
    base: Option<NaiveDateTime>,
    step_days: u64,
    horizon: u32,
    next_index: u32,
}

/// Expand a single entry.
///
/// An entry whose date or time cannot be parsed yields no occurrences.
pub fn expand(entry: &TimetableEntry) -> Expansion<'_> {
    let base = match time_format::combine(&entry.date, &entry.time) {
        Ok(start) => Some(start),
        Err(e) => {
            warn!(entry_id = entry.id, date = %entry.date, time = %entry.time, "Skipping entry: {}", e);
            None
        }
    };

    Expansion {
        entry,
        title: entry.title(),
        base,
        step_days: entry.recurrence.step_days().unwrap_or(0),
        horizon: entry.recurrence.horizon(),
        next_index: 0,
    }
}

impl Iterator for Expansion<'_> {
    type Item = Occurrence;

    fn next(&mut self) -> Option<Self::Item> {
        let base = self.base?;

        while self.next_index < self.horizon {
            let index = self.next_index;
            self.next_index += 1;

            let offset = Days::new(self.step_days * u64::from(index));
            let candidate = base
                .checked_add_days(offset)
                .filter(|start| time_format::is_representable(start.date()));
            match candidate {
                Some(start) => {
                    return Some(Occurrence {
                        id: Occurrence::occurrence_id(self.entry.id, index),
                        source_entry_id: self.entry.id,
                        title: self.title.clone(),
                        start,
                        room: self.entry.room.clone(),
                    });
                }
                None => {
                    warn!(entry_id = self.entry.id, index, "Occurrence falls outside DD/MM/YYYY range, skipping");
                }
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.base.is_none() {
            return (0, Some(0));
        }
        let remaining = self.horizon.saturating_sub(self.next_index) as usize;
        (0, Some(remaining))
    }
}

/// Expand every entry and order the result by start time.
///
/// Entries are independent: a malformed entry contributes nothing and the
/// rest expand normally. Ties on start time fall back to the entry id.
pub fn expand_all(entries: &[TimetableEntry]) -> Vec<Occurrence> {
    let mut occurrences: Vec<Occurrence> = entries.iter().flat_map(expand).collect();
    occurrences.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then_with(|| a.source_entry_id.cmp(&b.source_entry_id))
    });
    debug!("Expanded {} entries into {} occurrences", entries.len(), occurrences.len());
    occurrences
}
