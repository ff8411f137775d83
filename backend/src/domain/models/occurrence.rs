use chrono::NaiveDateTime;

/// One calendar session derived from a stored entry. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    /// Lives in its own namespace: "<entry id>" or "<entry id>-<k>"
    pub id: String,
    pub source_entry_id: u64,
    pub title: String,
    pub start: NaiveDateTime,
    pub room: String,
}

impl Occurrence {
    pub fn occurrence_id(entry_id: u64, index: u32) -> String {
        if index == 0 {
            entry_id.to_string()
        } else {
            format!("{}-{}", entry_id, index)
        }
    }
}
