use serde::{Deserialize, Serialize};

/// Upper bound for any configured horizon
pub const MAX_HORIZON: u32 = 52;

/// Repetition rule attached to an entry, with its occurrence cap already resolved.
///
/// `horizon` counts every occurrence including the first session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecurrencePolicy {
    None,
    Weekly { horizon: u32 },
    Biweekly { horizon: u32 },
}

impl RecurrencePolicy {
    pub fn weekly(horizon: u32) -> Self {
        Self::Weekly { horizon: clamp_horizon(horizon) }
    }

    pub fn biweekly(horizon: u32) -> Self {
        Self::Biweekly { horizon: clamp_horizon(horizon) }
    }

    /// Days between consecutive occurrences, `None` for single sessions
    pub fn step_days(&self) -> Option<u64> {
        match self {
            Self::None => None,
            Self::Weekly { .. } => Some(7),
            Self::Biweekly { .. } => Some(14),
        }
    }

    pub fn horizon(&self) -> u32 {
        match self {
            Self::None => 1,
            Self::Weekly { horizon } | Self::Biweekly { horizon } => clamp_horizon(*horizon),
        }
    }
}

fn clamp_horizon(horizon: u32) -> u32 {
    horizon.clamp(1, MAX_HORIZON)
}

/// A validated entry waiting for the store to assign its id
#[derive(Debug, Clone, PartialEq)]
pub struct NewEntry {
    pub course: String,
    pub lecturer: String,
    pub room: String,
    pub date: String,
    pub time: String,
    pub recurrence: RecurrencePolicy,
}

/// A stored timetable entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimetableEntry {
    pub id: u64,
    pub course: String,
    pub lecturer: String,
    pub room: String,
    /// `DD/MM/YYYY`, canonical unless strict format validation was disabled
    pub date: String,
    /// `HH:MM AM/PM`, canonical unless strict format validation was disabled
    pub time: String,
    pub recurrence: RecurrencePolicy,
    pub created_at: String,
}

impl TimetableEntry {
    pub fn from_new(id: u64, entry: NewEntry, created_at: String) -> Self {
        Self {
            id,
            course: entry.course,
            lecturer: entry.lecturer,
            room: entry.room,
            date: entry.date,
            time: entry.time,
            recurrence: entry.recurrence,
            created_at,
        }
    }

    /// Calendar title shown for every occurrence of this entry
    pub fn title(&self) -> String {
        format!("{} ({})", self.course, self.lecturer)
    }
}
