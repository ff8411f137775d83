//! Timetable entry creation and listing.
use anyhow::Result as AnyResult;
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::commands::timetable::{CreateEntryCommand, RecurrenceKind};
use crate::domain::models::entry::{NewEntry, RecurrencePolicy, TimetableEntry};
use crate::domain::time_format::{self, FormatError};
use crate::storage::{Connection, EntryStorage};

pub const MISSING_FIELDS_MESSAGE: &str = "All fields are required!";

#[derive(Debug, thiserror::Error)]
pub enum TimetableError {
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Rules applied when new entries are accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryPolicy {
    /// Occurrence cap for entries submitted as "weekly" or "biweekly"
    pub recurrence_horizon: u32,
    /// Occurrence cap for entries submitted with the boolean `recurring` flag
    pub legacy_weekly_horizon: u32,
    /// Reject (and canonicalize) dates and times that do not parse
    pub strict_formats: bool,
}

impl Default for EntryPolicy {
    fn default() -> Self {
        Self {
            recurrence_horizon: 12,
            legacy_weekly_horizon: 5,
            strict_formats: true,
        }
    }
}

impl EntryPolicy {
    /// Resolve the client's recurrence choice into a policy with a horizon.
    ///
    /// A named recurrence wins over the boolean flag.
    pub fn resolve_recurrence(&self, kind: Option<RecurrenceKind>, recurring: Option<bool>) -> RecurrencePolicy {
        match (kind, recurring) {
            (Some(RecurrenceKind::Weekly), _) => RecurrencePolicy::weekly(self.recurrence_horizon),
            (Some(RecurrenceKind::Biweekly), _) => RecurrencePolicy::biweekly(self.recurrence_horizon),
            (Some(RecurrenceKind::None), _) => RecurrencePolicy::None,
            (None, Some(true)) => RecurrencePolicy::weekly(self.legacy_weekly_horizon),
            (None, _) => RecurrencePolicy::None,
        }
    }
}

#[derive(Clone)]
pub struct TimetableService<C: Connection> {
    entry_repository: C::EntryRepository,
    policy: EntryPolicy,
}

impl<C: Connection> TimetableService<C> {
    pub fn new(connection: Arc<C>, policy: EntryPolicy) -> Self {
        Self {
            entry_repository: connection.create_entry_repository(),
            policy,
        }
    }

    /// Validate and store a new entry.
    ///
    /// The store is only touched once every check has passed.
    pub async fn create_entry(&self, command: CreateEntryCommand) -> Result<TimetableEntry, TimetableError> {
        let (course, lecturer, room, date, time) = match (
            required(&command.course),
            required(&command.lecturer),
            required(&command.room),
            required(&command.date),
            required(&command.time),
        ) {
            (Some(course), Some(lecturer), Some(room), Some(date), Some(time)) => (course, lecturer, room, date, time),
            _ => {
                warn!("Rejecting timetable entry with missing fields: {:?}", command);
                return Err(TimetableError::Validation(MISSING_FIELDS_MESSAGE.to_string()));
            }
        };

        let (date, time) = if self.policy.strict_formats {
            let parsed_date = time_format::parse_date(&date)?;
            let parsed_time = time_format::parse_time_12h(&time)?;
            (time_format::format_date(parsed_date), time_format::format_time_12h(parsed_time))
        } else {
            (date, time)
        };

        let recurrence = self.policy.resolve_recurrence(command.recurrence, command.recurring);
        let new_entry = NewEntry {
            course,
            lecturer,
            room,
            date,
            time,
            recurrence,
        };

        let entry = self.entry_repository.append(new_entry).await?;
        info!(
            "Created timetable entry {}: {} on {} at {} ({:?})",
            entry.id, entry.course, entry.date, entry.time, entry.recurrence
        );
        Ok(entry)
    }

    /// All stored entries in insertion order
    pub async fn list_entries(&self) -> AnyResult<Vec<TimetableEntry>> {
        let entries = self.entry_repository.list_all().await?;
        info!("Found {} timetable entries", entries.len());
        Ok(entries)
    }

    pub async fn entry_count(&self) -> AnyResult<usize> {
        self.entry_repository.count().await
    }
}

/// Trimmed value of a required text field, `None` when absent or blank
fn required(field: &Option<String>) -> Option<String> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryConnection;

    fn service_with(policy: EntryPolicy) -> TimetableService<MemoryConnection> {
        TimetableService::new(Arc::new(MemoryConnection::new()), policy)
    }

    fn valid_command() -> CreateEntryCommand {
        CreateEntryCommand {
            course: Some("CS101".to_string()),
            lecturer: Some("Dr. A".to_string()),
            room: Some("B12".to_string()),
            date: Some("01/03/2024".to_string()),
            time: Some("02:30 PM".to_string()),
            recurrence: None,
            recurring: None,
        }
    }

    #[tokio::test]
    async fn test_create_entry_success() {
        let service = service_with(EntryPolicy::default());

        let entry = service.create_entry(valid_command()).await.unwrap();

        assert_eq!(entry.id, 1);
        assert_eq!(entry.course, "CS101");
        assert_eq!(entry.recurrence, RecurrencePolicy::None);
        assert_eq!(service.entry_count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_missing_or_blank_field_leaves_store_untouched() {
        let service = service_with(EntryPolicy::default());
        service.create_entry(valid_command()).await.unwrap();

        let blank_room = CreateEntryCommand {
            room: Some("   ".to_string()),
            ..valid_command()
        };
        let missing_time = CreateEntryCommand {
            time: None,
            ..valid_command()
        };

        for command in [blank_room, missing_time] {
            let err = service.create_entry(command).await.unwrap_err();
            assert!(matches!(err, TimetableError::Validation(ref m) if m == MISSING_FIELDS_MESSAGE));
        }
        assert_eq!(service.entry_count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_strict_formats_reject_and_canonicalize() {
        let service = service_with(EntryPolicy::default());

        let impossible = CreateEntryCommand {
            date: Some("31/02/2024".to_string()),
            ..valid_command()
        };
        let err = service.create_entry(impossible).await.unwrap_err();
        assert!(matches!(err, TimetableError::Format(FormatError::ImpossibleDate { .. })));

        let loose = CreateEntryCommand {
            course: Some("  CS101 ".to_string()),
            date: Some("1/3/2024".to_string()),
            time: Some("2:30 pm".to_string()),
            ..valid_command()
        };
        let entry = service.create_entry(loose).await.unwrap();
        assert_eq!(entry.course, "CS101");
        assert_eq!(entry.date, "01/03/2024");
        assert_eq!(entry.time, "02:30 PM");
        assert_eq!(service.entry_count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_lenient_formats_store_raw_text() {
        let service = service_with(EntryPolicy {
            strict_formats: false,
            ..EntryPolicy::default()
        });

        let command = CreateEntryCommand {
            date: Some("31/02/2024".to_string()),
            ..valid_command()
        };
        let entry = service.create_entry(command).await.unwrap();
        assert_eq!(entry.date, "31/02/2024");
    }

    #[tokio::test]
    async fn test_recurrence_resolution() {
        let service = service_with(EntryPolicy::default());

        let weekly = CreateEntryCommand {
            recurrence: Some(RecurrenceKind::Weekly),
            recurring: Some(false),
            ..valid_command()
        };
        let legacy = CreateEntryCommand {
            recurring: Some(true),
            ..valid_command()
        };
        let biweekly = CreateEntryCommand {
            recurrence: Some(RecurrenceKind::Biweekly),
            ..valid_command()
        };
        let explicit_none = CreateEntryCommand {
            recurrence: Some(RecurrenceKind::None),
            recurring: Some(true),
            ..valid_command()
        };

        assert_eq!(
            service.create_entry(weekly).await.unwrap().recurrence,
            RecurrencePolicy::Weekly { horizon: 12 }
        );
        assert_eq!(
            service.create_entry(legacy).await.unwrap().recurrence,
            RecurrencePolicy::Weekly { horizon: 5 }
        );
        assert_eq!(
            service.create_entry(biweekly).await.unwrap().recurrence,
            RecurrencePolicy::Biweekly { horizon: 12 }
        );
        assert_eq!(
            service.create_entry(explicit_none).await.unwrap().recurrence,
            RecurrencePolicy::None
        );
    }

    #[tokio::test]
    async fn test_list_entries_in_insertion_order() {
        let service = service_with(EntryPolicy::default());
        for course in ["CS101", "MATH202"] {
            let command = CreateEntryCommand {
                course: Some(course.to_string()),
                ..valid_command()
            };
            service.create_entry(command).await.unwrap();
        }

        let entries = service.list_entries().await.unwrap();
        let ids: Vec<u64> = entries.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(entries[1].course, "MATH202");
    }
}
