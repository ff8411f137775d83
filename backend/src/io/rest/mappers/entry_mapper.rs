use shared::{CreateTimetableEntryRequest, Recurrence, TimetableEntry};

use crate::domain::commands::timetable::{CreateEntryCommand, RecurrenceKind};
use crate::domain::models::entry::{RecurrencePolicy, TimetableEntry as DomainEntry};

pub struct EntryMapper;

impl EntryMapper {
    /// Convert shared Recurrence to the domain's RecurrenceKind
    pub fn recurrence_to_domain(dto: Recurrence) -> RecurrenceKind {
        match dto {
            Recurrence::None => RecurrenceKind::None,
            Recurrence::Weekly => RecurrenceKind::Weekly,
            Recurrence::Biweekly => RecurrenceKind::Biweekly,
        }
    }

    /// Convert a domain RecurrencePolicy to the shared Recurrence name
    pub fn recurrence_to_dto(policy: RecurrencePolicy) -> Recurrence {
        match policy {
            RecurrencePolicy::None => Recurrence::None,
            RecurrencePolicy::Weekly { .. } => Recurrence::Weekly,
            RecurrencePolicy::Biweekly { .. } => Recurrence::Biweekly,
        }
    }

    pub fn to_command(request: CreateTimetableEntryRequest) -> CreateEntryCommand {
        CreateEntryCommand {
            course: request.course,
            lecturer: request.lecturer,
            room: request.room,
            date: request.date,
            time: request.time,
            recurrence: request.recurrence.map(Self::recurrence_to_domain),
            recurring: request.recurring,
        }
    }

    pub fn to_dto(domain: DomainEntry) -> TimetableEntry {
        let recurrence = Self::recurrence_to_dto(domain.recurrence);
        TimetableEntry {
            id: domain.id,
            course: domain.course,
            lecturer: domain.lecturer,
            room: domain.room,
            date: domain.date,
            time: domain.time,
            recurrence,
            recurring: recurrence != Recurrence::None,
            horizon: domain.recurrence.horizon(),
            created_at: domain.created_at,
        }
    }

    pub fn to_dto_list(domain_entries: Vec<DomainEntry>) -> Vec<TimetableEntry> {
        domain_entries.into_iter().map(Self::to_dto).collect()
    }
}
