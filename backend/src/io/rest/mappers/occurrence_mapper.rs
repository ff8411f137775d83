use shared::Occurrence;

use crate::domain::models::occurrence::Occurrence as DomainOccurrence;

pub struct OccurrenceMapper;

impl OccurrenceMapper {
    pub fn to_dto(domain: DomainOccurrence) -> Occurrence {
        Occurrence {
            id: domain.id,
            source_entry_id: domain.source_entry_id,
            title: domain.title,
            start: domain.start,
            room: domain.room,
        }
    }

    pub fn to_dto_list(domain_occurrences: Vec<DomainOccurrence>) -> Vec<Occurrence> {
        domain_occurrences.into_iter().map(Self::to_dto).collect()
    }
}
