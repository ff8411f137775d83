pub mod entry_mapper;
pub mod occurrence_mapper;
