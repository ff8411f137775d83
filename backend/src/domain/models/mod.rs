pub mod entry;
pub mod occurrence;
