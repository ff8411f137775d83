//! Domain-level command types.
//!
//! These are used by services inside the domain layer and are not exposed
//! over the API. The REST layer maps the `shared` DTOs onto them.

pub mod timetable {
    /// Recurrence as named by the client, before a horizon is attached
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum RecurrenceKind {
        None,
        Weekly,
        Biweekly,
    }

    /// Input for creating a timetable entry. Fields are raw client input.
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct CreateEntryCommand {
        pub course: Option<String>,
        pub lecturer: Option<String>,
        pub room: Option<String>,
        pub date: Option<String>,
        pub time: Option<String>,
        pub recurrence: Option<RecurrenceKind>,
        pub recurring: Option<bool>,
    }

    /// Optional calendar month used to narrow an occurrence listing
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct MonthQuery {
        pub month: u32,
        pub year: i32,
    }
}
