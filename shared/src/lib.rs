use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// How a timetable entry repeats on the calendar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recurrence {
    /// Single session, no repeats
    #[default]
    None,
    /// Same weekday and time every week
    Weekly,
    /// Same weekday and time every other week
    Biweekly,
}

/// A stored timetable entry as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimetableEntry {
    pub id: u64,
    pub course: String,
    pub lecturer: String,
    pub room: String,
    /// Date of the first session ("DD/MM/YYYY")
    pub date: String,
    /// Wall-clock start time ("HH:MM AM/PM")
    pub time: String,
    pub recurrence: Recurrence,
    /// True for any repeating entry; kept for clients that only know the boolean flag
    pub recurring: bool,
    /// Maximum number of calendar occurrences, including the first session
    pub horizon: u32,
    /// Insertion timestamp (RFC 3339)
    pub created_at: String,
}

/// Body of `POST /api/timetable`.
///
/// Every field is optional on the wire so that a missing field is reported as
/// a validation failure rather than a malformed payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateTimetableEntryRequest {
    #[serde(default)]
    pub course: Option<String>,
    #[serde(default)]
    pub lecturer: Option<String>,
    #[serde(default)]
    pub room: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub recurrence: Option<Recurrence>,
    /// Legacy flag: `true` means a short weekly run when `recurrence` is absent
    #[serde(default)]
    pub recurring: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimetableListResponse {
    pub data: Vec<TimetableEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTimetableEntryResponse {
    pub message: String,
    pub data: TimetableEntry,
}

/// One concrete calendar session derived from an entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Occurrence {
    /// "<entry id>" for the first session, "<entry id>-<k>" for repeats
    pub id: String,
    pub source_entry_id: u64,
    /// "<course> (<lecturer>)"
    pub title: String,
    pub start: NaiveDateTime,
    pub room: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OccurrenceListResponse {
    pub data: Vec<Occurrence>,
}

/// Error body shared by every failing endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recurrence_wire_names() {
        assert_eq!(serde_json::to_string(&Recurrence::Biweekly).unwrap(), "\"biweekly\"");
        let parsed: Recurrence = serde_json::from_str("\"weekly\"").unwrap();
        assert_eq!(parsed, Recurrence::Weekly);
        assert!(serde_json::from_str::<Recurrence>("\"monthly\"").is_err());
    }

    #[test]
    fn test_create_request_tolerates_missing_fields() {
        let request: CreateTimetableEntryRequest =
            serde_json::from_str(r#"{"course":"CS101","recurring":true}"#).unwrap();
        assert_eq!(request.course.as_deref(), Some("CS101"));
        assert_eq!(request.room, None);
        assert_eq!(request.recurrence, None);
        assert_eq!(request.recurring, Some(true));
    }

    #[test]
    fn test_error_response_omits_empty_details() {
        let body = ErrorResponse {
            error: "All fields are required!".to_string(),
            details: None,
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"error":"All fields are required!"}"#
        );
    }
}
