//! Calendar view logic for the timetable.
//!
//! The calendar shows expanded occurrences rather than raw entries. This
//! service expands the stored entries, orders them by start time and, when a
//! month is requested, keeps only the sessions that fall inside that month.

use chrono::NaiveDate;
use tracing::info;

use crate::domain::models::entry::TimetableEntry;
use crate::domain::models::occurrence::Occurrence;
use crate::domain::recurrence;

/// Inclusive date range covering one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl MonthWindow {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Calendar service that turns stored entries into displayable occurrences
#[derive(Debug, Clone, Default)]
pub struct CalendarService;

impl CalendarService {
    pub fn new() -> Self {
        Self
    }

    /// Expanded, start-ordered occurrences, optionally limited to one month
    pub fn occurrences(&self, entries: &[TimetableEntry], window: Option<MonthWindow>) -> Vec<Occurrence> {
        let mut occurrences = recurrence::expand_all(entries);
        if let Some(window) = window {
            occurrences.retain(|o| window.contains(o.start.date()));
            info!("{} occurrences in {}", occurrences.len(), window.start.format("%B %Y"));
        }
        occurrences
    }

    /// First and last day of the given month, `None` for an invalid month/year
    pub fn month_window(&self, month: u32, year: i32) -> Option<MonthWindow> {
        let start = NaiveDate::from_ymd_opt(year, month, 1)?;
        // Last day of the month is the day before the first of the next one
        let next_month = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        };
        let end = next_month?.pred_opt()?;
        Some(MonthWindow { start, end })
    }
}
