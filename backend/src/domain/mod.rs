//! # Domain Module
//!
//! Business logic for the timetable: normalizing the dates and times clients
//! send, accepting new entries, and expanding recurring entries into the
//! sessions shown on the calendar. Nothing here knows about HTTP.
//!
//! ## Module Organization
//!
//! - **time_format**: `DD/MM/YYYY` and `HH:MM AM/PM` parsing and formatting
//! - **recurrence**: lazy expansion of an entry into occurrences
//! - **timetable_service**: validation and storage of new entries
//! - **calendar**: ordered, month-filtered occurrence listings
//! - **commands**: internal input types mapped from the API DTOs
//! - **models**: entries and occurrences
//!
//! ## Business Rules
//!
//! - Course, lecturer, room, date and time are all required
//! - Occurrences repeat every 7 (weekly) or 14 (biweekly) days at the same time
//! - Every entry has a horizon; expansion never produces more occurrences
//! - A malformed entry shows up with no occurrences instead of failing the calendar

pub mod calendar;
pub mod commands;
pub mod models;
pub mod recurrence;
pub mod time_format;
pub mod timetable_service;

pub use calendar::*;
pub use commands::*;
pub use timetable_service::*;
