//! Date and time normalization for timetable entries.
//!
//! Clients submit dates as `DD/MM/YYYY` and times as `HH:MM AM/PM`. This
//! module is the single place where those strings are turned into chrono
//! values and back. Everything is naive local wall-clock time; no timezone
//! conversion happens here or anywhere downstream.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Errors produced when a date or time string cannot be understood
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("Invalid time '{0}', expected HH:MM AM/PM")]
    InvalidTime(String),
    #[error("Hour {0} is outside 1..12")]
    HourOutOfRange(u32),
    #[error("Invalid date '{0}', expected DD/MM/YYYY")]
    InvalidDate(String),
    #[error("{day:02}/{month:02}/{year} is not a calendar date")]
    ImpossibleDate { day: u32, month: u32, year: i32 },
}

/// Parse a 12-hour clock time such as `02:30 PM` or `9:05am`.
pub fn parse_time_12h(text: &str) -> Result<NaiveTime, FormatError> {
    let invalid = || FormatError::InvalidTime(text.to_string());
    let trimmed = text.trim();

    if trimmed.len() < 2 || !trimmed.is_char_boundary(trimmed.len() - 2) {
        return Err(invalid());
    }
    let (clock, meridiem) = trimmed.split_at(trimmed.len() - 2);
    let is_pm = match meridiem.to_ascii_uppercase().as_str() {
        "AM" => false,
        "PM" => true,
        _ => return Err(invalid()),
    };

    let (hour_text, minute_text) = clock.trim_end().split_once(':').ok_or_else(invalid)?;
    if hour_text.is_empty()
        || hour_text.len() > 2
        || minute_text.len() != 2
        || !hour_text.chars().all(|c| c.is_ascii_digit())
        || !minute_text.chars().all(|c| c.is_ascii_digit())
    {
        return Err(invalid());
    }

    let hour: u32 = hour_text.parse().map_err(|_| invalid())?;
    let minute: u32 = minute_text.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&hour) {
        return Err(FormatError::HourOutOfRange(hour));
    }

    let hour = match (hour, is_pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, false) => h,
        (h, true) => h + 12,
    };

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(invalid)
}

/// Format a time of day as `HH:MM AM/PM`. Seconds are dropped.
pub fn format_time_12h(time: NaiveTime) -> String {
    let (is_pm, hour) = time.hour12();
    let meridiem = if is_pm { "PM" } else { "AM" };
    format!("{:02}:{:02} {}", hour, time.minute(), meridiem)
}

/// Parse a `DD/MM/YYYY` date. Single-digit day and month are accepted.
pub fn parse_date(text: &str) -> Result<NaiveDate, FormatError> {
    let invalid = || FormatError::InvalidDate(text.to_string());
    let parts: Vec<&str> = text.trim().split('/').collect();
    let [day_text, month_text, year_text] = parts[..] else {
        return Err(invalid());
    };

    let is_number = |s: &str, max_len: usize| {
        !s.is_empty() && s.len() <= max_len && s.chars().all(|c| c.is_ascii_digit())
    };
    if !is_number(day_text, 2) || !is_number(month_text, 2) || year_text.len() != 4 || !is_number(year_text, 4) {
        return Err(invalid());
    }

    let day: u32 = day_text.parse().map_err(|_| invalid())?;
    let month: u32 = month_text.parse().map_err(|_| invalid())?;
    let year: i32 = year_text.parse().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or(FormatError::ImpossibleDate { day, month, year })
}

/// Years a `DD/MM/YYYY` date can carry
pub const YEAR_RANGE: std::ops::RangeInclusive<i32> = 0..=9999;

/// Whether `date` survives a `format_date` / `parse_date` round trip
pub fn is_representable(date: NaiveDate) -> bool {
    YEAR_RANGE.contains(&date.year())
}

/// Format a date as `DD/MM/YYYY`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Combine an entry's date and time strings into one wall-clock instant.
pub fn combine(date_text: &str, time_text: &str) -> Result<NaiveDateTime, FormatError> {
    let date = parse_date(date_text)?;
    let time = parse_time_12h(time_text)?;
    Ok(date.and_time(time))
}
