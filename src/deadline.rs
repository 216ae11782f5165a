//! Response deadlines for the public defender.
//!
//! The count runs in two stages. Ten calendar days after issuance the
//! intimation is deemed read; that day, pushed past a weekend, anchors the
//! response period. The statutory period is then doubled and counted in
//! business days (Monday to Friday) from the anchor. Public holidays are not
//! consulted.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use thiserror::Error;
use tracing::debug;

use crate::parser::tables::ISSUANCE_DATE_RE;

/// Calendar days before an electronic intimation counts as read.
pub const CONSTRUCTIVE_NOTICE_DAYS: u64 = 10;

/// Public defenders get twice the ordinary period.
pub const DEFENDER_MULTIPLIER: u32 = 2;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeadlineError {
    #[error("expected DD/MM/YYYY, got {0:?}")]
    Format(String),

    #[error("no such calendar date: {0}")]
    InvalidDate(String),

    #[error("deadline for {issued} plus {base_days} days is out of the calendar range")]
    OutOfRange { issued: NaiveDate, base_days: u32 },
}

pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// `date` itself if it is a business day, otherwise the following Monday.
/// `None` past the last representable date.
pub fn next_business_day(date: NaiveDate) -> Option<NaiveDate> {
    let mut day = date;
    while !is_business_day(day) {
        day = day.succ_opt()?;
    }
    Some(day)
}

/// Day from which the response period starts running.
pub fn constructive_notice_anchor(issued: NaiveDate) -> Option<NaiveDate> {
    next_business_day(issued.checked_add_days(Days::new(CONSTRUCTIVE_NOTICE_DAYS))?)
}

/// Advance `business_days` Monday-to-Friday days past `from`.
///
/// From a business day, every five business days are exactly seven calendar
/// days.
pub fn add_business_days(from: NaiveDate, business_days: u32) -> Option<NaiveDate> {
    let mut day = from;
    let mut remaining = business_days;
    while remaining > 0 && !is_business_day(day) {
        day = day.succ_opt()?;
        if is_business_day(day) {
            remaining -= 1;
        }
    }
    let weeks = u64::from(remaining / 5);
    day = day.checked_add_days(Days::new(weeks * 7))?;
    remaining %= 5;
    while remaining > 0 {
        day = day.succ_opt()?;
        if is_business_day(day) {
            remaining -= 1;
        }
    }
    Some(day)
}

pub fn compute_deadline(issued: NaiveDate, base_days: u32) -> Result<NaiveDate, DeadlineError> {
    let out_of_range = || DeadlineError::OutOfRange { issued, base_days };
    let business_days = base_days
        .checked_mul(DEFENDER_MULTIPLIER)
        .ok_or_else(out_of_range)?;
    constructive_notice_anchor(issued)
        .and_then(|anchor| add_business_days(anchor, business_days))
        .and_then(next_business_day)
        .ok_or_else(out_of_range)
}

/// Parse `DD/MM/YYYY`, zero-padded. A trailing time (`DD/MM/YYYY HH:MM`) is
/// ignored.
pub fn parse_issuance_date(raw: &str) -> Result<NaiveDate, DeadlineError> {
    let date_part = raw.split_whitespace().next().unwrap_or_default();
    let caps = ISSUANCE_DATE_RE
        .captures(date_part)
        .ok_or_else(|| DeadlineError::Format(raw.to_string()))?;

    let field = |i: usize| caps[i].parse::<u32>().map_err(|_| DeadlineError::Format(raw.to_string()));
    let (day, month, year) = (field(1)?, field(2)?, field(3)?);

    NaiveDate::from_ymd_opt(year as i32, month, day)
        .ok_or_else(|| DeadlineError::InvalidDate(date_part.to_string()))
}

pub fn format_deadline(date: NaiveDate) -> String {
    date.format("%d/%m/%y").to_string()
}

/// Final deadline as `DD/MM/YY`, or an empty string when `issuance_date`
/// cannot be read or the count runs off the calendar.
pub fn deadline_for(issuance_date: &str, base_days: u32) -> String {
    match parse_issuance_date(issuance_date).and_then(|issued| compute_deadline(issued, base_days)) {
        Ok(end) => format_deadline(end),
        Err(e) => {
            debug!(error = %e, "cannot compute deadline");
            String::new()
        }
    }
}
