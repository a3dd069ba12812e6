//! Date helpers for filter forms

use chrono::{Months, NaiveDate};

/// Range of the last `months` months ending today, for the quick-range
/// buttons of the period filter. Month-end overflow clamps to the last
/// valid day (e.g. 03-31 minus one month is 02-28).
pub fn months_back_range(today: NaiveDate, months: u32) -> (NaiveDate, NaiveDate) {
    let start = today
        .checked_sub_months(Months::new(months))
        .unwrap_or(today);
    (start, today)
}

/// Parse a `<input type="date">` value; empty input means "unset".
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}

/// Format a date the way the date inputs and table cells expect it.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
