//! Date formatting helpers.

use chrono::NaiveDate;

/// ISO date format used for record dates.
pub const ISO_FORMAT: &str = "%Y-%m-%d";

/// Short weekday, month and day, comma separated ("Fri, 10, 16").
pub const FORECAST_FORMAT: &str = "%a, %m, %d";

/// Format a NaiveDate as "YYYY-MM-DD"
pub fn format_date(date: &NaiveDate) -> String {
    date.format(ISO_FORMAT).to_string()
}

/// Label for a row in the forecast list.
pub fn forecast_label(date: &NaiveDate) -> String {
    date.format(FORECAST_FORMAT).to_string()
}

/// Sequential x-axis label, 1-based.
pub fn day_label(index: usize) -> String {
    format!("Day {}", index + 1)
}
