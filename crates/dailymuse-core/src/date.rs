//! Hero date label, e.g. `JAN 13 • 2026`.

use chrono::{Datelike, Local, NaiveDate};

const MONTHS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Format a date as `MON D • YYYY` with an unpadded day.
pub fn format_daily_date(date: NaiveDate) -> String {
    let month = MONTHS[date.month0() as usize];
    format!("{} {} \u{2022} {}", month, date.day(), date.year())
}

/// Label for the local calendar day.
pub fn today_label() -> String {
    format_daily_date(Local::now().date_naive())
}
