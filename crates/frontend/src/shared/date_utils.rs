/// Utilities for date handling in the page chrome
use chrono::Datelike;

/// First year shown in the copyright line
pub const COPYRIGHT_SINCE: i32 = 2024;

/// Current calendar year in the user's local time zone
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Copyright year range.
/// Example: 2024 -> "2024", 2026 -> "2024 - 2026"
pub fn copyright_label(current_year: i32) -> String {
    if current_year != COPYRIGHT_SINCE {
        format!("{} - {}", COPYRIGHT_SINCE, current_year)
    } else {
        COPYRIGHT_SINCE.to_string()
    }
}
