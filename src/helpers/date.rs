//! Date helper functions

use chrono::{DateTime, TimeZone};

/// Format a date using a Moment.js-style format string
///
/// # Examples
/// ```ignore
/// format_date(&date, "YYYY-MM-DD") // -> "2024-01-15"
/// ```
pub fn format_date<Tz: TimeZone>(date: &DateTime<Tz>, format: &str) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format(&moment_to_chrono_format(format)).to_string()
}

/// Format a date in ISO 8601 / XML format
pub fn date_xml<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%Y-%m-%dT%H:%M:%S%:z").to_string()
}

/// Whole days from `date` to `now`, floored; negative for dates in the future
pub fn days_between<Tz: TimeZone, Tz2: TimeZone>(date: &DateTime<Tz>, now: &DateTime<Tz2>) -> i64 {
    let diff = now.clone().signed_duration_since(date.clone());
    diff.num_seconds().div_euclid(86_400)
}

/// Human wording for a day count, as shown on post cards
pub fn days_ago_label(days: i64) -> String {
    match days {
        d if d < 0 => "scheduled".to_string(),
        0 => "today".to_string(),
        1 => "yesterday".to_string(),
        d if d < 30 => format!("{} days ago", d),
        d if d < 365 => match d / 30 {
            1 => "a month ago".to_string(),
            m => format!("{} months ago", m),
        },
        d => match d / 365 {
            1 => "a year ago".to_string(),
            y => format!("{} years ago", y),
        },
    }
}

/// Convert Moment.js format tokens to chrono specifiers
fn moment_to_chrono_format(format: &str) -> String {
    // Longest tokens first within each family
    let replacements = [
        ("YYYY", "%Y"),
        ("YY", "%y"),
        ("MMMM", "%B"),
        ("MMM", "%b"),
        ("MM", "%m"),
        ("DD", "%d"),
        ("HH", "%H"),
        ("mm", "%M"),
        ("ss", "%S"),
        ("dddd", "%A"),
        ("ddd", "%a"),
    ];

    let mut result = format.to_string();
    for (from, to) in replacements {
        result = result.replace(from, to);
    }
    result
}
