use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;

/// `2024-03-05 14:07:09:042+0530`
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S:%3f%z";

/// Current local time formatted with [`DATE_FORMAT`].
pub fn formatted_date() -> String {
    format_date(&Local::now())
}

pub fn format_date<Tz>(date: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    date.format(DATE_FORMAT).to_string()
}
