use chrono::{DateTime, Datelike, Local, TimeZone};

/// Current calendar year in the local time zone.
///
/// Checks never call this themselves; the year is passed in so that a
/// verdict depends only on its inputs.
#[must_use]
pub fn current_year() -> u16 {
    year_of(&Local::now())
}

/// Calendar year of `instant` in its own time zone, saturated to `u16`.
#[must_use]
pub fn year_of<Tz: TimeZone>(instant: &DateTime<Tz>) -> u16 {
    let year = instant.year();
    u16::try_from(year).unwrap_or(if year < 0 { 0 } else { u16::MAX })
}

#[cfg(test)]
#[path = "year_tests.rs"]
mod tests;
