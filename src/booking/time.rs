use chrono::NaiveTime;

use crate::errors::{BookingError, Result};

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;
const SECONDS_PER_HOUR: f64 = 3600.0;

/// Parses a 12-hour wall-clock time such as `02:30 PM`.
///
/// Hour 1-12, minute 0-59, AM/PM indicator required. Case and
/// surrounding whitespace are tolerated.
pub fn parse_clock_time(input: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(&input.trim().to_ascii_uppercase(), "%I:%M %p")
        .map_err(|_| BookingError::InvalidTimeFormat(input.trim().to_string()))
}

/// Fractional hours between two times of day.
///
/// A negative raw difference wraps forward by 24 hours, so a session may
/// cross midnight exactly once. A zero-length session (identical start
/// and end, including after the wrap) is rejected.
pub fn session_hours(start: NaiveTime, end: NaiveTime) -> Result<f64> {
    let mut seconds = (end - start).num_seconds();
    if seconds < 0 {
        seconds += SECONDS_PER_DAY;
    }
    if seconds <= 0 {
        return Err(BookingError::NonPositiveDuration);
    }
    Ok(seconds as f64 / SECONDS_PER_HOUR)
}
