use crate::errors::{BookingError, Result};
use crate::rates::RateTable;

use super::time::{parse_clock_time, session_hours};

/// Computed price for a prospective booking, before anything is saved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub hourly_rate: f64,
    pub hours: f64,
    pub price: f64,
}

/// Prices a time range against the rate table without touching the ledger.
///
/// Shares its duration and rounding rules with the recorder, so the live
/// estimate shown while filling in the form always matches the saved price.
pub fn estimate(
    rates: &RateTable,
    resource_id: &str,
    start_input: &str,
    end_input: &str,
) -> Result<Estimate> {
    let start = parse_clock_time(start_input)?;
    let end = parse_clock_time(end_input)?;
    let hours = session_hours(start, end)?;
    let hourly_rate = rates
        .rate_for(resource_id)
        .ok_or_else(|| BookingError::UnknownResource(resource_id.to_string()))?;
    Ok(Estimate {
        hourly_rate,
        hours,
        price: round_price(hours * hourly_rate),
    })
}

/// Rounds a price to 2 fractional digits, ties to even.
pub(crate) fn round_price(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
