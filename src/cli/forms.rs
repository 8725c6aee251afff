//! Interactive booking form.
//!
//! A linear five-step flow: name, table, start time, end time, confirm.
//! After each time entry the live price estimate is recomputed with the
//! same formulas the recorder uses, so the confirmation never disagrees
//! with the saved price.

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::booking::estimate;
use crate::errors::BookingError;
use crate::rates::RateTable;

use super::output;
use super::CliError;

const DEFAULT_START: &str = "02:00 PM";
const DEFAULT_END: &str = "03:00 PM";

/// Raw form values, exactly as entered. Validation happens in the recorder.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingInput {
    pub name: String,
    pub resource_id: String,
    pub start: String,
    pub end: String,
}

/// Runs the booking form. Returns `None` when the user declines to save.
pub fn booking_form(rates: &RateTable) -> Result<Option<BookingInput>, CliError> {
    if rates.is_empty() {
        return Err(CliError::Core(BookingError::Config(
            "no tables configured".into(),
        )));
    }
    let theme = ColorfulTheme::default();

    let name: String = Input::with_theme(&theme)
        .with_prompt("Customer name")
        .allow_empty(true)
        .interact_text()?;

    let table_names = rates.names();
    let selected = Select::with_theme(&theme)
        .with_prompt("Choose table")
        .items(&table_names)
        .default(0)
        .interact()?;
    let resource_id = table_names[selected].to_string();

    let start: String = Input::with_theme(&theme)
        .with_prompt("Start time (hh:mm AM/PM)")
        .default(DEFAULT_START.into())
        .interact_text()?;
    let end: String = Input::with_theme(&theme)
        .with_prompt("End time (hh:mm AM/PM)")
        .default(DEFAULT_END.into())
        .interact_text()?;

    show_estimate(rates, &resource_id, &start, &end);

    let save = Confirm::with_theme(&theme)
        .with_prompt("Save booking?")
        .default(true)
        .interact()?;
    if !save {
        return Ok(None);
    }

    Ok(Some(BookingInput {
        name,
        resource_id,
        start,
        end,
    }))
}

fn show_estimate(rates: &RateTable, resource_id: &str, start: &str, end: &str) {
    match estimate(rates, resource_id, start, end) {
        Ok(est) => output::info(format!(
            "Hourly rate {:.2} | Est. price {:.2} for {:.2} hours",
            est.hourly_rate, est.price, est.hours
        )),
        Err(err) => {
            let rate = rates.rate_for(resource_id).unwrap_or(0.0);
            output::info(format!(
                "Hourly rate {:.2} | Enter valid times for an estimate ({err})",
                rate
            ));
        }
    }
}
