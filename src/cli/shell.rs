use std::fs;

use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::booking::BookingRecorder;
use crate::clock::{Clock, SystemClock};
use crate::config::ConfigManager;
use crate::storage::{export_csv, CsvStorage, LedgerStore};

use super::forms::booking_form;
use super::{output, views, CliError};

const MENU: [&str; 5] = [
    "New booking",
    "Quick stats",
    "All bookings",
    "Export CSV",
    "Quit",
];
const DEFAULT_EXPORT_FILE: &str = "snooker_bookings_export.csv";

/// Runs the interactive shell until the user quits.
///
/// Individual operations never terminate the loop: every failure is
/// rendered and the menu comes back so the user can retry immediately.
pub fn run_cli() -> Result<(), CliError> {
    let manager = ConfigManager::new()?;
    let config = match manager.load() {
        Ok(config) => config,
        Err(err) => {
            output::warning(format!("Configuration unreadable, using defaults: {err}"));
            Default::default()
        }
    };

    let storage = CsvStorage::new(manager.ledger_path(&config));
    let clock = SystemClock;
    let recorder = BookingRecorder::new(
        config.rates.clone(),
        Box::new(storage.clone()),
        Box::new(clock),
    );

    output::section("Continental Snooker — Booking Management");
    output::info(format!("Ledger file: {}", storage.path().display()));

    let theme = ColorfulTheme::default();
    loop {
        let choice = Select::with_theme(&theme)
            .with_prompt("Menu")
            .items(&MENU)
            .default(0)
            .interact()?;

        let outcome = match choice {
            0 => new_booking(&recorder),
            1 => quick_stats(&storage, &clock),
            2 => all_bookings(&storage),
            3 => export(&storage),
            _ => break,
        };
        if let Err(err) = outcome {
            output::error(err);
        }
    }
    Ok(())
}

fn new_booking(recorder: &BookingRecorder) -> Result<(), CliError> {
    let Some(input) = booking_form(recorder.rates())? else {
        output::info("Booking discarded.");
        return Ok(());
    };
    let receipt = recorder.record(&input.name, &input.resource_id, &input.start, &input.end)?;
    if receipt.ledger_recovered {
        output::warning("Existing ledger could not be read. Started a new log; prior history may be inaccessible.");
    }
    output::success(format!(
        "Booking saved! Total price {:.2} for {:.2} hours.",
        receipt.price, receipt.hours
    ));
    Ok(())
}

fn quick_stats(storage: &CsvStorage, clock: &impl Clock) -> Result<(), CliError> {
    let ledger = storage.load()?;
    views::render_stats(&ledger, clock.today());
    Ok(())
}

fn all_bookings(storage: &CsvStorage) -> Result<(), CliError> {
    let ledger = storage.load()?;
    views::render_bookings(&ledger);
    Ok(())
}

fn export(storage: &CsvStorage) -> Result<(), CliError> {
    let ledger = storage.load()?;
    if ledger.is_empty() {
        output::info("No bookings yet.");
        return Ok(());
    }
    let target: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Export to")
        .default(DEFAULT_EXPORT_FILE.into())
        .interact_text()?;
    let data = export_csv(&ledger)?;
    fs::write(&target, data)
        .map_err(|err| crate::errors::BookingError::LedgerWrite(err.to_string()))?;
    output::success(format!("Exported {} bookings to {target}.", ledger.len()));
    Ok(())
}
