use std::sync::Mutex;

use chrono::NaiveDate;
use cuebook::{booking::BookingRecorder, clock::FixedClock, rates::RateTable, storage::CsvStorage};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// The date every test recorder stamps on new bookings.
pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 23).unwrap()
}

/// Creates a recorder over an isolated ledger file, plus direct storage access.
pub fn setup_recorder() -> (BookingRecorder, CsvStorage) {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().join("snooker_bookings.csv");
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);

    let storage = CsvStorage::new(path);
    let recorder = BookingRecorder::new(
        RateTable::default(),
        Box::new(storage.clone()),
        Box::new(FixedClock(fixed_today())),
    );
    (recorder, storage)
}
