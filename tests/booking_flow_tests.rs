mod common;

use std::fs;

use chrono::NaiveDate;
use cuebook::errors::BookingError;
use cuebook::storage::{export_csv, CsvStorage, LedgerStore};

use common::{fixed_today, setup_recorder};

#[test]
fn bookings_append_in_call_order_with_computed_prices() {
    let (recorder, storage) = setup_recorder();

    recorder
        .record("Asha", "French Snooker Table", "02:00 PM", "03:00 PM")
        .unwrap();
    recorder
        .record("Ben", "English Snooker Table 1", "03:00 PM", "03:30 PM")
        .unwrap();
    recorder
        .record("Cara", "English Snooker Table 2", "09:40 PM", "10:00 PM")
        .unwrap();

    let ledger = storage.load().unwrap();
    assert_eq!(ledger.len(), 3);

    let records = ledger.records();
    assert_eq!(records[0].customer_name, "Asha");
    assert_eq!(records[0].price, 180.0);
    assert_eq!(records[0].time_range, "02:00 PM - 03:00 PM");
    assert_eq!(records[1].customer_name, "Ben");
    assert_eq!(records[1].price, 120.0);
    assert_eq!(records[2].customer_name, "Cara");
    assert_eq!(records[2].price, 80.0);
    assert!(records.iter().all(|r| r.date == fixed_today()));
}

#[test]
fn empty_name_is_rejected_and_ledger_is_untouched() {
    let (recorder, storage) = setup_recorder();

    let before = storage.load().unwrap().len();
    let result = recorder.record("   ", "French Snooker Table", "02:00 PM", "03:00 PM");
    assert!(matches!(result, Err(BookingError::EmptyName)));
    assert_eq!(storage.load().unwrap().len(), before);
}

#[test]
fn malformed_times_are_rejected_and_ledger_is_untouched() {
    let (recorder, storage) = setup_recorder();

    for bad in ["25:00 PM", "two thirty"] {
        let result = recorder.record("Asha", "French Snooker Table", bad, "03:00 PM");
        assert!(matches!(result, Err(BookingError::InvalidTimeFormat(_))));
    }
    assert!(storage.load().unwrap().is_empty());
}

#[test]
fn identical_start_and_end_are_rejected() {
    let (recorder, _storage) = setup_recorder();
    let result = recorder.record("Asha", "French Snooker Table", "02:00 PM", "02:00 PM");
    assert!(matches!(result, Err(BookingError::NonPositiveDuration)));
}

#[test]
fn a_booking_may_cross_midnight_once() {
    let (recorder, _storage) = setup_recorder();
    let receipt = recorder
        .record("Asha", "French Snooker Table", "11:30 PM", "12:30 AM")
        .unwrap();
    assert_eq!(receipt.hours, 1.0);
    assert_eq!(receipt.price, 180.0);
}

#[test]
fn loading_twice_without_writes_yields_identical_ledgers() {
    let (recorder, storage) = setup_recorder();
    recorder
        .record("Asha", "French Snooker Table", "02:00 PM", "03:00 PM")
        .unwrap();

    let first = storage.load().unwrap();
    let second = storage.load().unwrap();
    assert_eq!(first, second);
}

#[test]
fn stats_sum_all_prices_and_filter_today() {
    let (recorder, storage) = setup_recorder();
    recorder
        .record("Asha", "French Snooker Table", "02:00 PM", "03:00 PM")
        .unwrap();
    recorder
        .record("Ben", "English Snooker Table 1", "02:00 PM", "02:30 PM")
        .unwrap();

    // Back-date one extra row so today's revenue actually filters.
    let mut ledger = storage.load().unwrap();
    let mut old = ledger.records()[0].clone();
    old.date = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
    old.price = 50.0;
    ledger.append(old);
    storage.save(&ledger).unwrap();

    let reloaded = storage.load().unwrap();
    assert_eq!(reloaded.total_revenue(), 180.0 + 120.0 + 50.0);
    assert_eq!(reloaded.revenue_on(fixed_today()), 180.0 + 120.0);
}

#[test]
fn export_then_reload_matches_the_in_memory_ledger() {
    let (recorder, storage) = setup_recorder();
    recorder
        .record("Asha", "French Snooker Table", "02:00 PM", "03:00 PM")
        .unwrap();
    recorder
        .record("Ben", "English Snooker Table 2", "11:30 PM", "12:30 AM")
        .unwrap();

    let ledger = storage.load().unwrap();
    let exported = export_csv(&ledger).unwrap();

    let target = storage.path().with_file_name("exported.csv");
    fs::write(&target, exported).unwrap();
    let reloaded = CsvStorage::new(target).load().unwrap();
    assert_eq!(reloaded, ledger);
}

#[test]
fn corrupt_ledger_is_reported_then_replaced_by_the_next_booking() {
    let (recorder, storage) = setup_recorder();
    fs::write(
        storage.path(),
        "Name,Table,Time,Price,Date\nAsha,French,02:00 PM - 03:00 PM,not-a-number,2026-08-23\n",
    )
    .unwrap();

    assert!(matches!(storage.load(), Err(BookingError::LedgerRead(_))));

    let receipt = recorder
        .record("Ben", "French Snooker Table", "02:00 PM", "03:00 PM")
        .unwrap();
    assert!(receipt.ledger_recovered);

    let ledger = storage.load().unwrap();
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.records()[0].customer_name, "Ben");
}
