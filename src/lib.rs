#![doc(test(attr(deny(warnings))))]

//! Cuebook offers the booking, rate, and ledger primitives behind a
//! small snooker-club booking CLI.

pub mod booking;
pub mod cli;
pub mod clock;
pub mod config;
pub mod errors;
pub mod ledger;
pub mod rates;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Cuebook tracing initialized.");
    });
}
