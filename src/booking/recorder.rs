use tracing::warn;

use crate::clock::Clock;
use crate::errors::{BookingError, Result};
use crate::ledger::{BookingRecord, Ledger};
use crate::rates::RateTable;
use crate::storage::LedgerStore;

use super::estimate::estimate;

/// Outcome of a saved booking, returned to the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BookingReceipt {
    pub price: f64,
    pub hours: f64,
    /// True when the existing ledger file could not be read and was
    /// discarded in favor of a fresh one. Callers must surface this.
    pub ledger_recovered: bool,
}

/// Validates a booking, prices it, and appends it to the persisted ledger.
pub struct BookingRecorder {
    rates: RateTable,
    store: Box<dyn LedgerStore>,
    clock: Box<dyn Clock>,
}

impl BookingRecorder {
    pub fn new(rates: RateTable, store: Box<dyn LedgerStore>, clock: Box<dyn Clock>) -> Self {
        Self {
            rates,
            store,
            clock,
        }
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Records one booking: validate, price, load-append-persist.
    ///
    /// Validation failures leave the ledger untouched. An unreadable
    /// ledger file is discarded with a logged warning rather than
    /// blocking the booking; the receipt carries the recovery flag.
    pub fn record(
        &self,
        name: &str,
        resource_id: &str,
        start_input: &str,
        end_input: &str,
    ) -> Result<BookingReceipt> {
        let customer_name = name.trim();
        if customer_name.is_empty() {
            return Err(BookingError::EmptyName);
        }

        let quote = estimate(&self.rates, resource_id, start_input, end_input)?;

        let (mut ledger, ledger_recovered) = match self.store.load() {
            Ok(ledger) => (ledger, false),
            Err(BookingError::LedgerRead(message)) => {
                warn!(%message, "existing ledger could not be read, starting a new one");
                (Ledger::default(), true)
            }
            Err(other) => return Err(other),
        };

        // The time range keeps whatever formatting the customer typed.
        ledger.append(BookingRecord {
            customer_name: customer_name.to_string(),
            resource_id: resource_id.to_string(),
            time_range: format!("{} - {}", start_input, end_input),
            price: quote.price,
            date: self.clock.today(),
        });
        self.store.save(&ledger)?;

        Ok(BookingReceipt {
            price: quote.price,
            hours: quote.hours,
            ledger_recovered,
        })
    }
}
