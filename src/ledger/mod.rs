mod ledger;
mod record;

pub use ledger::Ledger;
pub use record::BookingRecord;
