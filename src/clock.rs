use chrono::{Local, NaiveDate};

/// Clock abstracts access to the current calendar date so the recorder
/// remains deterministic in tests.
pub trait Clock: Send + Sync {
    /// Returns today's date in the local timezone.
    fn today(&self) -> NaiveDate;
}

/// Production clock backed by the system's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a fixed date, for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
