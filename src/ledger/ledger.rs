use chrono::NaiveDate;

use super::BookingRecord;

/// Append-only, ordered collection of booking records.
///
/// Rows stay in append order; sorting for display is a read-time view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    records: Vec<BookingRecord>,
}

impl Ledger {
    pub fn new(records: Vec<BookingRecord>) -> Self {
        Self { records }
    }

    pub fn append(&mut self, record: BookingRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[BookingRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of `price` over all records.
    pub fn total_revenue(&self) -> f64 {
        self.records.iter().map(|record| record.price).sum()
    }

    /// Sum of `price` over records created on the given date.
    pub fn revenue_on(&self, date: NaiveDate) -> f64 {
        self.records
            .iter()
            .filter(|record| record.date == date)
            .map(|record| record.price)
            .sum()
    }

    /// Records sorted by date descending. Stable, so same-date records
    /// keep their append order.
    pub fn sorted_by_date_desc(&self) -> Vec<&BookingRecord> {
        let mut view: Vec<&BookingRecord> = self.records.iter().collect();
        view.sort_by(|a, b| b.date.cmp(&a.date));
        view
    }
}
