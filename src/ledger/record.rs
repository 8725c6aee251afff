use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the booking ledger.
///
/// Field names map onto the CSV header `Name,Table,Time,Price,Date`.
/// `time_range` keeps the raw start/end strings exactly as the customer
/// typed them; it is a display value, not a structured time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRecord {
    #[serde(rename = "Name")]
    pub customer_name: String,
    #[serde(rename = "Table")]
    pub resource_id: String,
    #[serde(rename = "Time")]
    pub time_range: String,
    #[serde(rename = "Price")]
    pub price: f64,
    #[serde(rename = "Date")]
    pub date: NaiveDate,
}
