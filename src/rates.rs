use serde::{Deserialize, Serialize};

/// One bookable resource and its hourly rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateEntry {
    pub name: String,
    pub hourly_rate: f64,
}

/// Fixed mapping from resource name to hourly rate, ordered for display.
///
/// Loaded from configuration at process start; not user-editable during a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    entries: Vec<RateEntry>,
}

impl RateTable {
    pub fn new(entries: Vec<RateEntry>) -> Self {
        Self { entries }
    }

    /// Hourly rate for the named resource, if configured.
    pub fn rate_for(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.hourly_rate)
    }

    /// Resource names in configuration order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.name.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Default for RateTable {
    /// Reference deployment: two English tables at 240/h, one French at 180/h.
    fn default() -> Self {
        Self::new(vec![
            RateEntry {
                name: "English Snooker Table 1".into(),
                hourly_rate: 240.0,
            },
            RateEntry {
                name: "English Snooker Table 2".into(),
                hourly_rate: 240.0,
            },
            RateEntry {
                name: "French Snooker Table".into(),
                hourly_rate: 180.0,
            },
        ])
    }
}
