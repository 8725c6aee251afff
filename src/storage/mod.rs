mod csv_backend;

use std::fs;
use std::path::Path;

pub use csv_backend::{export_csv, CsvStorage};

use crate::errors::Result;
use crate::ledger::Ledger;

/// Abstraction over persistence backends capable of storing the booking ledger.
pub trait LedgerStore: Send + Sync {
    /// Loads the persisted ledger. An absent file yields an empty ledger;
    /// a present but unreadable one is a `LedgerRead` failure.
    fn load(&self) -> Result<Ledger>;

    /// Persists the full ledger, replacing any previous contents.
    fn save(&self, ledger: &Ledger) -> Result<()>;
}

pub(crate) fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
