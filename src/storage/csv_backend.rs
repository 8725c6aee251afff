use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::errors::{BookingError, Result};
use crate::ledger::{BookingRecord, Ledger};

use super::ensure_dir;

const HEADER: [&str; 5] = ["Name", "Table", "Time", "Price", "Date"];
const TMP_SUFFIX: &str = "tmp";

/// Flat-file CSV backend with whole-file rewrite semantics.
///
/// Every save serializes the full ledger to a temporary file next to the
/// target and renames it into place, so a failed write never clobbers
/// the previous snapshot.
#[derive(Debug, Clone)]
pub struct CsvStorage {
    path: PathBuf,
}

impl CsvStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl super::LedgerStore for CsvStorage {
    fn load(&self) -> Result<Ledger> {
        if !self.path.exists() {
            return Ok(Ledger::default());
        }
        let data =
            fs::read_to_string(&self.path).map_err(|err| BookingError::LedgerRead(err.to_string()))?;
        parse_csv(&data)
    }

    fn save(&self, ledger: &Ledger) -> Result<()> {
        let data = export_csv(ledger)?;
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent).map_err(|err| BookingError::LedgerWrite(err.to_string()))?;
        }
        let tmp = tmp_path(&self.path);
        write_file(&tmp, &data).map_err(|err| BookingError::LedgerWrite(err.to_string()))?;
        fs::rename(&tmp, &self.path).map_err(|err| BookingError::LedgerWrite(err.to_string()))?;
        Ok(())
    }
}

/// Serializes the ledger to the on-disk CSV format.
///
/// Also used for the on-demand export artifact, which is the same format.
pub fn export_csv(ledger: &Ledger) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer
        .write_record(HEADER)
        .map_err(|err| BookingError::LedgerWrite(err.to_string()))?;
    for record in ledger.records() {
        writer
            .serialize(record)
            .map_err(|err| BookingError::LedgerWrite(err.to_string()))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| BookingError::LedgerWrite(err.to_string()))?;
    String::from_utf8(bytes).map_err(|err| BookingError::LedgerWrite(err.to_string()))
}

fn parse_csv(data: &str) -> Result<Ledger> {
    let mut reader = csv::Reader::from_reader(data.as_bytes());
    let mut records = Vec::new();
    for row in reader.deserialize::<BookingRecord>() {
        let record = row.map_err(|err| BookingError::LedgerRead(err.to_string()))?;
        records.push(record);
    }
    Ok(Ledger::new(records))
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_file(path: &Path, data: &str) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
