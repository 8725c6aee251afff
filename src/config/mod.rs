use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::errors::{BookingError, Result};
use crate::rates::RateTable;
use crate::storage::ensure_dir;

const CONFIG_FILE: &str = "config.json";
const DEFAULT_LEDGER_FILE: &str = "snooker_bookings.csv";
const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub ledger_file: String,
    pub rates: RateTable,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ledger_file: DEFAULT_LEDGER_FILE.into(),
            rates: RateTable::default(),
        }
    }
}

/// Loads and saves the JSON configuration in the application data directory.
pub struct ConfigManager {
    base: PathBuf,
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::from_base(default_base_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        Self::from_base(base)
    }

    fn from_base(base: PathBuf) -> Result<Self> {
        ensure_dir(&base).map_err(|err| BookingError::Config(err.to_string()))?;
        let path = base.join(CONFIG_FILE);
        Ok(Self { base, path })
    }

    /// Reads the configuration, falling back to defaults when absent.
    pub fn load(&self) -> Result<Config> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)
                .map_err(|err| BookingError::Config(err.to_string()))?;
            serde_json::from_str(&data).map_err(|err| BookingError::Config(err.to_string()))
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        let json = serde_json::to_string_pretty(config)
            .map_err(|err| BookingError::Config(err.to_string()))?;
        let tmp = tmp_path(&self.path);
        write_file(&tmp, &json).map_err(|err| BookingError::Config(err.to_string()))?;
        fs::rename(&tmp, &self.path).map_err(|err| BookingError::Config(err.to_string()))?;
        Ok(())
    }

    /// Absolute path of the ledger file named by the configuration.
    pub fn ledger_path(&self, config: &Config) -> PathBuf {
        self.base.join(&config.ledger_file)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn default_base_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cuebook")
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
