use crate::error::{Result, StockError};
use crate::model::LoadPolicy;
use crate::store::fs::DEFAULT_INVENTORY_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

pub const KEY_INVENTORY_FILE: &str = "inventory-file";
pub const KEY_ON_LOAD_ERROR: &str = "on-load-error";

/// Configuration for stockpile, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct StockConfig {
    /// Path of the inventory file. Relative paths resolve against the working directory.
    #[serde(default = "default_inventory_file")]
    pub inventory_file: PathBuf,

    /// What to do when the inventory file exists but cannot be read
    #[serde(default)]
    pub on_load_error: LoadPolicy,
}

fn default_inventory_file() -> PathBuf {
    PathBuf::from(DEFAULT_INVENTORY_FILE)
}

impl Default for StockConfig {
    fn default() -> Self {
        Self {
            inventory_file: default_inventory_file(),
            on_load_error: LoadPolicy::default(),
        }
    }
}

impl StockConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(StockError::Io)?;
        let config: StockConfig =
            serde_json::from_str(&content).map_err(StockError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(StockError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(StockError::Serialization)?;
        fs::write(config_path, content).map_err(StockError::Io)?;
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &[KEY_INVENTORY_FILE, KEY_ON_LOAD_ERROR]
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            KEY_INVENTORY_FILE => Some(self.inventory_file.display().to_string()),
            KEY_ON_LOAD_ERROR => Some(self.on_load_error.as_str().to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            KEY_INVENTORY_FILE => {
                if value.trim().is_empty() {
                    return Err(StockError::Config(
                        "inventory-file cannot be empty".to_string(),
                    ));
                }
                self.inventory_file = PathBuf::from(value);
            }
            KEY_ON_LOAD_ERROR => {
                self.on_load_error = value.parse().map_err(StockError::Config)?;
            }
            other => {
                return Err(StockError::Config(format!(
                    "Unknown config key: {}",
                    other
                )))
            }
        }
        Ok(())
    }
}
