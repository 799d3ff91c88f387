//! Show or change the settings in `config.json`.
//!
//! Runs without an inventory, so a broken inventory file can be dealt with by
//! switching `on-load-error` first.

use crate::commands::{CmdMessage, CmdResult};
use crate::config::StockConfig;
use crate::error::{Result, StockError};
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = StockConfig::load(config_dir)?;

    match action {
        ConfigAction::ShowAll => Ok(CmdResult::default().with_config(config)),
        ConfigAction::ShowKey(key) => {
            let value = config.get(&key).ok_or_else(|| unknown_key(&key))?;
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(value));
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            config.set(&key, &value).map_err(|e| match e {
                StockError::Config(reason) => {
                    StockError::Config(format!("cannot set {} to {:?}: {}", key, value, reason))
                }
                other => other,
            })?;
            config.save(config_dir)?;

            let stored = config.get(&key).unwrap_or(value);
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!("{} = {}", key, stored)));
            Ok(result)
        }
    }
}

fn unknown_key(key: &str) -> StockError {
    StockError::Config(format!(
        "Unknown config key: {} (known keys: {})",
        key,
        StockConfig::keys().join(", ")
    ))
}
