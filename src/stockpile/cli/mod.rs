//! # CLI Layer
//!
//! One possible UI client for the stockpile library, and the only place that
//! knows about stdout/stderr, terminal modes and exit codes.
//!
//! ## Flow
//!
//! 1. Parse arguments (`args.rs`)
//! 2. Resolve the config directory and load `config.json`
//! 3. Install logging: stderr for subcommands, a log file for the full-screen form
//! 4. `config` runs straight away; everything else loads the inventory,
//!    builds a `StockApi` and dispatches
//! 5. Render results (`render.rs`) or hand the terminal to the form (`tui.rs`)
//!
//! The inventory file is picked in this order: `--file`, `STOCKPILE_FILE`,
//! `inventory-file` from the config, then `inventory.json` in the working
//! directory.

mod args;
mod logging;
mod render;
mod tui;

use args::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use logging::{LogTarget, LOG_FILENAME};
use render::{print_config, print_items, print_messages};
use std::path::{Path, PathBuf};
use stockpile::api::{ConfigAction, StockApi};
use stockpile::commands;
use stockpile::config::StockConfig;
use stockpile::error::{Result, StockError};
use stockpile::inventory::Inventory;
use stockpile::store::fs::FileStore;
use tracing::debug;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config_dir = resolve_config_dir(cli.config_dir.as_deref())?;

    let interactive = matches!(cli.command, None | Some(Commands::Tui));
    let log_target = if interactive {
        LogTarget::File(resolve_log_path(cli.config_dir.as_deref(), &config_dir))
    } else {
        LogTarget::Stderr
    };
    logging::init(cli.verbose, log_target);

    if let Some(Commands::Config { key, value }) = cli.command {
        return handle_config(&config_dir, key, value);
    }

    let config = StockConfig::load(&config_dir)?;
    let store = FileStore::new(cli.file.unwrap_or(config.inventory_file));
    debug!(config_dir = %config_dir.display(), inventory = %store.path().display(), "starting");

    let inventory = Inventory::initialize(store, config.on_load_error)?;
    let mut api = StockApi::new(inventory);

    match cli.command {
        Some(Commands::List) => handle_list(&api),
        Some(Commands::Add { name, stock }) => handle_add(&mut api, &name, &stock),
        Some(Commands::Delete { ids }) => handle_delete(&mut api, &ids),
        Some(Commands::Tui) | None => tui::run(&mut api),
        Some(Commands::Config { .. }) => Ok(()),
    }
}

fn resolve_config_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }
    ProjectDirs::from("com", "stockpile", "stockpile")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| StockError::Config("Could not determine config directory".to_string()))
}

/// The form's log lives in the data directory. An explicit `--config-dir`
/// keeps everything under that one directory.
fn resolve_log_path(explicit: Option<&Path>, config_dir: &Path) -> PathBuf {
    let dir = match explicit {
        Some(dir) => dir.to_path_buf(),
        None => ProjectDirs::from("com", "stockpile", "stockpile")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| config_dir.to_path_buf()),
    };
    dir.join(LOG_FILENAME)
}

fn handle_list(api: &StockApi<FileStore>) -> Result<()> {
    let result = api.list_items()?;
    print_items(&result.listed_items);
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(api: &mut StockApi<FileStore>, name: &str, stock: &str) -> Result<()> {
    let result = api.add_item(name, stock)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(api: &mut StockApi<FileStore>, ids: &[String]) -> Result<()> {
    let result = api.delete_items(ids)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(config_dir: &Path, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let show_all = matches!(action, ConfigAction::ShowAll);
    let result = commands::config::run(config_dir, action)?;
    if show_all {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_follows_an_explicit_config_dir() {
        let dir = Path::new("/tmp/stockpile-cfg");
        assert_eq!(resolve_log_path(Some(dir), dir), dir.join(LOG_FILENAME));
    }

    #[test]
    fn log_file_defaults_to_the_data_dir() {
        let config_dir = Path::new("/nonexistent/config");
        let path = resolve_log_path(None, config_dir);
        assert_eq!(path.file_name().unwrap(), LOG_FILENAME);
        if let Some(dirs) = ProjectDirs::from("com", "stockpile", "stockpile") {
            assert_eq!(path.parent().unwrap(), dirs.data_dir());
        }
    }
}
