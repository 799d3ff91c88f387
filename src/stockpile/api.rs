//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for UI clients (the subcommand CLI and the interactive form
//! both go through it).
//!
//! It:
//! - **Owns** the [`Inventory`] for the lifetime of the client
//! - **Normalizes inputs** (1-based item ids as typed by users → positions)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It never prints, never exits, and holds no business rules of its own.
//!
//! Configuration is not part of the facade. Clients call `commands::config`
//! directly; it does not need a loaded inventory.
//!
//! `StockApi<S: DataStore>` is generic over the storage backend:
//! `StockApi<FileStore>` in production, `StockApi<InMemoryStore>` in tests.

use crate::commands;
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::inventory::Inventory;
use crate::store::DataStore;
use std::str::FromStr;

pub struct StockApi<S: DataStore> {
    inventory: Inventory<S>,
}

impl<S: DataStore> StockApi<S> {
    pub fn new(inventory: Inventory<S>) -> Self {
        Self { inventory }
    }

    pub fn list_items(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.inventory)
    }

    pub fn add_item(&mut self, name: &str, stock_text: &str) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.inventory, name, stock_text)
    }

    pub fn delete_items<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<commands::CmdResult> {
        let indexes = parse_ids(ids)?;
        commands::delete::run(&mut self.inventory, &indexes)
    }

    pub fn inventory(&self) -> &Inventory<S> {
        &self.inventory
    }
}

fn parse_ids<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<DisplayIndex>> {
    inputs
        .iter()
        .map(|s| DisplayIndex::from_str(s.as_ref()))
        .collect()
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
