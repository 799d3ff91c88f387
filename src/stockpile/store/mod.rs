//! # Storage Layer
//!
//! The [`DataStore`] trait is the only thing the inventory core knows about
//! persistence. A store holds at most one snapshot: the item sequence as of the
//! last successful save.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, a single JSON document
//!   (`inventory.json` by default) holding an ordered array of items.
//! - [`memory::InMemoryStore`]: keeps the snapshot in memory, with knobs to
//!   simulate unreadable snapshots and failing writes. Used by tests.
//!
//! ## Storage Format
//!
//! ```text
//! [
//!   { "name": "Widget", "stock": 12 },
//!   { "name": "Gadget", "stock": 0 }
//! ]
//! ```
//!
//! Order in the array is the display order. Whitespace is cosmetic.

use crate::error::Result;
use crate::model::Item;

pub mod fs;
pub mod memory;

/// Abstract interface for inventory snapshots.
pub trait DataStore {
    /// Read the last saved snapshot.
    ///
    /// Returns `Ok(None)` when no snapshot exists yet, and
    /// [`StockError::Load`](crate::error::StockError::Load) when one exists
    /// but cannot be read or decoded.
    fn load(&self) -> Result<Option<Vec<Item>>>;

    /// Replace the snapshot with `items`.
    fn save(&mut self, items: &[Item]) -> Result<()>;

    /// Human readable location of the snapshot, for messages and logs.
    fn describe(&self) -> String;
}
