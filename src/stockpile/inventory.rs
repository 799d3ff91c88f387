//! # Inventory Core
//!
//! [`Inventory`] owns the authoritative in-memory item sequence for the running
//! process together with the [`DataStore`] that holds its durable snapshot.
//!
//! Every successful mutation is followed by a synchronous save. Validation
//! happens before anything is touched, so a rejected call leaves the sequence
//! exactly as it was. A failed save does *not* roll the sequence back: memory
//! reflects the attempted mutation and disk keeps the previous snapshot until
//! the next successful [`Inventory::persist`].
//!
//! Positions are the only identity an item has. Removing an item shifts every
//! later item down by one; batch deletions go through
//! [`Inventory::delete_items`], which applies them highest index first.

use crate::error::{Result, StockError};
use crate::model::{Item, LoadPolicy};
use crate::store::DataStore;
use tracing::{debug, info, warn};

pub struct Inventory<S: DataStore> {
    store: S,
    items: Vec<Item>,
}

impl<S: DataStore> Inventory<S> {
    /// Load the inventory from `store`.
    ///
    /// A missing snapshot yields an empty inventory. An unreadable one is
    /// handled according to `policy`.
    pub fn initialize(store: S, policy: LoadPolicy) -> Result<Self> {
        let items = match store.load() {
            Ok(Some(items)) => {
                debug!(count = items.len(), source = %store.describe(), "loaded inventory");
                items
            }
            Ok(None) => {
                debug!(source = %store.describe(), "no inventory snapshot, starting empty");
                Vec::new()
            }
            Err(e) => match policy {
                LoadPolicy::Fail => return Err(e),
                LoadPolicy::StartEmpty => {
                    warn!(source = %store.describe(), error = %e, "discarding unreadable inventory");
                    Vec::new()
                }
            },
        };

        Ok(Self { store, items })
    }

    /// Write the current sequence to the store, replacing its snapshot.
    pub fn persist(&mut self) -> Result<()> {
        self.store.save(&self.items)?;
        debug!(count = self.items.len(), target = %self.store.describe(), "persisted inventory");
        Ok(())
    }

    /// Parse `stock_text` and append a new item, then persist.
    pub fn add_item(&mut self, name: &str, stock_text: &str) -> Result<&Item> {
        let item = parse_item(name, stock_text)?;
        info!(name = %item.name, stock = item.stock, "adding item");
        self.items.push(item);
        self.persist()?;
        Ok(&self.items[self.items.len() - 1])
    }

    /// Remove the item at the 0-based `index`, then persist.
    pub fn delete_item(&mut self, index: usize) -> Result<Item> {
        self.check_index(index)?;
        let removed = self.items.remove(index);
        info!(index, name = %removed.name, "deleted item");
        self.persist()?;
        Ok(removed)
    }

    /// Remove several items in one go and persist once.
    ///
    /// Every index is checked before anything is removed. Duplicates are
    /// removed once. The removed items are returned in request order.
    pub fn delete_items(&mut self, indexes: &[usize]) -> Result<Vec<Item>> {
        for &index in indexes {
            self.check_index(index)?;
        }

        let mut order: Vec<usize> = indexes.to_vec();
        order.sort_unstable_by(|a, b| b.cmp(a));
        order.dedup();

        let mut removed: Vec<(usize, Item)> = order
            .into_iter()
            .map(|index| (index, self.items.remove(index)))
            .collect();
        info!(count = removed.len(), "deleted items");

        self.persist()?;

        let mut result = Vec::with_capacity(removed.len());
        for index in indexes {
            if let Some(pos) = removed.iter().position(|(i, _)| i == index) {
                result.push(removed.swap_remove(pos).1);
            }
        }
        Ok(result)
    }

    /// Read-only view of the current sequence.
    pub fn list(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.items.len() {
            return Err(StockError::OutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(())
    }
}

/// Validate user-entered text into an [`Item`].
///
/// The name must be non-empty. The stock must be a decimal integer with no
/// surrounding whitespace, and not negative.
pub fn parse_item(name: &str, stock_text: &str) -> Result<Item> {
    if name.is_empty() {
        return Err(StockError::InvalidInput(
            "item name cannot be empty".to_string(),
        ));
    }
    if stock_text.is_empty() {
        return Err(StockError::InvalidInput(
            "stock value cannot be empty".to_string(),
        ));
    }
    let stock: i64 = stock_text.parse().map_err(|_| {
        StockError::InvalidInput(format!("stock '{}' is not an integer", stock_text))
    })?;
    if stock < 0 {
        return Err(StockError::InvalidInput(format!(
            "stock cannot be negative (got {})",
            stock
        )));
    }
    Ok(Item::new(name, stock))
}
