use super::DataStore;
use crate::error::{Result, StockError};
use crate::model::Item;

/// In-memory storage for testing and development.
/// Does NOT persist data beyond the lifetime of the value.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    snapshot: Option<Vec<Item>>,
    corrupt: bool,
    fail_writes: bool,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an existing snapshot, as if a previous run had saved it.
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            snapshot: Some(items),
            ..Self::default()
        }
    }

    /// Make `load` behave like an unparseable backing file.
    pub fn corrupt(mut self) -> Self {
        self.corrupt = true;
        self
    }

    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    pub fn snapshot(&self) -> Option<&[Item]> {
        self.snapshot.as_deref()
    }

    /// Number of successful saves.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Option<Vec<Item>>> {
        if self.corrupt {
            return Err(StockError::Load("memory snapshot is corrupt".to_string()));
        }
        Ok(self.snapshot.clone())
    }

    fn save(&mut self, items: &[Item]) -> Result<()> {
        if self.fail_writes {
            return Err(StockError::Persistence(
                "memory store rejects writes".to_string(),
            ));
        }
        self.snapshot = Some(items.to_vec());
        self.corrupt = false;
        self.saves += 1;
        Ok(())
    }

    fn describe(&self) -> String {
        "<memory>".to_string()
    }
}
