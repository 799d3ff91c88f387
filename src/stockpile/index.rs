//! # Item Identifiers
//!
//! Items have no identity other than their position. Internally that is a
//! 0-based index into the inventory; users see and type 1-based ids, which is
//! what [`DisplayIndex`] models.
//!
//! Because ids are positional they are only meaningful against the listing
//! they were read from: deleting item `2` renumbers everything after it.
//!
//! - [`DisplayIndex`]: a parsed, 1-based id
//! - [`DisplayItem`]: an [`Item`] paired with its id, for rendering
//! - [`index_items`]: numbers a slice of items for display

use crate::error::StockError;
use crate::model::Item;
use std::str::FromStr;

/// A user-facing, 1-based item id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayIndex(usize);

impl DisplayIndex {
    /// Id for the item at the 0-based `position`.
    pub fn from_position(position: usize) -> Self {
        Self(position + 1)
    }

    /// The 0-based position this id refers to.
    pub fn position(&self) -> usize {
        self.0 - 1
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DisplayIndex {
    type Err = StockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(StockError::InvalidInput("item id cannot be empty".into()));
        }
        match s.parse::<usize>() {
            Ok(0) | Err(_) => Err(StockError::InvalidInput(format!(
                "invalid item id: {}",
                s
            ))),
            Ok(n) => Ok(Self(n)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub index: DisplayIndex,
    pub item: Item,
}

pub fn index_items(items: &[Item]) -> Vec<DisplayItem> {
    items
        .iter()
        .enumerate()
        .map(|(position, item)| DisplayItem {
            index: DisplayIndex::from_position(position),
            item: item.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positive_ids() {
        assert_eq!("1".parse::<DisplayIndex>().unwrap().position(), 0);
        assert_eq!("12".parse::<DisplayIndex>().unwrap().position(), 11);
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        assert_eq!(" 3 ".parse::<DisplayIndex>().unwrap().get(), 3);
    }

    #[test]
    fn rejects_zero_negative_and_garbage() {
        for input in ["0", "-1", "abc", "", "  ", "1.0", "p1"] {
            assert!(
                matches!(
                    input.parse::<DisplayIndex>(),
                    Err(StockError::InvalidInput(_))
                ),
                "{:?} should not parse",
                input
            );
        }
    }

    #[test]
    fn numbering_starts_at_one_and_follows_order() {
        let items = vec![Item::new("Widget", 12), Item::new("Gadget", 0)];
        let indexed = index_items(&items);

        assert_eq!(indexed.len(), 2);
        assert_eq!(indexed[0].index.to_string(), "1");
        assert_eq!(indexed[0].item.name, "Widget");
        assert_eq!(indexed[1].index.to_string(), "2");
        assert_eq!(indexed[1].item.name, "Gadget");
    }
}
