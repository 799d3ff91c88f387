use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::index_items;
use crate::inventory::Inventory;
use crate::store::DataStore;

pub const EMPTY_MESSAGE: &str = "No items in inventory.";

pub fn run<S: DataStore>(inventory: &Inventory<S>) -> Result<CmdResult> {
    let listed = index_items(inventory.list());
    let mut result = CmdResult::default().with_listed_items(listed);
    if inventory.is_empty() {
        result.add_message(CmdMessage::info(EMPTY_MESSAGE));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::index::DisplayIndex;
    use crate::model::{Item, LoadPolicy};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn lists_items_with_one_based_ids() {
        let store =
            InMemoryStore::with_items(vec![Item::new("Widget", 12), Item::new("Gadget", 0)]);
        let inv = Inventory::initialize(store, LoadPolicy::Fail).unwrap();

        let result = run(&inv).unwrap();

        assert_eq!(result.listed_items.len(), 2);
        assert_eq!(result.listed_items[0].index, DisplayIndex::from_position(0));
        assert_eq!(result.listed_items[1].item, Item::new("Gadget", 0));
        assert!(result.messages.is_empty());
    }

    #[test]
    fn empty_inventory_reports_it() {
        let inv = Inventory::initialize(InMemoryStore::new(), LoadPolicy::Fail).unwrap();

        let result = run(&inv).unwrap();

        assert!(result.listed_items.is_empty());
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Info);
        assert_eq!(result.messages[0].content, EMPTY_MESSAGE);
    }
}
