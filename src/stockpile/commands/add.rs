use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::store::DataStore;

pub fn run<S: DataStore>(
    inventory: &mut Inventory<S>,
    name: &str,
    stock_text: &str,
) -> Result<CmdResult> {
    let item = inventory.add_item(name, stock_text)?.clone();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Item added: {} (Stock: {})",
        item.name, item.stock
    )));
    Ok(result.with_affected_items(vec![item]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StockError;
    use crate::model::{Item, LoadPolicy};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn adds_and_reports_the_new_item() {
        let mut inv = Inventory::initialize(InMemoryStore::new(), LoadPolicy::Fail).unwrap();

        let result = run(&mut inv, "Widget", "12").unwrap();

        assert_eq!(result.affected_items, vec![Item::new("Widget", 12)]);
        assert_eq!(result.messages[0].content, "Item added: Widget (Stock: 12)");
        assert_eq!(inv.len(), 1);
    }

    #[test]
    fn invalid_stock_propagates_as_error() {
        let mut inv = Inventory::initialize(InMemoryStore::new(), LoadPolicy::Fail).unwrap();

        let result = run(&mut inv, "Widget", "a dozen");

        assert!(matches!(result, Err(StockError::InvalidInput(_))));
        assert!(inv.is_empty());
    }
}
