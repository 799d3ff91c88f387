use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::inventory::Inventory;
use crate::store::DataStore;

pub fn run<S: DataStore>(
    inventory: &mut Inventory<S>,
    indexes: &[DisplayIndex],
) -> Result<CmdResult> {
    let positions: Vec<usize> = indexes.iter().map(DisplayIndex::position).collect();
    let removed = inventory.delete_items(&positions)?;

    let mut result = CmdResult::default();
    let mut seen = Vec::new();
    for index in indexes {
        if seen.contains(index) {
            continue;
        }
        seen.push(*index);
    }
    for (index, item) in seen.iter().zip(&removed) {
        result.add_message(CmdMessage::success(format!(
            "Item [{}] deleted: {}",
            index, item.name
        )));
    }

    Ok(result.with_affected_items(removed))
}
