use itertools::Itertools;

use crate::types::{Inventory, ItemsetCount};

/// Render frequent itemsets as `itemsets = [..], supp = <count>` lines.
///
/// Items within an itemset come out in descending singleton-support order,
/// which is ascending id order since ids are assigned in rank order.
pub fn render_itemsets(itemset_counts: &[ItemsetCount], inventory: &Inventory) -> Vec<String> {
    itemset_counts
        .iter()
        .map(|(itemset, count)| {
            let items = itemset.iter().map(|item_id| inventory[item_id]).join(", ");
            format!("itemsets = [{}], supp = {}", items, count)
        })
        .collect()
}
