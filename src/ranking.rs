use std::collections::{HashMap, HashSet};

use itertools::Itertools;

use crate::support::support_count;
use crate::types::{Inventory, ItemName, ReverseLookup, Transaction};

/// Distinct items in first-appearance order, every item that occurs in at
/// least one transaction exactly once.
fn unique_items<'i>(transactions: &[Vec<ItemName<'i>>]) -> Vec<ItemName<'i>> {
    let mut seen: HashSet<ItemName> = HashSet::new();
    let mut items = vec![];

    for transaction in transactions {
        for &item in transaction {
            if seen.insert(item) {
                items.push(item);
            }
        }
    }

    items
}

/// Rank the distinct items by descending singleton support, counted through
/// the support oracle. Ties fall back to lexical order of the item name so
/// the ranking is deterministic regardless of input traversal order.
pub fn rank_items<'i>(transactions: &[Vec<ItemName<'i>>]) -> Vec<ItemName<'i>> {
    unique_items(transactions)
        .into_iter()
        .map(|item| (item, support_count(&[item], transactions)))
        .sorted_by(|&(a, count_a), &(b, count_b)| {
            count_b.cmp(&count_a).then_with(|| a.cmp(b))
        })
        .map(|(item, _)| item)
        .collect()
}

/// Assign dense ids to the ranked items, id order matching rank order.
pub fn build_inventory<'i>(ranked_items: &[ItemName<'i>]) -> (ReverseLookup<'i>, Inventory<'i>) {
    let mut reverse_lookup: ReverseLookup = HashMap::with_capacity(ranked_items.len());
    let mut inventory: Inventory = HashMap::with_capacity(ranked_items.len());

    for (item_id, &item) in ranked_items.iter().enumerate() {
        reverse_lookup.insert(item, item_id);
        inventory.insert(item_id, item);
    }

    (reverse_lookup, inventory)
}

/// Map each transaction onto sorted interned ids.
pub fn intern_transactions(
    transactions: &[Vec<ItemName>],
    reverse_lookup: &ReverseLookup,
) -> Vec<Transaction> {
    transactions
        .iter()
        .map(|transaction| {
            let mut interned: Transaction =
                transaction.iter().map(|item| reverse_lookup[item]).collect();
            interned.sort_unstable();
            interned
        })
        .collect()
}
