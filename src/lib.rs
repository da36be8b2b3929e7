//! Frequent itemset mining with the Apriori level-wise search.
//!
//! Candidates of size k+1 are generated by extending frequent size-k
//! itemsets with single ranked items, then filtered by downward closure
//! against everything already found non-frequent, and only then counted
//! against the transactions.

use std::collections::HashSet;

use tracing::debug;

pub mod candidates;
pub mod display;
pub mod error;
pub mod ranking;
pub mod support;
pub mod types;

pub use display::render_itemsets;
pub use error::{MiningError, MiningResult};

use candidates::{generate_candidates, prune_candidates, seed_singletons};
use ranking::{build_inventory, intern_transactions, rank_items};
use support::evaluate_support;
use types::{Inventory, ItemName, Itemset, ItemsetCount, SupportCount};

/// Mine every itemset whose support count meets `min_support` (inclusive).
///
/// Returns the frequent `(itemset, count)` pairs in level order (singletons,
/// then pairs, ...), discovery order within a level, together with the
/// inventory mapping interned ids back to item names. Ids are assigned in
/// descending singleton-support order, ties broken lexically.
///
/// An empty transaction collection is not an error and yields an empty
/// result. A zero threshold or a transaction listing the same item twice is
/// rejected.
pub fn apriori<'i>(
    transactions: &[Vec<ItemName<'i>>],
    min_support: SupportCount,
) -> MiningResult<(Vec<ItemsetCount>, Inventory<'i>)> {
    validate(transactions, min_support)?;

    let ranked_items = rank_items(transactions);
    let (reverse_lookup, inventory) = build_inventory(&ranked_items);
    let transactions = intern_transactions(transactions, &reverse_lookup);
    let items: Vec<_> = (0..ranked_items.len()).collect();

    let mut all_frequent: Vec<ItemsetCount> = vec![];
    let mut rejected: Vec<Itemset> = vec![];

    let singletons = seed_singletons(&items);
    let (mut frequent, non_frequent) = evaluate_support(singletons, &transactions, min_support);
    all_frequent.extend(frequent.iter().cloned());
    rejected.extend(bare_itemsets(non_frequent));
    debug!(level = 1, frequent = frequent.len(), "level complete");

    let mut level = 1;
    while !frequent.is_empty() {
        level += 1;

        let previous: Vec<Itemset> = frequent.iter().map(|(itemset, _)| itemset.clone()).collect();
        let candidates = generate_candidates(&previous, &items);
        let (survivors, pruned) = prune_candidates(candidates, &rejected);
        rejected.extend(pruned);

        let (next_frequent, non_frequent) = evaluate_support(survivors, &transactions, min_support);
        rejected.extend(bare_itemsets(non_frequent));
        all_frequent.extend(next_frequent.iter().cloned());
        debug!(
            level,
            frequent = next_frequent.len(),
            rejected = rejected.len(),
            "level complete"
        );

        frequent = next_frequent;
    }

    Ok((all_frequent, inventory))
}

/// Project counted itemsets down to bare itemsets for the rejected set.
fn bare_itemsets(itemset_counts: Vec<ItemsetCount>) -> Vec<Itemset> {
    itemset_counts
        .into_iter()
        .map(|(itemset, _)| itemset)
        .collect()
}

fn validate(transactions: &[Vec<ItemName>], min_support: SupportCount) -> MiningResult<()> {
    if min_support == 0 {
        return Err(MiningError::ZeroMinSupport);
    }

    for (index, transaction) in transactions.iter().enumerate() {
        let mut seen: HashSet<ItemName> = HashSet::with_capacity(transaction.len());
        for &item in transaction {
            if !seen.insert(item) {
                return Err(MiningError::DuplicateItem {
                    item: item.to_string(),
                    index,
                });
            }
        }
    }

    Ok(())
}
