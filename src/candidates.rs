use crate::support::is_subset;
use crate::types::{ItemId, Itemset};

/// Wrap each item as a level-1 candidate itemset, order preserving.
pub fn seed_singletons(items: &[ItemId]) -> Vec<Itemset> {
    items.iter().map(|&item| vec![item]).collect()
}

/// Extend every frequent size-k itemset with one ranked item it does not
/// already contain, producing the deduplicated size-(k+1) candidate set in
/// first-discovery order.
///
/// Deduplication is a linear scan over canonical (sorted) itemsets. O(n²),
/// fine at this scale.
pub fn generate_candidates(frequent: &[Itemset], items: &[ItemId]) -> Vec<Itemset> {
    let mut candidates: Vec<Itemset> = vec![];

    for itemset in frequent {
        for &item in items {
            if itemset.contains(&item) {
                continue;
            }
            let mut candidate = itemset.clone();
            candidate.push(item);
            candidate.sort_unstable();
            if !candidates.contains(&candidate) {
                candidates.push(candidate);
            }
        }
    }

    candidates
}

/// Split candidates into (survivors, pruned) by downward closure: a
/// candidate is pruned iff some already-rejected itemset is a subset of it.
/// The first matching rejected itemset settles a candidate. Never counts
/// support.
pub fn prune_candidates(
    candidates: Vec<Itemset>,
    rejected: &[Itemset],
) -> (Vec<Itemset>, Vec<Itemset>) {
    // Nothing rejected yet, nothing to scan.
    if rejected.is_empty() {
        return (candidates, vec![]);
    }

    let mut survivors = vec![];
    let mut pruned = vec![];

    for candidate in candidates {
        if rejected.iter().any(|itemset| is_subset(itemset, &candidate)) {
            pruned.push(candidate);
        } else {
            survivors.push(candidate);
        }
    }

    (survivors, pruned)
}
