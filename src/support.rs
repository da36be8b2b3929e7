use crate::types::{Itemset, ItemsetCount, SupportCount, Transaction};

/// Number of transactions containing `itemset` as a subset.
///
/// Generic over the item type so the same oracle serves item ranking (names)
/// and the mining loop (interned ids). Monotone under inclusion: for
/// A ⊆ B, the count of A is at least the count of B.
pub fn support_count<T: PartialEq>(itemset: &[T], transactions: &[Vec<T>]) -> SupportCount {
    transactions
        .iter()
        .filter(|transaction| itemset.iter().all(|item| transaction.contains(item)))
        .count() as SupportCount
}

pub fn is_subset(inner: &Itemset, outer: &Itemset) -> bool {
    inner.iter().all(|item| outer.contains(item))
}

/// Partition `candidates` into (frequent, non-frequent), counting support
/// once per candidate. Frequent means `count >= min_support`.
pub fn evaluate_support(
    candidates: Vec<Itemset>,
    transactions: &[Transaction],
    min_support: SupportCount,
) -> (Vec<ItemsetCount>, Vec<ItemsetCount>) {
    let mut frequent: Vec<ItemsetCount> = vec![];
    let mut non_frequent: Vec<ItemsetCount> = vec![];

    for candidate in candidates {
        let support = support_count(&candidate, transactions);
        if support >= min_support {
            frequent.push((candidate, support));
        } else {
            non_frequent.push((candidate, support));
        }
    }

    (frequent, non_frequent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn support_counts_subset_containment() {
        let transactions = vec![vec![0, 1, 2], vec![0, 1], vec![0, 2], vec![1, 2]];

        assert_eq!(support_count(&vec![0], &transactions), 3);
        assert_eq!(support_count(&vec![0, 1], &transactions), 2);
        assert_eq!(support_count(&vec![0, 1, 2], &transactions), 1);
        assert_eq!(support_count(&vec![3], &transactions), 0);
    }

    #[test]
    fn support_of_empty_itemset_is_transaction_count() {
        let transactions: Vec<Transaction> = vec![vec![0], vec![1]];
        assert_eq!(support_count(&Itemset::new(), &transactions), 2);
    }

    #[test]
    fn support_over_names() {
        let transactions = vec![vec!["bread", "milk"], vec!["bread"]];
        assert_eq!(support_count(&["bread"], &transactions), 2);
        assert_eq!(support_count(&["bread", "milk"], &transactions), 1);
    }

    #[test]
    fn subset_test_ignores_order_of_outer() {
        assert!(is_subset(&vec![1], &vec![0, 1, 2]));
        assert!(is_subset(&vec![0, 2], &vec![0, 1, 2]));
        assert!(!is_subset(&vec![0, 3], &vec![0, 1, 2]));
        assert!(is_subset(&vec![], &vec![0]));
    }

    #[test]
    fn evaluate_partitions_by_inclusive_threshold() {
        let transactions = vec![vec![0, 1], vec![0, 1], vec![0, 2]];
        let candidates = vec![vec![0], vec![1], vec![2], vec![0, 1]];

        let (frequent, non_frequent) = evaluate_support(candidates, &transactions, 2);

        assert_eq!(frequent, vec![(vec![0], 3), (vec![1], 2), (vec![0, 1], 2)]);
        assert_eq!(non_frequent, vec![(vec![2], 1)]);
    }

    #[test]
    fn evaluate_empty_input() {
        let transactions = vec![vec![0]];
        let (frequent, non_frequent) = evaluate_support(vec![], &transactions, 1);

        assert!(frequent.is_empty());
        assert!(non_frequent.is_empty());
    }
}
