use std::collections::HashMap;

pub type ItemId = usize;
pub type ItemName<'i> = &'i str;

/// Canonical itemset: distinct ids, sorted ascending. Because ids are
/// assigned in rank order, ascending id order is descending support order.
pub type Itemset = Vec<ItemId>;
pub type Transaction = Vec<ItemId>;

pub type SupportCount = u32;
pub type ItemsetCount = (Itemset, SupportCount);

pub type ReverseLookup<'i> = HashMap<ItemName<'i>, ItemId>;
pub type Inventory<'i> = HashMap<ItemId, ItemName<'i>>;
