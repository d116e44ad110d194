//! Grouping of normalized transactions into output batches.

use std::collections::BTreeMap;

use crate::types::Transaction;

/// Transactions grouped by period key, each group rendered to its own file.
///
/// The key is `""` when month splitting is off, otherwise `YYYYMM`. The map
/// is ordered so files come out in chronological key order; within a group
/// the source-file order is kept.
#[derive(Debug, Default)]
pub struct Batch {
    groups: BTreeMap<String, Vec<Transaction>>,
}

impl Batch {
    pub fn from_transactions(transactions: Vec<Transaction>, split_by_month: bool) -> Self {
        let mut groups: BTreeMap<String, Vec<Transaction>> = BTreeMap::new();

        for txn in transactions {
            let key = if split_by_month {
                txn.posted.format("%Y%m").to_string()
            } else {
                String::new()
            };
            groups.entry(key).or_default().push(txn);
        }

        Batch { groups }
    }

    /// Groups in ascending period-key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Transaction])> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Total transaction count across all groups.
    pub fn total(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
