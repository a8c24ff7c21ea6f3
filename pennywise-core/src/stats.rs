//! Per-category spending statistics.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::expense::CategorizedRecord;

/// Aggregated spending for one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryStat {
    pub category: Category,
    pub total_amount: f64,
    pub count: usize,
}

/// Group records by category, summing amounts and counting records.
///
/// Categories with no records are omitted. Output is sorted by descending
/// total; equal totals keep the order in which their category was first seen
/// in the input (the sort is stable over first-seen insertion order).
pub fn aggregate_by_category(records: &[CategorizedRecord]) -> Vec<CategoryStat> {
    let mut stats: Vec<CategoryStat> = Vec::new();
    let mut slot: HashMap<Category, usize> = HashMap::new();

    for record in records {
        let idx = *slot.entry(record.category).or_insert_with(|| {
            stats.push(CategoryStat {
                category: record.category,
                total_amount: 0.0,
                count: 0,
            });
            stats.len() - 1
        });
        stats[idx].total_amount += record.amount;
        stats[idx].count += 1;
    }

    stats.sort_by(|a, b| b.total_amount.total_cmp(&a.total_amount));
    stats
}
