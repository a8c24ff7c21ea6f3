//! pennywise-core: shared contract types and category aggregation

pub mod category;
pub mod expense;
pub mod stats;

pub use category::Category;
pub use expense::{CategorizedRecord, Expense};
pub use stats::{CategoryStat, aggregate_by_category};
