//! Expense record types shared across the service boundary.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::category::Category;

/// A stored expense, as the storage layer hands it back. The category and
/// probability are whatever the classifier assigned when the expense was
/// created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    /// Storage-assigned identifier
    pub id: i64,
    /// Free-text description the user entered
    pub description: String,
    /// Positive amount spent
    pub amount: f64,
    /// Date of the expense, if the user supplied one
    pub date: Option<NaiveDate>,
    /// Category assigned at creation time
    pub category: Category,
    /// Classifier confidence recorded at creation time
    pub probability: f64,
}

impl Expense {
    /// Create a new Expense
    pub fn new(
        id: i64,
        description: impl Into<String>,
        amount: f64,
        date: Option<NaiveDate>,
        category: Category,
        probability: f64,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            amount,
            date,
            category,
            probability,
        }
    }

    /// The minimal shape aggregation needs.
    pub fn categorized(&self) -> CategorizedRecord {
        CategorizedRecord {
            category: self.category,
            amount: self.amount,
        }
    }
}

/// A (category, amount) pair, all the aggregator knows about an expense.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CategorizedRecord {
    pub category: Category,
    pub amount: f64,
}

impl CategorizedRecord {
    pub fn new(category: Category, amount: f64) -> Self {
        Self { category, amount }
    }
}

impl From<&Expense> for CategorizedRecord {
    fn from(expense: &Expense) -> Self {
        expense.categorized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expense_to_categorized_record() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        let expense = Expense::new(
            7,
            "lunch at restaurant",
            18.40,
            Some(date),
            Category::Food,
            0.91,
        );
        let record = expense.categorized();
        assert_eq!(record.category, Category::Food);
        assert_eq!(record.amount, 18.40);
        assert_eq!(CategorizedRecord::from(&expense), record);
    }

    #[test]
    fn test_expense_serde_uses_contract_names() {
        let expense = Expense::new(1, "bus ticket", 2.75, None, Category::Transportation, 0.8);
        let json = serde_json::to_string(&expense).unwrap();
        assert!(json.contains("\"category\":\"Transportation\""));
        let back: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(back, expense);
    }
}
