//! The closed set of spending categories.
//!
//! Declaration order is the tie-break order used everywhere a ranking has to
//! pick between equal probabilities, so reordering variants is a behavior
//! change, not a cosmetic one.

use serde::{Deserialize, Serialize};

/// A spending category. Serialized as its exact capitalized name; this is
/// the wire contract shared with the API and storage layers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Food,
    Travel,
    Shopping,
    Rent,
    Utilities,
    Entertainment,
    Healthcare,
    Transportation,
    Other,
}

impl Category {
    /// All nine categories, in tie-break order.
    pub const ALL: [Category; 9] = [
        Category::Food,
        Category::Travel,
        Category::Shopping,
        Category::Rent,
        Category::Utilities,
        Category::Entertainment,
        Category::Healthcare,
        Category::Transportation,
        Category::Other,
    ];

    /// Canonical name, matching the serialized form.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Travel => "Travel",
            Category::Shopping => "Shopping",
            Category::Rent => "Rent",
            Category::Utilities => "Utilities",
            Category::Entertainment => "Entertainment",
            Category::Healthcare => "Healthcare",
            Category::Transportation => "Transportation",
            Category::Other => "Other",
        }
    }

    /// Parse a canonical name. Case-sensitive; anything outside the closed
    /// set is rejected.
    pub fn from_name(name: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Position in the tie-break order.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
