//! The seed training corpus.
//!
//! Hand-authored (text, category) pairs, compiled in so every process trains
//! the same model. A CSV loader is provided for swapping in an external
//! corpus; labels outside the closed category set are rejected at load time.

use std::path::Path;

use anyhow::{Context, Result, bail};
use pennywise_core::Category;
use serde::{Deserialize, Serialize};

/// One labeled training example.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeedExample {
    pub text: String,
    pub category: Category,
}

impl SeedExample {
    pub fn new(text: impl Into<String>, category: Category) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }
}

/// The built-in corpus as owned examples, in seed order.
pub fn seed_corpus() -> Vec<SeedExample> {
    SEED.iter()
        .map(|&(text, category)| SeedExample::new(text, category))
        .collect()
}

/// Load a corpus from a `text,category` CSV file. A leading header row is
/// skipped; blank rows are ignored; any unknown category label fails the
/// whole load with the offending row number.
pub fn load_corpus_csv(path: impl AsRef<Path>) -> Result<Vec<SeedExample>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_path(path.as_ref())
        .with_context(|| format!("opening {}", path.as_ref().display()))?;

    let mut examples = Vec::new();
    for (row, result) in rdr.records().enumerate() {
        let record = result?;
        let text = record.get(0).unwrap_or("").trim();
        let label = record.get(1).unwrap_or("").trim();

        if text.is_empty() && label.is_empty() {
            continue;
        }
        if row == 0 && text == "text" && label == "category" {
            continue;
        }
        if text.is_empty() {
            bail!("row {}: empty description", row + 1);
        }
        let Some(category) = Category::from_name(label) else {
            bail!("row {}: unknown category label '{}'", row + 1, label);
        };
        examples.push(SeedExample::new(text, category));
    }

    Ok(examples)
}

/// Seed pairs in category order, Food through Other.
#[rustfmt::skip]
const SEED: &[(&str, Category)] = &[
    // Food
    ("lunch at restaurant", Category::Food),
    ("groceries from supermarket", Category::Food),
    ("coffee shop", Category::Food),
    ("dinner with friends", Category::Food),
    ("pizza delivery", Category::Food),
    ("breakfast", Category::Food),
    ("fast food", Category::Food),
    ("grocery shopping", Category::Food),
    ("restaurant bill", Category::Food),
    ("food delivery", Category::Food),
    ("dining out", Category::Food),
    ("takeout food", Category::Food),
    ("cafe", Category::Food),
    ("bakery", Category::Food),
    ("food store", Category::Food),
    ("supermarket", Category::Food),
    ("grocery store", Category::Food),
    ("restaurant", Category::Food),
    ("lunch", Category::Food),
    ("dinner", Category::Food),
    ("snacks", Category::Food),
    ("food purchase", Category::Food),
    ("eating out", Category::Food),
    ("food order", Category::Food),
    ("meal", Category::Food),
    ("food items", Category::Food),
    ("grocery", Category::Food),
    ("food shopping", Category::Food),
    ("restaurant meal", Category::Food),
    ("food delivery service", Category::Food),
    // Travel
    ("hotel booking", Category::Travel),
    ("flight ticket", Category::Travel),
    ("train fare", Category::Travel),
    ("taxi ride", Category::Travel),
    ("airport parking", Category::Travel),
    ("vacation rental", Category::Travel),
    ("travel insurance", Category::Travel),
    ("car rental", Category::Travel),
    ("bus ticket", Category::Travel),
    ("hotel stay", Category::Travel),
    ("airplane ticket", Category::Travel),
    ("hotel room", Category::Travel),
    ("lodging", Category::Travel),
    ("accommodation", Category::Travel),
    ("flight", Category::Travel),
    ("airfare", Category::Travel),
    ("train ticket", Category::Travel),
    ("travel expenses", Category::Travel),
    ("vacation", Category::Travel),
    ("trip", Category::Travel),
    ("hotel reservation", Category::Travel),
    ("airport", Category::Travel),
    ("travel booking", Category::Travel),
    ("resort", Category::Travel),
    ("hostel", Category::Travel),
    ("travel cost", Category::Travel),
    ("journey", Category::Travel),
    ("travel fare", Category::Travel),
    // Shopping
    ("clothing purchase", Category::Shopping),
    ("electronics store", Category::Shopping),
    ("online shopping", Category::Shopping),
    ("department store", Category::Shopping),
    ("shoes", Category::Shopping),
    ("gadgets", Category::Shopping),
    ("apparel", Category::Shopping),
    ("retail store", Category::Shopping),
    ("amazon purchase", Category::Shopping),
    ("mall shopping", Category::Shopping),
    ("clothes", Category::Shopping),
    ("clothing", Category::Shopping),
    ("shopping", Category::Shopping),
    ("retail purchase", Category::Shopping),
    ("store purchase", Category::Shopping),
    ("buying clothes", Category::Shopping),
    ("electronics", Category::Shopping),
    ("shopping mall", Category::Shopping),
    ("retail", Category::Shopping),
    ("purchase", Category::Shopping),
    ("buying", Category::Shopping),
    ("store", Category::Shopping),
    ("shopping trip", Category::Shopping),
    ("retail shopping", Category::Shopping),
    ("online purchase", Category::Shopping),
    ("ecommerce", Category::Shopping),
    ("shopping spree", Category::Shopping),
    // Rent
    ("monthly rent", Category::Rent),
    ("apartment rent", Category::Rent),
    ("house rent", Category::Rent),
    ("rental payment", Category::Rent),
    ("lease payment", Category::Rent),
    ("rent payment", Category::Rent),
    ("housing rent", Category::Rent),
    ("apartment payment", Category::Rent),
    ("rental", Category::Rent),
    ("lease", Category::Rent),
    ("housing payment", Category::Rent),
    ("monthly rental", Category::Rent),
    ("apartment lease", Category::Rent),
    ("house payment", Category::Rent),
    ("rental fee", Category::Rent),
    ("housing cost", Category::Rent),
    // Utilities
    ("electricity bill", Category::Utilities),
    ("water bill", Category::Utilities),
    ("gas bill", Category::Utilities),
    ("internet bill", Category::Utilities),
    ("phone bill", Category::Utilities),
    ("utility payment", Category::Utilities),
    ("cable tv", Category::Utilities),
    ("internet service", Category::Utilities),
    ("electric bill", Category::Utilities),
    ("power bill", Category::Utilities),
    ("utility bill", Category::Utilities),
    ("phone service", Category::Utilities),
    ("internet", Category::Utilities),
    ("cable", Category::Utilities),
    ("utilities", Category::Utilities),
    ("electric", Category::Utilities),
    ("water", Category::Utilities),
    ("gas utility", Category::Utilities),
    ("internet provider", Category::Utilities),
    ("phone service bill", Category::Utilities),
    ("utility", Category::Utilities),
    ("electricity", Category::Utilities),
    ("utility service", Category::Utilities),
    // Entertainment
    ("movie tickets", Category::Entertainment),
    ("concert", Category::Entertainment),
    ("streaming service", Category::Entertainment),
    ("netflix subscription", Category::Entertainment),
    ("spotify premium", Category::Entertainment),
    ("theater show", Category::Entertainment),
    ("gaming subscription", Category::Entertainment),
    ("watching film", Category::Entertainment),
    ("watching movie", Category::Entertainment),
    ("cinema", Category::Entertainment),
    ("movie", Category::Entertainment),
    ("film", Category::Entertainment),
    ("theater", Category::Entertainment),
    ("movie theater", Category::Entertainment),
    ("cinema ticket", Category::Entertainment),
    ("movie ticket", Category::Entertainment),
    ("film ticket", Category::Entertainment),
    ("watching films", Category::Entertainment),
    ("watching movies", Category::Entertainment),
    ("going to movies", Category::Entertainment),
    ("going to cinema", Category::Entertainment),
    ("movie night", Category::Entertainment),
    ("film screening", Category::Entertainment),
    ("entertainment", Category::Entertainment),
    ("streaming", Category::Entertainment),
    ("music subscription", Category::Entertainment),
    ("gaming", Category::Entertainment),
    ("video games", Category::Entertainment),
    ("concert ticket", Category::Entertainment),
    ("show ticket", Category::Entertainment),
    ("theater ticket", Category::Entertainment),
    ("entertainment subscription", Category::Entertainment),
    ("music service", Category::Entertainment),
    ("video streaming", Category::Entertainment),
    ("entertainment service", Category::Entertainment),
    // Healthcare
    ("doctor visit", Category::Healthcare),
    ("pharmacy", Category::Healthcare),
    ("medicine", Category::Healthcare),
    ("hospital bill", Category::Healthcare),
    ("dental checkup", Category::Healthcare),
    ("prescription", Category::Healthcare),
    ("medical insurance", Category::Healthcare),
    ("doctor", Category::Healthcare),
    ("hospital", Category::Healthcare),
    ("medical", Category::Healthcare),
    ("healthcare", Category::Healthcare),
    ("pharmacy purchase", Category::Healthcare),
    ("medication", Category::Healthcare),
    ("drugs", Category::Healthcare),
    ("medical bill", Category::Healthcare),
    ("health insurance", Category::Healthcare),
    ("dental", Category::Healthcare),
    ("doctor appointment", Category::Healthcare),
    ("medical visit", Category::Healthcare),
    ("health checkup", Category::Healthcare),
    ("medical care", Category::Healthcare),
    ("healthcare service", Category::Healthcare),
    // Transportation
    ("gas station", Category::Transportation),
    ("fuel", Category::Transportation),
    ("uber ride", Category::Transportation),
    ("lyft", Category::Transportation),
    ("parking fee", Category::Transportation),
    ("toll", Category::Transportation),
    ("metro card", Category::Transportation),
    ("public transport", Category::Transportation),
    ("gas", Category::Transportation),
    ("petrol", Category::Transportation),
    ("ride share", Category::Transportation),
    ("taxi", Category::Transportation),
    ("cab", Category::Transportation),
    ("parking", Category::Transportation),
    ("parking ticket", Category::Transportation),
    ("transit", Category::Transportation),
    ("public transportation", Category::Transportation),
    ("bus", Category::Transportation),
    ("subway", Category::Transportation),
    ("metro", Category::Transportation),
    ("transport", Category::Transportation),
    ("transportation", Category::Transportation),
    ("fuel cost", Category::Transportation),
    ("gas cost", Category::Transportation),
    ("ride", Category::Transportation),
    ("commute", Category::Transportation),
    // Other
    ("miscellaneous", Category::Other),
    ("general expense", Category::Other),
    ("unknown", Category::Other),
    ("other purchase", Category::Other),
    ("other", Category::Other),
    ("misc", Category::Other),
    ("general", Category::Other),
    ("unclassified", Category::Other),
    ("other expense", Category::Other),
    ("misc expense", Category::Other),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_covers_every_category() {
        let covered: HashSet<Category> = seed_corpus().iter().map(|e| e.category).collect();
        assert_eq!(covered.len(), Category::ALL.len());
    }

    #[test]
    fn test_seed_texts_are_non_empty_and_normalized() {
        for example in seed_corpus() {
            assert!(!example.text.trim().is_empty());
            assert_eq!(example.text, example.text.to_lowercase());
        }
    }

    #[test]
    fn test_seed_has_enough_examples_per_category() {
        for category in Category::ALL {
            let n = seed_corpus()
                .iter()
                .filter(|e| e.category == category)
                .count();
            assert!(n >= 10, "{category} has only {n} seed examples");
        }
    }
}
