//! The classifier service: normalize → extract features → rank categories.
//!
//! Built once from a corpus and immutable afterwards. There is no interior
//! mutability, so a single instance (or an `Arc` of one) serves concurrent
//! predict calls without coordination; construct it at startup and pass the
//! handle down.

use std::collections::HashSet;

use pennywise_core::Category;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::corpus::{SeedExample, seed_corpus};
use crate::model::MultinomialLogit;
use crate::normalize::TextNormalizer;
use crate::vectorizer::TfIdfVectorizer;

/// Vocabulary cap for the fitted vectorizer.
const MAX_FEATURES: usize = 1000;

/// Fatal construction-time failure. A process that hits this has no
/// classifier at all: service unavailable, not a bad prediction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrainingError {
    #[error("training corpus is empty")]
    EmptyCorpus,
    #[error("training corpus covers {0} categories; at least 2 required")]
    TooFewCategories(usize),
}

/// Per-call precondition violation. Distinct from a low-confidence result:
/// a low probability is still a successful prediction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("description is empty")]
    EmptyDescription,
}

/// One prediction: the winning category, its own probability, and the three
/// highest-probability categories in descending order (winner first).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Classification {
    pub category: Category,
    pub probability: f64,
    pub top_classes: Vec<Category>,
}

/// Normalizer, fitted vocabulary, and fitted model, trained once.
pub struct ExpenseClassifier {
    normalizer: TextNormalizer,
    vectorizer: TfIdfVectorizer,
    model: MultinomialLogit,
}

impl ExpenseClassifier {
    /// Train on the built-in seed corpus.
    pub fn from_seed() -> Result<Self, TrainingError> {
        Self::train(&seed_corpus())
    }

    /// Train on an arbitrary corpus. Fails if the corpus is empty or covers
    /// fewer than two categories.
    pub fn train(corpus: &[SeedExample]) -> Result<Self, TrainingError> {
        if corpus.is_empty() {
            return Err(TrainingError::EmptyCorpus);
        }
        let covered: HashSet<Category> = corpus.iter().map(|e| e.category).collect();
        if covered.len() < 2 {
            return Err(TrainingError::TooFewCategories(covered.len()));
        }

        let normalizer = TextNormalizer::new();
        let documents: Vec<String> = corpus
            .iter()
            .map(|e| normalizer.normalize(&e.text))
            .collect();
        let labels: Vec<usize> = corpus.iter().map(|e| e.category.index()).collect();

        let vectorizer = TfIdfVectorizer::fit(&documents, MAX_FEATURES);
        let features: Vec<Vec<f64>> = documents.iter().map(|d| vectorizer.transform(d)).collect();
        let model = MultinomialLogit::fit(&features, &labels, Category::ALL.len());

        log::info!(
            "trained expense classifier: {} examples, {} terms, {} categories",
            corpus.len(),
            vectorizer.vocabulary_size(),
            covered.len()
        );

        Ok(Self {
            normalizer,
            vectorizer,
            model,
        })
    }

    /// Full probability distribution in category order. Sums to 1 for any
    /// non-empty description, including one with no known terms.
    pub fn probabilities(
        &self,
        description: &str,
    ) -> Result<Vec<(Category, f64)>, ClassifyError> {
        if description.trim().is_empty() {
            return Err(ClassifyError::EmptyDescription);
        }
        let normalized = self.normalizer.normalize(description);
        let features = self.vectorizer.transform(&normalized);
        let probs = self.model.predict_proba(&features);
        Ok(Category::ALL.into_iter().zip(probs).collect())
    }

    /// Classify a description. The winner is the argmax of the distribution;
    /// equal probabilities resolve to the category earlier in the
    /// enumeration, for the winner and for the top-3 ranking alike.
    pub fn predict(&self, description: &str) -> Result<Classification, ClassifyError> {
        let mut ranked = self.probabilities(description)?;
        // Stable sort over a category-ordered list: ties keep category order.
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

        let (category, probability) = ranked[0];
        let top_classes = ranked.iter().take(3).map(|&(c, _)| c).collect();
        Ok(Classification {
            category,
            probability,
            top_classes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_category_corpus() -> Vec<SeedExample> {
        vec![
            SeedExample::new("monthly rent", Category::Rent),
            SeedExample::new("rent payment", Category::Rent),
            SeedExample::new("apartment lease", Category::Rent),
            SeedExample::new("electricity bill", Category::Utilities),
            SeedExample::new("water bill", Category::Utilities),
            SeedExample::new("internet service", Category::Utilities),
        ]
    }

    #[test]
    fn test_empty_corpus_is_fatal() {
        assert_eq!(
            ExpenseClassifier::train(&[]).err(),
            Some(TrainingError::EmptyCorpus)
        );
    }

    #[test]
    fn test_single_category_corpus_is_fatal() {
        let corpus = vec![
            SeedExample::new("lunch", Category::Food),
            SeedExample::new("dinner", Category::Food),
        ];
        assert_eq!(
            ExpenseClassifier::train(&corpus).err(),
            Some(TrainingError::TooFewCategories(1))
        );
    }

    #[test]
    fn test_empty_description_is_rejected() {
        let classifier = ExpenseClassifier::train(&two_category_corpus()).unwrap();
        assert_eq!(
            classifier.predict("").err(),
            Some(ClassifyError::EmptyDescription)
        );
        assert_eq!(
            classifier.predict("   \t ").err(),
            Some(ClassifyError::EmptyDescription)
        );
    }

    #[test]
    fn test_predict_separates_trained_categories() {
        let classifier = ExpenseClassifier::train(&two_category_corpus()).unwrap();
        let rent = classifier.predict("rent payment").unwrap();
        assert_eq!(rent.category, Category::Rent);
        let utilities = classifier.predict("electricity bill").unwrap();
        assert_eq!(utilities.category, Category::Utilities);
    }

    #[test]
    fn test_distribution_sums_to_one() {
        let classifier = ExpenseClassifier::train(&two_category_corpus()).unwrap();
        let distribution = classifier.probabilities("water bill").unwrap();
        assert_eq!(distribution.len(), Category::ALL.len());
        let sum: f64 = distribution.iter().map(|&(_, p)| p).sum();
        assert!((sum - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_winner_leads_top_classes() {
        let classifier = ExpenseClassifier::train(&two_category_corpus()).unwrap();
        let result = classifier.predict("apartment lease").unwrap();
        assert_eq!(result.top_classes.len(), 3);
        assert_eq!(result.top_classes[0], result.category);
    }

    #[test]
    fn test_classification_serializes_contract_names() {
        let classifier = ExpenseClassifier::train(&two_category_corpus()).unwrap();
        let result = classifier.predict("monthly rent").unwrap();
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"category\":\"Rent\""));
        let back: Classification = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
