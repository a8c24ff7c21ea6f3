//! TF-IDF feature extraction over unigram and bigram terms.
//!
//! The vocabulary is fitted once from the training corpus and never updated
//! at prediction time; unknown terms simply contribute nothing.

use std::collections::HashMap;

use crate::stopwords::is_stop_word;

/// Fitted term → feature-index vocabulary with per-term IDF weights.
#[derive(Debug, Clone)]
pub struct TfIdfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    n_documents: usize,
}

impl TfIdfVectorizer {
    /// Fit a vocabulary from normalized documents, capped at the
    /// `max_features` highest-scoring terms (corpus term frequency × IDF).
    ///
    /// Score ties break lexicographically and feature indices are assigned in
    /// lexicographic term order, so two fits over the same corpus agree
    /// bit-for-bit.
    pub fn fit(documents: &[String], max_features: usize) -> Self {
        let mut document_frequency: HashMap<String, usize> = HashMap::new();
        let mut corpus_frequency: HashMap<String, usize> = HashMap::new();

        for doc in documents {
            let doc_terms = terms(doc);
            for term in &doc_terms {
                *corpus_frequency.entry(term.clone()).or_insert(0) += 1;
            }
            let mut unique: Vec<&String> = doc_terms.iter().collect();
            unique.sort();
            unique.dedup();
            for term in unique {
                *document_frequency.entry(term.clone()).or_insert(0) += 1;
            }
        }

        let n_documents = documents.len();
        let mut candidates: Vec<(String, f64)> = corpus_frequency
            .into_iter()
            .map(|(term, tf)| {
                let score = tf as f64 * smooth_idf(n_documents, document_frequency[&term]);
                (term, score)
            })
            .collect();
        candidates.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        candidates.truncate(max_features);

        let mut selected: Vec<String> = candidates.into_iter().map(|(term, _)| term).collect();
        selected.sort();

        let mut vocabulary = HashMap::with_capacity(selected.len());
        let mut idf = Vec::with_capacity(selected.len());
        for (index, term) in selected.into_iter().enumerate() {
            idf.push(smooth_idf(n_documents, document_frequency[&term]));
            vocabulary.insert(term, index);
        }

        Self {
            vocabulary,
            idf,
            n_documents,
        }
    }

    /// Transform a normalized document into an L2-normalized TF-IDF vector of
    /// dimension `vocabulary_size()`. Out-of-vocabulary terms are ignored; an
    /// all-unknown document maps to the zero vector.
    pub fn transform(&self, document: &str) -> Vec<f64> {
        let mut features = vec![0.0; self.idf.len()];
        for term in terms(document) {
            if let Some(&index) = self.vocabulary.get(&term) {
                features[index] += 1.0;
            }
        }

        for (index, value) in features.iter_mut().enumerate() {
            *value *= self.idf[index];
        }

        let norm = features.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for value in &mut features {
                *value /= norm;
            }
        }
        features
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.vocabulary.contains_key(term)
    }

    pub fn n_documents(&self) -> usize {
        self.n_documents
    }
}

/// Unigrams and contiguous bigrams of the stop-word-filtered token stream.
/// Bigrams are formed after filtering, so they may bridge a removed stop word
/// ("lunch at restaurant" yields the bigram "lunch restaurant").
fn terms(document: &str) -> Vec<String> {
    let tokens: Vec<&str> = document
        .split_whitespace()
        .filter(|t| !is_stop_word(t))
        .collect();

    let mut terms: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
    for pair in tokens.windows(2) {
        terms.push(format!("{} {}", pair[0], pair[1]));
    }
    terms
}

/// Smoothed inverse document frequency: ln((1 + n) / (1 + df)) + 1.
fn smooth_idf(n_documents: usize, document_frequency: usize) -> f64 {
    ((1.0 + n_documents as f64) / (1.0 + document_frequency as f64)).ln() + 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_terms_are_unigrams_and_bigrams() {
        assert_eq!(
            terms("monthly rent payment"),
            vec![
                "monthly".to_string(),
                "rent".to_string(),
                "payment".to_string(),
                "monthly rent".to_string(),
                "rent payment".to_string(),
            ]
        );
    }

    #[test]
    fn test_bigrams_bridge_removed_stop_words() {
        assert_eq!(
            terms("lunch at the restaurant"),
            vec![
                "lunch".to_string(),
                "restaurant".to_string(),
                "lunch restaurant".to_string(),
            ]
        );
    }

    #[test]
    fn test_stop_words_never_enter_vocabulary() {
        let v = TfIdfVectorizer::fit(&docs(&["the lunch at a restaurant", "the rent"]), 1000);
        assert!(!v.contains_term("the"));
        assert!(!v.contains_term("at"));
        assert!(v.contains_term("lunch"));
        assert!(v.contains_term("rent"));
    }

    #[test]
    fn test_transform_dimension_matches_vocabulary() {
        let v = TfIdfVectorizer::fit(&docs(&["coffee shop", "gas station", "taxi ride"]), 1000);
        assert_eq!(v.n_documents(), 3);
        let features = v.transform("coffee shop");
        assert_eq!(features.len(), v.vocabulary_size());
        assert!(features.iter().all(|&x| x >= 0.0));
    }

    #[test]
    fn test_transform_is_l2_normalized() {
        let v = TfIdfVectorizer::fit(&docs(&["electricity bill", "water bill"]), 1000);
        let features = v.transform("water bill");
        let norm: f64 = features.iter().map(|x| x * x).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_out_of_vocabulary_maps_to_zero_vector() {
        let v = TfIdfVectorizer::fit(&docs(&["hotel booking", "flight ticket"]), 1000);
        let features = v.transform("zzz qqq");
        assert!(features.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_max_features_caps_vocabulary() {
        let v = TfIdfVectorizer::fit(
            &docs(&["alpha beta gamma", "delta epsilon zeta", "eta theta iota"]),
            4,
        );
        assert_eq!(v.vocabulary_size(), 4);
    }

    #[test]
    fn test_fit_is_deterministic() {
        let corpus = docs(&[
            "lunch at restaurant",
            "monthly rent",
            "hotel booking",
            "electricity bill",
        ]);
        let a = TfIdfVectorizer::fit(&corpus, 1000);
        let b = TfIdfVectorizer::fit(&corpus, 1000);
        assert_eq!(a.vocabulary, b.vocabulary);
        assert_eq!(a.idf, b.idf);
        assert_eq!(a.transform("rent payment"), b.transform("rent payment"));
    }
}
