//! Text normalization applied before feature extraction.

use regex::Regex;

/// Canonicalizes free text: lowercase, whitespace runs collapsed to a single
/// space, leading/trailing whitespace removed. Total over all strings and
/// idempotent.
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    whitespace: Regex,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextNormalizer {
    pub fn new() -> Self {
        Self {
            whitespace: Regex::new(r"\s+").unwrap(),
        }
    }

    pub fn normalize(&self, input: &str) -> String {
        let lowered = input.to_lowercase();
        self.whitespace.replace_all(&lowered, " ").trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(input: &str) -> String {
        TextNormalizer::new().normalize(input)
    }

    #[test]
    fn test_lowercases() {
        assert_eq!(norm("LUNCH At Restaurant"), "lunch at restaurant");
    }

    #[test]
    fn test_collapses_whitespace_runs() {
        assert_eq!(norm("monthly \t rent\n\npayment"), "monthly rent payment");
    }

    #[test]
    fn test_trims_ends() {
        assert_eq!(norm("  coffee shop  "), "coffee shop");
    }

    #[test]
    fn test_whitespace_only_becomes_empty() {
        assert_eq!(norm(" \t\r\n "), "");
    }

    #[test]
    fn test_idempotent() {
        let samples = ["Taxi  RIDE", " Gas   station ", "internet bill"];
        let n = TextNormalizer::new();
        for s in samples {
            let once = n.normalize(s);
            assert_eq!(n.normalize(&once), once);
        }
    }
}
