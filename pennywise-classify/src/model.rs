//! Multinomial logistic regression fitted by full-batch gradient descent.
//!
//! Weights start at zero and every step is a pure function of the corpus, so
//! two trainings over the same feature matrix are bit-identical. There is no
//! RNG and no seed to manage.

/// Iteration cap for gradient descent.
pub const MAX_ITERATIONS: usize = 1000;

const LEARNING_RATE: f64 = 1.0;
const L2_PENALTY: f64 = 1e-4;
const TOLERANCE: f64 = 1e-7;

/// Fitted per-class weights and intercepts.
#[derive(Debug, Clone, PartialEq)]
pub struct MultinomialLogit {
    weights: Vec<Vec<f64>>,
    intercepts: Vec<f64>,
}

impl MultinomialLogit {
    /// Fit one weight row per class from dense feature rows and class
    /// indices. Callers guarantee `labels[i] < n_classes`, at least one row,
    /// and at least two distinct labels; the classifier service validates the
    /// corpus before calling in.
    pub fn fit(features: &[Vec<f64>], labels: &[usize], n_classes: usize) -> Self {
        debug_assert_eq!(features.len(), labels.len());
        debug_assert!(labels.iter().all(|&l| l < n_classes));

        let n_samples = features.len();
        let n_features = features.first().map_or(0, Vec::len);

        // Feature rows come from short descriptions, so train over the
        // non-zero entries only. The public surface stays dense.
        let rows: Vec<Vec<(usize, f64)>> = features
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .filter(|(_, v)| **v != 0.0)
                    .map(|(i, &v)| (i, v))
                    .collect()
            })
            .collect();

        let mut weights = vec![vec![0.0; n_features]; n_classes];
        let mut intercepts = vec![0.0; n_classes];
        let scale = 1.0 / n_samples as f64;

        for _ in 0..MAX_ITERATIONS {
            let mut grad_w = vec![vec![0.0; n_features]; n_classes];
            let mut grad_b = vec![0.0; n_classes];

            for (row, &label) in rows.iter().zip(labels) {
                let mut logits = intercepts.clone();
                for (class, logit) in logits.iter_mut().enumerate() {
                    for &(index, value) in row {
                        *logit += weights[class][index] * value;
                    }
                }
                let probs = softmax(&logits);

                for class in 0..n_classes {
                    let err = probs[class] - if class == label { 1.0 } else { 0.0 };
                    grad_b[class] += err;
                    for &(index, value) in row {
                        grad_w[class][index] += err * value;
                    }
                }
            }

            let mut max_step = 0.0_f64;
            for class in 0..n_classes {
                for index in 0..n_features {
                    // L2 applies to weights only, not intercepts.
                    let g = grad_w[class][index] * scale + L2_PENALTY * weights[class][index];
                    weights[class][index] -= LEARNING_RATE * g;
                    max_step = max_step.max(g.abs());
                }
                let g = grad_b[class] * scale;
                intercepts[class] -= LEARNING_RATE * g;
                max_step = max_step.max(g.abs());
            }

            if max_step < TOLERANCE {
                break;
            }
        }

        Self {
            weights,
            intercepts,
        }
    }

    /// Probability for every class, summing to 1. Well-defined for any input
    /// of the fitted dimension, including the zero vector (which yields the
    /// intercept-only distribution).
    pub fn predict_proba(&self, features: &[f64]) -> Vec<f64> {
        let logits: Vec<f64> = self
            .weights
            .iter()
            .zip(&self.intercepts)
            .map(|(row, &intercept)| {
                intercept
                    + row
                        .iter()
                        .zip(features)
                        .map(|(w, x)| w * x)
                        .sum::<f64>()
            })
            .collect();
        softmax(&logits)
    }

    pub fn n_classes(&self) -> usize {
        self.weights.len()
    }
}

/// Numerically stable softmax (max-subtracted).
fn softmax(logits: &[f64]) -> Vec<f64> {
    let max = logits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = logits.iter().map(|&z| (z - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}
