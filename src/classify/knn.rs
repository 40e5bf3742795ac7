//! Weighted K-Nearest-Neighbors classifier over cosine distance.
//!
//! Brute-force distance computation is deliberate: corpora in this domain
//! are a few thousand short texts, where scanning every training vector is
//! cheaper and simpler than maintaining an index structure. Queries are
//! evaluated in parallel; each individual query keeps strictly sequential,
//! deterministic neighbor ordering.
//!
//! # Examples
//!
//! ```
//! use sentimen::classify::knn::KnnClassifier;
//!
//! let vectors = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
//! let labels = vec!["positif", "negatif"];
//!
//! let mut knn = KnnClassifier::new(1).unwrap();
//! knn.fit(vectors, labels).unwrap();
//!
//! let predictions = knn.predict(&[vec![0.9, 0.1]]);
//! assert_eq!(predictions, vec![Some("positif")]);
//! ```

use rayon::prelude::*;

use crate::error::{Result, SentimenError};

/// Vote weight floor: keeps an exact match (distance 0) finite while still
/// letting it dominate every non-zero distance.
const DISTANCE_EPSILON: f64 = 1e-6;

/// K-Nearest-Neighbors classifier with inverse-distance weighted voting.
///
/// Generic over the label type; the classifier never inspects labels beyond
/// equality. Single-use: `fit` replaces all stored state.
#[derive(Clone, Debug)]
pub struct KnnClassifier<L> {
    k: usize,
    train_vectors: Vec<Vec<f64>>,
    train_labels: Vec<L>,
    train_norms: Vec<f64>,
}

/// Cosine distance `1 - dot(a, b) / (‖a‖·‖b‖)`, with precomputed norms.
///
/// A zero norm on either side means "no similarity measurable"; the
/// distance is defined as 1.0 rather than dividing by zero.
fn cosine_distance(norm_a: f64, a: &[f64], norm_b: f64, b: &[f64]) -> f64 {
    if norm_a == 0.0 || norm_b == 0.0 {
        return 1.0;
    }
    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    1.0 - dot / (norm_a * norm_b)
}

fn l2_norm(vector: &[f64]) -> f64 {
    vector.iter().map(|x| x * x).sum::<f64>().sqrt()
}

impl<L: Clone + PartialEq + Send + Sync> KnnClassifier<L> {
    /// Create a new classifier that votes over the `k` nearest neighbors.
    ///
    /// Fails with `InvalidInput` when `k` is zero. `k` larger than the
    /// training set is allowed; all stored points vote in that case.
    pub fn new(k: usize) -> Result<Self> {
        if k == 0 {
            return Err(SentimenError::invalid_input("k must be at least 1"));
        }
        Ok(KnnClassifier {
            k,
            train_vectors: Vec::new(),
            train_labels: Vec::new(),
            train_norms: Vec::new(),
        })
    }

    /// Store training vectors and labels, precomputing L2 norms.
    ///
    /// Vectors and labels correspond by position; mismatched lengths are a
    /// caller error.
    pub fn fit(&mut self, vectors: Vec<Vec<f64>>, labels: Vec<L>) -> Result<&mut Self> {
        if vectors.len() != labels.len() {
            return Err(SentimenError::invalid_input(format!(
                "got {} training vectors but {} labels",
                vectors.len(),
                labels.len()
            )));
        }
        self.train_norms = vectors.iter().map(|v| l2_norm(v)).collect();
        self.train_vectors = vectors;
        self.train_labels = labels;
        Ok(self)
    }

    /// Predict a label for each query vector.
    ///
    /// `None` per query when no training points are stored. Output order
    /// matches query order.
    pub fn predict(&self, queries: &[Vec<f64>]) -> Vec<Option<L>> {
        queries
            .par_iter()
            .map(|query| self.predict_single(query))
            .collect()
    }

    /// Predict the label for a single query vector.
    pub fn predict_single(&self, query: &[f64]) -> Option<L> {
        if self.train_vectors.is_empty() {
            return None;
        }

        let query_norm = l2_norm(query);
        let mut distances: Vec<(f64, usize)> = self
            .train_vectors
            .iter()
            .enumerate()
            .map(|(i, train)| {
                (
                    cosine_distance(query_norm, query, self.train_norms[i], train),
                    i,
                )
            })
            .collect();

        // Stable sort: equal distances keep training storage order, which
        // the voting tie-break below depends on.
        distances.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

        let neighbors = &distances[..self.k.min(distances.len())];

        // Accumulate votes in an insertion-ordered list. On equal total
        // weight the label first encountered while walking neighbors in
        // ascending distance wins; this tie-break is part of the contract.
        let mut weights: Vec<(L, f64)> = Vec::new();
        for &(distance, index) in neighbors {
            let label = &self.train_labels[index];
            let weight = 1.0 / (distance + DISTANCE_EPSILON);
            match weights.iter_mut().find(|(l, _)| l == label) {
                Some((_, total)) => *total += weight,
                None => weights.push((label.clone(), weight)),
            }
        }

        let mut best: Option<(L, f64)> = None;
        for (label, total) in weights {
            match &best {
                Some((_, best_total)) if total <= *best_total => {}
                _ => best = Some((label, total)),
            }
        }
        best.map(|(label, _)| label)
    }

    /// Number of stored training points.
    pub fn train_size(&self) -> usize {
        self.train_vectors.len()
    }

    /// The configured neighbor count.
    pub fn k(&self) -> usize {
        self.k
    }
}
