//! Stratified k-fold cross-validation for picking the neighbor count.
//!
//! The evaluator sweeps candidate k values over the same fold assignment,
//! fitting one vectorizer per fold (vectorization does not depend on k) and
//! a fresh classifier per (fold, k) pair. The whole procedure is driven by
//! a single seeded PRNG, so identical inputs and seed reproduce identical
//! summaries.
//!
//! # Examples
//!
//! ```
//! use sentimen::evaluate::kfold::run_stratified_kfold;
//!
//! let docs: Vec<String> = ["vaksin aman", "vaksin bagus", "vaksin bahaya", "vaksin buruk"]
//!     .iter()
//!     .map(|d| d.to_string())
//!     .collect();
//! let labels = vec!["positif", "positif", "negatif", "negatif"];
//!
//! let summaries = run_stratified_kfold(&docs, &labels, &[1, 3], 2, 42).unwrap();
//! assert_eq!(summaries.len(), 2);
//! assert_eq!(summaries[0].k, 1);
//! ```

use std::collections::BTreeMap;
use std::hash::Hash;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::classify::knn::KnnClassifier;
use crate::error::{Result, SentimenError};
use crate::feature::tfidf::TfIdfVectorizer;

/// Cross-validation outcome for one candidate k.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KFoldSummary {
    /// The candidate neighbor count.
    pub k: usize,
    /// Test accuracy per contributing fold, in fold order.
    pub fold_accuracies: Vec<f64>,
    /// Arithmetic mean of the fold accuracies.
    pub avg_accuracy: f64,
    /// Sample standard deviation (N-1); 0.0 with fewer than two folds.
    pub std_dev: f64,
}

/// Partition labeled documents into `n_folds` stratified folds.
///
/// Pairs are grouped by label; groups are shuffled in place in sorted label
/// order (so the arrangement does not depend on the labels' order of first
/// appearance), concatenated, shuffled once more as a whole, then dealt to
/// folds round-robin. Fold sizes differ by at most one. Fully determined by
/// the seed and input order.
pub fn assign_stratified_folds<L>(
    documents: &[String],
    labels: &[L],
    n_folds: usize,
    seed: u64,
) -> Result<Vec<Vec<(String, L)>>>
where
    L: Clone + Ord,
{
    if documents.len() != labels.len() {
        return Err(SentimenError::invalid_input(format!(
            "got {} documents but {} labels",
            documents.len(),
            labels.len()
        )));
    }
    if n_folds == 0 {
        return Err(SentimenError::invalid_input("n_folds must be at least 1"));
    }

    let mut by_label: BTreeMap<&L, Vec<(String, L)>> = BTreeMap::new();
    for (doc, label) in documents.iter().zip(labels.iter()) {
        by_label
            .entry(label)
            .or_default()
            .push((doc.clone(), label.clone()));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut combined: Vec<(String, L)> = Vec::with_capacity(documents.len());
    for (_, mut group) in by_label {
        group.shuffle(&mut rng);
        combined.extend(group);
    }
    combined.shuffle(&mut rng);

    let mut folds: Vec<Vec<(String, L)>> = vec![Vec::new(); n_folds];
    for (index, item) in combined.into_iter().enumerate() {
        folds[index % n_folds].push(item);
    }
    Ok(folds)
}

/// Run stratified k-fold cross-validation over candidate k values.
///
/// Per fold: fold i is the test set, the remaining folds (in assignment
/// order) are the training set; folds with an empty side are skipped and
/// contribute nothing. One vectorizer is fitted per fold and reused across
/// all k values; each k gets a fresh classifier. Fold accuracy counts null
/// predictions as misses (the denominator is the whole test fold).
///
/// Candidate k values that collected no fold results are dropped from the
/// output; the rest appear in input order with mean and sample standard
/// deviation.
pub fn run_stratified_kfold<L>(
    documents: &[String],
    labels: &[L],
    k_options: &[usize],
    n_folds: usize,
    seed: u64,
) -> Result<Vec<KFoldSummary>>
where
    L: Clone + Ord + Hash + PartialEq + Send + Sync,
{
    if let Some(&bad) = k_options.iter().find(|&&k| k == 0) {
        return Err(SentimenError::invalid_input(format!(
            "candidate k must be at least 1, got {bad}"
        )));
    }

    let folds = assign_stratified_folds(documents, labels, n_folds, seed)?;

    let mut accuracies_per_k: Vec<Vec<f64>> = vec![Vec::new(); k_options.len()];

    for test_index in 0..folds.len() {
        let test = &folds[test_index];
        let train: Vec<&(String, L)> = folds
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != test_index)
            .flat_map(|(_, fold)| fold.iter())
            .collect();

        if train.is_empty() || test.is_empty() {
            continue;
        }

        let train_docs: Vec<String> = train.iter().map(|(doc, _)| doc.clone()).collect();
        let train_labels: Vec<L> = train.iter().map(|(_, label)| label.clone()).collect();
        let test_docs: Vec<String> = test.iter().map(|(doc, _)| doc.clone()).collect();

        let mut vectorizer = TfIdfVectorizer::new();
        vectorizer.fit(&train_docs);
        let train_vectors = vectorizer.transform(&train_docs);
        let test_vectors = vectorizer.transform(&test_docs);

        for (k_index, &k) in k_options.iter().enumerate() {
            let mut knn = KnnClassifier::new(k)?;
            knn.fit(train_vectors.clone(), train_labels.clone())?;
            let predictions = knn.predict(&test_vectors);

            let correct = test
                .iter()
                .zip(predictions.iter())
                .filter(|((_, truth), predicted)| predicted.as_ref() == Some(truth))
                .count();
            accuracies_per_k[k_index].push(correct as f64 / test.len() as f64);
        }
    }

    let summaries = k_options
        .iter()
        .zip(accuracies_per_k)
        .filter(|(_, accuracies)| !accuracies.is_empty())
        .map(|(&k, accuracies)| {
            let avg_accuracy = accuracies.iter().sum::<f64>() / accuracies.len() as f64;
            let std_dev = if accuracies.len() > 1 {
                let variance = accuracies
                    .iter()
                    .map(|a| (a - avg_accuracy).powi(2))
                    .sum::<f64>()
                    / (accuracies.len() - 1) as f64;
                variance.sqrt()
            } else {
                0.0
            };
            KFoldSummary {
                k,
                fold_accuracies: accuracies,
                avg_accuracy,
                std_dev,
            }
        })
        .collect();

    Ok(summaries)
}
