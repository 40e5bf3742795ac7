//! Confusion-matrix-based classification metrics.
//!
//! # Examples
//!
//! ```
//! use sentimen::evaluate::metrics::calculate_metrics;
//!
//! let y_true = vec!["a", "a", "b"];
//! let y_pred = vec![Some("a"), Some("b"), Some("b")];
//! let report = calculate_metrics(&y_true, &y_pred, &["a", "b"]);
//!
//! assert!((report.accuracy - 2.0 / 3.0).abs() < 1e-12);
//! assert_eq!(report.confusion_matrix[0], vec![1, 1]);
//! ```

use std::hash::Hash;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Precision/recall/F1 and support for one label.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabelMetrics<L> {
    pub label: L,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
    /// Count of true instances of this label among valid predictions.
    pub support: usize,
}

/// A full evaluation report over a fixed label list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport<L> {
    /// The label list the matrix rows/columns are indexed by.
    pub labels: Vec<L>,
    /// Confusion matrix: `confusion_matrix[true][predicted]`.
    pub confusion_matrix: Vec<Vec<usize>>,
    /// Fraction of valid (non-null) predictions that were correct.
    pub accuracy: f64,
    /// Per-label metrics, in label-list order.
    pub per_label: Vec<LabelMetrics<L>>,
}

impl<L: Clone> EvaluationReport<L> {
    /// An all-zero report for the given labels; returned when there are no
    /// valid predictions to score.
    fn zeroed(labels: &[L]) -> Self {
        EvaluationReport {
            labels: labels.to_vec(),
            confusion_matrix: vec![vec![0; labels.len()]; labels.len()],
            accuracy: 0.0,
            per_label: labels
                .iter()
                .map(|label| LabelMetrics {
                    label: label.clone(),
                    precision: 0.0,
                    recall: 0.0,
                    f1_score: 0.0,
                    support: 0,
                })
                .collect(),
        }
    }
}

/// Score predictions against ground truth over an explicit label list.
///
/// Null predictions (classifier had nothing to vote with) are skipped
/// entirely: they contribute to neither the matrix nor any numerator or
/// denominator. With zero valid predictions the result is an explicit
/// all-zero report, never an error. Per-label fallbacks: precision and
/// recall are 0 when their denominators are 0; F1 is 0 when both are 0.
pub fn calculate_metrics<L: Clone + Eq + Hash>(
    y_true: &[L],
    y_pred: &[Option<L>],
    labels: &[L],
) -> EvaluationReport<L> {
    let valid: Vec<(&L, &L)> = y_true
        .iter()
        .zip(y_pred.iter())
        .filter_map(|(t, p)| p.as_ref().map(|p| (t, p)))
        .collect();

    if valid.is_empty() {
        return EvaluationReport::zeroed(labels);
    }

    let index_of: AHashMap<&L, usize> =
        labels.iter().enumerate().map(|(i, l)| (l, i)).collect();

    let mut matrix = vec![vec![0usize; labels.len()]; labels.len()];
    let mut correct = 0usize;
    for (t, p) in &valid {
        if t == p {
            correct += 1;
        }
        if let (Some(&row), Some(&col)) = (index_of.get(t), index_of.get(p)) {
            matrix[row][col] += 1;
        }
    }
    let accuracy = correct as f64 / valid.len() as f64;

    let per_label = labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let tp = matrix[i][i];
            let fp: usize = (0..labels.len()).filter(|&r| r != i).map(|r| matrix[r][i]).sum();
            let fn_: usize = (0..labels.len()).filter(|&c| c != i).map(|c| matrix[i][c]).sum();

            let precision = if tp + fp > 0 {
                tp as f64 / (tp + fp) as f64
            } else {
                0.0
            };
            let recall = if tp + fn_ > 0 {
                tp as f64 / (tp + fn_) as f64
            } else {
                0.0
            };
            let f1_score = if precision + recall > 0.0 {
                2.0 * precision * recall / (precision + recall)
            } else {
                0.0
            };

            LabelMetrics {
                label: label.clone(),
                precision,
                recall,
                f1_score,
                support: tp + fn_,
            }
        })
        .collect();

    EvaluationReport {
        labels: labels.to_vec(),
        confusion_matrix: matrix,
        accuracy,
        per_label,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_round_trip() {
        let y_true = vec!["a", "a", "b"];
        let y_pred = vec![Some("a"), Some("b"), Some("b")];
        let report = calculate_metrics(&y_true, &y_pred, &["a", "b"]);

        assert_eq!(report.confusion_matrix, vec![vec![1, 1], vec![0, 1]]);
        assert!((report.accuracy - 2.0 / 3.0).abs() < 1e-12);

        let a = &report.per_label[0];
        assert_eq!(a.precision, 1.0);
        assert_eq!(a.recall, 0.5);
        assert_eq!(a.support, 2);

        let b = &report.per_label[1];
        assert_eq!(b.precision, 0.5);
        assert_eq!(b.recall, 1.0);
        assert_eq!(b.support, 1);
    }

    #[test]
    fn test_all_null_predictions_zero_report() {
        let y_true = vec!["a", "b"];
        let y_pred: Vec<Option<&str>> = vec![None, None];
        let report = calculate_metrics(&y_true, &y_pred, &["a", "b"]);

        assert_eq!(report.accuracy, 0.0);
        for metrics in &report.per_label {
            assert_eq!(metrics.precision, 0.0);
            assert_eq!(metrics.recall, 0.0);
            assert_eq!(metrics.f1_score, 0.0);
            assert_eq!(metrics.support, 0);
        }
        assert_eq!(report.confusion_matrix, vec![vec![0, 0], vec![0, 0]]);
    }

    #[test]
    fn test_null_predictions_skipped_not_counted() {
        // One null among three: accuracy over the two valid predictions.
        let y_true = vec!["a", "a", "b"];
        let y_pred = vec![Some("a"), None, Some("b")];
        let report = calculate_metrics(&y_true, &y_pred, &["a", "b"]);

        assert!((report.accuracy - 1.0).abs() < 1e-12);
        assert_eq!(report.per_label[0].support, 1);
    }

    #[test]
    fn test_perfect_predictions() {
        let y_true = vec!["a", "b", "a"];
        let y_pred = vec![Some("a"), Some("b"), Some("a")];
        let report = calculate_metrics(&y_true, &y_pred, &["a", "b"]);

        assert_eq!(report.accuracy, 1.0);
        for metrics in &report.per_label {
            assert_eq!(metrics.precision, 1.0);
            assert_eq!(metrics.recall, 1.0);
            assert_eq!(metrics.f1_score, 1.0);
        }
    }

    #[test]
    fn test_label_never_predicted_zero_precision() {
        let y_true = vec!["a", "b"];
        let y_pred = vec![Some("a"), Some("a")];
        let report = calculate_metrics(&y_true, &y_pred, &["a", "b"]);

        let b = &report.per_label[1];
        assert_eq!(b.precision, 0.0);
        assert_eq!(b.recall, 0.0);
        assert_eq!(b.f1_score, 0.0);
        assert_eq!(b.support, 1);
    }

    #[test]
    fn test_empty_inputs() {
        let report = calculate_metrics::<&str>(&[], &[], &["a", "b"]);
        assert_eq!(report.accuracy, 0.0);
        assert_eq!(report.per_label.len(), 2);
    }
}
