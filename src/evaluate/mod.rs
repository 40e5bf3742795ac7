//! Evaluation harness: train/test splitting, classification metrics, and
//! stratified k-fold cross-validation.

pub mod kfold;
pub mod metrics;
pub mod split;

pub use kfold::{KFoldSummary, run_stratified_kfold};
pub use metrics::{EvaluationReport, LabelMetrics, calculate_metrics};
pub use split::{TrainTestSplit, train_test_split};
