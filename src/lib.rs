//! # Sentimen
//!
//! Sentiment labeling and classification for short Indonesian social-media
//! texts.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Text-preprocessing pipeline (cleanup, slang normalization, stopword
//!   removal, Indonesian stemming)
//! - TF-IDF vectorization with smoothed IDF
//! - Weighted K-Nearest-Neighbors classification over cosine distance
//! - Train/test splitting, confusion-matrix metrics, and reproducible
//!   stratified k-fold cross-validation

pub mod analysis;
pub mod classify;
pub mod cli;
pub mod dataset;
pub mod error;
pub mod evaluate;
pub mod feature;

pub mod prelude {
    pub use crate::analysis::analyzer::{Analyzer, indonesian_analyzer};
    pub use crate::classify::knn::KnnClassifier;
    pub use crate::dataset::{LabeledText, Sentiment};
    pub use crate::error::{Result, SentimenError};
    pub use crate::evaluate::kfold::{KFoldSummary, run_stratified_kfold};
    pub use crate::evaluate::metrics::{EvaluationReport, calculate_metrics};
    pub use crate::evaluate::split::{TrainTestSplit, train_test_split};
    pub use crate::feature::tfidf::TfIdfVectorizer;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
