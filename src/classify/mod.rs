//! Nearest-neighbor classification.

pub mod knn;

pub use knn::KnnClassifier;
