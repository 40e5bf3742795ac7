//! Feature extraction from preprocessed documents.

pub mod tfidf;

pub use tfidf::TfIdfVectorizer;
