//! TF-IDF vectorizer for text feature extraction.
//!
//! Documents are whitespace-separated token strings produced by the
//! analysis pipeline. `fit` learns a vocabulary and smoothed inverse
//! document frequencies from a training corpus; `transform` maps any
//! document collection onto dense vectors of the fit-time vocabulary
//! length. The vectorizer is single-use: build, fit once, transform as
//! often as needed.
//!
//! # Examples
//!
//! ```
//! use sentimen::feature::tfidf::TfIdfVectorizer;
//!
//! let corpus = vec![
//!     "vaksin aman".to_string(),
//!     "vaksin bahaya".to_string(),
//! ];
//!
//! let mut vectorizer = TfIdfVectorizer::new();
//! vectorizer.fit(&corpus);
//!
//! let vectors = vectorizer.transform(&corpus);
//! assert_eq!(vectors.len(), 2);
//! assert_eq!(vectors[0].len(), vectorizer.vocabulary_size());
//! ```

use ahash::{AHashMap, AHashSet};

/// TF-IDF vectorizer over whitespace-tokenized documents.
pub struct TfIdfVectorizer {
    /// Vocabulary: term -> index, in first-seen order across the fit corpus.
    vocabulary: AHashMap<String, usize>,
    /// Inverse document frequency per vocabulary index.
    idf: Vec<f64>,
    /// Number of documents seen during fit.
    n_documents: usize,
}

impl std::fmt::Debug for TfIdfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfIdfVectorizer")
            .field("vocabulary_size", &self.vocabulary.len())
            .field("n_documents", &self.n_documents)
            .finish()
    }
}

impl Default for TfIdfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TfIdfVectorizer {
    /// Create a new, unfitted vectorizer.
    pub fn new() -> Self {
        TfIdfVectorizer {
            vocabulary: AHashMap::new(),
            idf: Vec::new(),
            n_documents: 0,
        }
    }

    /// Fit the vectorizer on training documents.
    ///
    /// Builds the vocabulary in first-seen order and computes
    /// `idf = ln((N + 1) / (df + 1)) + 1` per term, where `df` counts each
    /// document at most once. The smoothing keeps every IDF strictly
    /// positive. An empty corpus leaves the vocabulary empty; no error.
    pub fn fit(&mut self, documents: &[String]) -> &mut Self {
        self.n_documents = documents.len();
        let mut vocabulary: AHashMap<String, usize> = AHashMap::new();
        let mut document_frequency: Vec<usize> = Vec::new();

        for doc in documents {
            let mut seen: AHashSet<&str> = AHashSet::new();
            for term in doc.split_whitespace() {
                let next_index = vocabulary.len();
                let index = *vocabulary.entry(term.to_string()).or_insert(next_index);
                if index == document_frequency.len() {
                    document_frequency.push(0);
                }
                if seen.insert(term) {
                    document_frequency[index] += 1;
                }
            }
        }

        let n = self.n_documents as f64;
        self.idf = document_frequency
            .iter()
            .map(|&df| ((n + 1.0) / (df as f64 + 1.0)).ln() + 1.0)
            .collect();
        self.vocabulary = vocabulary;
        self
    }

    /// Transform documents into dense TF-IDF vectors.
    ///
    /// Each vector has the fit-time vocabulary length. Term frequency is the
    /// raw count divided by the document's total token count (zero for an
    /// empty document); terms outside the vocabulary are dropped. Calling
    /// before `fit` yields zero-length vectors.
    pub fn transform(&self, documents: &[String]) -> Vec<Vec<f64>> {
        documents.iter().map(|doc| self.transform_one(doc)).collect()
    }

    /// Transform a single document into a dense TF-IDF vector.
    pub fn transform_one(&self, document: &str) -> Vec<f64> {
        let mut vector = vec![0.0; self.vocabulary.len()];

        let mut total_terms = 0usize;
        let mut counts: AHashMap<&str, usize> = AHashMap::new();
        for term in document.split_whitespace() {
            total_terms += 1;
            *counts.entry(term).or_insert(0) += 1;
        }
        if total_terms == 0 {
            return vector;
        }

        for (term, count) in counts {
            if let Some(&index) = self.vocabulary.get(term) {
                let tf = count as f64 / total_terms as f64;
                vector[index] = tf * self.idf[index];
            }
        }

        vector
    }

    /// Get the size of the vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Get the IDF value for a term, if it was seen during fit.
    pub fn idf_for(&self, term: &str) -> Option<f64> {
        self.vocabulary.get(term).map(|&index| self.idf[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(docs: &[&str]) -> Vec<String> {
        docs.iter().map(|d| d.to_string()).collect()
    }

    #[test]
    fn test_vocabulary_first_seen_order() {
        let mut vectorizer = TfIdfVectorizer::new();
        vectorizer.fit(&corpus(&["vaksin aman", "aman sehat"]));

        assert_eq!(vectorizer.vocabulary_size(), 3);
        // First-seen order: vaksin=0, aman=1, sehat=2.
        let v = vectorizer.transform_one("sehat");
        assert_eq!(v[0], 0.0);
        assert_eq!(v[1], 0.0);
        assert!(v[2] > 0.0);
    }

    #[test]
    fn test_idf_always_positive() {
        let mut vectorizer = TfIdfVectorizer::new();
        vectorizer.fit(&corpus(&["a a a", "a b", "a c"]));

        for term in ["a", "b", "c"] {
            assert!(vectorizer.idf_for(term).unwrap() > 0.0);
        }
        // Term in every document: idf = ln(4/4) + 1 = 1.
        assert!((vectorizer.idf_for("a").unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_df_counts_documents_not_occurrences() {
        let mut vectorizer = TfIdfVectorizer::new();
        // "a" appears three times in one document but df must be 1 of 2.
        vectorizer.fit(&corpus(&["a a a", "b"]));

        let expected = (3.0f64 / 2.0).ln() + 1.0;
        assert!((vectorizer.idf_for("a").unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_tf_normalized_by_document_length() {
        let mut vectorizer = TfIdfVectorizer::new();
        vectorizer.fit(&corpus(&["a b", "c"]));

        let v = vectorizer.transform_one("a a b c");
        let idf_a = vectorizer.idf_for("a").unwrap();
        let idf_b = vectorizer.idf_for("b").unwrap();
        assert!((v[0] - 0.5 * idf_a).abs() < 1e-12);
        assert!((v[1] - 0.25 * idf_b).abs() < 1e-12);
    }

    #[test]
    fn test_empty_document_is_zero_vector() {
        let mut vectorizer = TfIdfVectorizer::new();
        vectorizer.fit(&corpus(&["a b c"]));

        let v = vectorizer.transform_one("");
        assert_eq!(v.len(), 3);
        assert!(v.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_unseen_terms_dropped() {
        let mut vectorizer = TfIdfVectorizer::new();
        vectorizer.fit(&corpus(&["a b"]));

        // Unknown terms contribute nothing and do not grow the vector, but
        // they still count toward the document length.
        let v = vectorizer.transform_one("a z z z");
        assert_eq!(v.len(), 2);
        assert!((v[0] - 0.25 * vectorizer.idf_for("a").unwrap()).abs() < 1e-12);

        let all_unknown = vectorizer.transform_one("x y z");
        assert_eq!(all_unknown.len(), 2);
        assert!(all_unknown.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_transform_before_fit() {
        let vectorizer = TfIdfVectorizer::new();
        let vectors = vectorizer.transform(&corpus(&["a b"]));
        assert_eq!(vectors.len(), 1);
        assert!(vectors[0].is_empty());
    }

    #[test]
    fn test_empty_corpus_fit() {
        let mut vectorizer = TfIdfVectorizer::new();
        vectorizer.fit(&[]);
        assert_eq!(vectorizer.vocabulary_size(), 0);
    }
}
