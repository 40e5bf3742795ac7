//! Analyzers that combine char filters, a tokenizer, and token filters.
//!
//! # Examples
//!
//! ```
//! use sentimen::analysis::analyzer::{Analyzer, indonesian_analyzer};
//!
//! let analyzer = indonesian_analyzer();
//! let cleaned = analyzer.analyze_to_string("Vaksin GAK aman!!! @menkes").unwrap();
//! assert_eq!(cleaned, "vaksin aman");
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::char_filter::{CharFilter, MojibakeRepairFilter, RegexCleanFilter};
use crate::analysis::stemmer::{IndonesianStemmer, StemFilter};
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::{BlacklistFilter, SlangFilter, StopFilter, TokenFilter};
use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
use crate::error::Result;

/// Trait for text analyzers.
pub trait Analyzer: Send + Sync {
    /// Analyze text into a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer.
    fn name(&self) -> &'static str;

    /// Analyze text and join the resulting tokens back into a single
    /// whitespace-separated string, the document shape the vectorizer takes.
    fn analyze_to_string(&self, text: &str) -> Result<String> {
        let words: Vec<String> = self.analyze(text)?.map(|t| t.text).collect();
        Ok(words.join(" "))
    }
}

/// A configurable analyzer that combines a tokenizer with chains of char
/// filters and token filters.
///
/// Processing order: char filters (in insertion order), then the tokenizer,
/// then token filters (in insertion order).
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    char_filters: Vec<Arc<dyn CharFilter>>,
    filters: Vec<Arc<dyn TokenFilter>>,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            tokenizer,
            char_filters: Vec::new(),
            filters: Vec::new(),
        }
    }

    /// Add a char filter to the pipeline.
    pub fn add_char_filter(mut self, filter: Arc<dyn CharFilter>) -> Self {
        self.char_filters.push(filter);
        self
    }

    /// Add a token filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn TokenFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    fn apply_char_filters(&self, text: &str) -> String {
        let mut current = text.to_string();
        for filter in &self.char_filters {
            current = filter.filter(&current);
        }
        current
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let filtered_text = self.apply_char_filters(text);
        let mut tokens = self.tokenizer.tokenize(&filtered_text)?;
        for filter in &self.filters {
            tokens = filter.apply(tokens)?;
        }
        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "pipeline"
    }
}

/// Build the full Indonesian preprocessing pipeline: mojibake repair, regex
/// cleanup, whitespace tokenization, blacklist removal, slang normalization,
/// stopword removal, stemming.
pub fn indonesian_analyzer() -> PipelineAnalyzer {
    PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
        .add_char_filter(Arc::new(MojibakeRepairFilter::new()))
        .add_char_filter(Arc::new(RegexCleanFilter::new()))
        .add_filter(Arc::new(BlacklistFilter::new()))
        .add_filter(Arc::new(SlangFilter::new()))
        .add_filter(Arc::new(StopFilter::new()))
        .add_filter(Arc::new(StemFilter::default()))
}

/// The intermediate stages of preprocessing a single text, for inspection
/// and manual-labeling review.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreprocessedText {
    /// Input text after mojibake repair.
    pub original: String,
    /// After cleanup, blacklist removal, and slang normalization.
    pub cleaned: String,
    /// After stopword removal.
    pub stopwords_removed: String,
    /// After stemming; the document fed to the vectorizer.
    pub stemmed: String,
}

/// Run one text through the Indonesian pipeline, capturing each stage.
pub fn preprocess_text(text: &str) -> Result<PreprocessedText> {
    let repair = MojibakeRepairFilter::new();
    let clean = RegexCleanFilter::new();
    let tokenizer = WhitespaceTokenizer::new();
    let blacklist = BlacklistFilter::new();
    let slang = SlangFilter::new();
    let stop = StopFilter::new();
    let stem = StemFilter::default();

    let original = repair.filter(text);

    let tokens = tokenizer.tokenize(&clean.filter(&original))?;
    let tokens = slang.apply(blacklist.apply(tokens)?)?;
    let cleaned_tokens: Vec<_> = tokens.collect();
    let cleaned = cleaned_tokens
        .iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    let tokens = stop.apply(Box::new(cleaned_tokens.into_iter()))?;
    let unstopped_tokens: Vec<_> = tokens.collect();
    let stopwords_removed = unstopped_tokens
        .iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    let stemmed_tokens = stem.apply(Box::new(unstopped_tokens.into_iter()))?;
    let stemmed = stemmed_tokens
        .map(|t| t.text)
        .collect::<Vec<_>>()
        .join(" ");

    Ok(PreprocessedText {
        original,
        cleaned,
        stopwords_removed,
        stemmed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_pipeline() {
        let analyzer = indonesian_analyzer();
        let result = analyzer
            .analyze_to_string("Pemerintah GAK becus!! vaksinnya bahaya https://t.co/x @kemenkes")
            .unwrap();
        // "gak" -> "tidak" (stopword, removed), handles and links stripped.
        assert!(!result.contains("tidak"));
        assert!(!result.contains("kemenkes"));
        assert!(result.contains("bahaya"));
    }

    #[test]
    fn test_preprocess_stages() {
        let stages = preprocess_text("Vaksin bgt bagus nih!!").unwrap();
        assert_eq!(stages.cleaned, "vaksin sangat bagus");
        assert_eq!(stages.stopwords_removed, "vaksin bagus");
        assert_eq!(stages.stemmed, "vaksin bagus");
    }

    #[test]
    fn test_empty_text() {
        let analyzer = indonesian_analyzer();
        assert_eq!(analyzer.analyze_to_string("").unwrap(), "");
        assert_eq!(analyzer.analyze_to_string("!!! ???").unwrap(), "");
    }

    #[test]
    fn test_custom_pipeline_order() {
        use std::sync::Arc;
        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_char_filter(Arc::new(RegexCleanFilter::new()))
            .add_filter(Arc::new(StopFilter::from_words(["dan"])));
        let result = analyzer.analyze_to_string("Aman DAN efektif").unwrap();
        assert_eq!(result, "aman efektif");
    }
}
