//! Whitespace tokenizer implementation.

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// Trait for text tokenizers.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the input text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer.
    fn name(&self) -> &'static str;
}

/// A tokenizer that splits text on whitespace.
///
/// Documents in this pipeline are whitespace-separated word sequences by the
/// time tokenization runs (the char filters already normalized punctuation),
/// so nothing smarter than a whitespace split is needed.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = text
            .split_whitespace()
            .enumerate()
            .map(|(position, word)| Token::new(word, position))
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}
