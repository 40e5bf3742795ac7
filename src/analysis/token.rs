//! Token types for text analysis.
//!
//! Tokens are the units that flow through the preprocessing pipeline:
//! a tokenizer produces them, token filters drop or rewrite them, and the
//! analyzer finally joins the surviving texts back into a cleaned document.
//!
//! # Examples
//!
//! ```
//! use sentimen::analysis::token::Token;
//!
//! let token = Token::new("vaksin", 0);
//! assert_eq!(token.text, "vaksin");
//! assert_eq!(token.position, 0);
//! ```

use serde::{Deserialize, Serialize};

/// A token represents a single unit of text after tokenization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the original token stream (0-based)
    pub position: usize,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
        }
    }
}

/// Type alias for a stream of tokens.
pub type TokenStream = Box<dyn Iterator<Item = Token> + Send>;
