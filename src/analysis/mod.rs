//! Text analysis pipeline for Indonesian social-media text.
//!
//! Raw posts are full of links, handles, slang, and broken encodings. This
//! module turns them into clean whitespace-separated token strings through a
//! configurable pipeline:
//!
//! 1. Char filters: mojibake repair, case folding, regex cleanup
//! 2. Tokenizer: whitespace split
//! 3. Token filters: blacklist, slang normalization, stopwords, stemming
//!
//! [`analyzer::indonesian_analyzer`] wires the standard chain; the pieces
//! are exposed individually for custom pipelines.

pub mod analyzer;
pub mod char_filter;
pub mod stemmer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
