//! Character-level filters applied before tokenization.
//!
//! Char filters normalize raw text as a whole string: repairing broken
//! encodings and stripping the markup noise typical of scraped social-media
//! posts (URLs, mentions, hashtags, punctuation).
//!
//! # Examples
//!
//! ```
//! use sentimen::analysis::char_filter::{CharFilter, RegexCleanFilter};
//!
//! let filter = RegexCleanFilter::new();
//! let cleaned = filter.filter("Vaksin BAGUS!!! cek https://t.co/xyz @bpom #covid19");
//! assert_eq!(cleaned, "vaksin bagus cek");
//! ```

use std::sync::LazyLock;

use regex::Regex;

/// Trait for character-level text filters.
pub trait CharFilter: Send + Sync {
    /// Transform the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

static LINKS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"http[s]?://\S+").unwrap());
static MENTIONS_HASHTAGS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[@#]\w+").unwrap());
static NON_ALPHABETIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z\s]").unwrap());
static EXTRA_SPACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{2,}").unwrap());

/// A char filter that case-folds and strips URLs, mentions, hashtags, and
/// non-alphabetic characters.
///
/// The output contains only lowercase `a`-`z` words separated by single
/// spaces, which is the shape the rest of the pipeline expects.
#[derive(Clone, Debug, Default)]
pub struct RegexCleanFilter;

impl RegexCleanFilter {
    /// Create a new regex cleanup filter.
    pub fn new() -> Self {
        RegexCleanFilter
    }
}

impl CharFilter for RegexCleanFilter {
    fn filter(&self, input: &str) -> String {
        let lowered = input.to_lowercase();
        let no_links = LINKS.replace_all(&lowered, "");
        let no_mentions = MENTIONS_HASHTAGS.replace_all(&no_links, "");
        let alpha_only = NON_ALPHABETIC.replace_all(&no_mentions, " ");
        EXTRA_SPACES.replace_all(&alpha_only, " ").trim().to_string()
    }

    fn name(&self) -> &'static str {
        "regex_clean"
    }
}

/// A char filter that repairs mojibake (UTF-8 text mis-decoded as latin-1).
///
/// Scraped exports often contain sequences like `Ã©` where `é` was meant.
/// The repair re-encodes the text as latin-1 bytes and decodes them as
/// UTF-8; if either step fails the input is returned unchanged.
#[derive(Clone, Debug, Default)]
pub struct MojibakeRepairFilter;

impl MojibakeRepairFilter {
    /// Create a new mojibake repair filter.
    pub fn new() -> Self {
        MojibakeRepairFilter
    }

    fn try_repair(input: &str) -> Option<String> {
        let mut bytes = Vec::with_capacity(input.len());
        for c in input.chars() {
            let code = c as u32;
            if code > 0xFF {
                return None;
            }
            bytes.push(code as u8);
        }
        String::from_utf8(bytes).ok()
    }
}

impl CharFilter for MojibakeRepairFilter {
    fn filter(&self, input: &str) -> String {
        match Self::try_repair(input) {
            Some(repaired) => repaired,
            None => input.to_string(),
        }
    }

    fn name(&self) -> &'static str {
        "mojibake_repair"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regex_clean_strips_links_and_handles() {
        let filter = RegexCleanFilter::new();
        let cleaned = filter.filter("Cek info di https://example.com @menkes #vaksin ya!!");
        assert_eq!(cleaned, "cek info di ya");
    }

    #[test]
    fn test_regex_clean_collapses_whitespace() {
        let filter = RegexCleanFilter::new();
        assert_eq!(filter.filter("  satu   dua\t tiga  "), "satu dua tiga");
    }

    #[test]
    fn test_regex_clean_drops_digits_and_punctuation() {
        let filter = RegexCleanFilter::new();
        assert_eq!(filter.filter("covid19, 100% aman?!"), "covid aman");
    }

    #[test]
    fn test_mojibake_repair_round_trip() {
        let filter = MojibakeRepairFilter::new();
        // "é" (0xC3 0xA9 in UTF-8) read back as latin-1 becomes "Ã©".
        assert_eq!(filter.filter("caf\u{c3}\u{a9}"), "café");
    }

    #[test]
    fn test_mojibake_repair_leaves_clean_text_alone() {
        let filter = MojibakeRepairFilter::new();
        assert_eq!(filter.filter("sudah bersih"), "sudah bersih");
        // Genuine multi-byte text cannot be latin-1 re-encoded; kept as is.
        assert_eq!(filter.filter("日本語"), "日本語");
    }
}
