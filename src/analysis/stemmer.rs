//! Stemming algorithms for reducing words to their root forms.

use std::sync::LazyLock;

use ahash::AHashSet;

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

/// Built-in root-word dictionary.
///
/// The Nazief-Adriani algorithm validates every affix strip against a root
/// dictionary; without the check, suffix removal mangles words like
/// "berjalan" (root "jalan", not "jal"). This list covers common roots in
/// the vaccine/government discourse the corpus comes from. Words whose root
/// is missing here are returned unstemmed, which only costs a slightly
/// larger vocabulary downstream.
static ROOT_WORDS: LazyLock<AHashSet<&'static str>> = LazyLock::new(|| {
    [
        "adil", "ajar", "aman", "ambil", "anak", "antri", "atur", "bagus", "bahaya", "baik",
        "bantu", "bapak", "bayar", "baca", "beli", "benar", "benci", "beri", "bohong", "buat",
        "buku", "buruk", "cegah", "cepat", "cinta", "corona", "covid", "daerah", "datang",
        "dengar", "desa", "dokter", "dukung", "duduk", "efek", "gratis", "guna", "harap",
        "hasil", "hidup", "hilang", "ingat", "jalan", "jatuh", "jual", "jujur", "kabar",
        "kawan", "kecewa", "keluar", "keluarga", "kenal", "kerja", "kota", "kasih", "lambat",
        "lawan", "lihat", "lindung", "lupa", "mahal", "makan", "marah", "masuk", "masyarakat",
        "mati", "minum", "moga", "mudah", "murah", "musuh", "naik", "negara", "obat", "orang",
        "paksa", "palsu", "panggil", "pakai", "percaya", "pergi", "perintah", "pikir", "pilih",
        "program", "puas", "pulang", "ragu", "rakyat", "rasa", "rugi", "rumah", "sakit",
        "salah", "sapu", "sebar", "sehat", "sembuh", "senang", "suka", "sulit", "suntik",
        "susah", "syukur", "takut", "tahu", "tangan", "teman", "terima", "tolong", "tulis",
        "tunggu", "turun", "uang", "untung", "usaha", "vaksin", "virus", "warga", "yakin",
    ]
    .into_iter()
    .collect()
});

/// Affix-stripping stemmer for Indonesian.
///
/// Implements the same scheme Sastrawi uses (Nazief-Adriani): inflectional
/// particles, possessive pronouns, derivational suffixes, and derivational
/// prefixes are removed step by step, validating each intermediate form
/// against [`ROOT_WORDS`]. When suffix-first order fails, prefix-first order
/// is tried; when neither reaches a known root, the original word is
/// returned unchanged.
#[derive(Clone, Debug, Default)]
pub struct IndonesianStemmer;

/// Minimum length a candidate root must keep for a strip to be applied.
const MIN_ROOT_LEN: usize = 3;

/// Particles, possessives, and derivational suffixes, in removal order.
const SUFFIX_GROUPS: [&[&str]; 3] = [
    &["lah", "kah", "tah", "pun"],
    &["nya", "ku", "mu"],
    &["kan", "an", "i"],
];

impl IndonesianStemmer {
    /// Create a new Indonesian stemmer.
    pub fn new() -> Self {
        IndonesianStemmer
    }

    fn in_dict(word: &str) -> bool {
        ROOT_WORDS.contains(word)
    }

    fn is_vowel(c: char) -> bool {
        matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
    }

    /// Candidate roots after removing one derivational prefix.
    ///
    /// For the nasal prefixes the assimilated consonant is restored first
    /// (meny-apu -> sapu, men-ulis -> tulis, mem-ilih -> pilih); the bare
    /// remainder is kept as a fallback candidate.
    fn prefix_candidates(word: &str) -> Vec<String> {
        let mut candidates = Vec::new();

        for (prefix, recode) in [
            ("meny", Some('s')),
            ("peny", Some('s')),
            ("meng", None),
            ("peng", None),
            ("men", Some('t')),
            ("pen", Some('t')),
            ("mem", Some('p')),
            ("pem", Some('p')),
        ] {
            if let Some(rest) = word.strip_prefix(prefix) {
                if rest.len() >= MIN_ROOT_LEN {
                    if let (Some(c), Some(first)) = (recode, rest.chars().next()) {
                        if Self::is_vowel(first) {
                            candidates.push(format!("{c}{rest}"));
                        }
                    }
                    candidates.push(rest.to_string());
                    return candidates;
                }
            }
        }

        for prefix in ["ber", "ter", "per", "di", "ke", "se", "me", "be", "te", "pe"] {
            if let Some(rest) = word.strip_prefix(prefix) {
                if rest.len() >= MIN_ROOT_LEN {
                    candidates.push(rest.to_string());
                    return candidates;
                }
            }
        }

        candidates
    }

    /// Remove suffix groups in order, stopping at the first dictionary hit.
    /// Returns the stripped form even without a hit so prefix removal can
    /// continue from it.
    fn remove_suffixes(word: &str) -> (String, bool) {
        let mut current = word.to_string();
        for group in SUFFIX_GROUPS {
            for suffix in group {
                if let Some(stem) = current.strip_suffix(suffix) {
                    if stem.len() >= MIN_ROOT_LEN {
                        current = stem.to_string();
                        if Self::in_dict(&current) {
                            return (current, true);
                        }
                        break;
                    }
                }
            }
        }
        (current, false)
    }

    /// Remove up to three prefixes, stopping at the first dictionary hit.
    fn remove_prefixes(word: &str) -> (String, bool) {
        let mut current = word.to_string();
        for _ in 0..3 {
            let candidates = Self::prefix_candidates(&current);
            if let Some(hit) = candidates.iter().find(|c| Self::in_dict(c)) {
                return (hit.clone(), true);
            }
            match candidates.into_iter().next_back() {
                Some(last) => current = last,
                None => break,
            }
        }
        (current, false)
    }
}

impl Stemmer for IndonesianStemmer {
    fn stem(&self, word: &str) -> String {
        if word.len() <= MIN_ROOT_LEN || Self::in_dict(word) {
            return word.to_string();
        }

        // Suffix-first order.
        let (desuffixed, found) = Self::remove_suffixes(word);
        if found {
            return desuffixed;
        }
        let (root, found) = Self::remove_prefixes(&desuffixed);
        if found {
            return root;
        }

        // Prefix-first order, for words like "dimakan" where stripping the
        // apparent "-kan" suffix first destroys the root.
        let (deprefixed, found) = Self::remove_prefixes(word);
        if found {
            return deprefixed;
        }
        let (root, found) = Self::remove_suffixes(&deprefixed);
        if found {
            return root;
        }

        word.to_string()
    }

    fn name(&self) -> &'static str {
        "indonesian"
    }
}

/// A token filter that stems each token with the supplied stemmer.
pub struct StemFilter<S: Stemmer> {
    stemmer: S,
}

impl<S: Stemmer> StemFilter<S> {
    /// Create a new stemming filter.
    pub fn new(stemmer: S) -> Self {
        StemFilter { stemmer }
    }
}

impl Default for StemFilter<IndonesianStemmer> {
    fn default() -> Self {
        StemFilter::new(IndonesianStemmer::new())
    }
}

impl<S: Stemmer + 'static> crate::analysis::token_filter::TokenFilter for StemFilter<S> {
    fn apply(&self, tokens: TokenStream) -> Result<TokenStream> {
        let stemmed: Vec<Token> = tokens
            .map(|token| {
                let text = self.stemmer.stem(&token.text);
                Token::new(text, token.position)
            })
            .collect();
        Ok(Box::new(stemmed.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stem"
    }
}
