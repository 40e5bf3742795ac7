//! Token filters: blacklist removal, slang normalization, and stopword
//! removal.
//!
//! Filters run after tokenization, in the order they are added to the
//! pipeline. The word lists here were compiled from a labeled corpus of
//! Indonesian vaccine-discourse tweets; they are exposed so callers can
//! extend them per dataset.
//!
//! # Examples
//!
//! ```
//! use sentimen::analysis::token::Token;
//! use sentimen::analysis::token_filter::{SlangFilter, TokenFilter};
//!
//! let filter = SlangFilter::new();
//! let tokens = vec![Token::new("gk", 0), Token::new("bgt", 1)];
//! let result: Vec<_> = filter
//!     .apply(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result[0].text, "tidak");
//! assert_eq!(result[1].text, "sangat");
//! ```

use std::sync::LazyLock;

use ahash::{AHashMap, AHashSet};

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// Trait for token-level filters.
pub trait TokenFilter: Send + Sync {
    /// Filter a stream of tokens.
    fn apply(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter.
    fn name(&self) -> &'static str;
}

/// Default Indonesian stop words.
///
/// Function words that carry no sentiment signal. Based on the Sastrawi
/// stopword list.
const DEFAULT_STOP_WORDS: &[&str] = &[
    "ada", "adalah", "agar", "akan", "aku", "anda", "antara", "apa", "apabila", "atau", "bagi",
    "bahwa", "banyak", "beberapa", "begitu", "belum", "bisa", "boleh", "dalam", "dan", "dapat",
    "dari", "dengan", "di", "dia", "dulu", "hanya", "harus", "hingga", "ia", "ini", "itu",
    "jadi", "jika", "juga", "kalau", "kami", "kamu", "karena", "ke", "kemudian", "kepada",
    "kita", "lagi", "lain", "lebih", "maka", "masih", "mau", "melalui", "memang", "mereka",
    "namun", "oleh", "pada", "para", "pernah", "pula", "pun", "saat", "saja", "sama", "sampai",
    "sangat", "saya", "sebagai", "sebuah", "sedang", "sehingga", "sekarang", "selama", "semua",
    "seperti", "sering", "serta", "setelah", "setiap", "suatu", "sudah", "supaya", "tanpa",
    "tapi", "telah", "tentang", "terhadap", "tersebut", "tetapi", "tidak", "untuk", "yaitu",
    "yang",
];

/// Informal stop words seen in the corpus on top of the default list.
const ADDITIONAL_STOP_WORDS: &[&str] = &[
    "yg", "yaa", "dgn", "klo", "tuh", "nya", "sih", "aja", "deh",
];

/// Noise words to drop outright before any normalization.
///
/// Mostly profanity, keyboard mashing, and artifacts of the scraping run.
static BLACKLISTED_WORDS: LazyLock<AHashSet<&'static str>> = LazyLock::new(|| {
    [
        "ajg", "anggerweh", "choda", "cing", "ckg", "eaktat", "enjus", "heeeeeee", "hoi",
        "jajarane", "jalian", "jr", "ko", "kok", "kopet", "lahhh", "lh", "lha", "loh",
        "mbagongkan", "mp", "nah", "ngozi", "njlapett", "ojoss", "pabeuliyyt", "pangrekun",
        "ponrekun", "preeeeetttt", "preeettt", "prex", "profdesan", "puki", "rfk", "seht",
        "siih", "sngerweeh", "tay", "tololllllll", "uy", "uyyyyy", "waduhhhhh", "wahwahhh",
        "woyy",
    ]
    .into_iter()
    .collect()
});

/// Slang-to-standard-Indonesian dictionary.
///
/// An empty replacement drops the token; a multi-word replacement expands
/// into several tokens.
static SLANG_WORDS: LazyLock<AHashMap<&'static str, &'static str>> = LazyLock::new(|| {
    [
        ("abis", "habis"),
        ("ad", "ada"),
        ("adlh", "adalah"),
        ("aing", "saya"),
        ("aj", "saja"),
        ("ajh", "saja"),
        ("ak", "aku"),
        ("ako", "aku"),
        ("ama", "sama"),
        ("ancur", "hancur"),
        ("anjeng", "anjing"),
        ("ap", "apa"),
        ("aq", "aku"),
        ("ato", "atau"),
        ("atw", "atau"),
        ("bacot", "banyak bicara"),
        ("bah", ""),
        ("banget", "sangat"),
        ("bct", "banyak bicara"),
        ("bener", "benar"),
        ("beneran", "benaran"),
        ("bgmn", "bagaimana"),
        ("bgt", "sangat"),
        ("bgtu", "begitu"),
        ("bhw", "bahwa"),
        ("bhya", "bahaya"),
        ("biar", "supaya"),
        ("bikin", "buat"),
        ("bkn", "bukan"),
        ("blg", "bilang"),
        ("blm", "belum"),
        ("bls", "balas"),
        ("blum", "belum"),
        ("bngt", "sangat"),
        ("bnr", "benar"),
        ("bnyak", "banyak"),
        ("bodo", "bodoh"),
        ("boong", "bohong"),
        ("bpk", "bapak"),
        ("br", "baru"),
        ("brp", "berapa"),
        ("bs", "bisa"),
        ("bsk", "besok"),
        ("btul", "betul"),
        ("bwt", "buat"),
        ("byk", "banyak"),
        ("cepet", "cepat"),
        ("cmn", "cuma"),
        ("coz", "karena"),
        ("cuan", "uang"),
        ("d", "di"),
        ("dah", "sudah"),
        ("dapet", "dapat"),
        ("denger", "dengar"),
        ("dg", "dengan"),
        ("dgn", "dengan"),
        ("dket", "dekat"),
        ("dkt", "dekat"),
        ("dl", "dulu"),
        ("dlm", "dalam"),
        ("dlu", "dulu"),
        ("doang", ""),
        ("dpt", "dapat"),
        ("dr", "dari"),
        ("dri", "dari"),
        ("drpd", "daripada"),
        ("dtg", "datang"),
        ("duit", "uang"),
        ("dy", "dia"),
        ("elu", "kamu"),
        ("emang", "memang"),
        ("emg", "memang"),
        ("engga", "tidak"),
        ("ente", "anda"),
        ("faksin", "vaksin"),
        ("firus", "virus"),
        ("fulus", "uang"),
        ("g", "tidak"),
        ("ga", "tidak"),
        ("gaada", "tidak ada"),
        ("gak", "tidak"),
        ("gaje", "tidak jelas"),
        ("gbs", "tidak bisa"),
        ("gimana", "bagaimana"),
        ("gini", "begini"),
        ("gitu", "begitu"),
        ("gk", "tidak"),
        ("gmn", "bagaimana"),
        ("goblk", "goblok"),
        ("gpp", "tidak apa-apa"),
        ("gua", "saya"),
        ("gue", "saya"),
        ("gw", "saya"),
        ("hrs", "harus"),
        ("ilang", "hilang"),
        ("indo", "indonesia"),
        ("ja", "saja"),
        ("jd", "jadi"),
        ("jdi", "jadi"),
        ("jg", "juga"),
        ("jgn", "jangan"),
        ("jln", "jalan"),
        ("kaga", "tidak"),
        ("kagak", "tidak"),
        ("kalo", "kalau"),
        ("karna", "karena"),
        ("kayak", "seperti"),
        ("kek", "seperti"),
        ("kesel", "kesal"),
        ("kl", "kalau"),
        ("klo", "kalau"),
        ("klu", "kalau"),
        ("km", "kamu"),
        ("knapa", "kenapa"),
        ("knp", "kenapa"),
        ("kovid", "covid"),
        ("kpd", "kepada"),
        ("krn", "karena"),
        ("kt", "kita"),
        ("ky", "seperti"),
        ("kyk", "seperti"),
        ("lg", "lagi"),
        ("lgi", "lagi"),
        ("lho", ""),
        ("liat", "lihat"),
        ("lo", "kamu"),
        ("loe", "kamu"),
        ("lu", "kamu"),
        ("mager", "malas gerak"),
        ("makasih", "terima kasih"),
        ("males", "malas"),
        ("mantep", "mantap"),
        ("mending", "lebih baik"),
        ("mks", "terima kasih"),
        ("mksd", "maksud"),
        ("moga", "semoga"),
        ("mrk", "mereka"),
        ("msh", "masih"),
        ("mslh", "masalah"),
        ("nda", "tidak"),
        ("ndak", "tidak"),
        ("negri", "negeri"),
        ("ngapusi", "berbohong"),
        ("ngga", "tidak"),
        ("nggak", "tidak"),
        ("ngk", "tidak"),
        ("ngomong", "berbicara"),
        ("nih", ""),
        ("nipu", "tipu"),
        ("ntar", "nanti"),
        ("ogah", "tidak mau"),
        ("org", "orang"),
        ("pake", "pakai"),
        ("paksin", "vaksin"),
        ("pd", "pada"),
        ("pdhl", "padahal"),
        ("pemerentah", "pemerintah"),
        ("pengen", "ingin"),
        ("pinter", "pintar"),
        ("positip", "positif"),
        ("pret", "omong kosong"),
        ("q", "aku"),
        ("qt", "kita"),
        ("sampe", "sampai"),
        ("sbnrnya", "sebenarnya"),
        ("sdh", "sudah"),
        ("sgt", "sangat"),
        ("skrg", "sekarang"),
        ("slh", "salah"),
        ("sm", "sama"),
        ("smg", "semoga"),
        ("smoga", "semoga"),
        ("smp", "sampai"),
        ("smw", "semua"),
        ("sotoy", "sok tahu"),
        ("spt", "seperti"),
        ("sy", "saya"),
        ("tak", "tidak"),
        ("tau", "tahu"),
        ("td", "tadi"),
        ("tdk", "tidak"),
        ("telat", "terlambat"),
        ("thx", "terima kasih"),
        ("tks", "terima kasih"),
        ("tmn", "teman"),
        ("tp", "tapi"),
        ("trima", "terima"),
        ("trims", "terima kasih"),
        ("trs", "terus"),
        ("trus", "terus"),
        ("tsb", "tersebut"),
        ("ttg", "tentang"),
        ("ttp", "tetap"),
        ("tu", "itu"),
        ("u", "kamu"),
        ("udah", "sudah"),
        ("udh", "sudah"),
        ("untk", "untuk"),
        ("utk", "untuk"),
        ("vaxin", "vaksin"),
        ("wkt", "waktu"),
        ("wkwk", "tertawa"),
        ("y", "ya"),
        ("ya", "iya"),
        ("yaa", "iya"),
        ("yah", "iya"),
        ("yg", "yang"),
        ("yowes", "ya sudah"),
        ("yup", "iya"),
        ("yuk", "ayo"),
    ]
    .into_iter()
    .collect()
});

/// A filter that removes blacklisted noise words.
#[derive(Clone, Debug, Default)]
pub struct BlacklistFilter {
    extra: AHashSet<String>,
}

impl BlacklistFilter {
    /// Create a new blacklist filter with the default word list.
    pub fn new() -> Self {
        BlacklistFilter {
            extra: AHashSet::new(),
        }
    }

    /// Create a blacklist filter with additional words on top of the
    /// default list.
    pub fn with_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        BlacklistFilter {
            extra: words.into_iter().map(|w| w.into()).collect(),
        }
    }
}

impl TokenFilter for BlacklistFilter {
    fn apply(&self, tokens: TokenStream) -> Result<TokenStream> {
        let kept: Vec<Token> = tokens
            .filter(|t| !BLACKLISTED_WORDS.contains(t.text.as_str()) && !self.extra.contains(&t.text))
            .collect();
        Ok(Box::new(kept.into_iter()))
    }

    fn name(&self) -> &'static str {
        "blacklist"
    }
}

/// A filter that rewrites slang words to standard Indonesian.
///
/// Multi-word replacements expand into several tokens and empty replacements
/// drop the token, so positions are renumbered after the rewrite.
#[derive(Clone, Debug, Default)]
pub struct SlangFilter;

impl SlangFilter {
    /// Create a new slang normalization filter.
    pub fn new() -> Self {
        SlangFilter
    }
}

impl TokenFilter for SlangFilter {
    fn apply(&self, tokens: TokenStream) -> Result<TokenStream> {
        let mut rewritten = Vec::new();
        for token in tokens {
            match SLANG_WORDS.get(token.text.as_str()) {
                Some(replacement) => {
                    for word in replacement.split_whitespace() {
                        rewritten.push(Token::new(word, rewritten.len()));
                    }
                }
                None => {
                    let position = rewritten.len();
                    rewritten.push(Token::new(token.text, position));
                }
            }
        }
        Ok(Box::new(rewritten.into_iter()))
    }

    fn name(&self) -> &'static str {
        "slang"
    }
}

/// A filter that removes stop words.
#[derive(Clone, Debug)]
pub struct StopFilter {
    stop_words: AHashSet<String>,
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl StopFilter {
    /// Create a stop filter with the default Indonesian list plus the
    /// corpus-specific informal additions.
    pub fn new() -> Self {
        let stop_words = DEFAULT_STOP_WORDS
            .iter()
            .chain(ADDITIONAL_STOP_WORDS.iter())
            .map(|w| w.to_string())
            .collect();
        StopFilter { stop_words }
    }

    /// Create a stop filter from a custom word list.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StopFilter {
            stop_words: words.into_iter().map(|w| w.into()).collect(),
        }
    }
}

impl TokenFilter for StopFilter {
    fn apply(&self, tokens: TokenStream) -> Result<TokenStream> {
        let kept: Vec<Token> = tokens.filter(|t| !self.stop_words.contains(&t.text)).collect();
        Ok(Box::new(kept.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
