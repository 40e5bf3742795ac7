//! Labeled-corpus types and loading.
//!
//! The core pipeline operates on plain `(document, label)` pairs in memory;
//! this module supplies the canonical sentiment alphabet and reads labeled
//! corpora from JSON files (either a single array or one object per line).
//!
//! # Examples
//!
//! ```
//! use sentimen::dataset::Sentiment;
//!
//! let label: Sentiment = "positif".parse().unwrap();
//! assert_eq!(label, Sentiment::Positif);
//! assert_eq!(label.to_string(), "positif");
//! ```

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SentimenError};

/// The canonical three-way sentiment alphabet.
///
/// The classifier and metrics are generic over label types; this enum is
/// the label type the CLI and dataset layer use, and [`Sentiment::ALL`] is
/// the default label list for metrics formatting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positif,
    Negatif,
    Netral,
}

impl Sentiment {
    /// All labels, in canonical reporting order.
    pub const ALL: [Sentiment; 3] = [Sentiment::Positif, Sentiment::Negatif, Sentiment::Netral];

    /// The label's lowercase string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positif => "positif",
            Sentiment::Negatif => "negatif",
            Sentiment::Netral => "netral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = SentimenError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "positif" | "positive" => Ok(Sentiment::Positif),
            "negatif" | "negative" => Ok(Sentiment::Negatif),
            "netral" | "neutral" => Ok(Sentiment::Netral),
            other => Err(SentimenError::dataset(format!(
                "unknown sentiment label: {other:?}"
            ))),
        }
    }
}

/// One labeled corpus record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledText {
    pub text: String,
    pub label: Sentiment,
}

/// Load a labeled corpus from a JSON file.
///
/// Accepts either a single JSON array of records or JSON-lines (one record
/// per line, blank lines ignored). Returns `Dataset` errors for malformed
/// records; an empty file yields an empty corpus.
pub fn load_labeled_corpus<P: AsRef<Path>>(path: P) -> Result<Vec<LabeledText>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let mut first_line = String::new();
    let mut records = Vec::new();

    // Peek at the first non-blank character to pick the format.
    loop {
        first_line.clear();
        if reader.read_line(&mut first_line)? == 0 {
            return Ok(records);
        }
        if !first_line.trim().is_empty() {
            break;
        }
    }

    if first_line.trim_start().starts_with('[') {
        let mut content = first_line;
        for line in reader.lines() {
            content.push_str(&line?);
        }
        records = serde_json::from_str(&content)?;
    } else {
        records.push(parse_record(&first_line, 1)?);
        for (number, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            records.push(parse_record(&line, number + 2)?);
        }
    }

    Ok(records)
}

fn parse_record(line: &str, line_number: usize) -> Result<LabeledText> {
    serde_json::from_str(line).map_err(|e| {
        SentimenError::dataset(format!("line {line_number}: malformed record: {e}"))
    })
}

/// Split a corpus into parallel document and label vectors.
pub fn unzip_corpus(records: &[LabeledText]) -> (Vec<String>, Vec<Sentiment>) {
    records
        .iter()
        .map(|r| (r.text.clone(), r.label))
        .unzip()
}
