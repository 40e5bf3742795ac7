//! Command line argument parsing for the sentimen CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Sentimen - sentiment classification for Indonesian social-media text
#[derive(Parser, Debug, Clone)]
#[command(name = "sentimen")]
#[command(about = "Sentiment labeling and KNN classification for Indonesian text")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Sentimen Contributors")]
#[command(long_about = None)]
pub struct SentimenArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SentimenArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run a single text through the preprocessing pipeline
    Preprocess(PreprocessArgs),

    /// Evaluate a classifier on a labeled corpus with a train/test split
    Evaluate(EvaluateArgs),

    /// Sweep candidate k values with stratified k-fold cross-validation
    Crossval(CrossvalArgs),

    /// Train on a labeled corpus and classify ad-hoc texts
    Predict(PredictArgs),
}

/// Arguments for the preprocess command
#[derive(Parser, Debug, Clone)]
pub struct PreprocessArgs {
    /// Text to preprocess
    pub text: String,
}

/// Arguments for the evaluate command
#[derive(Parser, Debug, Clone)]
pub struct EvaluateArgs {
    /// Path to the labeled corpus (JSON array or JSON-lines)
    pub dataset: PathBuf,

    /// Number of neighbors
    #[arg(short, long, default_value_t = 3)]
    pub k: usize,

    /// Fraction of the corpus held out for testing
    #[arg(long, default_value_t = 0.2)]
    pub test_fraction: f64,

    /// PRNG seed for the split
    #[arg(long, env = "SENTIMEN_SEED", default_value_t = 42)]
    pub seed: u64,
}

/// Arguments for the crossval command
#[derive(Parser, Debug, Clone)]
pub struct CrossvalArgs {
    /// Path to the labeled corpus (JSON array or JSON-lines)
    pub dataset: PathBuf,

    /// Candidate neighbor counts, comma separated
    #[arg(short, long, value_delimiter = ',', default_value = "3,5,7,9")]
    pub k_options: Vec<usize>,

    /// Number of folds
    #[arg(long, default_value_t = 5)]
    pub folds: usize,

    /// PRNG seed for the fold assignment
    #[arg(long, env = "SENTIMEN_SEED", default_value_t = 42)]
    pub seed: u64,
}

/// Arguments for the predict command
#[derive(Parser, Debug, Clone)]
pub struct PredictArgs {
    /// Path to the labeled training corpus (JSON array or JSON-lines)
    pub dataset: PathBuf,

    /// Texts to classify
    #[arg(required = true)]
    pub texts: Vec<String>,

    /// Number of neighbors
    #[arg(short, long, default_value_t = 3)]
    pub k: usize,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_crossval_k_options() {
        let args = SentimenArgs::parse_from([
            "sentimen",
            "crossval",
            "corpus.json",
            "--k-options",
            "1,3,5",
            "--folds",
            "10",
        ]);
        match args.command {
            Command::Crossval(crossval) => {
                assert_eq!(crossval.k_options, vec![1, 3, 5]);
                assert_eq!(crossval.folds, 10);
                assert_eq!(crossval.seed, 42);
            }
            _ => panic!("Expected crossval command"),
        }
    }

    #[test]
    fn test_verbosity_levels() {
        let args = SentimenArgs::parse_from(["sentimen", "-vv", "preprocess", "halo"]);
        assert_eq!(args.verbosity(), 2);

        let args = SentimenArgs::parse_from(["sentimen", "--quiet", "preprocess", "halo"]);
        assert_eq!(args.verbosity(), 0);
    }
}
