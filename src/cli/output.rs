//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::PreprocessedText;
use crate::cli::args::{OutputFormat, SentimenArgs};
use crate::dataset::Sentiment;
use crate::error::Result;
use crate::evaluate::kfold::KFoldSummary;
use crate::evaluate::metrics::EvaluationReport;

/// Result structure for the preprocess command.
#[derive(Debug, Serialize, Deserialize)]
pub struct PreprocessOutput {
    pub stages: PreprocessedText,
}

/// Result structure for the evaluate command.
#[derive(Debug, Serialize, Deserialize)]
pub struct EvaluationOutput {
    pub corpus_size: usize,
    pub train_size: usize,
    pub test_size: usize,
    pub k: usize,
    pub seed: u64,
    pub report: EvaluationReport<Sentiment>,
}

/// Result structure for the crossval command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CrossvalOutput {
    pub corpus_size: usize,
    pub folds: usize,
    pub seed: u64,
    pub summaries: Vec<KFoldSummary>,
}

/// One classified text for the predict command.
#[derive(Debug, Serialize, Deserialize)]
pub struct Prediction {
    pub text: String,
    pub cleaned: String,
    pub label: Option<Sentiment>,
}

/// Result structure for the predict command.
#[derive(Debug, Serialize, Deserialize)]
pub struct PredictionOutput {
    pub corpus_size: usize,
    pub k: usize,
    pub predictions: Vec<Prediction>,
}

/// Print a serializable result in the requested format.
pub fn print_output<T: Serialize + HumanFormat>(result: &T, args: &SentimenArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => {
            let json = if args.pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            println!("{json}");
        }
        OutputFormat::Human => {
            println!("{}", result.human_format());
        }
    }
    Ok(())
}

/// Human-readable rendering for CLI result structures.
pub trait HumanFormat {
    fn human_format(&self) -> String;
}

impl HumanFormat for PreprocessOutput {
    fn human_format(&self) -> String {
        format!(
            "original          : {}\ncleaned           : {}\nstopwords removed : {}\nstemmed           : {}",
            self.stages.original,
            self.stages.cleaned,
            self.stages.stopwords_removed,
            self.stages.stemmed
        )
    }
}

impl HumanFormat for EvaluationOutput {
    fn human_format(&self) -> String {
        let mut out = format!(
            "Corpus: {} texts ({} train / {} test), k={}, seed={}\n",
            self.corpus_size, self.train_size, self.test_size, self.k, self.seed
        );
        out.push_str(&format!(
            "Accuracy: {:.4}\n\n{:<10} {:>10} {:>10} {:>10} {:>8}\n",
            self.report.accuracy, "label", "precision", "recall", "f1", "support"
        ));
        for metrics in &self.report.per_label {
            out.push_str(&format!(
                "{:<10} {:>10.4} {:>10.4} {:>10.4} {:>8}\n",
                metrics.label.as_str(),
                metrics.precision,
                metrics.recall,
                metrics.f1_score,
                metrics.support
            ));
        }

        out.push_str("\nConfusion matrix (rows = true, columns = predicted):\n");
        out.push_str(&format!("{:<10}", ""));
        for label in &self.report.labels {
            out.push_str(&format!("{:>10}", label.as_str()));
        }
        out.push('\n');
        for (label, row) in self.report.labels.iter().zip(&self.report.confusion_matrix) {
            out.push_str(&format!("{:<10}", label.as_str()));
            for count in row {
                out.push_str(&format!("{count:>10}"));
            }
            out.push('\n');
        }
        out
    }
}

impl HumanFormat for CrossvalOutput {
    fn human_format(&self) -> String {
        let mut out = format!(
            "Corpus: {} texts, {} folds, seed={}\n\n{:>4} {:>14} {:>10} {:>8}\n",
            self.corpus_size, self.folds, self.seed, "k", "avg accuracy", "std dev", "folds"
        );
        for summary in &self.summaries {
            out.push_str(&format!(
                "{:>4} {:>14.4} {:>10.4} {:>8}\n",
                summary.k,
                summary.avg_accuracy,
                summary.std_dev,
                summary.fold_accuracies.len()
            ));
        }
        if let Some(best) = self.summaries.iter().max_by(|a, b| {
            a.avg_accuracy
                .partial_cmp(&b.avg_accuracy)
                .unwrap_or(std::cmp::Ordering::Equal)
        }) {
            out.push_str(&format!("\nBest k: {} ({:.4})\n", best.k, best.avg_accuracy));
        }
        out
    }
}

impl HumanFormat for PredictionOutput {
    fn human_format(&self) -> String {
        let mut out = format!(
            "Trained on {} texts, k={}\n\n",
            self.corpus_size, self.k
        );
        for prediction in &self.predictions {
            let label = prediction
                .label
                .map(|l| l.as_str())
                .unwrap_or("(no prediction)");
            out.push_str(&format!("{:<10} {}\n", label, prediction.text));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crossval_human_format_picks_best_k() {
        let output = CrossvalOutput {
            corpus_size: 10,
            folds: 5,
            seed: 42,
            summaries: vec![
                KFoldSummary {
                    k: 3,
                    fold_accuracies: vec![0.5, 0.6],
                    avg_accuracy: 0.55,
                    std_dev: 0.07,
                },
                KFoldSummary {
                    k: 5,
                    fold_accuracies: vec![0.7, 0.8],
                    avg_accuracy: 0.75,
                    std_dev: 0.07,
                },
            ],
        };
        let text = output.human_format();
        assert!(text.contains("Best k: 5"));
    }

    #[test]
    fn test_prediction_human_format_handles_none() {
        let output = PredictionOutput {
            corpus_size: 0,
            k: 3,
            predictions: vec![Prediction {
                text: "halo".into(),
                cleaned: "halo".into(),
                label: None,
            }],
        };
        assert!(output.human_format().contains("(no prediction)"));
    }
}
