//! Command implementations for the sentimen CLI.

use std::path::Path;

use log::info;

use crate::analysis::analyzer::{preprocess_text, Analyzer, indonesian_analyzer};
use crate::classify::knn::KnnClassifier;
use crate::cli::args::{
    Command, CrossvalArgs, EvaluateArgs, PredictArgs, PreprocessArgs, SentimenArgs,
};
use crate::cli::output::{
    print_output, CrossvalOutput, EvaluationOutput, PredictionOutput, PreprocessOutput, Prediction,
};
use crate::dataset::{load_labeled_corpus, unzip_corpus, LabeledText, Sentiment};
use crate::error::{Result, SentimenError};
use crate::evaluate::kfold::run_stratified_kfold;
use crate::evaluate::metrics::calculate_metrics;
use crate::evaluate::split::train_test_split;
use crate::feature::tfidf::TfIdfVectorizer;

/// Execute the parsed command.
pub fn execute_command(args: &SentimenArgs) -> Result<()> {
    match &args.command {
        Command::Preprocess(cmd) => execute_preprocess(cmd, args),
        Command::Evaluate(cmd) => execute_evaluate(cmd, args),
        Command::Crossval(cmd) => execute_crossval(cmd, args),
        Command::Predict(cmd) => execute_predict(cmd, args),
    }
}

fn execute_preprocess(cmd: &PreprocessArgs, args: &SentimenArgs) -> Result<()> {
    let stages = preprocess_text(&cmd.text)?;
    print_output(&PreprocessOutput { stages }, args)
}

fn execute_evaluate(cmd: &EvaluateArgs, args: &SentimenArgs) -> Result<()> {
    let records = load_corpus(&cmd.dataset)?;
    if records.len() < 2 {
        return Err(SentimenError::invalid_input(format!(
            "evaluation needs at least 2 labeled texts, got {}",
            records.len()
        )));
    }

    let documents = preprocess_corpus(&records)?;
    let (_, labels) = unzip_corpus(&records);

    let split = train_test_split(documents, labels, cmd.test_fraction, cmd.seed)?;
    info!(
        "split: {} train / {} test",
        split.x_train.len(),
        split.x_test.len()
    );

    let mut vectorizer = TfIdfVectorizer::new();
    vectorizer.fit(&split.x_train);
    let train_vectors = vectorizer.transform(&split.x_train);
    let test_vectors = vectorizer.transform(&split.x_test);
    info!("vocabulary: {} terms", vectorizer.vocabulary_size());

    let mut knn = KnnClassifier::new(cmd.k)?;
    knn.fit(train_vectors, split.y_train)?;
    let predictions = knn.predict(&test_vectors);

    let report = calculate_metrics(&split.y_test, &predictions, &Sentiment::ALL);

    print_output(
        &EvaluationOutput {
            corpus_size: records.len(),
            train_size: split.x_train.len(),
            test_size: split.x_test.len(),
            k: cmd.k,
            seed: cmd.seed,
            report,
        },
        args,
    )
}

fn execute_crossval(cmd: &CrossvalArgs, args: &SentimenArgs) -> Result<()> {
    let records = load_corpus(&cmd.dataset)?;
    if records.len() < cmd.folds {
        return Err(SentimenError::invalid_input(format!(
            "{}-fold cross-validation needs at least {} labeled texts, got {}",
            cmd.folds,
            cmd.folds,
            records.len()
        )));
    }

    let documents = preprocess_corpus(&records)?;
    let (_, labels) = unzip_corpus(&records);

    let summaries =
        run_stratified_kfold(&documents, &labels, &cmd.k_options, cmd.folds, cmd.seed)?;

    print_output(
        &CrossvalOutput {
            corpus_size: records.len(),
            folds: cmd.folds,
            seed: cmd.seed,
            summaries,
        },
        args,
    )
}

fn execute_predict(cmd: &PredictArgs, args: &SentimenArgs) -> Result<()> {
    let records = load_corpus(&cmd.dataset)?;
    if records.is_empty() {
        return Err(SentimenError::invalid_input(
            "prediction needs a non-empty training corpus",
        ));
    }

    let documents = preprocess_corpus(&records)?;
    let (_, labels) = unzip_corpus(&records);

    let mut vectorizer = TfIdfVectorizer::new();
    vectorizer.fit(&documents);
    let train_vectors = vectorizer.transform(&documents);

    let mut knn = KnnClassifier::new(cmd.k)?;
    knn.fit(train_vectors, labels)?;

    let analyzer = indonesian_analyzer();
    let mut predictions = Vec::with_capacity(cmd.texts.len());
    for text in &cmd.texts {
        let cleaned = analyzer.analyze_to_string(text)?;
        let label = knn.predict_single(&vectorizer.transform_one(&cleaned));
        predictions.push(Prediction {
            text: text.clone(),
            cleaned,
            label,
        });
    }

    print_output(
        &PredictionOutput {
            corpus_size: records.len(),
            k: cmd.k,
            predictions,
        },
        args,
    )
}

fn load_corpus(path: &Path) -> Result<Vec<LabeledText>> {
    let records = load_labeled_corpus(path)?;
    info!("loaded {} labeled texts from {}", records.len(), path.display());
    Ok(records)
}

/// Run every corpus text through the Indonesian pipeline.
fn preprocess_corpus(records: &[LabeledText]) -> Result<Vec<String>> {
    let analyzer = indonesian_analyzer();
    records
        .iter()
        .map(|record| analyzer.analyze_to_string(&record.text))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_corpus() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let records = [
            ("vaksin aman dan bagus", "positif"),
            ("senang vaksin gratis", "positif"),
            ("program vaksin bantu warga", "positif"),
            ("vaksin bahaya sekali", "negatif"),
            ("takut efek samping vaksin", "negatif"),
            ("vaksin palsu bohong", "negatif"),
            ("vaksin biasa saja", "netral"),
            ("tunggu kabar vaksin", "netral"),
            ("belum tahu soal vaksin", "netral"),
            ("vaksin nanti dulu", "netral"),
        ];
        for (text, label) in records {
            writeln!(file, r#"{{"text": "{text}", "label": "{label}"}}"#).unwrap();
        }
        file
    }

    fn base_args(command: Command) -> SentimenArgs {
        SentimenArgs {
            verbose: 0,
            quiet: true,
            output_format: crate::cli::args::OutputFormat::Json,
            pretty: false,
            command,
        }
    }

    #[test]
    fn test_evaluate_rejects_tiny_corpus() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"text": "vaksin aman", "label": "positif"}}"#).unwrap();

        let cmd = EvaluateArgs {
            dataset: file.path().to_path_buf(),
            k: 3,
            test_fraction: 0.2,
            seed: 42,
        };
        let args = base_args(Command::Evaluate(cmd.clone()));
        assert!(execute_evaluate(&cmd, &args).is_err());
    }

    #[test]
    fn test_evaluate_runs_on_small_corpus() {
        let file = write_corpus();
        let cmd = EvaluateArgs {
            dataset: file.path().to_path_buf(),
            k: 3,
            test_fraction: 0.2,
            seed: 42,
        };
        let args = base_args(Command::Evaluate(cmd.clone()));
        assert!(execute_evaluate(&cmd, &args).is_ok());
    }

    #[test]
    fn test_crossval_rejects_fewer_records_than_folds() {
        let file = write_corpus();
        let cmd = CrossvalArgs {
            dataset: file.path().to_path_buf(),
            k_options: vec![3],
            folds: 100,
            seed: 42,
        };
        let args = base_args(Command::Crossval(cmd.clone()));
        assert!(execute_crossval(&cmd, &args).is_err());
    }

    #[test]
    fn test_predict_runs() {
        let file = write_corpus();
        let cmd = PredictArgs {
            dataset: file.path().to_path_buf(),
            texts: vec!["vaksin sangat aman".to_string()],
            k: 3,
        };
        let args = base_args(Command::Predict(cmd.clone()));
        assert!(execute_predict(&cmd, &args).is_ok());
    }
}
