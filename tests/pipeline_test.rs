use sentimen::analysis::analyzer::{Analyzer, indonesian_analyzer};
use sentimen::classify::knn::KnnClassifier;
use sentimen::dataset::Sentiment;
use sentimen::error::Result;
use sentimen::evaluate::metrics::calculate_metrics;
use sentimen::evaluate::split::train_test_split;
use sentimen::feature::tfidf::TfIdfVectorizer;

fn labeled_corpus() -> Vec<(&'static str, Sentiment)> {
    vec![
        ("Vaksin AMAN dan bagus bgt!! https://t.co/abc", Sentiment::Positif),
        ("senang banget vaksin gratis utk warga", Sentiment::Positif),
        ("program vaksin membantu kesehatan warga", Sentiment::Positif),
        ("vaksin bahaya, takut efek samping @kemenkes", Sentiment::Negatif),
        ("vaksin palsu itu bohong dan buruk", Sentiment::Negatif),
        ("takut bgt sama efek vaksin", Sentiment::Negatif),
        ("vaksin biasa saja menurutku", Sentiment::Netral),
        ("masih tunggu kabar soal vaksin", Sentiment::Netral),
        ("belum tahu mau vaksin atau tidak", Sentiment::Netral),
    ]
}

#[test]
fn analyzer_strips_noise_and_keeps_content_words() -> Result<()> {
    let analyzer = indonesian_analyzer();
    let cleaned =
        analyzer.analyze_to_string("Vaksin AMAN bgt!! cek https://t.co/abc @kemenkes #vaksinasi")?;

    assert!(cleaned.contains("vaksin"));
    assert!(cleaned.contains("aman"));
    assert!(!cleaned.contains("https"));
    assert!(!cleaned.contains("kemenkes"));
    assert!(!cleaned.contains('!'));
    Ok(())
}

#[test]
fn preprocessed_corpus_classifies_training_texts_back() -> Result<()> {
    let corpus = labeled_corpus();
    let analyzer = indonesian_analyzer();

    let documents: Vec<String> = corpus
        .iter()
        .map(|(text, _)| analyzer.analyze_to_string(text))
        .collect::<Result<_>>()?;
    let labels: Vec<Sentiment> = corpus.iter().map(|(_, label)| *label).collect();

    let mut vectorizer = TfIdfVectorizer::new();
    vectorizer.fit(&documents);
    let vectors = vectorizer.transform(&documents);

    // With k=1 every training document is its own nearest neighbor.
    let mut knn = KnnClassifier::new(1)?;
    knn.fit(vectors.clone(), labels.clone())?;
    let predictions = knn.predict(&vectors);

    let report = calculate_metrics(&labels, &predictions, &Sentiment::ALL);
    assert_eq!(report.accuracy, 1.0);
    for metrics in &report.per_label {
        assert_eq!(metrics.recall, 1.0);
        assert_eq!(metrics.support, 3);
    }
    Ok(())
}

#[test]
fn split_then_evaluate_produces_consistent_report() -> Result<()> {
    let corpus = labeled_corpus();
    let analyzer = indonesian_analyzer();

    let documents: Vec<String> = corpus
        .iter()
        .map(|(text, _)| analyzer.analyze_to_string(text))
        .collect::<Result<_>>()?;
    let labels: Vec<Sentiment> = corpus.iter().map(|(_, label)| *label).collect();

    let split = train_test_split(documents, labels, 0.25, 42)?;
    assert_eq!(split.x_train.len(), 6);
    assert_eq!(split.x_test.len(), 3);

    let mut vectorizer = TfIdfVectorizer::new();
    vectorizer.fit(&split.x_train);
    let train_vectors = vectorizer.transform(&split.x_train);
    let test_vectors = vectorizer.transform(&split.x_test);

    let mut knn = KnnClassifier::new(3)?;
    knn.fit(train_vectors, split.y_train)?;
    let predictions = knn.predict(&test_vectors);
    assert_eq!(predictions.len(), 3);

    let report = calculate_metrics(&split.y_test, &predictions, &Sentiment::ALL);
    assert!((0.0..=1.0).contains(&report.accuracy));

    // The confusion matrix accounts for every valid prediction.
    let matrix_total: usize = report.confusion_matrix.iter().flatten().sum();
    let valid = predictions.iter().filter(|p| p.is_some()).count();
    assert_eq!(matrix_total, valid);
    Ok(())
}

#[test]
fn unseen_vocabulary_yields_zero_vector_but_still_predicts() -> Result<()> {
    let documents: Vec<String> =
        vec!["vaksin aman".to_string(), "vaksin bahaya".to_string()];
    let labels = vec![Sentiment::Positif, Sentiment::Negatif];

    let mut vectorizer = TfIdfVectorizer::new();
    vectorizer.fit(&documents);

    let query = vectorizer.transform_one("kata asing semua");
    assert!(query.iter().all(|&w| w == 0.0));

    let mut knn = KnnClassifier::new(1)?;
    knn.fit(vectorizer.transform(&documents), labels)?;

    // Zero-norm queries are equidistant from everything; the first
    // training label wins the tie.
    assert_eq!(knn.predict_single(&query), Some(Sentiment::Positif));
    Ok(())
}
