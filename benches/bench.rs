use criterion::{Criterion, black_box, criterion_group, criterion_main};

use sentimen::analysis::analyzer::{Analyzer, indonesian_analyzer};
use sentimen::classify::knn::KnnClassifier;
use sentimen::feature::tfidf::TfIdfVectorizer;

const WORDS: [&str; 12] = [
    "vaksin", "aman", "bagus", "bahaya", "takut", "senang", "sehat", "warga", "program",
    "gratis", "kabar", "efek",
];

fn generate_documents(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let len = 4 + i % 6;
            (0..len)
                .map(|j| WORDS[(i * 7 + j * 3) % WORDS.len()])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn bench_analyzer(c: &mut Criterion) {
    let analyzer = indonesian_analyzer();
    let text = "Pemerintah GAK becus!! vaksinnya bahaya bgt katanya https://t.co/xyz @kemenkes #vaksin";

    c.bench_function("analyze_social_media_text", |b| {
        b.iter(|| analyzer.analyze_to_string(black_box(text)).unwrap())
    });
}

fn bench_tfidf(c: &mut Criterion) {
    let documents = generate_documents(200);

    let mut group = c.benchmark_group("tfidf");

    group.bench_function("fit_200_docs", |b| {
        b.iter(|| {
            let mut vectorizer = TfIdfVectorizer::new();
            vectorizer.fit(black_box(&documents));
        })
    });

    let mut vectorizer = TfIdfVectorizer::new();
    vectorizer.fit(&documents);
    group.bench_function("transform_200_docs", |b| {
        b.iter(|| vectorizer.transform(black_box(&documents)))
    });

    group.finish();
}

fn bench_knn(c: &mut Criterion) {
    let documents = generate_documents(200);
    let labels: Vec<&str> = (0..documents.len())
        .map(|i| ["positif", "negatif", "netral"][i % 3])
        .collect();

    let mut vectorizer = TfIdfVectorizer::new();
    vectorizer.fit(&documents);
    let vectors = vectorizer.transform(&documents);

    let mut knn = KnnClassifier::new(5).unwrap();
    knn.fit(vectors.clone(), labels).unwrap();

    let queries = &vectors[..20];

    c.bench_function("knn_predict_20_of_200", |b| {
        b.iter(|| knn.predict(black_box(queries)))
    });
}

criterion_group!(benches, bench_analyzer, bench_tfidf, bench_knn);
criterion_main!(benches);
