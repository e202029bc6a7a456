use rapid_summarizer::nlp::{
    LowercaseStemmer, PunctuationSentenceSplitter, RegexWordTokenizer, SnowballStemmer,
    StopwordFilter,
};
use rapid_summarizer::pipeline::observer::NoopObserver;
use rapid_summarizer::pipeline::traits::{SentenceSplitter, WordTokenizer};
use rapid_summarizer::pipeline::{Pipeline, PipelineBuilder, SummarizerSpec};
use rapid_summarizer::summarizer::Normalizer;
use rapid_summarizer::{
    summarize, summarize_with_config, DefaultPipeline, KeyMode, MatchMode, SummarizeError,
    SummarizerConfig,
};
use rustc_hash::{FxHashMap, FxHashSet};

const CAT_TEXT: &str = "The cat sat. The cat sat on the mat. Dogs bark loudly.";

const ARTICLE: &str = "Rust is a systems programming language. \
    Rust guarantees memory safety without a garbage collector. \
    The borrow checker enforces memory safety at compile time. \
    Many developers enjoy the tooling. \
    Cargo builds Rust projects and manages dependencies. \
    The weather was pleasant yesterday.";

type StubPipeline = Pipeline<
    PunctuationSentenceSplitter,
    RegexWordTokenizer,
    LowercaseStemmer,
    FxHashSet<String>,
>;

fn stub_pipeline() -> StubPipeline {
    PipelineBuilder::new()
        .stemmer(LowercaseStemmer)
        .stopwords(["the", "on"].iter().map(|s| s.to_string()).collect::<FxHashSet<_>>())
        .build()
}

#[test]
fn cat_text_frequency_table() {
    let pipeline = stub_pipeline();
    let table = pipeline
        .frequency_table(CAT_TEXT, &SummarizerConfig::default())
        .unwrap();

    let words: Vec<(&str, u32)> = table.iter().collect();
    assert_eq!(
        words,
        vec![
            ("cat", 2),
            ("sat", 2),
            (".", 3),
            ("mat", 1),
            ("dogs", 1),
            ("bark", 1),
            ("loudly", 1),
        ]
    );
}

#[test]
fn cat_text_summary_depends_on_multiplier() {
    let pipeline = stub_pipeline();

    let strict = pipeline
        .run(CAT_TEXT, &SummarizerConfig::default(), &mut NoopObserver)
        .unwrap();
    assert!(strict.is_empty());

    let loose = pipeline
        .run(
            CAT_TEXT,
            &SummarizerConfig::default().with_multiplier(1.0),
            &mut NoopObserver,
        )
        .unwrap();
    let scores: Vec<f64> = loose.sentences.iter().map(|s| s.score).collect();
    assert_eq!(loose.text(), "The cat sat. The cat sat on the mat.");
    assert!((scores[0] - 7.0 / 3.0).abs() < 1e-12);
    assert!((scores[1] - 2.0).abs() < 1e-12);
}

#[test]
fn summarizing_twice_gives_the_same_summary() {
    let first = summarize(ARTICLE, 1.0).unwrap();
    let second = summarize(ARTICLE, 1.0).unwrap();

    assert_eq!(first.text(), second.text());
    assert_eq!(first.average, second.average);
}

#[test]
fn selected_sentences_keep_document_order() {
    let summary = summarize(ARTICLE, 0.5).unwrap();
    let indices: Vec<usize> = summary.sentences.iter().map(|s| s.sentence.index).collect();

    assert!(!indices.is_empty());
    assert!(indices.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn selected_sentences_are_verbatim_input_slices() {
    let summary = summarize(ARTICLE, 0.5).unwrap();
    for selected in &summary.sentences {
        let s = &selected.sentence;
        assert_eq!(&ARTICLE[s.start..s.end], s.text);
    }
}

#[test]
fn empty_and_blank_input_is_rejected() {
    assert!(matches!(summarize("", 1.5), Err(SummarizeError::EmptyInput)));
    assert!(matches!(
        summarize(" \n\t ", 1.5),
        Err(SummarizeError::EmptyInput)
    ));
}

#[test]
fn frequency_table_counts_every_normalized_token() {
    let text = "Dogs bark. A dog barks loudly, and the dogs run! Barking dogs.";
    let pipeline = DefaultPipeline::default();
    let table = pipeline
        .frequency_table(text, &SummarizerConfig::default())
        .unwrap();

    let tokens = RegexWordTokenizer::new().split_words(text).unwrap();
    let normalizer = Normalizer::new(SnowballStemmer::default(), StopwordFilter::default());
    let mut expected: FxHashMap<String, u32> = FxHashMap::default();
    for word in normalizer.normalize_all(&tokens) {
        *expected.entry(word).or_default() += 1;
    }

    assert_eq!(table.len(), expected.len());
    for (word, count) in &expected {
        assert_eq!(table.count(word), *count, "count of {word:?}");
    }
    assert_eq!(table.count("dog"), 4);
    assert_eq!(table.count("bark"), 3);
    assert!(!table.contains("the"));
}

#[test]
fn reference_configuration_matches_substrings() {
    let text = "Concatenation is slow. A cat is fast. The cat naps.";
    let pipeline = stub_pipeline();

    let token = pipeline
        .run(text, &SummarizerConfig::default().with_multiplier(0.0), &mut NoopObserver)
        .unwrap();
    let reference = pipeline
        .run(
            text,
            &SummarizerConfig::reference().with_multiplier(0.0),
            &mut NoopObserver,
        )
        .unwrap();

    assert_eq!(token.len(), 3);
    assert_eq!(reference.len(), 3);
    // "cat" appears inside "concatenation" only under substring matching
    assert!(reference.sentences[0].score != token.sentences[0].score);
}

#[test]
fn prefix_keys_merge_sentences_with_a_shared_opening() {
    let text = "Rockets launch fast. Rockets launch slowly today.";
    let splitter = PunctuationSentenceSplitter;
    let sentences = splitter.split_sentences(text).unwrap();
    assert_eq!(sentences[0].prefix(15), sentences[1].prefix(15));

    let cfg = SummarizerConfig::default()
        .with_key_mode(KeyMode::reference())
        .with_match_mode(MatchMode::Token)
        .with_multiplier(0.0);
    let summary = stub_pipeline().run(text, &cfg, &mut NoopObserver).unwrap();

    // Both sentences read the single shared bucket
    assert_eq!(summary.len(), 2);
    assert_eq!(summary.sentences[0].score, summary.sentences[1].score);
}

#[test]
fn json_config_resolves_and_runs() {
    let spec = SummarizerSpec::from_json(
        r#"{ "v": 1, "preset": "reference", "config": { "multiplier": 1.0 } }"#,
    )
    .unwrap();
    let (cfg, report) = spec.resolve().unwrap();
    assert!(report.is_empty());

    let summary = summarize_with_config(ARTICLE, &cfg).unwrap();
    assert_eq!(summary.total_sentences, 6);
}
