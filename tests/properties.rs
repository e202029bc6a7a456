use proptest::prelude::*;

use rapid_summarizer::nlp::{RegexWordTokenizer, SnowballStemmer, StopwordFilter};
use rapid_summarizer::pipeline::traits::WordTokenizer;
use rapid_summarizer::summarizer::Normalizer;
use rapid_summarizer::{summarize, DefaultPipeline, SummarizerConfig};
use rustc_hash::FxHashMap;

/// A few sentences built from a small vocabulary so words repeat.
fn document() -> impl Strategy<Value = String> {
    let word = prop::sample::select(vec![
        "river", "stone", "bridge", "light", "water", "city", "road", "tower", "market", "song",
    ]);
    let sentence = prop::collection::vec(word, 1..8).prop_map(|words| {
        let mut s = words.join(" ");
        if let Some(first) = s.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        s.push('.');
        s
    });
    prop::collection::vec(sentence, 1..12).prop_map(|sentences| sentences.join(" "))
}

/// Sentences mixing stopwords, inflected forms and mixed case.
fn inflected_document() -> impl Strategy<Value = String> {
    let word = prop::sample::select(vec![
        "the", "The", "and", "a", "of", "dog", "dogs", "Dogs", "bark", "barks", "barking",
        "run", "runs", "running", "river", "rivers", "loudly", "quickly", "house", "houses",
    ]);
    let end = prop::sample::select(vec![".", "!", "?"]);
    let sentence = (prop::collection::vec(word, 1..10), end)
        .prop_map(|(words, end)| format!("{}{}", words.join(" "), end));
    prop::collection::vec(sentence, 1..10).prop_map(|sentences| sentences.join(" "))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_higher_multiplier_selects_a_subset(text in document(), low in 0.0f64..2.0, step in 0.0f64..2.0) {
        let loose = summarize(&text, low).unwrap();
        let strict = summarize(&text, low + step).unwrap();

        let loose_idx: Vec<usize> = loose.sentences.iter().map(|s| s.sentence.index).collect();
        for s in &strict.sentences {
            prop_assert!(loose_idx.contains(&s.sentence.index));
        }
    }

    #[test]
    fn prop_selection_preserves_order(text in document(), multiplier in 0.0f64..3.0) {
        let summary = summarize(&text, multiplier).unwrap();
        let indices: Vec<usize> = summary.sentences.iter().map(|s| s.sentence.index).collect();
        prop_assert!(indices.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(summary.len() <= summary.total_sentences);
    }

    #[test]
    fn prop_selected_scores_clear_threshold(text in document(), multiplier in 0.0f64..3.0) {
        let summary = summarize(&text, multiplier).unwrap();
        for s in &summary.sentences {
            prop_assert!(s.score > summary.threshold);
        }
    }

    #[test]
    fn prop_summarize_is_deterministic(text in document()) {
        let a = summarize(&text, 1.0).unwrap();
        let b = summarize(&text, 1.0).unwrap();
        prop_assert_eq!(a.text(), b.text());
        prop_assert_eq!(a.threshold, b.threshold);
    }

    #[test]
    fn prop_table_counts_match_normalized_tokens(text in inflected_document()) {
        let pipeline = DefaultPipeline::default();
        let table = pipeline.frequency_table(&text, &SummarizerConfig::default()).unwrap();

        let tokens = RegexWordTokenizer::new().split_words(&text).unwrap();
        let normalizer = Normalizer::new(SnowballStemmer::default(), StopwordFilter::default());
        let mut expected: FxHashMap<String, u32> = FxHashMap::default();
        for word in normalizer.normalize_all(&tokens) {
            *expected.entry(word).or_default() += 1;
        }

        prop_assert_eq!(table.len(), expected.len());
        for (word, count) in &expected {
            prop_assert_eq!(table.count(word), *count);
        }
        prop_assert_eq!(table.total(), expected.values().map(|&c| u64::from(c)).sum::<u64>());
        prop_assert!(table.total() <= tokens.len() as u64);
    }

    #[test]
    fn prop_unstemmed_table_counts_lowercased_tokens(text in inflected_document()) {
        let pipeline = DefaultPipeline::default();
        let mut cfg = SummarizerConfig::default();
        cfg.stem = false;
        let table = pipeline.frequency_table(&text, &cfg).unwrap();

        let stopwords = StopwordFilter::default();
        let mut expected: FxHashMap<String, u32> = FxHashMap::default();
        for token in RegexWordTokenizer::new().split_words(&text).unwrap() {
            let word = token.to_lowercase();
            if !stopwords.contains(&word) {
                *expected.entry(word).or_default() += 1;
            }
        }

        prop_assert_eq!(table.len(), expected.len());
        for (word, count) in &expected {
            prop_assert_eq!(table.count(word), *count);
        }
    }

    #[test]
    fn prop_parallel_scoring_matches_sequential(text in document()) {
        let pipeline = DefaultPipeline::default();
        let mut sequential = SummarizerConfig::default().with_multiplier(0.8);
        sequential.parallel_min_sentences = usize::MAX;
        let mut parallel = sequential.clone();
        parallel.parallel_min_sentences = 2;

        let mut obs = rapid_summarizer::pipeline::NoopObserver;
        let a = pipeline.run(&text, &sequential, &mut obs).unwrap();
        let b = pipeline.run(&text, &parallel, &mut obs).unwrap();
        prop_assert_eq!(a.text(), b.text());
        prop_assert_eq!(a.average, b.average);
    }
}
