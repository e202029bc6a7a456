//! Pipeline runner: orchestrates stage execution and artifact flow.
//!
//! The [`Pipeline`] struct holds a statically-composed set of collaborators.
//! Calling [`Pipeline::run`] executes the stages in order, threading
//! artifacts between them and notifying a [`PipelineObserver`] at each
//! boundary.
//!
//! # Static dispatch
//!
//! `Pipeline` is generic over all collaborator types, so each combination is
//! monomorphized into its own concrete type. The zero-sized defaults
//! ([`PunctuationSentenceSplitter`], [`LowercaseStemmer`], ...) add no
//! runtime cost.
//!
//! # Factory methods
//!
//! Use [`Pipeline::for_language()`] or [`Pipeline::from_config()`] to get the
//! default collaborators without spelling out the generics, or
//! [`PipelineBuilder`] to swap individual ones.

use crate::errors::{Result, SummarizeError};
use crate::nlp::{
    Language, LowercaseStemmer, PunctuationSentenceSplitter, RegexWordTokenizer, SnowballStemmer,
    StopwordFilter,
};
use crate::pipeline::observer::{
    PipelineObserver, StageClock, StageReport, StageReportBuilder, STAGE_FETCH, STAGE_FREQUENCY,
    STAGE_SCORE, STAGE_SELECT, STAGE_SENTENCES,
};
use crate::pipeline::traits::{
    SentenceSplitter, Stemmer, StopwordLookup, TextSource, WordTokenizer,
};
use crate::summarizer::{FrequencyTable, Normalizer, SentenceScorer, Summary, ThresholdSelector};
use crate::types::SummarizerConfig;

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). The span stays entered until the end of the enclosing block, so
/// each stage runs in a block of its own. When disabled, this is a no-op.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

// ============================================================================
// Pipeline: statically-composed collaborator container
// ============================================================================

/// A summarization pipeline composed of concrete collaborators.
///
/// # Type parameters
///
/// | Param | Trait | Default impl |
/// |-------|-------|--------------|
/// | `SS`  | [`SentenceSplitter`] | [`PunctuationSentenceSplitter`] |
/// | `WT`  | [`WordTokenizer`] | [`RegexWordTokenizer`] |
/// | `St`  | [`Stemmer`] | [`SnowballStemmer`] |
/// | `Sw`  | [`StopwordLookup`] | [`StopwordFilter`] |
#[derive(Debug, Clone)]
pub struct Pipeline<SS, WT, St, Sw> {
    pub splitter: SS,
    pub tokenizer: WT,
    pub stemmer: St,
    pub stopwords: Sw,
}

/// Pipeline with the built-in collaborators.
pub type DefaultPipeline =
    Pipeline<PunctuationSentenceSplitter, RegexWordTokenizer, SnowballStemmer, StopwordFilter>;

impl DefaultPipeline {
    /// Default collaborators for `language`.
    pub fn for_language(language: Language) -> Self {
        Pipeline {
            splitter: PunctuationSentenceSplitter,
            tokenizer: RegexWordTokenizer::new(),
            stemmer: SnowballStemmer::new(language),
            stopwords: StopwordFilter::for_language(language),
        }
    }

    /// Default collaborators for the language named in `cfg`.
    pub fn from_config(cfg: &SummarizerConfig) -> Self {
        Self::for_language(Language::parse_or_default(&cfg.language))
    }
}

impl Default for DefaultPipeline {
    fn default() -> Self {
        Self::for_language(Language::English)
    }
}

// ============================================================================
// Pipeline::run: execute stages in order
// ============================================================================

impl<SS, WT, St, Sw> Pipeline<SS, WT, St, Sw>
where
    SS: SentenceSplitter,
    WT: WordTokenizer + Sync,
    St: Stemmer + Sync,
    Sw: StopwordLookup + Sync,
{
    /// Summarize `text`.
    ///
    /// Stages run in order:
    /// 1. Split sentences
    /// 2. Build the frequency table over the whole text
    /// 3. Score sentences
    /// 4. Select sentences above the threshold
    ///
    /// The `observer` receives callbacks at each stage boundary. Pass
    /// [`NoopObserver`](super::observer::NoopObserver) when nothing needs to
    /// watch.
    pub fn run(
        &self,
        text: &str,
        cfg: &SummarizerConfig,
        observer: &mut impl PipelineObserver,
    ) -> Result<Summary> {
        cfg.validate()?;

        let stemmer: &(dyn Stemmer + Sync) = if cfg.stem {
            &self.stemmer
        } else {
            &LowercaseStemmer
        };
        let normalizer = Normalizer::new(stemmer, &self.stopwords);

        // Stage 1: Split sentences
        let sentences = {
            trace_stage!(STAGE_SENTENCES);
            observer.on_stage_start(STAGE_SENTENCES);
            let clock = StageClock::start();
            let sentences = self.splitter.split_sentences(text)?;
            let report = StageReportBuilder::new(clock.elapsed())
                .items(sentences.len())
                .build();
            observer.on_stage_end(STAGE_SENTENCES, &report);
            observer.on_sentences(&sentences);
            sentences
        };

        if sentences.is_empty() {
            return Err(SummarizeError::EmptyInput);
        }

        // Stage 2: Frequency table
        let table = {
            trace_stage!(STAGE_FREQUENCY);
            observer.on_stage_start(STAGE_FREQUENCY);
            let clock = StageClock::start();
            let tokens = self.tokenizer.split_words(text)?;
            let table = FrequencyTable::build(&tokens, &normalizer);
            let report = StageReportBuilder::new(clock.elapsed())
                .items(table.len())
                .build();
            observer.on_stage_end(STAGE_FREQUENCY, &report);
            observer.on_frequency_table(&table);

            #[cfg(feature = "tracing")]
            tracing::debug!(
                tokens = tokens.len(),
                distinct = table.len(),
                counted = table.total(),
                "frequency table built"
            );
            table
        };

        // Stage 3: Score
        let scores = {
            trace_stage!(STAGE_SCORE);
            observer.on_stage_start(STAGE_SCORE);
            let clock = StageClock::start();
            let scores = SentenceScorer::from_config(cfg).score(
                &sentences,
                &table,
                &self.tokenizer,
                &normalizer,
            )?;
            let report = StageReportBuilder::new(clock.elapsed())
                .items(scores.len())
                .build();
            observer.on_stage_end(STAGE_SCORE, &report);
            observer.on_scores(&scores);
            scores
        };

        // Stage 4: Select
        let summary = {
            trace_stage!(STAGE_SELECT);
            observer.on_stage_start(STAGE_SELECT);
            let clock = StageClock::start();
            let summary = ThresholdSelector::from_config(cfg).select(&sentences, &scores)?;
            let report = StageReportBuilder::new(clock.elapsed())
                .items(summary.len())
                .average(summary.average)
                .threshold(summary.threshold)
                .build();
            observer.on_stage_end(STAGE_SELECT, &report);
            observer.on_summary(&summary);
            summary
        };

        Ok(summary)
    }

    /// Fetch the text from `source`, then [`run`](Self::run) on it.
    ///
    /// Source failures are returned as-is and no stage runs.
    pub fn run_source(
        &self,
        source: &impl TextSource,
        cfg: &SummarizerConfig,
        observer: &mut impl PipelineObserver,
    ) -> Result<Summary> {
        let text = {
            trace_stage!(STAGE_FETCH);
            observer.on_stage_start(STAGE_FETCH);
            let clock = StageClock::start();
            let text = source.fetch_raw_text()?;
            observer.on_stage_end(STAGE_FETCH, &StageReport::new(clock.elapsed()));
            text
        };

        self.run(&text, cfg, observer)
    }

    /// Frequency table for `text` alone, without scoring.
    pub fn frequency_table(&self, text: &str, cfg: &SummarizerConfig) -> Result<FrequencyTable> {
        let tokens = self.tokenizer.split_words(text)?;
        let table = if cfg.stem {
            FrequencyTable::build(&tokens, &Normalizer::new(&self.stemmer, &self.stopwords))
        } else {
            FrequencyTable::build(&tokens, &Normalizer::new(LowercaseStemmer, &self.stopwords))
        };
        Ok(table)
    }
}

// ============================================================================
// PipelineBuilder: fluent construction with custom collaborators
// ============================================================================

/// Fluent builder for a [`Pipeline`] with custom collaborators.
///
/// Starts from the English defaults.
///
/// ```
/// # use rapid_summarizer::pipeline::runner::PipelineBuilder;
/// # use rapid_summarizer::nlp::{LowercaseStemmer, StopwordFilter};
/// let pipeline = PipelineBuilder::new()
///     .stemmer(LowercaseStemmer)
///     .stopwords(StopwordFilter::from_list(&["the", "on"]))
///     .build();
/// ```
pub struct PipelineBuilder<
    SS = PunctuationSentenceSplitter,
    WT = RegexWordTokenizer,
    St = SnowballStemmer,
    Sw = StopwordFilter,
> {
    splitter: SS,
    tokenizer: WT,
    stemmer: St,
    stopwords: Sw,
}

impl PipelineBuilder {
    /// Start from the English defaults.
    pub fn new() -> Self {
        Self::for_language(Language::English)
    }

    /// Start from the defaults for `language`.
    pub fn for_language(language: Language) -> Self {
        let Pipeline {
            splitter,
            tokenizer,
            stemmer,
            stopwords,
        } = DefaultPipeline::for_language(language);
        PipelineBuilder {
            splitter,
            tokenizer,
            stemmer,
            stopwords,
        }
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<SS, WT, St, Sw> PipelineBuilder<SS, WT, St, Sw> {
    /// Override the sentence splitter.
    pub fn splitter<S: SentenceSplitter>(self, s: S) -> PipelineBuilder<S, WT, St, Sw> {
        PipelineBuilder {
            splitter: s,
            tokenizer: self.tokenizer,
            stemmer: self.stemmer,
            stopwords: self.stopwords,
        }
    }

    /// Override the word tokenizer.
    pub fn tokenizer<T: WordTokenizer>(self, t: T) -> PipelineBuilder<SS, T, St, Sw> {
        PipelineBuilder {
            splitter: self.splitter,
            tokenizer: t,
            stemmer: self.stemmer,
            stopwords: self.stopwords,
        }
    }

    /// Override the stemmer.
    pub fn stemmer<S: Stemmer>(self, s: S) -> PipelineBuilder<SS, WT, S, Sw> {
        PipelineBuilder {
            splitter: self.splitter,
            tokenizer: self.tokenizer,
            stemmer: s,
            stopwords: self.stopwords,
        }
    }

    /// Override the stopword lookup.
    pub fn stopwords<S: StopwordLookup>(self, s: S) -> PipelineBuilder<SS, WT, St, S> {
        PipelineBuilder {
            splitter: self.splitter,
            tokenizer: self.tokenizer,
            stemmer: self.stemmer,
            stopwords: s,
        }
    }

    /// Consume the builder and produce a [`Pipeline`].
    pub fn build(self) -> Pipeline<SS, WT, St, Sw> {
        Pipeline {
            splitter: self.splitter,
            tokenizer: self.tokenizer,
            stemmer: self.stemmer,
            stopwords: self.stopwords,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
