//! Pipeline observer: hooks for logging, profiling, and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. Every method has an empty default, so an observer only
//! implements what it cares about.

use std::time::{Duration, Instant};

use crate::pipeline::artifacts::SentenceScores;
use crate::summarizer::{FrequencyTable, Summary};
use crate::types::Sentence;

pub const STAGE_FETCH: &str = "fetch";
pub const STAGE_SENTENCES: &str = "sentences";
pub const STAGE_FREQUENCY: &str = "frequency";
pub const STAGE_SCORE: &str = "score";
pub const STAGE_SELECT: &str = "select";

/// Receives stage-boundary callbacks from [`Pipeline::run`](super::runner::Pipeline::run).
pub trait PipelineObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}

    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    fn on_sentences(&mut self, _sentences: &[Sentence]) {}

    fn on_frequency_table(&mut self, _table: &FrequencyTable) {}

    fn on_scores(&mut self, _scores: &SentenceScores) {}

    fn on_summary(&mut self, _summary: &Summary) {}
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Wall-clock timer for one stage
#[derive(Debug, Clone, Copy)]
pub struct StageClock(Instant);

impl StageClock {
    pub fn start() -> Self {
        Self(Instant::now())
    }

    pub fn elapsed(&self) -> Duration {
        self.0.elapsed()
    }
}

/// Timing and size information for one completed stage
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StageReport {
    elapsed: Duration,
    items: Option<usize>,
    average: Option<f64>,
    threshold: Option<f64>,
}

impl StageReport {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            ..Self::default()
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Number of artifacts the stage produced (sentences, table entries,
    /// score buckets or selected sentences).
    pub fn items(&self) -> Option<usize> {
        self.items
    }

    pub fn average(&self) -> Option<f64> {
        self.average
    }

    pub fn threshold(&self) -> Option<f64> {
        self.threshold
    }
}

/// Builder for reports that carry stage-specific metrics
#[derive(Debug, Clone)]
pub struct StageReportBuilder {
    report: StageReport,
}

impl StageReportBuilder {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            report: StageReport::new(elapsed),
        }
    }

    pub fn items(mut self, n: usize) -> Self {
        self.report.items = Some(n);
        self
    }

    pub fn average(mut self, average: f64) -> Self {
        self.report.average = Some(average);
        self
    }

    pub fn threshold(mut self, threshold: f64) -> Self {
        self.report.threshold = Some(threshold);
        self
    }

    pub fn build(self) -> StageReport {
        self.report
    }
}

/// Collects a report per stage, in execution order.
#[derive(Debug, Clone, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }

    /// Report for `stage`, if it ran
    pub fn report(&self, stage: &str) -> Option<&StageReport> {
        self.reports
            .iter()
            .find(|(name, _)| *name == stage)
            .map(|(_, report)| report)
    }

    /// Sum of all stage durations
    pub fn total_elapsed(&self) -> Duration {
        self.reports.iter().map(|(_, r)| r.elapsed).sum()
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, report.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_builder_sets_metrics() {
        let report = StageReportBuilder::new(Duration::from_millis(3))
            .items(7)
            .average(1.5)
            .threshold(2.25)
            .build();

        assert_eq!(report.elapsed(), Duration::from_millis(3));
        assert_eq!(report.items(), Some(7));
        assert_eq!(report.average(), Some(1.5));
        assert_eq!(report.threshold(), Some(2.25));
    }

    #[test]
    fn test_plain_report_has_no_metrics() {
        let report = StageReport::new(Duration::ZERO);
        assert_eq!(report.items(), None);
        assert_eq!(report.threshold(), None);
    }

    #[test]
    fn test_timing_observer_records_in_order() {
        let mut obs = StageTimingObserver::new();
        obs.on_stage_end(STAGE_SENTENCES, &StageReport::new(Duration::from_millis(1)));
        obs.on_stage_end(STAGE_SCORE, &StageReport::new(Duration::from_millis(2)));

        let names: Vec<_> = obs.reports().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec![STAGE_SENTENCES, STAGE_SCORE]);
        assert_eq!(obs.total_elapsed(), Duration::from_millis(3));
        assert!(obs.report(STAGE_SELECT).is_none());
    }
}
