//! Command-line frontend: summarize a text file or stdin.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use rapid_summarizer::pipeline::observer::StageTimingObserver;
use rapid_summarizer::pipeline::SummarizerSpec;
use rapid_summarizer::pipeline::TextSource;
use rapid_summarizer::source::FileSource;
use rapid_summarizer::{DefaultPipeline, SummarizerConfig};

#[derive(Parser, Debug)]
#[command(name = "rapid-summarize")]
#[command(about = "Frequency-based extractive summaries of plain text")]
struct Args {
    /// Text file to summarize (reads stdin when omitted)
    path: Option<PathBuf>,

    /// Threshold multiplier applied to the average sentence score
    #[arg(short, long)]
    multiplier: Option<f64>,

    /// Language code for stemming and stopwords
    #[arg(short, long)]
    language: Option<String>,

    /// JSON configuration document
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start from the prefix-key, substring-matching configuration
    /// (use `"preset": "reference"` inside a config file instead)
    #[arg(long, conflicts_with = "config")]
    reference: bool,

    /// Keep sentences scoring exactly at the threshold
    #[arg(long)]
    inclusive: bool,

    /// Print the N most frequent normalized words instead of a summary
    #[arg(long, value_name = "N")]
    top_words: Option<usize>,

    /// Log stage timings and scoring details
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

fn load_config(args: &Args) -> Result<SummarizerConfig> {
    let mut cfg = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            let spec = SummarizerSpec::from_json(&json)?;
            match spec.resolve() {
                Ok((cfg, report)) => {
                    for warning in report.warnings() {
                        tracing::warn!("{warning}");
                    }
                    cfg
                }
                Err(report) => {
                    for err in report.errors() {
                        tracing::error!("{err}");
                    }
                    bail!(
                        "config {} has {} error(s)",
                        path.display(),
                        report.errors().count()
                    );
                }
            }
        }
        None if args.reference => SummarizerConfig::reference(),
        None => SummarizerConfig::default(),
    };

    if let Some(multiplier) = args.multiplier {
        cfg.multiplier = multiplier;
    }
    if let Some(language) = &args.language {
        cfg.language = language.clone();
    }
    if args.inclusive {
        cfg.inclusive_threshold = true;
    }
    Ok(cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let cfg = load_config(&args)?;
    let pipeline = DefaultPipeline::from_config(&cfg);
    let mut observer = StageTimingObserver::new();

    let text = match &args.path {
        Some(path) => FileSource::new(path)
            .fetch_raw_text()
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("reading stdin")?;
            text
        }
    };

    if let Some(n) = args.top_words {
        let table = pipeline.frequency_table(&text, &cfg)?;
        tracing::info!(distinct = table.len(), counted = table.total(), "frequency table");
        for (word, count) in table.most_frequent(n) {
            println!("{count:>6}  {word}");
        }
        return Ok(());
    }

    let summary = pipeline
        .run(&text, &cfg, &mut observer)
        .context("summarizing")?;

    for (stage, report) in observer.reports() {
        tracing::debug!(
            stage,
            elapsed_us = report.elapsed().as_micros() as u64,
            items = ?report.items(),
            "stage finished"
        );
    }
    tracing::info!(
        selected = summary.len(),
        total = summary.total_sentences,
        average = summary.average,
        threshold = summary.threshold,
        "summary ready"
    );

    println!("{}", summary.text());
    Ok(())
}
