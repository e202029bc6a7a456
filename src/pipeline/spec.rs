//! Summarizer specification documents.
//!
//! A [`SummarizerSpec`] picks a preset and overrides individual settings.
//! It is the input to the [`super::validation::ValidationEngine`], and
//! resolves into a [`SummarizerConfig`].
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "v": 1,
//!   "preset": "reference",
//!   "config": {
//!     "multiplier": 1.2,
//!     "language": "en",
//!     "key_mode": "index",
//!     "match_mode": "token",
//!     "zero_match": "zero_score"
//!   },
//!   "strict": false
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::error_code::ErrorCode;
use super::errors::SpecError;
use super::validation::{ValidationEngine, ValidationReport};
use crate::types::{KeyMode, MatchMode, SummarizerConfig, ZeroMatchPolicy};

/// Spec version understood by this crate.
pub const SPEC_VERSION: u32 = 1;

/// Top-level summarizer specification (v1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizerSpec {
    /// Spec version (currently `1`).
    pub v: u32,

    /// Optional preset used as the starting point: `"default"` or
    /// `"reference"`.
    #[serde(default)]
    pub preset: Option<String>,

    /// Explicit settings. Omitted settings inherit from the preset.
    #[serde(default)]
    pub config: ConfigOverrides,

    /// If `true`, unrecognized fields are errors; if `false`, warnings.
    #[serde(default)]
    pub strict: bool,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

/// Per-setting overrides applied on top of a preset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigOverrides {
    #[serde(default)]
    pub multiplier: Option<f64>,

    #[serde(default)]
    pub language: Option<String>,

    #[serde(default)]
    pub key_mode: Option<KeyMode>,

    #[serde(default)]
    pub match_mode: Option<MatchMode>,

    #[serde(default)]
    pub zero_match: Option<ZeroMatchPolicy>,

    #[serde(default)]
    pub inclusive_threshold: Option<bool>,

    #[serde(default)]
    pub stem: Option<bool>,

    #[serde(default)]
    pub parallel_min_sentences: Option<usize>,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

/// Named starting configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Index keys, token matching, zero score for unmatched sentences
    Default,
    /// Prefix keys, substring matching, error on unmatched sentences
    Reference,
}

impl Preset {
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "default" => Some(Preset::Default),
            "reference" | "compat" => Some(Preset::Reference),
            _ => None,
        }
    }

    pub fn config(&self) -> SummarizerConfig {
        match self {
            Preset::Default => SummarizerConfig::default(),
            Preset::Reference => SummarizerConfig::reference(),
        }
    }
}

impl SummarizerSpec {
    /// Parse a spec from JSON.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        serde_json::from_str(json).map_err(|e| {
            SpecError::new(ErrorCode::InvalidJson, "", e.to_string())
                .with_hint("The document must be a JSON object with at least a \"v\" field")
        })
    }

    /// Apply the overrides to the preset, without validating.
    ///
    /// Unknown presets start from the default configuration.
    pub fn to_config(&self) -> SummarizerConfig {
        let mut cfg = self
            .preset
            .as_deref()
            .and_then(Preset::parse)
            .unwrap_or(Preset::Default)
            .config();

        let o = &self.config;
        if let Some(multiplier) = o.multiplier {
            cfg.multiplier = multiplier;
        }
        if let Some(language) = &o.language {
            cfg.language = language.clone();
        }
        if let Some(key_mode) = o.key_mode {
            cfg.key_mode = key_mode;
        }
        if let Some(match_mode) = o.match_mode {
            cfg.match_mode = match_mode;
        }
        if let Some(zero_match) = o.zero_match {
            cfg.zero_match = zero_match;
        }
        if let Some(inclusive) = o.inclusive_threshold {
            cfg.inclusive_threshold = inclusive;
        }
        if let Some(stem) = o.stem {
            cfg.stem = stem;
        }
        if let Some(n) = o.parallel_min_sentences {
            cfg.parallel_min_sentences = n;
        }
        cfg
    }

    /// Validate with the default rules, then resolve.
    ///
    /// Warnings do not block resolution; they are returned alongside the
    /// config.
    pub fn resolve(&self) -> Result<(SummarizerConfig, ValidationReport), ValidationReport> {
        let report = ValidationEngine::with_defaults().validate(self);
        if report.has_errors() {
            return Err(report);
        }
        Ok((self.to_config(), report))
    }
}
