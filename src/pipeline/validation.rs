//! Validation engine for summarizer specifications.
//!
//! The engine runs all registered [`ValidationRule`]s against a
//! [`SummarizerSpec`](super::spec::SummarizerSpec) and collects every
//! diagnostic into a [`ValidationReport`]. It never short-circuits on the
//! first error, so users see all problems at once.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use rapid_summarizer::pipeline::validation::ValidationEngine;
//!
//! let engine = ValidationEngine::with_defaults();
//! let report = engine.validate(&spec);
//! if report.has_errors() {
//!     for err in report.errors() {
//!         eprintln!("{err}");
//!     }
//! }
//! ```

use serde::Serialize;

use super::error_code::ErrorCode;
use super::errors::SpecError;
use super::spec::{Preset, SummarizerSpec, SPEC_VERSION};
use crate::nlp::Language;
use crate::types::KeyMode;

// ─── Severity ───────────────────────────────────────────────────────────────

/// Whether a diagnostic is a hard error or a soft warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

// ─── Diagnostic ─────────────────────────────────────────────────────────────

/// A single validation finding: a [`SpecError`] with a severity.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationDiagnostic {
    pub severity: Severity,
    #[serde(flatten)]
    pub error: SpecError,
}

impl ValidationDiagnostic {
    pub fn error(err: SpecError) -> Self {
        Self {
            severity: Severity::Error,
            error: err,
        }
    }

    pub fn warning(err: SpecError) -> Self {
        Self {
            severity: Severity::Warning,
            error: err,
        }
    }
}

// ─── Report ─────────────────────────────────────────────────────────────────

/// Collected diagnostics from running all validation rules.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    /// Iterate over error-severity diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &SpecError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .map(|d| &d.error)
    }

    /// Iterate over warning-severity diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &SpecError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .map(|d| &d.error)
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Returns `true` if there are no errors (warnings are acceptable).
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

// ─── Rule trait ─────────────────────────────────────────────────────────────

/// A single validation rule that inspects a [`SummarizerSpec`] and returns
/// zero or more diagnostics.
///
/// Rules are stateless and must be `Send + Sync`.
pub trait ValidationRule: Send + Sync {
    /// Short, stable identifier for this rule (e.g., `"multiplier_range"`).
    fn name(&self) -> &str;

    fn validate(&self, spec: &SummarizerSpec) -> Vec<ValidationDiagnostic>;
}

// ─── Engine ─────────────────────────────────────────────────────────────────

/// Runs a set of [`ValidationRule`]s against a [`SummarizerSpec`].
pub struct ValidationEngine {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl ValidationEngine {
    /// Create an empty engine with no rules.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create an engine pre-loaded with the default rule set.
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.add_rule(Box::new(VersionRule));
        engine.add_rule(Box::new(PresetRule));
        engine.add_rule(Box::new(MultiplierRule));
        engine.add_rule(Box::new(KeyModeRule));
        engine.add_rule(Box::new(LanguageRule));
        engine.add_rule(Box::new(UnknownFieldsRule));
        engine
    }

    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Run all rules against `spec` and return the collected report.
    pub fn validate(&self, spec: &SummarizerSpec) -> ValidationReport {
        let mut report = ValidationReport::default();
        for rule in &self.rules {
            report.diagnostics.extend(rule.validate(spec));
        }
        report
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Concrete rules
// ═══════════════════════════════════════════════════════════════════════════

// ─── 1. Spec version ────────────────────────────────────────────────────────

struct VersionRule;

impl ValidationRule for VersionRule {
    fn name(&self) -> &str {
        "version"
    }

    fn validate(&self, spec: &SummarizerSpec) -> Vec<ValidationDiagnostic> {
        if spec.v == SPEC_VERSION {
            return vec![];
        }
        vec![ValidationDiagnostic::error(
            SpecError::new(
                ErrorCode::UnsupportedVersion,
                "/v",
                format!("unsupported spec version {}", spec.v),
            )
            .with_hint(format!("Set \"v\" to {SPEC_VERSION}")),
        )]
    }
}

// ─── 2. Preset name ─────────────────────────────────────────────────────────

struct PresetRule;

impl ValidationRule for PresetRule {
    fn name(&self) -> &str {
        "preset"
    }

    fn validate(&self, spec: &SummarizerSpec) -> Vec<ValidationDiagnostic> {
        match spec.preset.as_deref() {
            Some(name) if Preset::parse(name).is_none() => {
                vec![ValidationDiagnostic::error(
                    SpecError::new(
                        ErrorCode::UnknownPreset,
                        "/preset",
                        format!("unknown preset \"{name}\""),
                    )
                    .with_hint("Use \"default\" or \"reference\""),
                )]
            }
            _ => vec![],
        }
    }
}

// ─── 3. Multiplier range ────────────────────────────────────────────────────

struct MultiplierRule;

impl ValidationRule for MultiplierRule {
    fn name(&self) -> &str {
        "multiplier_range"
    }

    fn validate(&self, spec: &SummarizerSpec) -> Vec<ValidationDiagnostic> {
        let Some(m) = spec.config.multiplier else {
            return vec![];
        };

        if !m.is_finite() || m < 0.0 {
            vec![ValidationDiagnostic::error(
                SpecError::new(
                    ErrorCode::InvalidValue,
                    "/config/multiplier",
                    format!("multiplier must be a finite, non-negative number (got {m})"),
                )
                .with_hint("1.5 reproduces the reference summary length"),
            )]
        } else if m == 0.0 {
            vec![ValidationDiagnostic::warning(
                SpecError::new(
                    ErrorCode::InvalidValue,
                    "/config/multiplier",
                    "a zero multiplier keeps every sentence with a positive score",
                )
                .with_hint("Use a value around 1.0-2.0 for a real summary"),
            )]
        } else {
            vec![]
        }
    }
}

// ─── 4. Prefix key length ───────────────────────────────────────────────────

struct KeyModeRule;

impl ValidationRule for KeyModeRule {
    fn name(&self) -> &str {
        "key_mode"
    }

    fn validate(&self, spec: &SummarizerSpec) -> Vec<ValidationDiagnostic> {
        if let Some(KeyMode::Prefix { len: 0 }) = spec.config.key_mode {
            vec![ValidationDiagnostic::error(
                SpecError::new(
                    ErrorCode::InvalidValue,
                    "/config/key_mode/prefix/len",
                    "prefix length must be greater than 0",
                )
                .with_hint("Use \"index\" for collision-free keys, or a length such as 15"),
            )]
        } else {
            vec![]
        }
    }
}

// ─── 5. Language support ────────────────────────────────────────────────────

struct LanguageRule;

impl ValidationRule for LanguageRule {
    fn name(&self) -> &str {
        "language"
    }

    fn validate(&self, spec: &SummarizerSpec) -> Vec<ValidationDiagnostic> {
        match spec.config.language.as_deref() {
            Some(lang) if Language::parse(lang).is_none() => {
                let supported: Vec<_> = Language::ALL.iter().map(|l| l.code()).collect();
                vec![ValidationDiagnostic::warning(
                    SpecError::new(
                        ErrorCode::InvalidValue,
                        "/config/language",
                        format!("unsupported language \"{lang}\", English will be used"),
                    )
                    .with_hint(format!("Supported: {}", supported.join(", "))),
                )]
            }
            _ => vec![],
        }
    }
}

// ─── 6. Unknown fields (strict → error, non-strict → warning) ──────────────

struct UnknownFieldsRule;

impl UnknownFieldsRule {
    /// Collect unknown-field diagnostics at the given JSON pointer `path`
    /// from the extra fields captured by `#[serde(flatten)]`.
    fn check_unknowns(
        path: &str,
        unknowns: &std::collections::HashMap<String, serde_json::Value>,
        strict: bool,
    ) -> Vec<ValidationDiagnostic> {
        let mut keys: Vec<_> = unknowns.keys().collect();
        keys.sort();
        keys.into_iter()
            .map(|key| {
                let diag_fn = if strict {
                    ValidationDiagnostic::error
                } else {
                    ValidationDiagnostic::warning
                };
                diag_fn(
                    SpecError::new(
                        ErrorCode::UnknownField,
                        format!("{path}/{key}"),
                        format!("unrecognized field \"{key}\""),
                    )
                    .with_hint("Check spelling or remove this field"),
                )
            })
            .collect()
    }
}

impl ValidationRule for UnknownFieldsRule {
    fn name(&self) -> &str {
        "unknown_fields"
    }

    fn validate(&self, spec: &SummarizerSpec) -> Vec<ValidationDiagnostic> {
        let mut out = Self::check_unknowns("", &spec.unknown_fields, spec.strict);
        out.extend(Self::check_unknowns(
            "/config",
            &spec.config.unknown_fields,
            spec.strict,
        ));
        out
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════════════════
