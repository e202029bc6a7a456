//! Stable error codes for configuration diagnostics.

use serde::Serialize;

/// Machine-readable category of a [`SpecError`](super::errors::SpecError).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The document is not valid JSON or does not fit the schema.
    InvalidJson,
    /// `v` is not a version this crate understands.
    UnsupportedVersion,
    /// `preset` names no known preset.
    UnknownPreset,
    /// A field holds a value outside its accepted range.
    InvalidValue,
    /// A field is not part of the schema.
    UnknownField,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidJson => "invalid_json",
            Self::UnsupportedVersion => "unsupported_version",
            Self::UnknownPreset => "unknown_preset",
            Self::InvalidValue => "invalid_value",
            Self::UnknownField => "unknown_field",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
