// Generation Options
//
// Per-invocation configuration, resolved once before the pipeline runs.

use serde::Deserialize;

use crate::error::GenerateError;

/// Terminal formatting choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatterKind {
    /// Delegate to the external prettier executable.
    Prettier,
    /// Skip pretty-printing and normalize line endings manually.
    None,
}

/// Options accepted per invocation.
///
/// Unknown keys are rejected at the deserialization boundary, before any
/// pipeline work happens.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerateOptions {
    /// Line terminator for manual normalization. Falls back to the host OS
    /// native newline when unset.
    pub eol: Option<String>,
    /// Text prepended, followed by one newline, to the generated
    /// declaration.
    pub banner: Option<String>,
    /// Formatter selection. Unset means auto-detect prettier.
    pub formatter: Option<FormatterKind>,
}

impl GenerateOptions {
    /// Parse options from a loose JSON value. The Node binding hands the
    /// loader options over this way.
    pub fn from_json(value: serde_json::Value) -> Result<Self, GenerateError> {
        serde_json::from_value(value).map_err(|e| GenerateError::InvalidOptions(e.to_string()))
    }
}
