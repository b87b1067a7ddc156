//! Structured error types shared across the workbench crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`CfcError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (lengths, offending words, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for the comma-free code engines.
///
/// The dictionary reports `Cyclic` and `Conflict` per candidate and callers
/// are expected to keep processing the remaining candidates. The same
/// `Cyclic` family is fatal for a single Eastman invocation: there is no
/// shift to report and no default may be substituted. `Config` and `Word`
/// errors are raised before any algorithm runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum CfcError {
    /// Invalid engine configuration (alphabet size, word length, parity).
    #[error("config error: {0}")]
    Config(ErrorInfo),
    /// Malformed candidate word (length mismatch).
    #[error("word error: {0}")]
    Word(ErrorInfo),
    /// The word or sequence is a nontrivial rotation of itself.
    #[error("cyclic error: {0}")]
    Cyclic(ErrorInfo),
    /// The candidate collides with an accepted word or a pair boundary.
    #[error("conflict error: {0}")]
    Conflict(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl CfcError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            CfcError::Config(info)
            | CfcError::Word(info)
            | CfcError::Cyclic(info)
            | CfcError::Conflict(info) => info,
        }
    }
}
