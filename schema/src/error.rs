use std::fmt;
use std::ops::Range;
use std::path::PathBuf;

use codespan_reporting::diagnostic::{Diagnostic, Label};

/// Errors loading a schema-check configuration file.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        reason: String,
    },
    Toml {
        message: String,
        span: Option<Range<usize>>,
    },
    DuplicateSchema {
        name: String,
        span: Range<usize>,
        first: Range<usize>,
    },
    NoDeclaredFields {
        name: String,
        span: Range<usize>,
    },
}

impl ConfigError {
    /// Byte range in the configuration text, when the error has one.
    pub fn span(&self) -> Option<Range<usize>> {
        match self {
            ConfigError::Io { .. } => None,
            ConfigError::Toml { span, .. } => span.clone(),
            ConfigError::DuplicateSchema { span, .. } => Some(span.clone()),
            ConfigError::NoDeclaredFields { span, .. } => Some(span.clone()),
        }
    }

    /// Convert to a codespan-reporting Diagnostic for display.
    pub fn to_diagnostic(&self, file_id: usize) -> Diagnostic<usize> {
        let mut labels = Vec::new();
        if let Some(span) = self.span() {
            labels.push(Label::primary(file_id, span));
        }
        let mut notes = Vec::new();
        match self {
            ConfigError::DuplicateSchema { first, .. } => {
                labels.push(Label::secondary(file_id, first.clone()).with_message("first defined here"));
            }
            ConfigError::NoDeclaredFields { .. } => {
                notes.push(
                    "add a `fields = [...]` list, or name the schema after a template kind \
                     (building, decision, trait, event)"
                        .to_string(),
                );
            }
            _ => {}
        }
        Diagnostic::error()
            .with_message(self.to_string())
            .with_labels(labels)
            .with_notes(notes)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, reason } => {
                write!(f, "cannot read '{}': {}", path.display(), reason)
            }
            ConfigError::Toml { message, .. } => write!(f, "invalid configuration: {}", message),
            ConfigError::DuplicateSchema { name, .. } => {
                write!(f, "schema '{}' is defined more than once", name)
            }
            ConfigError::NoDeclaredFields { name, .. } => {
                write!(f, "schema '{}' has no declared fields", name)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
