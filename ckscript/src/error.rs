use std::fmt;
use std::ops::Range;
use std::path::{Path, PathBuf};

use codespan_reporting::diagnostic::{Diagnostic, Label};

/// Problems met while scanning a script directory.
/// None of these stop a scan; they are collected next to the partial result.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanError {
    NotFound { path: PathBuf },
    NotADirectory { path: PathBuf },
    ReadFailure { path: PathBuf, reason: String },
}

impl ScanError {
    pub fn path(&self) -> &Path {
        match self {
            ScanError::NotFound { path } | ScanError::NotADirectory { path } => path,
            ScanError::ReadFailure { path, .. } => path,
        }
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::NotFound { path } => {
                write!(f, "directory not found: {}", path.display())
            }
            ScanError::NotADirectory { path } => {
                write!(f, "not a directory: {}", path.display())
            }
            ScanError::ReadFailure { path, reason } => {
                write!(f, "cannot read '{}': {}", path.display(), reason)
            }
        }
    }
}

impl std::error::Error for ScanError {}

/// An unbalanced brace found while reindenting a script file.
#[derive(Debug, Clone, PartialEq)]
pub struct NestingWarning {
    pub message: String,
    pub span: Range<usize>,
    pub file_id: usize,
}

impl NestingWarning {
    pub fn new(message: impl Into<String>, span: Range<usize>, file_id: usize) -> Self {
        NestingWarning {
            message: message.into(),
            span,
            file_id,
        }
    }

    /// Convert to a codespan-reporting Diagnostic for display.
    pub fn to_diagnostic(&self) -> Diagnostic<usize> {
        Diagnostic::warning()
            .with_message(&self.message)
            .with_labels(vec![Label::primary(self.file_id, self.span.clone())])
    }
}

impl fmt::Display for NestingWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at byte {}", self.message, self.span.start)
    }
}
