use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::ScanError;
use crate::token;
use crate::SCRIPT_EXTENSION;

/// Distinct lowercase field names, iterated in sorted order.
pub type FieldSet = BTreeSet<String>;

/// Result of scanning a directory: whatever could be read, plus what could not.
#[derive(Debug, Default)]
pub struct Extraction {
    pub fields: FieldSet,
    pub errors: Vec<ScanError>,
}

/// Collects the field names assigned at or below a brace depth across a
/// directory tree of script files.
///
/// Depth 1 selects the fields of top-level entities (`my_trait = { field = ... }`);
/// depth 2 selects entities wrapped once more, such as the faiths nested in a
/// religion. Fields of deeper blocks are picked up as well, since a line only
/// has to reach the target depth.
#[derive(Debug, Clone)]
pub struct FieldExtractor {
    target_depth: usize,
    extension: String,
}

impl FieldExtractor {
    pub fn new(target_depth: usize) -> Self {
        FieldExtractor {
            target_depth: target_depth.max(1),
            extension: SCRIPT_EXTENSION.to_string(),
        }
    }

    /// Accepts `txt` as well as `.txt`.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        let extension = extension.into();
        self.extension = match extension.strip_prefix('.') {
            Some(bare) => bare.to_string(),
            None => extension,
        };
        self
    }

    pub fn target_depth(&self) -> usize {
        self.target_depth
    }

    /// Scan every script file under `root`, recursively.
    pub fn extract(&self, root: &Path) -> Extraction {
        let mut extraction = Extraction::default();

        if !root.exists() {
            tracing::warn!(path = %root.display(), "script directory not found");
            extraction.errors.push(ScanError::NotFound {
                path: root.to_path_buf(),
            });
            return extraction;
        }
        if !root.is_dir() {
            tracing::warn!(path = %root.display(), "script root is not a directory");
            extraction.errors.push(ScanError::NotADirectory {
                path: root.to_path_buf(),
            });
            return extraction;
        }

        // Mod folders are often linked into a game tree. Link cycles come back
        // as walk errors and are recorded below.
        for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e.path().unwrap_or(root).to_path_buf();
                    tracing::warn!(path = %path.display(), error = %e, "cannot walk entry");
                    extraction.errors.push(ScanError::ReadFailure {
                        path,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            let path = entry.path();
            if !entry.file_type().is_file() || !self.is_script_file(path) {
                continue;
            }

            match fs::read_to_string(path) {
                Ok(source) => {
                    let before = extraction.fields.len();
                    self.scan_source(&source, &mut extraction.fields);
                    tracing::debug!(
                        path = %path.display(),
                        new_fields = extraction.fields.len() - before,
                        "scanned script file"
                    );
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "cannot read script file");
                    extraction.errors.push(ScanError::ReadFailure {
                        path: path.to_path_buf(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        extraction
    }

    /// Scan the text of one script file into `fields`.
    pub fn scan_source(&self, source: &str, fields: &mut FieldSet) {
        let source = source.strip_prefix('\u{feff}').unwrap_or(source);
        let target = self.target_depth as i64;
        // May go negative on malformed files; such lines simply never qualify.
        let mut depth: i64 = 0;

        for line in source.lines() {
            let code = token::strip_comment(line);
            depth += token::brace_delta(code);

            if depth < target {
                continue;
            }
            let Some(key) = token::assignment_key(code) else {
                continue;
            };

            let key = key.to_lowercase();
            if token::is_numeric_key(&key) || !token::is_field_name(&key) {
                continue;
            }
            fields.insert(key);
        }
    }

    fn is_script_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(&self.extension))
    }
}

/// Extract the field names used at `target_depth` or deeper in the script
/// files under `root`.
pub fn extract_fields(root: &Path, target_depth: usize) -> Extraction {
    FieldExtractor::new(target_depth).extract(root)
}
