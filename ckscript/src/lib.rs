pub mod error;
pub mod extract;
pub mod format;
pub mod localization;
pub mod template;
pub mod token;

pub use error::{NestingWarning, ScanError};
pub use extract::{Extraction, FieldExtractor, FieldSet, extract_fields};
pub use format::{BlockFormatter, PropertyValue};

/// File extension of game script files.
pub const SCRIPT_EXTENSION: &str = "txt";
