use ckscript::ScanError;
use ckscript::extract::FieldExtractor;

use crate::config::SchemaConfig;
use crate::report::{CheckReport, SchemaReport};

pub struct CheckOutcome {
    pub report: CheckReport,
    /// Directories or files that could not be scanned. Their schemas are
    /// still reported, from whatever was readable.
    pub errors: Vec<ScanError>,
}

impl CheckOutcome {
    pub fn has_gaps(&self) -> bool {
        self.report.gaps().next().is_some()
    }
}

/// Extract the observed fields of every configured schema and compare them
/// with the declared ones.
pub fn run_check(config: &SchemaConfig) -> CheckOutcome {
    let mut report = CheckReport::default();
    let mut errors = Vec::new();

    for mapping in &config.schemas {
        let dir = config.schema_dir(mapping);
        let extraction = FieldExtractor::new(mapping.depth())
            .with_extension(&config.extension)
            .extract(&dir);
        let declared = mapping.declared_fields().unwrap_or_default();

        let schema = SchemaReport::compare(mapping.name(), &declared, &extraction.fields);
        tracing::info!(
            schema = %schema.name,
            dir = %dir.display(),
            observed = schema.observed.len(),
            missing = schema.missing.len(),
            undeclared = schema.undeclared.len(),
            "schema checked"
        );

        report.schemas.push(schema);
        errors.extend(extraction.errors);
    }

    CheckOutcome { report, errors }
}
