use ckscript::FieldSet;
use serde::Serialize;

/// Declared fields of one schema against the fields seen in the game files.
/// All lists are sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaReport {
    pub name: String,
    pub declared: Vec<String>,
    pub observed: Vec<String>,
    /// Declared but never seen in the game files.
    pub missing: Vec<String>,
    /// Seen in the game files but not declared.
    pub undeclared: Vec<String>,
}

impl SchemaReport {
    pub fn compare(name: &str, declared: &FieldSet, observed: &FieldSet) -> Self {
        SchemaReport {
            name: name.to_string(),
            declared: declared.iter().cloned().collect(),
            observed: observed.iter().cloned().collect(),
            missing: declared.difference(observed).cloned().collect(),
            undeclared: observed.difference(declared).cloned().collect(),
        }
    }

    pub fn is_covered(&self) -> bool {
        self.missing.is_empty() && self.undeclared.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CheckReport {
    #[serde(rename = "schema")]
    pub schemas: Vec<SchemaReport>,
}

impl CheckReport {
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Schemas with missing or undeclared fields.
    pub fn gaps(&self) -> impl Iterator<Item = &SchemaReport> {
        self.schemas.iter().filter(|s| !s.is_covered())
    }
}
