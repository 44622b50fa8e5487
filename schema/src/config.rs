use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use ckscript::FieldSet;
use ckscript::template::TemplateKind;
use serde::{Deserialize, Serialize};
use toml::Spanned;

use crate::error::ConfigError;

/// How deep the entities of a schema sit in their files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Nesting {
    /// `entity = { field = ... }`
    #[default]
    Single,
    /// `group = { entity = { field = ... } }`, e.g. faiths inside a religion.
    Double,
}

impl Nesting {
    pub fn depth(self) -> usize {
        match self {
            Nesting::Single => 1,
            Nesting::Double => 2,
        }
    }
}

/// One `[[schema]]` table: which directory to scan for which schema.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaMapping {
    pub name: Spanned<String>,
    /// Relative to the game root.
    pub dir: PathBuf,
    #[serde(default)]
    pub nesting: Nesting,
    /// Declared field names. Falls back to the template kind named like the schema.
    #[serde(default)]
    pub fields: Option<Vec<String>>,
}

impl SchemaMapping {
    pub fn name(&self) -> &str {
        self.name.get_ref()
    }

    pub fn depth(&self) -> usize {
        self.nesting.depth()
    }

    pub fn declared_fields(&self) -> Option<FieldSet> {
        match &self.fields {
            Some(fields) => Some(fields.iter().map(|f| f.to_lowercase()).collect()),
            None => TemplateKind::from_name(self.name()).map(|kind| {
                kind.declared_fields()
                    .iter()
                    .map(|f| f.to_string())
                    .collect()
            }),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaConfig {
    /// Game installation (or extracted `game/` folder) to scan.
    #[serde(default = "default_game_root")]
    pub game_root: PathBuf,

    /// Script file extension, without the dot.
    #[serde(default = "default_extension")]
    pub extension: String,

    #[serde(default, rename = "schema")]
    pub schemas: Vec<SchemaMapping>,
}

fn default_game_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_extension() -> String {
    ckscript::SCRIPT_EXTENSION.to_string()
}

impl SchemaConfig {
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: SchemaConfig = toml::from_str(text).map_err(|e| ConfigError::Toml {
            message: e.message().to_string(),
            span: e.span(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read a configuration file. A relative `game_root` is taken relative to
    /// the file's directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        Ok(Self::from_toml(&text)?.relative_to(base))
    }

    pub fn relative_to(mut self, base: &Path) -> Self {
        if self.game_root.is_relative() {
            self.game_root = base.join(&self.game_root);
        }
        self
    }

    pub fn schema_dir(&self, mapping: &SchemaMapping) -> PathBuf {
        self.game_root.join(&mapping.dir)
    }

    /// A starting configuration covering every template kind.
    pub fn default_toml() -> String {
        let mut out = String::from("game_root = \".\"\n");
        for kind in TemplateKind::ALL {
            out.push_str(&format!(
                "\n[[schema]]\nname = \"{}\"\ndir = \"{}\"\nnesting = \"single\"\n",
                kind.name(),
                kind.game_dir()
            ));
        }
        out
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let mut seen: HashMap<&str, &SchemaMapping> = HashMap::new();
        for mapping in &self.schemas {
            if let Some(first) = seen.get(mapping.name()) {
                return Err(ConfigError::DuplicateSchema {
                    name: mapping.name().to_string(),
                    span: mapping.name.span(),
                    first: first.name.span(),
                });
            }
            if mapping.declared_fields().is_none() {
                return Err(ConfigError::NoDeclaredFields {
                    name: mapping.name().to_string(),
                    span: mapping.name.span(),
                });
            }
            seen.insert(mapping.name(), mapping);
        }
        Ok(())
    }
}
