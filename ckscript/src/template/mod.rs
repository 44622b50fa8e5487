//! Scaffolds for new mod content.
//!
//! The catalog is assembled once by [`TemplateCatalog::builtin`] and only read
//! afterwards; pass it around by reference.

mod presets;
mod render;

use std::collections::BTreeMap;
use std::fmt;

use crate::format::{AiModifier, BlockFormatter, PropertyValue};
use crate::localization::display_name;
use crate::token;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TemplateKind {
    Building,
    Decision,
    Trait,
    Event,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 4] = [
        TemplateKind::Building,
        TemplateKind::Decision,
        TemplateKind::Trait,
        TemplateKind::Event,
    ];

    /// Accepts the singular or plural name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "building" | "buildings" => Some(TemplateKind::Building),
            "decision" | "decisions" => Some(TemplateKind::Decision),
            "trait" | "traits" => Some(TemplateKind::Trait),
            "event" | "events" => Some(TemplateKind::Event),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TemplateKind::Building => "building",
            TemplateKind::Decision => "decision",
            TemplateKind::Trait => "trait",
            TemplateKind::Event => "event",
        }
    }

    /// Where the game keeps files of this kind, relative to the game root.
    pub fn game_dir(self) -> &'static str {
        match self {
            TemplateKind::Building => "common/buildings",
            TemplateKind::Decision => "common/decisions",
            TemplateKind::Trait => "common/traits",
            TemplateKind::Event => "events",
        }
    }

    /// Fields the editor knows for entities of this kind.
    pub fn declared_fields(self) -> &'static [&'static str] {
        match self {
            TemplateKind::Building => presets::BUILDING_FIELDS,
            TemplateKind::Decision => presets::DECISION_FIELDS,
            TemplateKind::Trait => presets::TRAIT_FIELDS,
            TemplateKind::Event => presets::EVENT_FIELDS,
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

#[derive(Debug, Clone)]
pub struct BuildingPreset {
    pub construction_time: String,
    pub cost_gold: i64,
    /// `(scope, [(key, value)])`, written as `<scope>_modifier` blocks.
    pub modifiers: Vec<(String, Vec<(String, PropertyValue)>)>,
    pub ai_base: i64,
    pub ai_modifiers: Vec<AiModifier>,
}

#[derive(Debug, Clone)]
pub struct DecisionPreset {
    pub picture: String,
    pub major: bool,
    pub cost_gold: i64,
    pub cooldown_days: Option<i64>,
    pub ai_check_interval: i64,
    pub ai_base: i64,
}

#[derive(Debug, Clone)]
pub struct TraitPreset {
    pub category: String,
    pub properties: Vec<(String, PropertyValue)>,
}

#[derive(Debug, Clone)]
pub struct EventPreset {
    pub event_type: String,
    pub theme: String,
    pub options: usize,
}

#[derive(Debug, Clone)]
pub enum Preset {
    Building(BuildingPreset),
    Decision(DecisionPreset),
    Trait(TraitPreset),
    Event(EventPreset),
}

impl Preset {
    pub fn kind(&self) -> TemplateKind {
        match self {
            Preset::Building(_) => TemplateKind::Building,
            Preset::Decision(_) => TemplateKind::Decision,
            Preset::Trait(_) => TemplateKind::Trait,
            Preset::Event(_) => TemplateKind::Event,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TemplateEntry {
    pub id: &'static str,
    pub description: &'static str,
    pub preset: Preset,
}

impl TemplateEntry {
    pub fn kind(&self) -> TemplateKind {
        self.preset.kind()
    }
}

/// User input for one rendering.
#[derive(Debug, Clone)]
pub struct TemplateParams {
    /// Script key of the new entity, e.g. `grand_library`.
    pub key: String,
    /// Shown name; derived from the key when absent.
    pub display_name: Option<String>,
}

impl TemplateParams {
    pub fn new(key: impl Into<String>) -> Self {
        TemplateParams {
            key: key.into(),
            display_name: None,
        }
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    fn shown_name(&self) -> String {
        self.display_name
            .clone()
            .unwrap_or_else(|| display_name(&self.key))
    }
}

#[derive(Debug, Clone)]
pub struct RenderedTemplate {
    pub kind: TemplateKind,
    pub script: String,
    /// `(key, text)` pairs the script refers to.
    pub localization: Vec<(String, String)>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TemplateError {
    UnknownTemplate(String),
    InvalidKey(String),
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::UnknownTemplate(id) => write!(f, "unknown template: {}", id),
            TemplateError::InvalidKey(key) => write!(
                f,
                "invalid key '{}': use lowercase letters, digits and underscores",
                key
            ),
        }
    }
}

impl std::error::Error for TemplateError {}

pub struct TemplateCatalog {
    entries: BTreeMap<&'static str, TemplateEntry>,
}

impl TemplateCatalog {
    /// The templates shipped with the tool.
    pub fn builtin() -> Self {
        let entries = presets::builtin_entries()
            .into_iter()
            .map(|entry| (entry.id, entry))
            .collect();
        TemplateCatalog { entries }
    }

    pub fn get(&self, id: &str) -> Option<&TemplateEntry> {
        self.entries.get(id)
    }

    /// All entries, sorted by id.
    pub fn entries(&self) -> impl Iterator<Item = &TemplateEntry> {
        self.entries.values()
    }

    pub fn of_kind(&self, kind: TemplateKind) -> impl Iterator<Item = &TemplateEntry> {
        self.entries().filter(move |entry| entry.kind() == kind)
    }

    pub fn render(
        &self,
        id: &str,
        params: &TemplateParams,
    ) -> Result<RenderedTemplate, TemplateError> {
        let entry = self
            .get(id)
            .ok_or_else(|| TemplateError::UnknownTemplate(id.to_string()))?;
        if !token::is_field_name(&params.key) {
            return Err(TemplateError::InvalidKey(params.key.clone()));
        }

        let mut out = BlockFormatter::new();
        let name = params.shown_name();
        let localization = match &entry.preset {
            Preset::Building(preset) => render::building(&mut out, &params.key, &name, preset),
            Preset::Decision(preset) => render::decision(&mut out, &params.key, &name, preset),
            Preset::Trait(preset) => render::trait_(&mut out, &params.key, &name, preset),
            Preset::Event(preset) => render::event(&mut out, &params.key, &name, preset),
        };

        Ok(RenderedTemplate {
            kind: entry.kind(),
            script: out.render(),
            localization,
        })
    }
}
