use crate::format::{AiModifier, PropertyValue};
use crate::template::{
    BuildingPreset, DecisionPreset, EventPreset, Preset, TemplateEntry, TraitPreset,
};

pub(super) const BUILDING_FIELDS: &[&str] = &[
    "ai_value",
    "asset",
    "can_construct",
    "can_construct_potential",
    "can_construct_showing_failures_only",
    "character_culture_modifier",
    "character_dynasty_modifier",
    "character_modifier",
    "construction_time",
    "cost_gold",
    "cost_piety",
    "cost_prestige",
    "county_culture_modifier",
    "county_doctrine_parameter_modifier",
    "county_dynasty_modifier",
    "county_holder_character_modifier",
    "county_holding_modifier",
    "county_modifier",
    "duchy_capital_county_culture_modifier",
    "duchy_capital_county_modifier",
    "effect_desc",
    "flag",
    "garrison_reinforcement_factor",
    "is_enabled",
    "is_graphical_background",
    "levy",
    "max_garrison",
    "next_building",
    "on_complete",
    "province_culture_modifier",
    "province_dynasty_modifier",
    "province_modifier",
    "province_terrain_modifier",
    "show_disabled",
    "type",
    "type_icon",
];

pub(super) const DECISION_FIELDS: &[&str] = &[
    "ai_check_interval",
    "ai_check_interval_by_tier",
    "ai_goal",
    "ai_potential",
    "ai_will_do",
    "confirm_text",
    "cooldown",
    "cost",
    "decision_group_type",
    "desc",
    "effect",
    "extra_picture",
    "is_invisible",
    "is_shown",
    "is_valid",
    "is_valid_showing_failures_only",
    "minimum_cost",
    "picture",
    "selection_tooltip",
    "should_create_alert",
    "sort_order",
    "title",
    "widget",
];

pub(super) const TRAIT_FIELDS: &[&str] = &[
    "ai_boldness",
    "ai_compassion",
    "ai_energy",
    "ai_greed",
    "ai_honor",
    "ai_rationality",
    "ai_sociability",
    "ai_vengefulness",
    "ai_zeal",
    "category",
    "compatibility",
    "culture_modifier",
    "desc",
    "diplomacy",
    "faith_modifier",
    "fertility",
    "flag",
    "genetic",
    "good",
    "group",
    "health",
    "icon",
    "inherit_chance",
    "intrigue",
    "learning",
    "level",
    "martial",
    "minimum_age",
    "monthly_piety",
    "monthly_prestige",
    "name",
    "opposites",
    "physical",
    "potential",
    "prowess",
    "ruler_designer_cost",
    "shown_in_ruler_designer",
    "stewardship",
    "tracks",
    "triggered_opinion",
];

pub(super) const EVENT_FIELDS: &[&str] = &[
    "after",
    "artifact",
    "content_source",
    "cooldown",
    "desc",
    "hidden",
    "immediate",
    "left_portrait",
    "lower_center_portrait",
    "lower_left_portrait",
    "lower_right_portrait",
    "opening",
    "option",
    "orphan",
    "override_background",
    "right_portrait",
    "sender",
    "theme",
    "title",
    "trigger",
    "type",
    "weight_multiplier",
    "widget",
    "window",
];

fn pairs(items: &[(&str, PropertyValue)]) -> Vec<(String, PropertyValue)> {
    items
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
}

pub(super) fn builtin_entries() -> Vec<TemplateEntry> {
    use PropertyValue::{Float, Integer};

    vec![
        TemplateEntry {
            id: "building.economy",
            description: "Economy building raising county taxes and development",
            preset: Preset::Building(BuildingPreset {
                construction_time: "standard_construction_time".to_string(),
                cost_gold: 150,
                modifiers: vec![(
                    "county".to_string(),
                    pairs(&[
                        ("tax_mult", Float(0.1)),
                        ("development_growth_factor", Float(0.1)),
                    ]),
                )],
                ai_base: 10,
                ai_modifiers: vec![AiModifier::add(
                    5.0,
                    "scope:holder = { has_trait = greedy }",
                )],
            }),
        },
        TemplateEntry {
            id: "building.military",
            description: "Military building adding levies and garrison",
            preset: Preset::Building(BuildingPreset {
                construction_time: "slow_construction_time".to_string(),
                cost_gold: 200,
                modifiers: vec![(
                    "province".to_string(),
                    pairs(&[("levy_size", Float(0.15)), ("fort_level", Integer(1))]),
                )],
                ai_base: 5,
                ai_modifiers: vec![
                    AiModifier::add(10.0, "scope:holder = { is_at_war = yes }"),
                    AiModifier::factor(0.5, "scope:holder = { gold < 100 }"),
                ],
            }),
        },
        TemplateEntry {
            id: "building.learning",
            description: "Learning building granting the holder learning and prestige",
            preset: Preset::Building(BuildingPreset {
                construction_time: "standard_construction_time".to_string(),
                cost_gold: 175,
                modifiers: vec![(
                    "character".to_string(),
                    pairs(&[("learning", Integer(2)), ("monthly_prestige", Float(0.5))]),
                )],
                ai_base: 8,
                ai_modifiers: vec![AiModifier::add(
                    10.0,
                    "scope:holder = { has_lifestyle = learning_lifestyle }",
                )],
            }),
        },
        TemplateEntry {
            id: "decision.basic",
            description: "Minor decision available to any ruler",
            preset: Preset::Decision(DecisionPreset {
                picture: "gfx/interface/illustrations/decisions/decision_misc.dds".to_string(),
                major: false,
                cost_gold: 50,
                cooldown_days: Some(365),
                ai_check_interval: 120,
                ai_base: 50,
            }),
        },
        TemplateEntry {
            id: "decision.major",
            description: "Major decision shown in the realm-defining group",
            preset: Preset::Decision(DecisionPreset {
                picture: "gfx/interface/illustrations/decisions/decision_realm.dds".to_string(),
                major: true,
                cost_gold: 300,
                cooldown_days: None,
                ai_check_interval: 360,
                ai_base: 100,
            }),
        },
        TemplateEntry {
            id: "trait.personality",
            description: "Personality trait with AI behaviour weights",
            preset: Preset::Trait(TraitPreset {
                category: "personality".to_string(),
                properties: pairs(&[
                    ("diplomacy", Integer(2)),
                    ("ai_honor", Integer(20)),
                    ("ai_compassion", Integer(10)),
                ]),
            }),
        },
        TemplateEntry {
            id: "trait.lifestyle",
            description: "Lifestyle trait granting skills and prestige",
            preset: Preset::Trait(TraitPreset {
                category: "lifestyle".to_string(),
                properties: pairs(&[("learning", Integer(3)), ("monthly_prestige", Float(0.25))]),
            }),
        },
        TemplateEntry {
            id: "event.character",
            description: "Character event with a portrait and two options",
            preset: Preset::Event(EventPreset {
                event_type: "character_event".to_string(),
                theme: "default".to_string(),
                options: 2,
            }),
        },
        TemplateEntry {
            id: "event.letter",
            description: "Letter event sent by the root character",
            preset: Preset::Event(EventPreset {
                event_type: "letter_event".to_string(),
                theme: "realm".to_string(),
                options: 1,
            }),
        },
    ]
}
