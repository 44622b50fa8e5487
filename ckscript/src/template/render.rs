use crate::format::BlockFormatter;
use crate::template::{BuildingPreset, DecisionPreset, EventPreset, TraitPreset};

type Localization = Vec<(String, String)>;

pub(super) fn building(
    out: &mut BlockFormatter,
    key: &str,
    name: &str,
    preset: &BuildingPreset,
) -> Localization {
    // The first tier carries the `_01` suffix; later tiers chain via next_building.
    let id = format!("{}_01", key);

    out.open_block(&id);
    out.write_property("construction_time", preset.construction_time.as_str());
    out.write_property("type_icon", format!("icon_building_{}.dds", key));
    out.write_property("cost_gold", preset.cost_gold);
    for (scope, pairs) in &preset.modifiers {
        out.write_modifier_block(scope, pairs.iter().map(|(k, v)| (k, v.clone())));
    }
    out.write_ai_value(preset.ai_base, &preset.ai_modifiers);
    out.close_block();

    vec![
        (format!("building_{}", id), name.to_string()),
        (
            format!("building_{}_desc", id),
            format!("Description of {}.", name),
        ),
    ]
}

pub(super) fn decision(
    out: &mut BlockFormatter,
    key: &str,
    name: &str,
    preset: &DecisionPreset,
) -> Localization {
    let desc = format!("{}_desc", key);
    let tooltip = format!("{}_tooltip", key);
    let confirm = format!("{}_confirm", key);

    out.open_block(key);
    out.open_block("picture");
    out.write_property("reference", preset.picture.as_str());
    out.close_block();
    if preset.major {
        out.write_property("decision_group_type", "major");
    }
    out.write_property("desc", desc.as_str());
    out.write_property("selection_tooltip", tooltip.as_str());
    out.write_property("confirm_text", confirm.as_str());
    if let Some(days) = preset.cooldown_days {
        out.open_block("cooldown");
        out.write_property("days", days);
        out.close_block();
    }

    out.open_block("is_shown");
    out.write_property("is_ruler", true);
    out.write_property("is_playable_character", true);
    out.close_block();

    out.open_block("is_valid_showing_failures_only");
    out.write_property("is_available_adult", true);
    out.close_block();

    out.open_block("cost");
    out.write_property("gold", preset.cost_gold);
    out.close_block();

    out.open_block("effect");
    out.write_comment("effects of taking the decision");
    out.close_block();

    out.write_property("ai_check_interval", preset.ai_check_interval);
    out.open_block("ai_potential");
    out.write_property("always", true);
    out.close_block();
    out.open_block("ai_will_do");
    out.write_property("base", preset.ai_base);
    out.close_block();
    out.close_block();

    vec![
        (key.to_string(), name.to_string()),
        (desc, format!("Description of {}.", name)),
        (tooltip, format!("Take the {} decision.", name)),
        (confirm, name.to_string()),
    ]
}

pub(super) fn trait_(
    out: &mut BlockFormatter,
    key: &str,
    name: &str,
    preset: &TraitPreset,
) -> Localization {
    out.open_block(key);
    out.write_property("category", preset.category.as_str());
    out.write_property("icon", format!("{}.dds", key));
    for (property, value) in &preset.properties {
        out.write_property(property, value.clone());
    }
    out.close_block();

    vec![
        (format!("trait_{}", key), name.to_string()),
        (
            format!("trait_{}_desc", key),
            format!("Description of {}.", name),
        ),
    ]
}

pub(super) fn event(
    out: &mut BlockFormatter,
    namespace: &str,
    name: &str,
    preset: &EventPreset,
) -> Localization {
    let id = format!("{}.0001", namespace);
    let letter = preset.event_type == "letter_event";
    let mut localization = Vec::new();

    out.write_property("namespace", namespace);
    out.write_raw_line("");

    out.open_block(&id);
    out.write_property("type", preset.event_type.as_str());
    if letter {
        out.write_property("opening", format!("{}.opening", id));
        localization.push((format!("{}.opening", id), "My friend,".to_string()));
    } else {
        out.write_property("title", format!("{}.t", id));
        localization.push((format!("{}.t", id), name.to_string()));
    }
    out.write_property("desc", format!("{}.desc", id));
    localization.push((format!("{}.desc", id), format!("Description of {}.", name)));
    out.write_property("theme", preset.theme.as_str());

    if letter {
        out.write_property("sender", "root");
    } else {
        out.open_block("left_portrait");
        out.write_property("character", "root");
        out.write_property("animation", "idle");
        out.close_block();
    }

    out.open_block("immediate");
    out.write_comment("effects applied when the event fires");
    out.close_block();

    for suffix in ('a'..='z').take(preset.options.max(1)) {
        let option_key = format!("{}.{}", id, suffix);
        out.open_block("option");
        out.write_property("name", option_key.as_str());
        out.close_block();
        localization.push((option_key, format!("Option {}", suffix.to_ascii_uppercase())));
    }
    out.close_block();

    localization
}
