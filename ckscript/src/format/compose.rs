//! Common block shapes built from the formatter primitives.

use crate::format::{BlockFormatter, PropertyValue};

/// One `modifier = { ... }` entry of an `ai_value` block.
#[derive(Debug, Clone, PartialEq)]
pub struct AiModifier {
    pub add: Option<f64>,
    pub factor: Option<f64>,
    /// Written verbatim inside the modifier, e.g. `has_trait = diligent`.
    pub condition: String,
}

impl AiModifier {
    pub fn add(add: f64, condition: impl Into<String>) -> Self {
        AiModifier {
            add: Some(add),
            factor: None,
            condition: condition.into(),
        }
    }

    pub fn factor(factor: f64, condition: impl Into<String>) -> Self {
        AiModifier {
            add: None,
            factor: Some(factor),
            condition: condition.into(),
        }
    }
}

impl BlockFormatter {
    /// Write `<scope>_modifier = { key = value ... }`.
    pub fn write_modifier_block<K, V>(
        &mut self,
        scope: &str,
        pairs: impl IntoIterator<Item = (K, V)>,
    ) -> &mut Self
    where
        K: AsRef<str>,
        V: Into<PropertyValue>,
    {
        self.open_block(&format!("{}_modifier", scope));
        for (key, value) in pairs {
            self.write_property(key.as_ref(), value);
        }
        self.close_block()
    }

    /// Write an `ai_value` block with a base and conditional modifiers.
    pub fn write_ai_value(
        &mut self,
        base: impl Into<PropertyValue>,
        modifiers: &[AiModifier],
    ) -> &mut Self {
        self.open_block("ai_value");
        self.write_property("base", base);
        for modifier in modifiers {
            self.open_block("modifier");
            if let Some(add) = modifier.add {
                self.write_property("add", add);
            }
            if let Some(factor) = modifier.factor {
                self.write_property("factor", factor);
            }
            self.write_raw_line(&modifier.condition);
            self.close_block();
        }
        self.close_block()
    }
}
