//! Status effect overlay

use crate::bundle::{translated, TranslationBundle};
use lorebook_core::{magnitude, merge, MetricSettings};
use lorebook_plugin::{ConvertContext, ConverterMeta, ConverterPlugin};
use serde_json::{json, Map, Value};
use tracing::warn;

/// Change keys carrying a movement or sense radius, whose numeric deltas
/// are rescaled along with the rest of the length fields.
const MOVEMENT_SENSES_KEYS: [&str; 9] = [
    "system.attributes.movement.burrow",
    "system.attributes.movement.climb",
    "system.attributes.movement.fly",
    "system.attributes.movement.swim",
    "system.attributes.movement.walk",
    "system.attributes.senses.blindsight",
    "system.attributes.senses.darkvision",
    "system.attributes.senses.tremorsense",
    "system.attributes.senses.truesight",
];

/// Overlay translated effects onto the original effect list, matched by
/// `_id` then `name`. Matched effects also get their change lists rescaled
/// and translated.
pub fn effects(effects: &Value, translations: Option<&Value>, metric: &MetricSettings) -> Value {
    let Some(bundle) = translations.and_then(TranslationBundle::new) else {
        return effects.clone();
    };
    let Value::Array(list) = effects else {
        return effects.clone();
    };

    let translated_effects = list
        .iter()
        .map(|effect| translate_effect(effect, &bundle, metric))
        .collect();
    Value::Array(translated_effects)
}

fn translate_effect(effect: &Value, bundle: &TranslationBundle<'_>, metric: &MetricSettings) -> Value {
    let id = effect.get("_id").and_then(Value::as_str);
    let name = effect.get("name").and_then(Value::as_str);
    let Some(entry) = bundle.entry(id, name) else {
        warn!(id = id.unwrap_or(""), name = name.unwrap_or(""), "missing effect translation");
        return effect.clone();
    };

    let mut patch = Map::new();
    if let Some(v) = translated(entry, "name") {
        patch.insert("name".to_string(), v.clone());
    }
    if let Some(v) = translated(entry, "description") {
        patch.insert("description".to_string(), v.clone());
    }
    if let Some(changes) = effect.get("changes") {
        patch.insert(
            "changes".to_string(),
            effect_changes(changes, entry.get("changes"), metric),
        );
    }
    merge(effect, &Value::Object(patch))
}

/// Rescale and translate an effect's change list.
///
/// Movement/senses deltas are passed through the feet converter first -
/// except when the change's mode is the literal 1, the multiplicative mode
/// whose factor must not be rescaled. A translation keyed by the change's
/// key then overrides the (possibly converted) value.
pub fn effect_changes(
    changes: &Value,
    translations: Option<&Value>,
    metric: &MetricSettings,
) -> Value {
    let Value::Array(list) = changes else {
        return changes.clone();
    };

    let converted = list
        .iter()
        .map(|change| {
            let key = change.get("key").and_then(Value::as_str).unwrap_or("");
            let mut updated = change.clone();

            let multiplicative = change.get("mode").map(magnitude) == Some(Some(1));
            if !multiplicative && MOVEMENT_SENSES_KEYS.contains(&key) {
                if let Some(v) = change.get("value") {
                    let rescaled = lorebook_units::feet_to_meters(v, metric);
                    updated = merge(&updated, &json!({ "value": rescaled }));
                }
            }

            if let Some(override_value) = translations
                .and_then(Value::as_object)
                .and_then(|t| t.get(key))
                .filter(|v| !v.is_null())
            {
                updated = merge(&updated, &json!({ "value": override_value }));
            }
            updated
        })
        .collect();
    Value::Array(converted)
}

/// The registered `effects` converter
pub struct Effects;

impl ConverterPlugin for Effects {
    fn meta(&self) -> ConverterMeta {
        ConverterMeta {
            name: "effects",
            description: "Overlay translated effects and rescale change deltas",
            example: "change {key: \"...movement.walk\", mode: 2, value: 30} -> value 9",
        }
    }

    fn convert(
        &self,
        value: &Value,
        translation: Option<&Value>,
        ctx: &ConvertContext,
    ) -> Option<Value> {
        Some(effects(value, translation, &ctx.metric))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn metric() -> MetricSettings {
        MetricSettings::all()
    }

    #[test]
    fn test_no_bundle_is_identity() {
        let input = json!([{"_id": "e1", "name": "Haste"}]);
        assert_eq!(effects(&input, None, &metric()), input);
    }

    #[test]
    fn test_effect_name_and_description() {
        let input = json!([{"_id": "e1", "name": "Haste", "description": "fast"}]);
        let tr = json!({"e1": {"name": "Hâte", "description": "rapide"}});
        let out = effects(&input, Some(&tr), &metric());
        assert_eq!(out[0]["name"], json!("Hâte"));
        assert_eq!(out[0]["description"], json!("rapide"));
    }

    #[test]
    fn test_unmatched_effect_kept() {
        let input = json!([{"_id": "e1", "name": "Haste"}]);
        let tr = json!({"other": {"name": "Autre"}});
        let out = effects(&input, Some(&tr), &metric());
        assert_eq!(out, input);
    }

    #[test]
    fn test_walk_change_rescaled_additive_mode() {
        let changes = json!([
            {"key": "system.attributes.movement.walk", "mode": 2, "value": 30}
        ]);
        let out = effect_changes(&changes, None, &metric());
        assert_eq!(out[0]["value"], json!(9));
    }

    #[test]
    fn test_multiply_mode_not_rescaled() {
        let changes = json!([
            {"key": "system.attributes.movement.walk", "mode": 1, "value": 2}
        ]);
        let out = effect_changes(&changes, None, &metric());
        assert_eq!(out[0]["value"], json!(2));
    }

    #[test]
    fn test_unrelated_key_not_rescaled() {
        let changes = json!([
            {"key": "system.attributes.hp.max", "mode": 2, "value": 30}
        ]);
        let out = effect_changes(&changes, None, &metric());
        assert_eq!(out[0]["value"], json!(30));
    }

    #[test]
    fn test_translation_overrides_converted_value() {
        let changes = json!([
            {"key": "system.attributes.senses.darkvision", "mode": 2, "value": 60}
        ]);
        let tr = json!({"system.attributes.senses.darkvision": "18 mètres"});
        let out = effect_changes(&changes, Some(&tr), &metric());
        assert_eq!(out[0]["value"], json!("18 mètres"));
    }

    #[test]
    fn test_changes_inside_effect() {
        let input = json!([{
            "_id": "e1",
            "name": "Longstrider",
            "changes": [{"key": "system.attributes.movement.walk", "mode": 2, "value": 10}]
        }]);
        let tr = json!({"e1": {"name": "Grande foulée"}});
        let out = effects(&input, Some(&tr), &metric());
        assert_eq!(out[0]["changes"][0]["value"], json!(3));
    }

    #[test]
    fn test_length_flag_disabled_leaves_changes() {
        let changes = json!([
            {"key": "system.attributes.movement.walk", "mode": 2, "value": 30}
        ]);
        let out = effect_changes(&changes, None, &MetricSettings::new());
        assert_eq!(out[0]["value"], json!(30));
    }
}
