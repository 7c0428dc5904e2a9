//! Advancement entry overlay

use crate::bundle::{translated, TranslationBundle};
use lorebook_core::{merge, non_empty_str, slugify, MetricSettings};
use lorebook_plugin::{ConvertContext, ConverterMeta, ConverterPlugin};
use lorebook_units::distance_advancement;
use serde_json::{json, Map, Value};
use tracing::warn;

/// Overlay translated advancement entries, matched by `_id` then title.
///
/// Distance-scaling entries are passed through the length converter before
/// any title/hint translation, so the translated text always accompanies
/// already-rescaled values. An entry without a configuration identifier
/// gets one derived from its (translated or original) title.
pub fn advancement(
    advancements: &Value,
    translations: Option<&Value>,
    metric: &MetricSettings,
) -> Value {
    let converted = distance_advancement(advancements, metric);

    let Some(bundle) = translations.and_then(TranslationBundle::new) else {
        return converted;
    };
    let Value::Array(list) = &converted else {
        return converted;
    };

    let translated_entries = list
        .iter()
        .map(|adv| translate_entry(adv, &bundle))
        .collect();
    Value::Array(translated_entries)
}

fn translate_entry(adv: &Value, bundle: &TranslationBundle<'_>) -> Value {
    let id = adv.get("_id").and_then(Value::as_str);
    let title = adv.get("title").and_then(Value::as_str);
    let Some(entry) = bundle.entry(id, title) else {
        warn!(id = id.unwrap_or(""), title = title.unwrap_or(""), "missing advancement translation");
        return adv.clone();
    };

    let mut patch = Map::new();
    if let Some(v) = translated(entry, "title") {
        patch.insert("title".to_string(), v.clone());
    }
    if let Some(v) = translated(entry, "hint") {
        patch.insert("hint".to_string(), v.clone());
    }

    let has_identifier = adv
        .pointer("/configuration/identifier")
        .and_then(non_empty_str)
        .is_some();
    if !has_identifier {
        let merged_title = translated(entry, "title").and_then(Value::as_str).or(title);
        if let Some(t) = merged_title {
            patch.insert("configuration".to_string(), json!({ "identifier": slugify(t) }));
        }
    }

    merge(adv, &Value::Object(patch))
}

/// The registered `advancement` converter
pub struct Advancement;

impl ConverterPlugin for Advancement {
    fn meta(&self) -> ConverterMeta {
        ConverterMeta {
            name: "advancement",
            description: "Overlay translated advancement titles and hints",
            example: "[{_id: \"x\", title: \"Extra Attack\"}] + {x: {title: \"Attaque supplémentaire\"}}",
        }
    }

    fn convert(
        &self,
        value: &Value,
        translation: Option<&Value>,
        ctx: &ConvertContext,
    ) -> Option<Value> {
        Some(advancement(value, translation, &ctx.metric))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lorebook_core::MetricSettings;
    use serde_json::json;

    fn metric() -> MetricSettings {
        MetricSettings::all()
    }

    #[test]
    fn test_no_bundle_is_identity_for_plain_entries() {
        let input = json!([{"_id": "x", "title": "Extra Attack", "configuration": {}}]);
        assert_eq!(advancement(&input, None, &metric()), input);
    }

    #[test]
    fn test_title_and_hint_overlaid() {
        let input = json!([{"_id": "x", "title": "Extra Attack", "hint": "Attack twice",
                            "configuration": {"identifier": "extra-attack"}}]);
        let tr = json!({"x": {"title": "Attaque supplémentaire", "hint": "Attaquez deux fois"}});
        let out = advancement(&input, Some(&tr), &metric());
        assert_eq!(out[0]["title"], json!("Attaque supplémentaire"));
        assert_eq!(out[0]["hint"], json!("Attaquez deux fois"));
        assert_eq!(out[0]["configuration"]["identifier"], json!("extra-attack"));
    }

    #[test]
    fn test_matched_by_title_fallback() {
        let input = json!([{"_id": "x", "title": "Rage", "configuration": {"identifier": "rage"}}]);
        let tr = json!({"Rage": {"hint": "Entrez en rage"}});
        let out = advancement(&input, Some(&tr), &metric());
        assert_eq!(out[0]["hint"], json!("Entrez en rage"));
    }

    #[test]
    fn test_identifier_derived_from_translated_title() {
        let input = json!([{"_id": "x", "title": "Extra Attack", "configuration": {"identifier": ""}}]);
        let tr = json!({"x": {"title": "Attaque supplémentaire"}});
        let out = advancement(&input, Some(&tr), &metric());
        assert_eq!(
            out[0]["configuration"]["identifier"],
            json!("attaque-supplémentaire")
        );
    }

    #[test]
    fn test_identifier_derived_from_original_title() {
        let input = json!([{"_id": "x", "title": "Extra Attack", "configuration": {}}]);
        let tr = json!({"x": {"hint": "notice"}});
        let out = advancement(&input, Some(&tr), &metric());
        assert_eq!(out[0]["configuration"]["identifier"], json!("extra-attack"));
    }

    #[test]
    fn test_unmatched_entry_kept() {
        let input = json!([{"_id": "x", "title": "Rage", "configuration": {"identifier": "rage"}}]);
        let tr = json!({"other": {"title": "Autre"}});
        let out = advancement(&input, Some(&tr), &metric());
        assert_eq!(out, input);
    }

    #[test]
    fn test_distance_scaling_rescaled_before_translation() {
        let input = json!([{
            "_id": "x",
            "type": "ScaleValue",
            "title": "Aura Radius",
            "configuration": {
                "type": "distance",
                "identifier": "aura",
                "distance": {"units": "ft"},
                "scale": {"6": {"value": 10}, "18": {"value": 30}}
            }
        }]);
        let tr = json!({"x": {"title": "Rayon d'aura"}});
        let out = advancement(&input, Some(&tr), &metric());
        assert_eq!(out[0]["title"], json!("Rayon d'aura"));
        assert_eq!(out[0]["configuration"]["distance"]["units"], json!("m"));
        assert_eq!(out[0]["configuration"]["scale"]["6"]["value"], json!(3));
        assert_eq!(out[0]["configuration"]["scale"]["18"]["value"], json!(9));
    }
}
