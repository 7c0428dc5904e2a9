//! Activity overlay

use crate::bundle::{translated, TranslationBundle};
use lorebook_core::{merge, non_empty_str};
use lorebook_plugin::{ConvertContext, ConverterMeta, ConverterPlugin};
use serde_json::{json, Map, Value};
use tracing::warn;

/// Overlay translated activities onto an activity map.
///
/// The translation key is the activity's `_id`, falling back to its name
/// when non-empty, else its type (unnamed activities share one entry per
/// type, e.g. one "attack" entry covering every unnamed attack).
pub fn activities(activities: &Value, translations: Option<&Value>) -> Value {
    let Some(bundle) = translations.and_then(TranslationBundle::new) else {
        return activities.clone();
    };
    let Value::Object(map) = activities else {
        return activities.clone();
    };

    let mut out = map.clone();
    for (key, activity) in map {
        let id = activity.get("_id").and_then(Value::as_str);
        let fallback = activity
            .get("name")
            .and_then(non_empty_str)
            .or_else(|| activity.get("type").and_then(Value::as_str));
        let Some(entry) = bundle.entry(id, fallback) else {
            warn!(
                id = id.unwrap_or(""),
                name = fallback.unwrap_or(""),
                "missing activity translation"
            );
            continue;
        };

        let mut patch = Map::new();
        if let Some(v) = translated(entry, "name") {
            patch.insert("name".to_string(), v.clone());
        }
        if let Some(v) = translated(entry, "condition") {
            patch.insert("activation".to_string(), json!({ "condition": v }));
        }
        if let Some(v) = translated(entry, "chatFlavor") {
            patch.insert("description".to_string(), json!({ "chatFlavor": v }));
        }
        if let Some(v) = translated(entry, "duration") {
            patch.insert("duration".to_string(), json!({ "special": v }));
        }
        if let Some(v) = translated(entry, "range") {
            patch.insert("range".to_string(), json!({ "special": v }));
        }
        if let Some(v) = translated(entry, "target") {
            patch.insert("target".to_string(), json!({ "affects": { "special": v } }));
        }
        if let Some(profiles) = activity.get("profiles") {
            patch.insert(
                "profiles".to_string(),
                summon_profiles(profiles, entry.get("profiles")),
            );
        }
        out.insert(key.clone(), merge(activity, &Value::Object(patch)));
    }
    Value::Object(out)
}

/// Overlay translated names onto summon profiles, matched by name.
pub fn summon_profiles(profiles: &Value, translations: Option<&Value>) -> Value {
    let Some(bundle) = translations.and_then(TranslationBundle::new) else {
        return profiles.clone();
    };
    let Value::Array(list) = profiles else {
        return profiles.clone();
    };

    let translated_profiles = list
        .iter()
        .map(|profile| {
            let name = profile.get("name").and_then(Value::as_str);
            match bundle.entry(None, name).and_then(|e| translated(e, "name")) {
                Some(v) => merge(profile, &json!({ "name": v })),
                None => profile.clone(),
            }
        })
        .collect();
    Value::Array(translated_profiles)
}

/// The registered `activities` converter
pub struct Activities;

impl ConverterPlugin for Activities {
    fn meta(&self) -> ConverterMeta {
        ConverterMeta {
            name: "activities",
            description: "Overlay translated activities (names, conditions, special texts)",
            example: "{id: {name: \"Bite\"}} + {Bite: {name: \"Morsure\"}}",
        }
    }

    fn convert(
        &self,
        value: &Value,
        translation: Option<&Value>,
        _ctx: &ConvertContext,
    ) -> Option<Value> {
        Some(activities(value, translation))
    }
}
