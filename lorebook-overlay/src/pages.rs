//! Journal page overlay

use crate::bundle::{translated, TranslationBundle};
use lorebook_core::merge;
use lorebook_plugin::{ConvertContext, ConverterMeta, ConverterPlugin};
use serde_json::{json, Map, Value};
use tracing::warn;

/// Overlay translated journal pages onto the original page list.
///
/// Pages are matched by `_id`, falling back to `name`. A matched page gets
/// its translatable leaves replaced and a `translated: true` marker; an
/// unmatched page is kept as-is and reported.
pub fn pages(pages: &Value, translations: Option<&Value>) -> Value {
    let Some(bundle) = translations.and_then(TranslationBundle::new) else {
        return pages.clone();
    };
    let Value::Array(list) = pages else {
        return pages.clone();
    };

    let translated_pages = list.iter().map(|page| translate_page(page, &bundle)).collect();
    Value::Array(translated_pages)
}

fn translate_page(page: &Value, bundle: &TranslationBundle<'_>) -> Value {
    let id = page.get("_id").and_then(Value::as_str);
    let name = page.get("name").and_then(Value::as_str);
    let Some(entry) = bundle.entry(id, name) else {
        warn!(id = id.unwrap_or(""), name = name.unwrap_or(""), "missing page translation");
        return page.clone();
    };

    let mut patch = Map::new();
    if let Some(v) = translated(entry, "name") {
        patch.insert("name".to_string(), v.clone());
    }
    if let Some(v) = translated(entry, "caption") {
        patch.insert("image".to_string(), json!({ "caption": v }));
    }
    if let Some(v) = translated(entry, "src") {
        patch.insert("src".to_string(), v.clone());
    }
    if let Some(v) = translated(entry, "text") {
        patch.insert("text".to_string(), json!({ "content": v }));
    }

    let mut video = Map::new();
    if let Some(v) = translated(entry, "width") {
        video.insert("width".to_string(), v.clone());
    }
    if let Some(v) = translated(entry, "height") {
        video.insert("height".to_string(), v.clone());
    }
    if !video.is_empty() {
        patch.insert("video".to_string(), Value::Object(video));
    }

    let mut system = Map::new();
    if let Some(v) = translated(entry, "tooltip") {
        system.insert("tooltip".to_string(), v.clone());
    }
    if let Some(v) = translated(entry, "subclassHeader") {
        system.insert("subclassHeader".to_string(), v.clone());
    }
    if let Some(spells) = page.pointer("/system/unlinkedSpells") {
        system.insert(
            "unlinkedSpells".to_string(),
            unlinked_spells(spells, entry.get("unlinkedSpells")),
        );
    }
    let mut description = Map::new();
    if let Some(v) = translated(entry, "description") {
        description.insert("value".to_string(), v.clone());
    }
    for field in ["additionalEquipment", "additionalHitPoints", "additionalTraits", "subclass"] {
        if let Some(v) = translated(entry, field) {
            description.insert(field.to_string(), v.clone());
        }
    }
    if !description.is_empty() {
        system.insert("description".to_string(), Value::Object(description));
    }
    if !system.is_empty() {
        patch.insert("system".to_string(), Value::Object(system));
    }

    if let Some(v) = translated(entry, "flagsTitle") {
        patch.insert("flags".to_string(), json!({ "dnd5e": { "title": v } }));
    }
    patch.insert("translated".to_string(), json!(true));

    merge(page, &Value::Object(patch))
}

/// Overlay translated names onto unlinked spell references, matched by name.
pub fn unlinked_spells(spells: &Value, translations: Option<&Value>) -> Value {
    let Some(bundle) = translations.and_then(TranslationBundle::new) else {
        return spells.clone();
    };
    let Value::Array(list) = spells else {
        return spells.clone();
    };

    let translated_spells = list
        .iter()
        .map(|spell| {
            let name = spell.get("name").and_then(Value::as_str);
            match bundle.entry(None, name).and_then(|e| translated(e, "name")) {
                Some(v) => merge(spell, &json!({ "name": v })),
                None => spell.clone(),
            }
        })
        .collect();
    Value::Array(translated_spells)
}

/// The registered `pages` converter
pub struct Pages;

impl ConverterPlugin for Pages {
    fn meta(&self) -> ConverterMeta {
        ConverterMeta {
            name: "pages",
            description: "Overlay translated journal pages (text, captions, descriptions)",
            example: "[{_id: \"a\", name: \"Intro\"}] + {a: {name: \"Introduction\"}}",
        }
    }

    fn convert(
        &self,
        value: &Value,
        translation: Option<&Value>,
        _ctx: &ConvertContext,
    ) -> Option<Value> {
        Some(pages(value, translation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_no_bundle_is_identity() {
        let input = json!([{"_id": "a", "name": "Intro"}]);
        assert_eq!(pages(&input, None), input);
    }

    #[test]
    fn test_page_translated_by_id() {
        let input = json!([{"_id": "a", "name": "Intro", "sort": 100}]);
        let tr = json!({"a": {"name": "Introduction"}});
        let out = pages(&input, Some(&tr));
        assert_eq!(
            out,
            json!([{"_id": "a", "name": "Introduction", "sort": 100, "translated": true}])
        );
    }

    #[test]
    fn test_page_translated_by_name_fallback() {
        let input = json!([{"_id": "a", "name": "Intro"}]);
        let tr = json!({"Intro": {"name": "Introduction"}});
        let out = pages(&input, Some(&tr));
        assert_eq!(out[0]["name"], json!("Introduction"));
    }

    #[test]
    fn test_unmatched_page_kept_unchanged() {
        let input = json!([{"_id": "a", "name": "Intro"}, {"_id": "b", "name": "Rules"}]);
        let tr = json!({"a": {"name": "Introduction"}});
        let out = pages(&input, Some(&tr));
        assert_eq!(out[1], input[1]);
    }

    #[test]
    fn test_nested_leaves_overlaid() {
        let input = json!([{
            "_id": "a",
            "name": "Intro",
            "text": {"content": "<p>original</p>", "format": 1},
            "image": {"caption": "old"},
            "system": {"tooltip": "old tip", "description": {"value": "old", "chat": ""}}
        }]);
        let tr = json!({"a": {
            "name": "Introduction",
            "text": "<p>traduit</p>",
            "caption": "nouveau",
            "tooltip": "nouvelle info",
            "description": "texte"
        }});
        let out = pages(&input, Some(&tr));
        assert_eq!(out[0]["text"], json!({"content": "<p>traduit</p>", "format": 1}));
        assert_eq!(out[0]["image"]["caption"], json!("nouveau"));
        assert_eq!(out[0]["system"]["tooltip"], json!("nouvelle info"));
        assert_eq!(
            out[0]["system"]["description"],
            json!({"value": "texte", "chat": ""})
        );
    }

    #[test]
    fn test_missing_leaf_keeps_original() {
        let input = json!([{"_id": "a", "name": "Intro", "src": "path.webp"}]);
        let tr = json!({"a": {"name": "Introduction"}});
        let out = pages(&input, Some(&tr));
        assert_eq!(out[0]["src"], json!("path.webp"));
    }

    #[test]
    fn test_flags_title() {
        let input = json!([{"_id": "a", "name": "Intro", "flags": {"dnd5e": {"title": "Old"}}}]);
        let tr = json!({"a": {"flagsTitle": "Nouveau"}});
        let out = pages(&input, Some(&tr));
        assert_eq!(out[0]["flags"]["dnd5e"]["title"], json!("Nouveau"));
    }

    #[test]
    fn test_unlinked_spells_by_name() {
        let spells = json!([{"name": "Fireball", "level": 3}, {"name": "Shield", "level": 1}]);
        let tr = json!({"Fireball": {"name": "Boule de feu"}});
        let out = unlinked_spells(&spells, Some(&tr));
        assert_eq!(out[0], json!({"name": "Boule de feu", "level": 3}));
        assert_eq!(out[1], spells[1]);
    }

    #[test]
    fn test_unlinked_spells_inside_page() {
        let input = json!([{
            "_id": "a",
            "name": "Spell List",
            "system": {"unlinkedSpells": [{"name": "Fireball"}]}
        }]);
        let tr = json!({"a": {"unlinkedSpells": {"Fireball": {"name": "Boule de feu"}}}});
        let out = pages(&input, Some(&tr));
        assert_eq!(
            out[0]["system"]["unlinkedSpells"],
            json!([{"name": "Boule de feu"}])
        );
    }

    #[test]
    fn test_overlay_is_idempotent_without_bundle() {
        let input = json!([{"_id": "a", "name": "Intro"}]);
        let once = pages(&input, None);
        assert_eq!(pages(&once, None), once);
    }
}
