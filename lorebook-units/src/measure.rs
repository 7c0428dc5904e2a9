//! Composite measurement converters
//!
//! Each converter takes a structured measurement object, applies the scalar
//! length/weight/volume conversion per sub-field, and rewrites the unit
//! label uniformly. Sub-fields absent from the input are skipped, never
//! inserted; an unrecognized unit label makes the whole converter a no-op.

use crate::length::length_conversion;
use crate::scalar::{feet_to_meters, pc_to_liters, pounds_to_kilograms};
use lorebook_core::{merge, non_empty_str, MetricSettings};
use serde_json::{json, Map, Value};

// ============ range ============

/// Range: `value`, `long`, `reach` plus `units`
pub fn range(range: &Value, metric: &MetricSettings) -> Value {
    let Some(units) = range.get("units").and_then(Value::as_str) else {
        return range.clone();
    };
    let Some(conv) = length_conversion(units, metric) else {
        return range.clone();
    };

    let mut patch = Map::new();
    for field in ["value", "long", "reach"] {
        if let Some(v) = range.get(field) {
            patch.insert(field.to_string(), conv.apply(v, metric));
        }
    }
    patch.insert("units".to_string(), json!(conv.label));
    merge(range, &Value::Object(patch))
}

// ============ weight ============

/// Weight: `value` in pounds plus `units`
pub fn weight(weight: &Value, metric: &MetricSettings) -> Value {
    let mut patch = Map::new();
    if let Some(v) = weight.get("value") {
        patch.insert("value".to_string(), pounds_to_kilograms(v, metric));
    }
    if metric.weight {
        patch.insert("units".to_string(), json!("kg"));
    }
    merge(weight, &Value::Object(patch))
}

// ============ target ============

/// Target template: `size`, `height`, `width` plus `units`; affected count
pub fn target(target: &Value, metric: &MetricSettings) -> Value {
    let Some(units) = target.pointer("/template/units").and_then(Value::as_str) else {
        return target.clone();
    };
    let Some(conv) = length_conversion(units, metric) else {
        return target.clone();
    };

    let mut template = Map::new();
    if let Some(t) = target.get("template") {
        for field in ["size", "height", "width"] {
            if let Some(v) = t.get(field) {
                template.insert(field.to_string(), conv.apply(v, metric));
            }
        }
    }
    template.insert("units".to_string(), json!(conv.label));

    let mut patch = Map::new();
    patch.insert("template".to_string(), Value::Object(template));
    if let Some(count) = target.pointer("/affects/count") {
        patch.insert("affects".to_string(), json!({ "count": conv.apply(count, metric) }));
    }
    merge(target, &Value::Object(patch))
}

// ============ senses ============

/// Senses: `darkvision`, `blindsight`, `tremorsense`, `truesight`.
/// The unit label defaults to feet when absent.
pub fn senses(senses: &Value, metric: &MetricSettings) -> Value {
    let units = senses.get("units").and_then(Value::as_str).unwrap_or("ft");
    let Some(conv) = length_conversion(units, metric) else {
        return senses.clone();
    };

    let mut patch = Map::new();
    for field in ["darkvision", "blindsight", "tremorsense", "truesight"] {
        if let Some(v) = senses.get(field) {
            patch.insert(field.to_string(), conv.apply(v, metric));
        }
    }
    patch.insert("units".to_string(), json!(conv.label));
    merge(senses, &Value::Object(patch))
}

// ============ volume ============

/// Volume: `value` in cubic units plus `units`
pub fn volume(volume: &Value, metric: &MetricSettings) -> Value {
    let mut patch = Map::new();
    if let Some(v) = volume.get("value") {
        patch.insert("value".to_string(), pc_to_liters(v, metric));
    }
    if metric.volume {
        patch.insert("units".to_string(), json!("liter"));
    }
    merge(volume, &Value::Object(patch))
}

// ============ movement ============

/// Movement: `burrow`, `climb`, `swim`, `walk`, `fly`.
/// The unit label defaults to feet when absent.
pub fn movement(movement: &Value, metric: &MetricSettings) -> Value {
    let units = movement.get("units").and_then(Value::as_str).unwrap_or("ft");
    let Some(conv) = length_conversion(units, metric) else {
        return movement.clone();
    };

    let mut patch = Map::new();
    for field in ["burrow", "climb", "swim", "walk", "fly"] {
        if let Some(v) = movement.get(field) {
            patch.insert(field.to_string(), conv.apply(v, metric));
        }
    }
    patch.insert("units".to_string(), json!(conv.label));
    merge(movement, &Value::Object(patch))
}

// ============ sightRange ============

/// Bare sight range in feet
pub fn sight_range(value: &Value, metric: &MetricSettings) -> Value {
    feet_to_meters(value, metric)
}

// ============ communication ============

/// Communication modes: a map of `{ value, units }` entries, each converted
/// independently. Entries with an unrecognized label stay as they are.
pub fn communication(communication: &Value, metric: &MetricSettings) -> Value {
    let Value::Object(map) = communication else {
        return communication.clone();
    };

    let mut out = map.clone();
    for (key, entry) in map {
        let Some(units) = entry.get("units").and_then(Value::as_str) else {
            continue;
        };
        let Some(conv) = length_conversion(units, metric) else {
            continue;
        };
        let mut patch = Map::new();
        if let Some(v) = entry.get("value") {
            patch.insert("value".to_string(), conv.apply(v, metric));
        }
        patch.insert("units".to_string(), json!(conv.label));
        out.insert(key.clone(), merge(entry, &Value::Object(patch)));
    }
    Value::Object(out)
}

// ============ rangeActivities ============

/// Per-activity ranges: a map of activities, each with an optional `range`
/// sub-object and an optional `target.template` whose size is rescaled.
pub fn range_activities(activities: &Value, metric: &MetricSettings) -> Value {
    let Value::Object(map) = activities else {
        return activities.clone();
    };

    let mut out = map.clone();
    for (key, activity) in map {
        let mut updated = activity.clone();

        if let Some(r) = activity.get("range") {
            let converted = range(r, metric);
            if let Value::Object(ref mut obj) = updated {
                obj.insert("range".to_string(), converted);
            }
        }

        if let Some(units) = activity.pointer("/target/template/units").and_then(Value::as_str) {
            if let Some(conv) = length_conversion(units, metric) {
                let mut template = Map::new();
                if let Some(size) = activity.pointer("/target/template/size") {
                    template.insert("size".to_string(), conv.apply(size, metric));
                }
                template.insert("units".to_string(), json!(conv.label));
                let patch = json!({ "target": { "template": Value::Object(template) } });
                updated = merge(&updated, &patch);
            }
        }

        out.insert(key.clone(), updated);
    }
    Value::Object(out)
}

// ============ distanceAdvancement ============

/// Distance-scaling advancement entries: for `ScaleValue` entries of the
/// `distance` kind, rewrite the distance unit label and every keyed scale
/// step's value. Other entries pass through untouched.
pub fn distance_advancement(advancements: &Value, metric: &MetricSettings) -> Value {
    let Value::Array(list) = advancements else {
        return advancements.clone();
    };

    let converted = list
        .iter()
        .map(|adv| convert_distance_entry(adv, metric))
        .collect();
    Value::Array(converted)
}

fn convert_distance_entry(adv: &Value, metric: &MetricSettings) -> Value {
    if adv.get("type").and_then(Value::as_str) != Some("ScaleValue") {
        return adv.clone();
    }
    if adv.pointer("/configuration/type").and_then(Value::as_str) != Some("distance") {
        return adv.clone();
    }
    let Some(distance) = adv.pointer("/configuration/distance") else {
        return adv.clone();
    };
    let units = distance
        .get("units")
        .and_then(non_empty_str)
        .unwrap_or("ft");
    let Some(conv) = length_conversion(units, metric) else {
        return adv.clone();
    };

    let mut scale = Map::new();
    if let Some(Value::Object(steps)) = adv.pointer("/configuration/scale") {
        for (level, step) in steps {
            if let Some(v) = step.get("value") {
                scale.insert(level.clone(), json!({ "value": conv.apply(v, metric) }));
            }
        }
    }

    let patch = json!({
        "configuration": {
            "distance": { "units": conv.label },
            "scale": Value::Object(scale),
        }
    });
    merge(adv, &patch)
}
