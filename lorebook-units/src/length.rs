//! Length unit lookup table

use crate::scalar::{feet_to_meters, miles_to_kilometers};
use lorebook_core::MetricSettings;
use serde_json::Value;

/// How to rescale one length unit: the scalar converter plus the label the
/// whole measurement object is rewritten to.
#[derive(Clone, Copy)]
pub struct LengthConversion {
    pub convert: fn(&Value, &MetricSettings) -> Value,
    pub label: &'static str,
}

impl LengthConversion {
    pub fn apply(&self, value: &Value, metric: &MetricSettings) -> Value {
        (self.convert)(value, metric)
    }
}

/// Look up the conversion for a unit label.
///
/// Only the two imperial length labels are known; anything else (including
/// the metric labels a previous pass produced) yields `None` and the caller
/// leaves its input unchanged.
pub fn length_conversion(units: &str, metric: &MetricSettings) -> Option<LengthConversion> {
    match units {
        "ft" => Some(LengthConversion {
            convert: feet_to_meters,
            label: if metric.length { "m" } else { "ft" },
        }),
        "mi" => Some(LengthConversion {
            convert: miles_to_kilometers,
            label: if metric.length { "km" } else { "mi" },
        }),
        _ => None,
    }
}
