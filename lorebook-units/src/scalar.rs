//! Scalar magnitude converters
//!
//! Each converter takes the raw JSON field value and the metric settings,
//! and returns either the rescaled magnitude or the original value
//! untouched. A conversion is a no-op when its toggle is disabled, when the
//! magnitude is non-numeric, or when it is zero (an unset measurement).

use lorebook_core::{magnitude, MetricSettings};
use serde_json::Value;

const FEET_PER_METER_FACTOR: f64 = 0.3;
const MILES_PER_KM_FACTOR: f64 = 1.5;
const PC_PER_LITER_FACTOR: f64 = 28.317;

/// Round to two decimal places.
///
/// The epsilon nudge keeps values sitting exactly on a half from rounding
/// down due to binary representation (e.g. 2.675 * 100 = 267.49999...).
pub fn round2(x: f64) -> f64 {
    ((x + f64::EPSILON) * 100.0).round() / 100.0
}

/// Feet to meters at x0.3, rounded
pub fn feet_to_meters(value: &Value, metric: &MetricSettings) -> Value {
    scale_length(value, metric, FEET_PER_METER_FACTOR)
}

/// Miles to kilometers at x1.5, rounded
pub fn miles_to_kilometers(value: &Value, metric: &MetricSettings) -> Value {
    scale_length(value, metric, MILES_PER_KM_FACTOR)
}

fn scale_length(value: &Value, metric: &MetricSettings, factor: f64) -> Value {
    if !metric.length {
        return value.clone();
    }
    match magnitude(value) {
        Some(n) if n != 0 => number(round2(n as f64 * factor)),
        _ => value.clone(),
    }
}

/// Pounds to kilograms at /2, not rounded
pub fn pounds_to_kilograms(value: &Value, metric: &MetricSettings) -> Value {
    if !metric.weight {
        return value.clone();
    }
    match magnitude(value) {
        Some(n) if n != 0 => number(n as f64 / 2.0),
        _ => value.clone(),
    }
}

/// Cubic units to liters at x28.317, rounded
pub fn pc_to_liters(value: &Value, metric: &MetricSettings) -> Value {
    if !metric.volume {
        return value.clone();
    }
    match magnitude(value) {
        Some(n) if n != 0 => number(round2(n as f64 * PC_PER_LITER_FACTOR)),
        _ => value.clone(),
    }
}

/// Emit a JSON number, as an integer when the value is whole.
///
/// The host runtime does not distinguish 9 from 9.0; JSON does, so whole
/// results are emitted as integers to keep merged data clean.
fn number(x: f64) -> Value {
    if x.fract() == 0.0 && x.abs() < i64::MAX as f64 {
        Value::Number(serde_json::Number::from(x as i64))
    } else {
        serde_json::Number::from_f64(x)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}
