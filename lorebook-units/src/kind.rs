//! Closed enumeration of unit conversion kinds
//!
//! The set of kinds is a closed enum with exhaustive dispatch, so an
//! unrecognized kind is only possible at the string boundary (`FromStr`),
//! where it logs a warning instead of reaching any converter.

use crate::measure;
use lorebook_core::{LorebookError, MetricSettings};
use lorebook_plugin::{ConvertContext, ConverterMeta, ConverterPlugin};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Every measurement shape the library knows how to rescale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    Range,
    Weight,
    Target,
    Senses,
    Volume,
    Movement,
    SightRange,
    Communication,
    RangeActivities,
    DistanceAdvancement,
}

impl UnitKind {
    pub const ALL: [UnitKind; 10] = [
        UnitKind::Range,
        UnitKind::Weight,
        UnitKind::Target,
        UnitKind::Senses,
        UnitKind::Volume,
        UnitKind::Movement,
        UnitKind::SightRange,
        UnitKind::Communication,
        UnitKind::RangeActivities,
        UnitKind::DistanceAdvancement,
    ];

    /// The host-side field name this kind is registered under
    pub fn field_name(&self) -> &'static str {
        match self {
            UnitKind::Range => "range",
            UnitKind::Weight => "weight",
            UnitKind::Target => "target",
            UnitKind::Senses => "senses",
            UnitKind::Volume => "volume",
            UnitKind::Movement => "movement",
            UnitKind::SightRange => "sightRange",
            UnitKind::Communication => "communication",
            UnitKind::RangeActivities => "rangeActivities",
            UnitKind::DistanceAdvancement => "distanceAdvancement",
        }
    }

    /// Dispatch to the specialized converter
    pub fn convert(&self, value: &Value, metric: &MetricSettings) -> Value {
        match self {
            UnitKind::Range => measure::range(value, metric),
            UnitKind::Weight => measure::weight(value, metric),
            UnitKind::Target => measure::target(value, metric),
            UnitKind::Senses => measure::senses(value, metric),
            UnitKind::Volume => measure::volume(value, metric),
            UnitKind::Movement => measure::movement(value, metric),
            UnitKind::SightRange => measure::sight_range(value, metric),
            UnitKind::Communication => measure::communication(value, metric),
            UnitKind::RangeActivities => measure::range_activities(value, metric),
            UnitKind::DistanceAdvancement => measure::distance_advancement(value, metric),
        }
    }
}

impl FromStr for UnitKind {
    type Err = LorebookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UnitKind::ALL
            .iter()
            .copied()
            .find(|k| k.field_name() == s)
            .ok_or_else(|| LorebookError::UnknownUnitKind(s.to_string()))
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.field_name())
    }
}

/// The registered converter for one unit kind.
///
/// Unit converters ignore the translation argument; measurements carry no
/// translatable text.
pub struct ImperialToMetric {
    kind: UnitKind,
}

impl ImperialToMetric {
    pub fn new(kind: UnitKind) -> Self {
        Self { kind }
    }

    /// Resolve a kind string from a registration table: an unknown kind
    /// logs a warning and produces no converter.
    pub fn from_kind_str(kind: &str) -> Option<Self> {
        match kind.parse::<UnitKind>() {
            Ok(kind) => Some(Self::new(kind)),
            Err(err) => {
                warn!(%err, "cannot build unit converter");
                None
            }
        }
    }
}

impl ConverterPlugin for ImperialToMetric {
    fn meta(&self) -> ConverterMeta {
        match self.kind {
            UnitKind::Range => ConverterMeta {
                name: "range",
                description: "Rescale a range object (value/long/reach) to metric",
                example: "{value: 30, long: 120, units: \"ft\"} -> {value: 9, long: 36, units: \"m\"}",
            },
            UnitKind::Weight => ConverterMeta {
                name: "weight",
                description: "Rescale a weight in pounds to kilograms",
                example: "{value: 10, units: \"lb\"} -> {value: 5, units: \"kg\"}",
            },
            UnitKind::Target => ConverterMeta {
                name: "target",
                description: "Rescale a target template and affected count to metric",
                example: "{template: {size: 20, units: \"ft\"}} -> {template: {size: 6, units: \"m\"}}",
            },
            UnitKind::Senses => ConverterMeta {
                name: "senses",
                description: "Rescale sense radii (darkvision, blindsight, ...) to metric",
                example: "{darkvision: 60} -> {darkvision: 18, units: \"m\"}",
            },
            UnitKind::Volume => ConverterMeta {
                name: "volume",
                description: "Rescale a cubic-unit volume to liters",
                example: "{value: 1, units: \"pc\"} -> {value: 28.32, units: \"liter\"}",
            },
            UnitKind::Movement => ConverterMeta {
                name: "movement",
                description: "Rescale movement speeds (walk, fly, ...) to metric",
                example: "{walk: 30, units: \"ft\"} -> {walk: 9, units: \"m\"}",
            },
            UnitKind::SightRange => ConverterMeta {
                name: "sightRange",
                description: "Rescale a bare sight range in feet",
                example: "60 -> 18",
            },
            UnitKind::Communication => ConverterMeta {
                name: "communication",
                description: "Rescale each communication mode's range to metric",
                example: "{telepathy: {value: 120, units: \"ft\"}} -> {telepathy: {value: 36, units: \"m\"}}",
            },
            UnitKind::RangeActivities => ConverterMeta {
                name: "rangeActivities",
                description: "Rescale each activity's range and target template",
                example: "{id: {range: {value: 30, units: \"ft\"}}} -> {id: {range: {value: 9, units: \"m\"}}}",
            },
            UnitKind::DistanceAdvancement => ConverterMeta {
                name: "distanceAdvancement",
                description: "Rescale distance ScaleValue advancement steps",
                example: "scale {3: {value: 10}} -> {3: {value: 3}}",
            },
        }
    }

    fn convert(
        &self,
        value: &Value,
        _translation: Option<&Value>,
        ctx: &ConvertContext,
    ) -> Option<Value> {
        Some(self.kind.convert(value, &ctx.metric))
    }
}
