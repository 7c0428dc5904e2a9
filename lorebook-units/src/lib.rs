//! Lorebook Units - Imperial to Metric Conversion
//!
//! Rewrites imperial measurement fields into metric equivalents when the
//! corresponding metric toggle is enabled:
//! - Length: feet to meters (x0.3), miles to kilometers (x1.5)
//! - Weight: pounds to kilograms (/2)
//! - Volume: cubic units to liters (x28.317)
//!
//! Scalar conversions round to two decimal places; composite converters
//! (range, target, senses, movement, ...) apply the scalar per sub-field
//! and rewrite the unit label uniformly. Unrecognized unit labels pass
//! through unchanged, which also makes every converter a no-op on data
//! that has already been converted.

mod kind;
mod length;
mod measure;
mod scalar;

pub use kind::{ImperialToMetric, UnitKind};
pub use length::{length_conversion, LengthConversion};
pub use measure::{
    communication, distance_advancement, movement, range, range_activities, senses, sight_range,
    target, volume, weight,
};
pub use scalar::{feet_to_meters, miles_to_kilometers, pc_to_liters, pounds_to_kilograms, round2};

use lorebook_plugin::ConverterRegistry;

/// Load the unit converters into a registry under their host field names
pub fn load_unit_converters(registry: ConverterRegistry) -> ConverterRegistry {
    registry
        .with_converter("range", ImperialToMetric::new(UnitKind::Range))
        .with_converter("weight", ImperialToMetric::new(UnitKind::Weight))
        .with_converter("target", ImperialToMetric::new(UnitKind::Target))
        .with_converter("senses", ImperialToMetric::new(UnitKind::Senses))
        .with_converter("volume", ImperialToMetric::new(UnitKind::Volume))
        .with_converter("movement", ImperialToMetric::new(UnitKind::Movement))
        .with_converter("sightRange", ImperialToMetric::new(UnitKind::SightRange))
        .with_converter("communication", ImperialToMetric::new(UnitKind::Communication))
        .with_converter("rangeActivities", ImperialToMetric::new(UnitKind::RangeActivities))
        .with_converter("distanceAdvancement", ImperialToMetric::new(UnitKind::DistanceAdvancement))
}
