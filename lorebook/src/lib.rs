//! Lorebook - Compendium Localization & Metric Conversion
//!
//! The facade the host merge pipeline talks to. At startup the host
//! declares the registration descriptor and the converter table; during
//! data loading it calls `convert_field` once per registered field with the
//! raw value and the translation looked up for the active locale; at the
//! ready lifecycle event it applies the exhaustion condition patch.

mod fixes;

pub use fixes::fix_exhaustion;
pub use lorebook_core::{LorebookError, MetricSettings, Registration};
pub use lorebook_plugin::{ConvertContext, ConverterMeta, ConverterPlugin, ConverterRegistry};

use serde_json::Value;
use std::sync::Arc;

/// Build the full converter table of the default registration:
/// ten unit converters plus four translation overlay converters.
pub fn default_registry() -> ConverterRegistry {
    let registry = ConverterRegistry::new();
    let registry = lorebook_units::load_unit_converters(registry);
    lorebook_overlay::load_overlay_converters(registry)
}

/// Main Lorebook engine
pub struct Lorebook {
    registry: Arc<ConverterRegistry>,
    metric: MetricSettings,
    registration: Registration,
}

impl Lorebook {
    pub fn new(registry: ConverterRegistry, metric: MetricSettings) -> Self {
        Self {
            registry: Arc::new(registry),
            metric,
            registration: Registration::default(),
        }
    }

    /// Engine with the default converter table wired
    pub fn with_default_converters(metric: MetricSettings) -> Self {
        Self::new(default_registry(), metric)
    }

    pub fn with_registration(mut self, registration: Registration) -> Self {
        self.registration = registration;
        self
    }

    /// The descriptor declared to the host translation framework at startup
    pub fn registration(&self) -> &Registration {
        &self.registration
    }

    pub fn registry(&self) -> &ConverterRegistry {
        &self.registry
    }

    /// Refresh the metric toggles from the host's persisted settings.
    /// Subsequent conversions observe the new configuration.
    pub fn set_metric(&mut self, metric: MetricSettings) {
        self.metric = metric;
    }

    /// Run the converter registered under `field`; the return value
    /// replaces the field in the merged entry, `None` leaves it absent.
    pub fn convert_field(
        &self,
        field: &str,
        value: &Value,
        translation: Option<&Value>,
    ) -> Option<Value> {
        let ctx = ConvertContext::new(self.metric);
        self.registry.convert_field(field, value, translation, &ctx)
    }

    /// The ready-time configuration patch (host calls this after
    /// registration, per its startup-before-ready ordering).
    pub fn ready(&self, condition_types: &mut Value) {
        fix_exhaustion(condition_types, &self.metric);
    }
}

impl Default for Lorebook {
    fn default() -> Self {
        Self::with_default_converters(MetricSettings::default())
    }
}
