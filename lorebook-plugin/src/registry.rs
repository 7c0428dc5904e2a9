//! Converter Registry

use crate::{ConvertContext, ConverterMeta, ConverterPlugin};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;

/// Central table of registered field converters.
///
/// Field names are the keys the host framework substitutes converter output
/// under ("range", "pages", "rangeActivities", ...); lookups are
/// case-sensitive because the host's field names are.
#[derive(Default)]
pub struct ConverterRegistry {
    converters: HashMap<String, Arc<dyn ConverterPlugin>>,
}

impl ConverterRegistry {
    pub fn new() -> Self {
        Self { converters: HashMap::new() }
    }

    pub fn with_converter<C: ConverterPlugin + 'static>(
        mut self,
        field: impl Into<String>,
        converter: C,
    ) -> Self {
        self.converters.insert(field.into(), Arc::new(converter));
        self
    }

    pub fn get(&self, field: &str) -> Option<&dyn ConverterPlugin> {
        self.converters.get(field).map(|c| c.as_ref())
    }

    /// Run the converter registered under `field`.
    ///
    /// An unregistered field logs a warning and produces `None` rather than
    /// failing the merge; the field is simply absent from the output.
    pub fn convert_field(
        &self,
        field: &str,
        value: &Value,
        translation: Option<&Value>,
        ctx: &ConvertContext,
    ) -> Option<Value> {
        match self.get(field) {
            Some(converter) => converter.convert(value, translation, ctx),
            None => {
                warn!(field, "no converter registered");
                None
            }
        }
    }

    /// Registered field names, unordered.
    pub fn fields(&self) -> Vec<&str> {
        self.converters.keys().map(|s| s.as_str()).collect()
    }

    /// Metadata for every registered converter, keyed by field name.
    pub fn describe(&self) -> HashMap<&str, ConverterMeta> {
        self.converters
            .iter()
            .map(|(field, c)| (field.as_str(), c.meta()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.converters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }
}
