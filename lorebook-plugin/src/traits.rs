//! Converter traits

use crate::ConvertContext;
use serde::Serialize;
use serde_json::Value;

/// Metadata for a converter plugin
#[derive(Debug, Clone, Serialize)]
pub struct ConverterMeta {
    pub name: &'static str,
    pub description: &'static str,
    pub example: &'static str,
}

/// One registered field transform.
///
/// The host merge pipeline calls `convert` with the raw field value and the
/// translation looked up for that field (absent when the active locale has
/// none). `Some(v)` replaces the field in the merged entry; `None` leaves
/// the field absent, which callers must tolerate.
pub trait ConverterPlugin: Send + Sync {
    fn meta(&self) -> ConverterMeta;
    fn convert(&self, value: &Value, translation: Option<&Value>, ctx: &ConvertContext)
        -> Option<Value>;
}
