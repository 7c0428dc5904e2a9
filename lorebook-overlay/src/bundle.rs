//! Translation bundle lookup

use serde_json::{Map, Value};

/// Borrowed view over one translation bundle: a map from a fragment's
/// identifier (or display name) to its translated fields.
#[derive(Debug, Clone, Copy)]
pub struct TranslationBundle<'a> {
    entries: &'a Map<String, Value>,
}

impl<'a> TranslationBundle<'a> {
    /// Wrap a translation value. Anything but an object has no entries to
    /// offer and yields `None`.
    pub fn new(value: &'a Value) -> Option<Self> {
        value.as_object().map(|entries| Self { entries })
    }

    /// Entry for a fragment: the stable identifier is tried first, the
    /// display name is the fallback key. Empty keys are treated as missing.
    pub fn entry(&self, id: Option<&str>, name: Option<&str>) -> Option<&'a Value> {
        self.lookup(id).or_else(|| self.lookup(name))
    }

    fn lookup(&self, key: Option<&str>) -> Option<&'a Value> {
        key.filter(|k| !k.is_empty())
            .and_then(|k| self.entries.get(k))
            .filter(|v| !v.is_null())
    }
}

/// A non-null translated field, ready to overlay.
pub fn translated<'a>(entry: &'a Value, key: &str) -> Option<&'a Value> {
    entry.get(key).filter(|v| !v.is_null())
}
