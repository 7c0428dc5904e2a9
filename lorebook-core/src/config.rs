//! Host-persisted configuration

use serde::{Deserialize, Serialize};

/// The three metric unit toggles persisted by the host system.
///
/// Threaded explicitly through every converter call so behavior is a pure
/// function of its inputs; the host re-reads its persisted settings and
/// rebuilds this value whenever they change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricSettings {
    /// Rescale feet/miles to meters/kilometers
    pub length: bool,
    /// Rescale pounds to kilograms
    pub weight: bool,
    /// Rescale cubic units to liters
    pub volume: bool,
}

impl MetricSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// All three toggles enabled
    pub fn all() -> Self {
        Self { length: true, weight: true, volume: true }
    }

    pub fn with_length(mut self, enabled: bool) -> Self {
        self.length = enabled;
        self
    }

    pub fn with_weight(mut self, enabled: bool) -> Self {
        self.weight = enabled;
        self
    }

    pub fn with_volume(mut self, enabled: bool) -> Self {
        self.volume = enabled;
        self
    }
}

/// Registration descriptor declared to the host translation framework at
/// the startup lifecycle event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    /// Source module identifier
    pub module: String,
    /// Target locale code
    pub lang: String,
    /// Compendium directory name holding the translation files
    pub dir: String,
}

impl Default for Registration {
    fn default() -> Self {
        Self {
            module: "lorebook-fr".to_string(),
            lang: "fr".to_string(),
            dir: "compendium_fr".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default_all_disabled() {
        let s = MetricSettings::new();
        assert!(!s.length);
        assert!(!s.weight);
        assert!(!s.volume);
    }

    #[test]
    fn test_settings_builders() {
        let s = MetricSettings::new().with_length(true).with_volume(true);
        assert!(s.length);
        assert!(!s.weight);
        assert!(s.volume);
    }

    #[test]
    fn test_registration_default() {
        let r = Registration::default();
        assert_eq!(r.module, "lorebook-fr");
        assert_eq!(r.lang, "fr");
        assert_eq!(r.dir, "compendium_fr");
    }

    #[test]
    fn test_settings_roundtrip_serde() {
        let s = MetricSettings::all();
        let json = serde_json::to_string(&s).unwrap();
        let back: MetricSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }
}
