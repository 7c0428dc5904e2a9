//! Conversion context

use lorebook_core::MetricSettings;

/// Per-call configuration passed to every converter.
///
/// Built fresh from the host's persisted settings at call time, so repeated
/// calls observe configuration changes between invocations.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertContext {
    pub metric: MetricSettings,
}

impl ConvertContext {
    pub fn new(metric: MetricSettings) -> Self {
        Self { metric }
    }
}
