//! Ready-time configuration patches

use lorebook_core::{merge, MetricSettings};
use serde_json::{json, Value};

/// Patch the host's exhaustion condition table in place.
///
/// The host system states the 2024-rules exhaustion speed reduction in
/// feet; with metric lengths enabled the table must carry the rescaled
/// value instead. Merges `{ "speed": 1.5 }` into `exhaustion.reduction`,
/// exactly the shape the upstream workaround requires. No-op when the
/// length toggle is disabled or the table lacks an exhaustion entry.
pub fn fix_exhaustion(condition_types: &mut Value, metric: &MetricSettings) {
    if !metric.length {
        return;
    }
    if let Some(reduction) = condition_types.pointer_mut("/exhaustion/reduction") {
        *reduction = merge(reduction, &json!({ "speed": 1.5 }));
    }
}
