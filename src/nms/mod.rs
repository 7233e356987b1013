//! Per-class non-maximum suppression.
//!
//! Detections are partitioned by class id and each class group is reduced
//! independently with greedy NMS. Groups share no state, so the `rayon`
//! feature can process them in parallel with identical output.

pub(crate) mod greedy;
#[cfg(feature = "rayon")]
pub(crate) mod rayon;

use crate::detection::Detection;
use crate::trace::{trace_event, trace_span};
use std::collections::BTreeMap;

pub use greedy::{sort_by_confidence_desc, suppress_class};

/// Stable partition of detections by class id, in ascending class order.
pub fn group_by_class(detections: Vec<Detection>) -> BTreeMap<usize, Vec<Detection>> {
    let mut groups: BTreeMap<usize, Vec<Detection>> = BTreeMap::new();
    for det in detections {
        groups.entry(det.class_id).or_default().push(det);
    }
    groups
}

/// Applies greedy NMS within each class and returns the union of kept sets.
///
/// Output is grouped by ascending class id, each group in descending
/// confidence order. Callers that need spatial order re-sort.
pub fn suppress(detections: Vec<Detection>, iou_threshold: f32) -> Vec<Detection> {
    let groups = group_by_class(detections);
    let _span = trace_span!("suppress", classes = groups.len()).entered();

    let mut kept = Vec::new();
    for (_, group) in groups {
        kept.extend(suppress_class(group, iou_threshold));
    }

    trace_event!("suppressed", kept = kept.len());
    kept
}
