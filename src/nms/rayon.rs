//! Rayon-parallel suppression across class groups (feature-gated).

use crate::detection::Detection;
use crate::nms::{group_by_class, suppress_class};
use crate::trace::{trace_event, trace_span};
use rayon::prelude::*;

/// Parallel counterpart of [`crate::nms::suppress`].
///
/// Each class group runs on its own task; the result keeps the ascending
/// class order of the sequential path, so both produce identical output.
pub fn suppress_par(detections: Vec<Detection>, iou_threshold: f32) -> Vec<Detection> {
    let groups: Vec<Vec<Detection>> = group_by_class(detections).into_values().collect();
    let _span = trace_span!("suppress", classes = groups.len(), parallel = true).entered();

    let kept: Vec<Detection> = groups
        .into_par_iter()
        .map(|group| suppress_class(group, iou_threshold))
        .flatten_iter()
        .collect();

    trace_event!("suppressed", kept = kept.len());
    kept
}
