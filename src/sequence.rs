//! Left-to-right ordering of kept detections.
//!
//! Bands are assumed to read left to right in the resized frame; the crop
//! supplied upstream is responsible for that orientation.

use crate::detection::Detection;
use crate::label::LabelTable;
use crate::trace::trace_event;
use std::cmp::Ordering;

fn position_cmp(a: &Detection, b: &Detection) -> Ordering {
    a.bbox
        .x1
        .total_cmp(&b.bbox.x1)
        .then_with(|| b.confidence.total_cmp(&a.confidence))
        .then_with(|| a.row.cmp(&b.row))
}

/// Sorts detections by ascending left edge.
///
/// Equal left edges are ordered by descending confidence, then by row.
pub fn sort_by_position(detections: &mut [Detection]) {
    detections.sort_by(position_cmp);
}

/// Orders kept detections left to right and maps them to class names.
///
/// Detections whose class id is not in `labels` are skipped.
pub fn sequence(mut kept: Vec<Detection>, labels: &LabelTable) -> Vec<String> {
    sort_by_position(&mut kept);
    class_names(&kept, labels)
}

/// Maps already ordered detections to their class names.
pub fn class_names(ordered: &[Detection], labels: &LabelTable) -> Vec<String> {
    let names: Vec<String> = ordered
        .iter()
        .filter_map(|det| det.class_name(labels))
        .map(str::to_owned)
        .collect();
    trace_event!("sequenced", bands = names.len());
    names
}
