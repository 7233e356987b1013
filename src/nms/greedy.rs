//! Greedy NMS within a single class group.

use crate::detection::Detection;
use crate::geometry::iou;
use std::cmp::Ordering;

fn confidence_cmp_desc(a: &Detection, b: &Detection) -> Ordering {
    b.confidence
        .total_cmp(&a.confidence)
        .then_with(|| a.row.cmp(&b.row))
}

/// Sorts by descending confidence; equal confidences keep ascending row order.
pub fn sort_by_confidence_desc(detections: &mut [Detection]) {
    detections.sort_by(confidence_cmp_desc);
}

/// Greedy NMS over detections assumed to share one class.
///
/// Repeatedly keeps the most confident remaining detection and suppresses
/// every remaining one whose IoU with it is `>= iou_threshold`. Kept
/// detections are returned in descending confidence order.
pub fn suppress_class(mut group: Vec<Detection>, iou_threshold: f32) -> Vec<Detection> {
    sort_by_confidence_desc(&mut group);

    let mut suppressed = vec![false; group.len()];
    let mut kept = Vec::new();

    for i in 0..group.len() {
        if suppressed[i] {
            continue;
        }
        let best = group[i];
        kept.push(best);

        for (j, other) in group.iter().enumerate().skip(i + 1) {
            if !suppressed[j] && iou(&best.bbox, &other.bbox) >= iou_threshold {
                suppressed[j] = true;
            }
        }
    }

    kept
}
