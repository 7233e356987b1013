//! Decoding of raw detector rows into validated detections.

use crate::detection::{BBox, Detection, ROW_FIELDS};
use crate::label::LabelTable;
use crate::trace::{trace_event, trace_skip};
use crate::util::{BandError, BandResult};

/// Converts raw output rows into detections.
///
/// A row is kept when `confidence >= confidence_threshold` (a NaN confidence
/// never passes) and its class index, truncated toward zero, is a valid
/// index into `labels`. Rows failing either check are dropped and decoding
/// continues. Non-finite class indices are treated as invalid: a NaN class
/// is dropped rather than truncated to class 0 the way a saturating float
/// to int cast would map it.
///
/// Fails with [`BandError::InputShape`] if any row has fewer than six
/// fields; no partial result is returned in that case.
pub fn decode<I, R>(
    rows: I,
    labels: &LabelTable,
    confidence_threshold: f32,
) -> BandResult<Vec<Detection>>
where
    I: IntoIterator<Item = R>,
    R: AsRef<[f32]>,
{
    let mut out = Vec::new();
    let mut low_confidence = 0usize;
    let mut bad_class = 0usize;

    for (idx, row) in rows.into_iter().enumerate() {
        let row = row.as_ref();
        let &[x1, y1, x2, y2, confidence, class_value, ..] = row else {
            return Err(BandError::InputShape {
                row: idx,
                len: row.len(),
                needed: ROW_FIELDS,
            });
        };

        let passes = confidence >= confidence_threshold;
        if !passes {
            low_confidence += 1;
            continue;
        }

        let Some(class_id) = class_index(class_value, labels.len()) else {
            bad_class += 1;
            trace_skip!("invalid_class", row = idx, class_value = class_value);
            continue;
        };

        out.push(Detection {
            bbox: BBox::new(x1, y1, x2, y2),
            confidence,
            class_id,
            row: idx,
        });
    }

    trace_event!(
        "decoded",
        kept = out.len(),
        dropped_low_confidence = low_confidence,
        dropped_bad_class = bad_class
    );
    Ok(out)
}

/// Truncates a raw class value and checks it against the table size.
fn class_index(value: f32, num_classes: usize) -> Option<usize> {
    if !value.is_finite() {
        return None;
    }
    let truncated = value.trunc();
    if truncated < 0.0 || truncated >= num_classes as f32 {
        return None;
    }
    Some(truncated as usize)
}
