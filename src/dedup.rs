//! Collapsing of adjacent repeated band labels.
//!
//! The detector often fires several near-duplicate boxes on one physical
//! band that NMS does not fully remove; merging adjacent equal labels drops
//! that noise. A resistor with two genuinely adjacent bands of the same
//! color (e.g. two black bands) loses one of them here. This is a known
//! limitation of the heuristic.

/// Collapses runs of consecutive equal labels into a single label.
///
/// An element is kept when it differs from the last kept element, so the
/// operation is idempotent.
pub fn dedup<S: PartialEq>(mut labels: Vec<S>) -> Vec<S> {
    labels.dedup();
    labels
}
