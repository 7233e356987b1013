//! Box geometry: area and intersection-over-union.

use crate::detection::BBox;

impl BBox {
    /// Signed area `(x2 - x1) * (y2 - y1)`.
    ///
    /// Not clamped: an inverted box (`x2 < x1` xor `y2 < y1`) has a negative
    /// area, and that value feeds into [`iou`] unchanged. Callers should pass
    /// well-formed boxes.
    pub fn area(&self) -> f32 {
        (self.x2 - self.x1) * (self.y2 - self.y1)
    }

    /// Overlap width and height with `other`, each clamped at zero.
    pub fn intersection(&self, other: &BBox) -> f32 {
        let ix1 = self.x1.max(other.x1);
        let iy1 = self.y1.max(other.y1);
        let ix2 = self.x2.min(other.x2);
        let iy2 = self.y2.min(other.y2);
        (ix2 - ix1).max(0.0) * (iy2 - iy1).max(0.0)
    }
}

/// Intersection-over-union of two boxes.
///
/// Returns 0 when the union is not positive (disjoint degenerate boxes).
/// Symmetric in its arguments. The result lies in `[0, 1]` for well-formed
/// boxes; with inverted boxes the signed areas can push it outside that range.
pub fn iou(a: &BBox, b: &BBox) -> f32 {
    let intersection = a.intersection(b);
    let union = a.area() + b.area() - intersection;
    if union > 0.0 {
        intersection / union
    } else {
        0.0
    }
}
