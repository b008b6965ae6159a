//! Rectangle candidates from pairs of vertical and pairs of horizontal lines.
use super::types::{MergedLine, SlotRect};
use serde::{Deserialize, Serialize};

/// Size window and extent-overlap requirement for a slot candidate.
///
/// Size bounds are exclusive on both sides.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeometryBounds {
    pub width_min: i32,
    pub width_max: i32,
    pub height_min: i32,
    pub height_max: i32,
    pub overlap_ratio: f32,
}

impl Default for GeometryBounds {
    fn default() -> Self {
        Self {
            width_min: 25,
            width_max: 60,
            height_min: 50,
            height_max: 120,
            overlap_ratio: 0.5,
        }
    }
}

impl GeometryBounds {
    #[inline]
    fn accepts_size(&self, width: i32, height: i32) -> bool {
        self.width_min < width
            && width < self.width_max
            && self.height_min < height
            && height < self.height_max
    }
}

/// Enumerate every vertical pair `(i < j)` and, inside it, every horizontal
/// pair `(k < l)`, keeping rectangles that pass the size window and whose
/// bounding lines cover enough of each side.
///
/// Output order follows the enumeration; duplicates are left for
/// [`suppress_overlaps`](super::suppress_overlaps).
pub fn build_candidates(
    vertical: &[MergedLine],
    horizontal: &[MergedLine],
    bounds: &GeometryBounds,
) -> Vec<SlotRect> {
    let mut rects = Vec::new();
    for (i, v1) in vertical.iter().enumerate() {
        for v2 in &vertical[i + 1..] {
            let x1 = v1.offset.min(v2.offset);
            let x2 = v1.offset.max(v2.offset);
            let width = x2 - x1;
            let y_overlap = extent_overlap(v1, v2);

            for (k, h1) in horizontal.iter().enumerate() {
                for h2 in &horizontal[k + 1..] {
                    let y1 = h1.offset.min(h2.offset);
                    let y2 = h1.offset.max(h2.offset);
                    let height = y2 - y1;
                    if !bounds.accepts_size(width, height) {
                        continue;
                    }
                    let x_overlap = extent_overlap(h1, h2);
                    if y_overlap as f32 > bounds.overlap_ratio * height as f32
                        && x_overlap as f32 > bounds.overlap_ratio * width as f32
                    {
                        rects.push(SlotRect::new(x1, y1, x2, y2));
                    }
                }
            }
        }
    }
    rects
}

/// Length of the shared extent of two parallel lines, zero when disjoint.
fn extent_overlap(a: &MergedLine, b: &MergedLine) -> i32 {
    (a.end.min(b.end) - a.start.max(b.start)).max(0)
}
