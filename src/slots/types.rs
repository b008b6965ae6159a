use crate::segments::LineSegment;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Vertical,
    Horizontal,
}

impl Orientation {
    /// Coordinate perpendicular to the line direction (`x` for vertical).
    #[inline]
    pub fn perpendicular(self, p: [i32; 2]) -> i32 {
        match self {
            Orientation::Vertical => p[0],
            Orientation::Horizontal => p[1],
        }
    }

    /// Coordinate along the line direction (`y` for vertical).
    #[inline]
    pub fn along(self, p: [i32; 2]) -> i32 {
        match self {
            Orientation::Vertical => p[1],
            Orientation::Horizontal => p[0],
        }
    }
}

/// Representative of a cluster of near-collinear segments.
///
/// Stored as an offset perpendicular to the line plus an ordered extent along
/// it, so `start <= end` always holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedLine {
    pub orientation: Orientation,
    pub offset: i32,
    pub start: i32,
    pub end: i32,
}

impl MergedLine {
    pub fn vertical(x: i32, y1: i32, y2: i32) -> Self {
        Self {
            orientation: Orientation::Vertical,
            offset: x,
            start: y1.min(y2),
            end: y1.max(y2),
        }
    }

    pub fn horizontal(y: i32, x1: i32, x2: i32) -> Self {
        Self {
            orientation: Orientation::Horizontal,
            offset: y,
            start: x1.min(x2),
            end: x1.max(x2),
        }
    }

    pub fn segment(&self) -> LineSegment {
        match self.orientation {
            Orientation::Vertical => {
                LineSegment::new(self.offset, self.start, self.offset, self.end)
            }
            Orientation::Horizontal => {
                LineSegment::new(self.start, self.offset, self.end, self.offset)
            }
        }
    }
}

/// Axis-aligned slot rectangle in pixels, serialized as `[x1, y1, x2, y2]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[i32; 4]", into = "[i32; 4]")]
pub struct SlotRect {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl SlotRect {
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn width(&self) -> i32 {
        self.x2.saturating_sub(self.x1)
    }

    pub fn height(&self) -> i32 {
        self.y2.saturating_sub(self.y1)
    }

    /// Pixel count with both borders included.
    pub fn inclusive_area(&self) -> i64 {
        let w = self.x2 as i64 - self.x1 as i64 + 1;
        let h = self.y2 as i64 - self.y1 as i64 + 1;
        w * h
    }

    /// `x1 < x2` and `y1 < y2`.
    pub fn is_well_formed(&self) -> bool {
        self.x1 < self.x2 && self.y1 < self.y2
    }
}

impl From<[i32; 4]> for SlotRect {
    fn from(v: [i32; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

impl From<SlotRect> for [i32; 4] {
    fn from(r: SlotRect) -> Self {
        [r.x1, r.y1, r.x2, r.y2]
    }
}
