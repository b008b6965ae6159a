use serde::{Deserialize, Serialize};

/// Line segment with integer pixel endpoints `(x1, y1)-(x2, y2)`.
///
/// Endpoint order is whatever the producer emitted; consumers that care
/// about direction (the classifier) read it as `p0 -> p1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl LineSegment {
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Round floating endpoints to the nearest pixel.
    pub fn from_f32(p0: [f32; 2], p1: [f32; 2]) -> Self {
        Self::new(
            p0[0].round() as i32,
            p0[1].round() as i32,
            p1[0].round() as i32,
            p1[1].round() as i32,
        )
    }

    #[inline]
    pub fn p0(&self) -> [i32; 2] {
        [self.x1, self.y1]
    }

    #[inline]
    pub fn p1(&self) -> [i32; 2] {
        [self.x2, self.y2]
    }

    /// Euclidean distance between the endpoints.
    pub fn length(&self) -> f32 {
        let dx = (self.x2 - self.x1) as f32;
        let dy = (self.y2 - self.y1) as f32;
        (dx * dx + dy * dy).sqrt()
    }

    /// Signed direction of `p0 -> p1` in radians, range (−π, π].
    pub fn direction(&self) -> f32 {
        crate::angle::direction(self.p0(), self.p1())
    }

    pub fn midpoint(&self) -> [f32; 2] {
        [
            (self.x1 + self.x2) as f32 * 0.5,
            (self.y1 + self.y2) as f32 * 0.5,
        ]
    }
}

impl From<[i32; 4]> for LineSegment {
    fn from(v: [i32; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_and_rounding() {
        let seg = LineSegment::new(0, 0, 3, 4);
        assert!((seg.length() - 5.0).abs() < 1e-6);
        let rounded = LineSegment::from_f32([1.4, 2.6], [9.5, -0.4]);
        assert_eq!(rounded, LineSegment::new(1, 3, 10, 0));
    }
}
