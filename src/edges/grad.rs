//! Sobel gradients as two separable passes.
//!
//! `gx` is the horizontal central difference `[-1, 0, 1]` smoothed vertically
//! by `[1, 2, 1]`; `gy` is the transpose. Borders replicate the edge pixel.
use crate::image::ImageF32;

/// Per-pixel gradient planes.
#[derive(Clone, Debug)]
pub struct Grad {
    pub gx: ImageF32,
    pub gy: ImageF32,
    /// `sqrt(gx² + gy²)`
    pub mag: ImageF32,
}

impl Grad {
    /// Gradient direction at (x, y) in radians, range (−π, π].
    #[inline]
    pub fn angle(&self, x: usize, y: usize) -> f32 {
        self.gy.get(x, y).atan2(self.gx.get(x, y))
    }
}

/// Sobel gradients of a single-channel plane.
pub fn sobel_gradients(l: &ImageF32) -> Grad {
    let (w, h) = (l.w, l.h);
    let mut mag = ImageF32::new(w, h);
    if w == 0 || h == 0 {
        return Grad {
            gx: ImageF32::new(w, h),
            gy: ImageF32::new(w, h),
            mag,
        };
    }

    // Horizontal pass: derivative and smoothing along each row.
    let mut dx = ImageF32::new(w, h);
    let mut sx = ImageF32::new(w, h);
    for y in 0..h {
        let src = l.row(y);
        for x in 0..w {
            let left = src[x.saturating_sub(1)];
            let right = src[(x + 1).min(w - 1)];
            dx.set(x, y, right - left);
            sx.set(x, y, left + 2.0 * src[x] + right);
        }
    }

    // Vertical pass: smooth the derivative, differentiate the smoothing.
    let mut gx = ImageF32::new(w, h);
    let mut gy = ImageF32::new(w, h);
    for y in 0..h {
        let up = y.saturating_sub(1);
        let down = (y + 1).min(h - 1);
        for x in 0..w {
            let vx = dx.get(x, up) + 2.0 * dx.get(x, y) + dx.get(x, down);
            let vy = sx.get(x, down) - sx.get(x, up);
            gx.set(x, y, vx);
            gy.set(x, y, vy);
            mag.set(x, y, vx.hypot(vy));
        }
    }

    Grad { gx, gy, mag }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_step_has_horizontal_gradient() {
        let mut img = ImageF32::new(8, 8);
        for y in 0..8 {
            for x in 4..8 {
                img.set(x, y, 1.0);
            }
        }
        let g = sobel_gradients(&img);
        assert!((g.gx.get(4, 4) - 4.0).abs() < 1e-6);
        assert!((g.gx.get(3, 4) - 4.0).abs() < 1e-6);
        assert!(g.gy.get(4, 4).abs() < 1e-6);
        assert!(g.mag.get(0, 4).abs() < 1e-6);
    }

    #[test]
    fn diagonal_ramp_points_down_right() {
        let mut img = ImageF32::new(6, 6);
        for y in 0..6 {
            for x in 0..6 {
                img.set(x, y, (x + y) as f32);
            }
        }
        let g = sobel_gradients(&img);
        let angle = g.angle(2, 2);
        assert!((angle - std::f32::consts::FRAC_PI_4).abs() < 1e-6);
    }
}
