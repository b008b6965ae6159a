use nalgebra::{Matrix2, SymmetricEigen};

/// Principal axis of a pixel region.
#[derive(Clone, Copy, Debug)]
pub(super) struct AxisFit {
    pub center: [f32; 2],
    /// Unit tangent along the dominant direction.
    pub tangent: [f32; 2],
}

impl AxisFit {
    /// Signed position of `(x, y)` along the tangent, relative to the centre.
    #[inline]
    pub fn project(&self, x: f32, y: f32) -> f32 {
        (x - self.center[0]) * self.tangent[0] + (y - self.center[1]) * self.tangent[1]
    }

    pub fn point_at(&self, s: f32) -> [f32; 2] {
        [
            self.center[0] + s * self.tangent[0],
            self.center[1] + s * self.tangent[1],
        ]
    }
}

/// Pixels of one grown region with running first and second moments.
///
/// Orientation is tracked on the doubled angle so that gradients π apart
/// reinforce instead of cancelling.
#[derive(Debug, Default)]
pub(super) struct Region {
    pub pixels: Vec<usize>,
    sx: f64,
    sy: f64,
    sxx: f64,
    syy: f64,
    sxy: f64,
    cos2: f32,
    sin2: f32,
}

impl Region {
    pub fn clear(&mut self) {
        self.pixels.clear();
        self.sx = 0.0;
        self.sy = 0.0;
        self.sxx = 0.0;
        self.syy = 0.0;
        self.sxy = 0.0;
        self.cos2 = 0.0;
        self.sin2 = 0.0;
    }

    pub fn add(&mut self, idx: usize, x: usize, y: usize, orientation: f32) {
        self.pixels.push(idx);
        let (xf, yf) = (x as f64, y as f64);
        self.sx += xf;
        self.sy += yf;
        self.sxx += xf * xf;
        self.syy += yf * yf;
        self.sxy += xf * yf;
        self.cos2 += (2.0 * orientation).cos();
        self.sin2 += (2.0 * orientation).sin();
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Mean gradient orientation of the region, folded into [0, π).
    pub fn orientation(&self) -> f32 {
        crate::angle::normalize_half_pi(0.5 * self.sin2.atan2(self.cos2))
    }

    /// PCA of the pixel coordinates; `None` for degenerate regions.
    pub fn fit_axis(&self) -> Option<AxisFit> {
        if self.pixels.len() < 2 {
            return None;
        }
        let n = self.pixels.len() as f64;
        let cx = self.sx / n;
        let cy = self.sy / n;
        let cov = Matrix2::new(
            (self.sxx / n - cx * cx) as f32,
            (self.sxy / n - cx * cy) as f32,
            (self.sxy / n - cx * cy) as f32,
            (self.syy / n - cy * cy) as f32,
        );
        let eig = SymmetricEigen::new(cov);
        let major = if eig.eigenvalues[0] >= eig.eigenvalues[1] { 0 } else { 1 };
        if !eig.eigenvalues[major].is_finite() || eig.eigenvalues[major] <= 0.0 {
            return None;
        }
        let v = eig.eigenvectors.column(major);
        let norm = v[0].hypot(v[1]);
        if !norm.is_finite() || norm < 1e-6 {
            return None;
        }
        Some(AxisFit {
            center: [cx as f32, cy as f32],
            tangent: [v[0] / norm, v[1] / norm],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_run_fits_horizontal_axis() {
        let mut region = Region::default();
        for x in 0..10 {
            region.add(x, x, 5, std::f32::consts::FRAC_PI_2);
        }
        let fit = region.fit_axis().unwrap();
        assert!((fit.center[1] - 5.0).abs() < 1e-6);
        assert!(fit.tangent[0].abs() > 0.999);
        assert!((region.orientation() - std::f32::consts::FRAC_PI_2).abs() < 1e-5);
    }

    #[test]
    fn opposite_gradients_share_orientation() {
        let mut region = Region::default();
        region.add(0, 0, 0, 0.01);
        region.add(1, 1, 0, std::f32::consts::PI - 0.01);
        assert!(crate::angle::angular_difference(region.orientation(), 0.0) < 1e-4);
    }
}
