use serde::{Deserialize, Serialize};

/// Parameters of the default line primitive.
///
/// Gradient magnitudes are measured on luma scaled to `[0, 1]`, so a hard
/// black/white step yields a Sobel magnitude of 4.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineParams {
    /// Smooth the luma with the 5-tap Gaussian before taking gradients.
    pub blur: bool,
    /// Minimum gradient magnitude for seed and grown pixels (Sobel units).
    pub magnitude_threshold: f32,
    /// Orientation tolerance around the seed normal in degrees.
    pub angle_tolerance_deg: f32,
    /// Minimum accepted segment length in pixels.
    pub min_length_px: f32,
    /// Minimum number of pixels in a grown region.
    pub min_region_px: usize,
    /// Fraction of region pixels that must lie within half the tolerance.
    pub min_aligned_fraction: f32,
}

impl Default for LineParams {
    fn default() -> Self {
        Self {
            blur: true,
            magnitude_threshold: 0.1,
            angle_tolerance_deg: 22.5,
            min_length_px: 30.0,
            min_region_px: 12,
            min_aligned_fraction: 0.6,
        }
    }
}

impl LineParams {
    pub fn angle_tolerance_rad(&self) -> f32 {
        self.angle_tolerance_deg.to_radians()
    }
}
