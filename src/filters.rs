//! Separable smoothing filters with border replication.
//!
//! Both the line primitive and the occupancy mask blur with the fixed 5-tap
//! binomial kernel; the adaptive threshold builds a wider Gaussian at runtime.
use crate::image::ImageF32;

/// Trait implemented by separable 1D filters.
pub trait SeparableFilter {
    /// Return the 1D taps (in left-to-right order). The kernel is assumed to be
    /// symmetric around its centre, but the implementation does not rely on it.
    fn taps(&self) -> &[f32];
}

/// Simple wrapper around a static filter kernel.
#[derive(Clone, Copy, Debug)]
pub struct StaticSeparableFilter {
    taps: &'static [f32],
}

impl Default for StaticSeparableFilter {
    fn default() -> Self {
        GAUSSIAN_5TAP
    }
}

impl StaticSeparableFilter {
    pub const fn new(taps: &'static [f32]) -> Self {
        Self { taps }
    }
}

impl SeparableFilter for StaticSeparableFilter {
    #[inline]
    fn taps(&self) -> &[f32] {
        self.taps
    }
}

/// Normalised 5-tap Gaussian filter `[1, 4, 6, 4, 1] / 16`.
pub const GAUSSIAN_5TAP: StaticSeparableFilter =
    StaticSeparableFilter::new(&[0.0625, 0.25, 0.375, 0.25, 0.0625]);

/// Sampled Gaussian kernel of odd size, normalised to unit sum.
#[derive(Clone, Debug)]
pub struct GaussianKernel {
    taps: Vec<f32>,
}

impl GaussianKernel {
    /// Build a kernel of `size` taps. A non-positive `sigma` is derived from
    /// the size as `0.3 * ((size - 1) * 0.5 - 1) + 0.8`.
    pub fn new(size: usize, sigma: f32) -> Self {
        let size = size.max(1) | 1;
        let sigma = if sigma > 0.0 {
            sigma
        } else {
            0.3 * ((size as f32 - 1.0) * 0.5 - 1.0) + 0.8
        };
        let radius = (size / 2) as f32;
        let scale = -0.5 / (sigma * sigma);
        let mut taps: Vec<f32> = (0..size)
            .map(|i| {
                let d = i as f32 - radius;
                (scale * d * d).exp()
            })
            .collect();
        let sum: f32 = taps.iter().sum();
        for t in &mut taps {
            *t /= sum;
        }
        Self { taps }
    }
}

impl SeparableFilter for GaussianKernel {
    #[inline]
    fn taps(&self) -> &[f32] {
        &self.taps
    }
}

/// Convolve rows then columns with the same 1D kernel.
pub fn convolve_separable(src: &ImageF32, filter: &dyn SeparableFilter) -> ImageF32 {
    let taps = filter.taps();
    let mut horiz = ImageF32::new(src.w, src.h);
    let mut out = ImageF32::new(src.w, src.h);
    if src.w == 0 || src.h == 0 || taps.is_empty() {
        return out;
    }
    let radius = (taps.len() / 2) as isize;

    for y in 0..src.h {
        let row = src.row(y);
        let dst = horiz.row_mut(y);
        for (x, px) in dst.iter_mut().enumerate() {
            let mut acc = 0.0f32;
            for (k, &tap) in taps.iter().enumerate() {
                let sx = clamp_index(x as isize + k as isize - radius, src.w);
                acc += tap * row[sx];
            }
            *px = acc;
        }
    }

    for y in 0..src.h {
        let dst = out.row_mut(y);
        for (k, &tap) in taps.iter().enumerate() {
            let sy = clamp_index(y as isize + k as isize - radius, src.h);
            let row = horiz.row(sy);
            for (d, &s) in dst.iter_mut().zip(row) {
                *d += tap * s;
            }
        }
    }
    out
}

fn clamp_index(idx: isize, upper: usize) -> usize {
    if upper == 0 {
        return 0;
    }
    if idx < 0 {
        0
    } else if (idx as usize) >= upper {
        upper - 1
    } else {
        idx as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gaussian_kernel_is_normalised_and_symmetric() {
        let k = GaussianKernel::new(15, 0.0);
        let taps = k.taps();
        assert_eq!(taps.len(), 15);
        let sum: f32 = taps.iter().sum();
        assert!((sum - 1.0).abs() < 1e-5);
        for i in 0..7 {
            assert!((taps[i] - taps[14 - i]).abs() < 1e-6);
        }
        assert!(taps[7] > taps[6]);
    }

    #[test]
    fn blur_keeps_constant_image() {
        let mut img = ImageF32::new(8, 6);
        img.data.iter_mut().for_each(|v| *v = 42.0);
        let out = convolve_separable(&img, &GAUSSIAN_5TAP);
        assert!(out.data.iter().all(|v| (v - 42.0).abs() < 1e-3));
    }
}
