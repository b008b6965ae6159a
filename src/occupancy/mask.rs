//! Occupancy mask primitive.
//!
//! `AdaptiveMask` marks pixels noticeably darker than their neighbourhood,
//! which on a lit lot picks out vehicles, shadows and tyres while leaving
//! bare asphalt and paint mostly clear:
//!
//! 1. RGB → grayscale (BT.601 luma)
//! 2. 5×5 Gaussian blur
//! 3. Adaptive Gaussian threshold, inverted: set when
//!    `value <= weighted_mean(15×15) - 5`
//! 4. Morphological opening with a 3×3 square (erode, then dilate)
//!
//! Blurred intermediates are rounded back to 8-bit levels before comparison.
use crate::filters::{convolve_separable, GaussianKernel, SeparableFilter, GAUSSIAN_5TAP};
use crate::image::mask::MASK_ON;
use crate::image::{BinaryMask, Frame, ImageF32};

const THRESHOLD_BLOCK: usize = 15;
const THRESHOLD_C: f32 = 5.0;
const OPEN_RADIUS: usize = 1;

/// Produces a per-frame foreground mask of the frame's size.
pub trait MaskExtractor {
    fn extract(&self, frame: &Frame) -> BinaryMask;
}

/// Adaptive-threshold mask with fixed constants.
#[derive(Clone, Debug)]
pub struct AdaptiveMask {
    block_kernel: GaussianKernel,
}

impl Default for AdaptiveMask {
    fn default() -> Self {
        Self::new()
    }
}

impl AdaptiveMask {
    pub fn new() -> Self {
        Self {
            block_kernel: GaussianKernel::new(THRESHOLD_BLOCK, 0.0),
        }
    }
}

impl MaskExtractor for AdaptiveMask {
    fn extract(&self, frame: &Frame) -> BinaryMask {
        let (w, h) = (frame.width(), frame.height());
        let gray = frame.to_gray();
        let l = ImageF32::from_gray(w, h, &gray, 1.0);
        let smooth = blur_rounded(&l, &GAUSSIAN_5TAP);
        let mean = blur_rounded(&smooth, &self.block_kernel);

        let mut mask = BinaryMask::new(w, h);
        for ((dst, &v), &m) in mask
            .data_mut()
            .iter_mut()
            .zip(&smooth.data)
            .zip(&mean.data)
        {
            if v <= m - THRESHOLD_C {
                *dst = MASK_ON;
            }
        }
        open_square(&mut mask, OPEN_RADIUS);
        mask
    }
}

fn blur_rounded(src: &ImageF32, filter: &dyn SeparableFilter) -> ImageF32 {
    let mut out = convolve_separable(src, filter);
    out.data
        .iter_mut()
        .for_each(|v| *v = v.round().clamp(0.0, 255.0));
    out
}

/// Erode then dilate with a `(2r+1)²` square. Pixels outside the mask never
/// constrain the result.
pub fn open_square(mask: &mut BinaryMask, radius: usize) {
    if radius == 0 || mask.width() == 0 || mask.height() == 0 {
        return;
    }
    let (w, h) = (mask.width(), mask.height());
    let mut tmp = vec![0u8; w * h];
    // Square kernels are separable for min and max alike.
    morph_rows(mask.data(), &mut tmp, w, h, radius, Morph::Erode);
    morph_cols(&tmp, mask.data_mut(), w, h, radius, Morph::Erode);
    morph_rows(mask.data(), &mut tmp, w, h, radius, Morph::Dilate);
    morph_cols(&tmp, mask.data_mut(), w, h, radius, Morph::Dilate);
}

#[derive(Clone, Copy)]
enum Morph {
    Erode,
    Dilate,
}

impl Morph {
    #[inline]
    fn apply(self, mut window: impl Iterator<Item = u8>) -> u8 {
        let hit = match self {
            Morph::Erode => window.all(|v| v != 0),
            Morph::Dilate => window.any(|v| v != 0),
        };
        if hit {
            MASK_ON
        } else {
            0
        }
    }
}

fn morph_rows(input: &[u8], output: &mut [u8], w: usize, h: usize, r: usize, op: Morph) {
    for y in 0..h {
        let row = &input[y * w..(y + 1) * w];
        for x in 0..w {
            let lo = x.saturating_sub(r);
            let hi = (x + r).min(w - 1);
            output[y * w + x] = op.apply(row[lo..=hi].iter().copied());
        }
    }
}

fn morph_cols(input: &[u8], output: &mut [u8], w: usize, h: usize, r: usize, op: Morph) {
    for y in 0..h {
        let lo = y.saturating_sub(r);
        let hi = (y + r).min(h - 1);
        for x in 0..w {
            output[y * w + x] = op.apply((lo..=hi).map(|yy| input[yy * w + x]));
        }
    }
}
