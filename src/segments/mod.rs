//! Line primitive: integer line segments from a frame.
//!
//! The default backend is a lightweight LSD-like extractor:
//!
//! - Luma conversion scaled to `[0, 1]`, optionally smoothed with the 5-tap
//!   Gaussian.
//! - Sobel gradients, orientation taken modulo π.
//! - Region growing from seeds visited in descending magnitude order. A
//!   neighbour joins when its orientation is within the tolerance of the
//!   region's running mean orientation and its magnitude is above the
//!   threshold.
//! - PCA line fitting: region moments are accumulated online and the 2x2
//!   covariance is eigendecomposed to get the principal direction. Projecting
//!   the region onto that axis yields the endpoints.
//! - Significance tests: minimum region size, minimum aligned fraction and
//!   minimum length. Surviving endpoints are rounded to integer pixels.
//!
//! A painted stripe produces one edge on each side; both survive here and are
//! collapsed later by the line merger.

mod extractor;
mod options;
mod region;
mod segment;

pub use options::LineParams;
pub use segment::LineSegment;

use crate::filters::{convolve_separable, GAUSSIAN_5TAP};
use crate::image::{Frame, ImageF32};

/// Source of raw line segments for slot detection.
pub trait LineExtractor {
    fn extract(&self, frame: &Frame) -> Vec<LineSegment>;
}

/// Region-growing extractor over Sobel gradients.
#[derive(Clone, Debug, Default)]
pub struct LsdLineExtractor {
    params: LineParams,
}

impl LsdLineExtractor {
    pub fn new(params: LineParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &LineParams {
        &self.params
    }
}

impl LineExtractor for LsdLineExtractor {
    fn extract(&self, frame: &Frame) -> Vec<LineSegment> {
        let gray = frame.to_gray();
        let mut l = ImageF32::from_gray(frame.width(), frame.height(), &gray, 1.0 / 255.0);
        if self.params.blur {
            l = convolve_separable(&l, &GAUSSIAN_5TAP);
        }
        extract_segments(&l, &self.params)
    }
}

/// Run the extractor on a single-channel image already scaled to `[0, 1]`.
pub fn extract_segments(l: &ImageF32, params: &LineParams) -> Vec<LineSegment> {
    extractor::LsdExtractor::new(l, params).extract()
}
