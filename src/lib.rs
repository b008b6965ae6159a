#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod frames;
pub mod image;
pub mod occupancy;
pub mod overlay;
pub mod slots;
pub mod store;

// Numeric building blocks of the default primitives.
pub mod angle;
pub mod edges;
pub mod filters;
pub mod segments;

// --- High-level re-exports -------------------------------------------------

// Bootstrap detection and its report.
pub use crate::detector::SlotDetector;
pub use crate::diagnostics::{DetectionOutcome, DetectionReport};

// Per-frame occupancy tracking.
pub use crate::occupancy::{OccupancyParams, OccupancySnapshot, OccupancyTracker, SlotStatus};

// Geometry types and parameters.
pub use crate::segments::{LineParams, LineSegment};
pub use crate::slots::{GeometryParams, MergedLine, Orientation, SlotRect};

pub use crate::error::{Error, Result};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use parking_detector::prelude::*;
///
/// # fn main() -> parking_detector::Result<()> {
/// let frame = load_frame(std::path::Path::new("lot.png"))?;
/// let detector = SlotDetector::new(LineParams::default(), GeometryParams::default());
/// let report = detector.detect(&frame);
///
/// let mut tracker = OccupancyTracker::new(report.slots, OccupancyParams::default());
/// let snapshot = tracker.update(&frame);
/// println!("available {}/{}", snapshot.available, snapshot.total);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::io::load_frame;
    pub use crate::image::Frame;
    pub use crate::{
        GeometryParams, LineParams, OccupancyParams, OccupancyTracker, SlotDetector, SlotRect,
    };
}
