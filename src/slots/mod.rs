//! Slot geometry inference from line segments.
//!
//! The chain runs once per bootstrap frame:
//!
//! 1. [`classify_lines`]: split raw segments into vertical and horizontal
//!    sets by direction, dropping short and oblique ones.
//! 2. [`merge_lines`]: collapse near-duplicate parallel segments into one
//!    [`MergedLine`] per cluster.
//! 3. [`build_candidates`]: pair vertical lines with horizontal lines into
//!    [`SlotRect`] candidates that pass the size and overlap tests.
//! 4. [`suppress_overlaps`]: greedy non-max suppression over candidates.
//!
//! Every step is total; empty input flows through as empty output.

mod classify;
mod geometry;
mod merge;
mod nms;
mod params;
mod types;

pub use classify::{classify_lines, classify_lines_with, DEFAULT_ANGLE_TOL, MIN_SEGMENT_LENGTH};
pub use geometry::{build_candidates, GeometryBounds};
pub use merge::{merge_lines, DEFAULT_MERGE_DIST};
pub use nms::{suppress_overlaps, DEFAULT_NMS_THRESH};
pub use params::GeometryParams;
pub use types::{MergedLine, Orientation, SlotRect};
