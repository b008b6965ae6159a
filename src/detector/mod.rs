//! Slot detector orchestrating the one-time bootstrap pass.
//!
//! Overview
//! - Extracts raw line segments from a frame through a [`LineExtractor`]
//!   backend (region growing over Sobel gradients by default).
//! - Classifies segments into vertical/horizontal sets, merges near-duplicate
//!   parallel segments, pairs lines into rectangle candidates and suppresses
//!   overlapping candidates.
//! - Returns a [`DetectionReport`] with the slots, per-stage counts, the
//!   merged lines and a timing breakdown. Empty stages are reported through
//!   the outcome rather than as errors.
//!
//! [`LineExtractor`]: crate::segments::LineExtractor
//! [`DetectionReport`]: crate::diagnostics::DetectionReport

mod pipeline;

pub use pipeline::SlotDetector;
