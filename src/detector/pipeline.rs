//! Bootstrap pipeline turning one frame into a list of slot rectangles.
//!
//! Typical usage:
//! ```no_run
//! use parking_detector::image::Frame;
//! use parking_detector::{GeometryParams, LineParams, SlotDetector};
//!
//! # fn example(frame: &Frame) {
//! let detector = SlotDetector::new(LineParams::default(), GeometryParams::default());
//! let report = detector.detect(frame);
//! if report.found() {
//!     println!("{} slots", report.slots.len());
//! }
//! # }
//! ```
use crate::diagnostics::{DetectionOutcome, DetectionReport, StageClock, StageCounts};
use crate::image::Frame;
use crate::segments::{LineExtractor, LineParams, LineSegment, LsdLineExtractor};
use crate::slots::{
    build_candidates, classify_lines_with, merge_lines, suppress_overlaps, GeometryParams,
    Orientation,
};
use log::{debug, info, warn};

/// Runs line extraction and the slot geometry chain on a single frame.
pub struct SlotDetector {
    extractor: Box<dyn LineExtractor>,
    params: GeometryParams,
}

impl SlotDetector {
    /// Detector backed by the default region-growing line extractor.
    pub fn new(line_params: LineParams, params: GeometryParams) -> Self {
        Self::with_extractor(Box::new(LsdLineExtractor::new(line_params)), params)
    }

    /// Detector with a caller-supplied line backend.
    pub fn with_extractor(extractor: Box<dyn LineExtractor>, params: GeometryParams) -> Self {
        Self { extractor, params }
    }

    pub fn params(&self) -> &GeometryParams {
        &self.params
    }

    /// Extract lines from `frame` and infer slots from them.
    pub fn detect(&self, frame: &Frame) -> DetectionReport {
        self.detect_with_lines(frame).1
    }

    /// Like [`detect`](Self::detect) but also hands back the raw segments.
    pub fn detect_with_lines(&self, frame: &Frame) -> (Vec<LineSegment>, DetectionReport) {
        debug!(
            "SlotDetector::detect start w={} h={}",
            frame.width(),
            frame.height()
        );
        let mut clock = StageClock::start();
        let segments = self.extractor.extract(frame);
        clock.lap("lines");

        let mut report = self.detect_from_segments(&segments);
        clock.extend(std::mem::take(&mut report.timings.stages));
        report.timings = clock.finish();
        (segments, report)
    }

    /// Run classification, merging, candidate building and suppression on
    /// already extracted segments.
    pub fn detect_from_segments(&self, segments: &[LineSegment]) -> DetectionReport {
        let p = &self.params;
        let mut clock = StageClock::start();
        let mut counts = StageCounts {
            raw_segments: segments.len(),
            ..StageCounts::default()
        };

        let (vertical, horizontal) =
            classify_lines_with(segments, p.classify_angle_tol_rad(), p.min_segment_length);
        clock.lap("classify");
        counts.vertical = vertical.len();
        counts.horizontal = horizontal.len();
        debug!(
            "classified {} segments: vertical={} horizontal={}",
            segments.len(),
            vertical.len(),
            horizontal.len()
        );

        let merged_vertical = merge_lines(&vertical, Orientation::Vertical, p.merge_dist_px);
        let merged_horizontal = merge_lines(&horizontal, Orientation::Horizontal, p.merge_dist_px);
        clock.lap("merge");
        counts.merged_vertical = merged_vertical.len();
        counts.merged_horizontal = merged_horizontal.len();
        debug!(
            "merged lines: vertical={} horizontal={}",
            merged_vertical.len(),
            merged_horizontal.len()
        );

        let candidates = build_candidates(&merged_vertical, &merged_horizontal, &p.bounds());
        clock.lap("candidates");
        counts.candidates = candidates.len();

        let slots = suppress_overlaps(&candidates, p.nms_overlap_thresh);
        clock.lap("nms");
        counts.slots = slots.len();

        let outcome = if merged_vertical.len() < 2 || merged_horizontal.len() < 2 {
            warn!(
                "not enough lines for a slot: vertical={} horizontal={}",
                merged_vertical.len(),
                merged_horizontal.len()
            );
            DetectionOutcome::NoLines
        } else if slots.is_empty() {
            warn!(
                "no slot rectangles passed the geometry tests ({} vertical, {} horizontal lines)",
                merged_vertical.len(),
                merged_horizontal.len()
            );
            DetectionOutcome::NoRectangles
        } else {
            info!(
                "detected {} slots from {} candidates",
                slots.len(),
                candidates.len()
            );
            DetectionOutcome::Found
        };

        DetectionReport {
            outcome,
            slots,
            counts,
            merged_vertical,
            merged_horizontal,
            timings: clock.finish(),
        }
    }
}
