//! Split raw segments into vertical and horizontal sets by direction.
use crate::angle::{is_horizontal, is_vertical};
use crate::segments::LineSegment;
use std::f32::consts::FRAC_PI_6;

/// Segments shorter than this are treated as noise.
pub const MIN_SEGMENT_LENGTH: f32 = 10.0;

/// Default tolerance around the axes (30°).
pub const DEFAULT_ANGLE_TOL: f32 = FRAC_PI_6;

/// Classify with the default noise floor of [`MIN_SEGMENT_LENGTH`].
///
/// Returns `(vertical, horizontal)`; both keep input order.
pub fn classify_lines(
    segments: &[LineSegment],
    angle_tol: f32,
) -> (Vec<LineSegment>, Vec<LineSegment>) {
    classify_lines_with(segments, angle_tol, MIN_SEGMENT_LENGTH)
}

/// Classify with an explicit noise floor.
///
/// The horizontal test runs first, so a segment can only land in one set.
/// Segments matching neither axis are dropped.
pub fn classify_lines_with(
    segments: &[LineSegment],
    angle_tol: f32,
    min_length: f32,
) -> (Vec<LineSegment>, Vec<LineSegment>) {
    let mut vertical = Vec::new();
    let mut horizontal = Vec::new();
    for seg in segments {
        if seg.length() < min_length {
            continue;
        }
        let angle = seg.direction();
        if is_horizontal(angle, angle_tol) {
            horizontal.push(*seg);
        } else if is_vertical(angle, angle_tol) {
            vertical.push(*seg);
        }
    }
    (vertical, horizontal)
}
