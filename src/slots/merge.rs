//! Collapse near-duplicate parallel segments into one line per cluster.
use super::types::{MergedLine, Orientation};
use crate::segments::LineSegment;

/// Default perpendicular merge distance in pixels.
pub const DEFAULT_MERGE_DIST: i32 = 15;

/// Merge segments of one orientation.
///
/// Segments are stably sorted by the perpendicular coordinate of their first
/// endpoint and grouped while each next segment lies strictly closer than
/// `dist_tol` to the last one added. Chains can therefore span more than
/// `dist_tol` overall.
///
/// Each group yields the truncated mean of its endpoints' perpendicular
/// coordinates and the min/max extent along the line.
pub fn merge_lines(
    segments: &[LineSegment],
    orientation: Orientation,
    dist_tol: i32,
) -> Vec<MergedLine> {
    let mut sorted: Vec<LineSegment> = segments.to_vec();
    sorted.sort_by_key(|s| orientation.perpendicular(s.p0()));

    let mut merged = Vec::new();
    let mut group: Vec<LineSegment> = Vec::new();
    for seg in sorted {
        if let Some(last) = group.last() {
            let gap = (orientation.perpendicular(seg.p0()) - orientation.perpendicular(last.p0()))
                .abs();
            if gap >= dist_tol {
                merged.push(collapse(&group, orientation));
                group.clear();
            }
        }
        group.push(seg);
    }
    if !group.is_empty() {
        merged.push(collapse(&group, orientation));
    }
    merged
}

fn collapse(group: &[LineSegment], orientation: Orientation) -> MergedLine {
    let mut sum = 0i64;
    let mut start = i32::MAX;
    let mut end = i32::MIN;
    for seg in group {
        for p in [seg.p0(), seg.p1()] {
            sum += orientation.perpendicular(p) as i64;
            let along = orientation.along(p);
            start = start.min(along);
            end = end.max(along);
        }
    }
    // Integer division truncates toward zero.
    let offset = (sum / (2 * group.len() as i64)) as i32;
    match orientation {
        Orientation::Vertical => MergedLine::vertical(offset, start, end),
        Orientation::Horizontal => MergedLine::horizontal(offset, start, end),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_segment_is_identity() {
        let seg = LineSegment::new(30, 90, 30, 10);
        let merged = merge_lines(&[seg], Orientation::Vertical, DEFAULT_MERGE_DIST);
        assert_eq!(merged, vec![MergedLine::vertical(30, 10, 90)]);
    }

    #[test]
    fn chains_through_last_member() {
        let segs = [
            LineSegment::new(19, 0, 19, 50),
            LineSegment::new(0, 10, 0, 60),
            LineSegment::new(10, 5, 10, 40),
        ];
        let merged = merge_lines(&segs, Orientation::Vertical, 15);
        assert_eq!(merged.len(), 1);
        // (0 + 0 + 10 + 10 + 19 + 19) / 6 = 9.67
        assert_eq!(merged[0], MergedLine::vertical(9, 0, 60));
    }

    #[test]
    fn distance_at_tolerance_splits() {
        let segs = [
            LineSegment::new(0, 20, 40, 20),
            LineSegment::new(0, 35, 40, 35),
        ];
        let merged = merge_lines(&segs, Orientation::Horizontal, 15);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0], MergedLine::horizontal(20, 0, 40));
        assert_eq!(merged[1], MergedLine::horizontal(35, 0, 40));
    }

    #[test]
    fn never_increases_count() {
        let segs: Vec<LineSegment> = (0..12)
            .map(|i| LineSegment::new(i * 7, 0, i * 7 + 1, 50))
            .collect();
        for tol in [0, 1, 8, 15, 100] {
            let merged = merge_lines(&segs, Orientation::Vertical, tol);
            assert!(merged.len() <= segs.len());
        }
        assert!(merge_lines(&[], Orientation::Vertical, 15).is_empty());
    }

    #[test]
    fn mean_truncates_toward_zero() {
        let segs = [
            LineSegment::new(0, -3, 50, -3),
            LineSegment::new(0, -4, 50, -4),
        ];
        let merged = merge_lines(&segs, Orientation::Horizontal, 15);
        assert_eq!(merged[0].offset, -3);
    }
}
