//! Greedy suppression of overlapping slot candidates.
use super::types::SlotRect;

/// Default overlap threshold.
pub const DEFAULT_NMS_THRESH: f64 = 0.3;

/// Keep the candidate with the largest `y2` (latest in input order among
/// ties), drop every remaining candidate whose inclusive intersection with it
/// exceeds `overlap_thresh` of the candidate's own inclusive area, repeat.
///
/// The ratio is taken against the candidate being dropped, not the union, so
/// a small rectangle inside a large one is removed while the reverse may not
/// be. Output is in pick order.
pub fn suppress_overlaps(rects: &[SlotRect], overlap_thresh: f64) -> Vec<SlotRect> {
    let mut order: Vec<usize> = (0..rects.len()).collect();
    order.sort_by_key(|&i| rects[i].y2);

    let mut picked = Vec::new();
    while let Some(last) = order.pop() {
        let keep = rects[last];
        picked.push(keep);
        order.retain(|&i| overlap_ratio(&keep, &rects[i]) <= overlap_thresh);
    }
    picked
}

/// Inclusive intersection of `keep` and `other` over `other`'s inclusive area.
fn overlap_ratio(keep: &SlotRect, other: &SlotRect) -> f64 {
    let xx1 = keep.x1.max(other.x1) as i64;
    let yy1 = keep.y1.max(other.y1) as i64;
    let xx2 = keep.x2.min(other.x2) as i64;
    let yy2 = keep.y2.min(other.y2) as i64;
    let w = (xx2 - xx1 + 1).max(0);
    let h = (yy2 - yy1 + 1).max(0);
    let area = other.inclusive_area();
    if area <= 0 {
        return 0.0;
    }
    (w * h) as f64 / area as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disjoint_slots_survive_in_pick_order() {
        let rects = vec![
            SlotRect::new(10, 0, 40, 80),
            SlotRect::new(40, 0, 70, 80),
            SlotRect::new(70, 0, 100, 80),
        ];
        let kept = suppress_overlaps(&rects, DEFAULT_NMS_THRESH);
        assert_eq!(kept, vec![rects[2], rects[1], rects[0]]);
    }

    #[test]
    fn duplicates_collapse_to_lowest_edge() {
        let rects = vec![
            SlotRect::new(10, 0, 40, 80),
            SlotRect::new(12, 4, 41, 84),
            SlotRect::new(11, 1, 39, 79),
        ];
        let kept = suppress_overlaps(&rects, DEFAULT_NMS_THRESH);
        assert_eq!(kept, vec![rects[1]]);
    }

    #[test]
    fn ratio_is_against_discarded_area() {
        let big = SlotRect::new(0, 0, 100, 100);
        let inner = SlotRect::new(10, 10, 30, 90);
        // Intersection over union is ~0.17 but the inner box is fully covered.
        assert_eq!(suppress_overlaps(&[big, inner], 0.3), vec![big]);
        // Picked first, a tall narrow box covers under a fifth of the big one.
        let tall = SlotRect::new(10, 10, 30, 110);
        assert_eq!(suppress_overlaps(&[big, tall], 0.3), vec![tall, big]);
    }

    #[test]
    fn ratio_equal_to_threshold_survives() {
        let keep = SlotRect::new(13, 0, 40, 5);
        // 14 shared inclusive pixels over an inclusive area of 40.
        let touching = SlotRect::new(0, 0, 19, 1);
        assert_eq!(overlap_ratio(&keep, &touching), 0.35);
        assert_eq!(
            suppress_overlaps(&[touching, keep], 0.35),
            vec![keep, touching]
        );
        assert_eq!(suppress_overlaps(&[touching, keep], 0.34), vec![keep]);
    }

    #[test]
    fn suppression_is_idempotent() {
        let rects = vec![
            SlotRect::new(0, 0, 30, 80),
            SlotRect::new(5, 2, 33, 82),
            SlotRect::new(30, 0, 60, 80),
            SlotRect::new(31, 40, 61, 120),
            SlotRect::new(90, 10, 120, 95),
        ];
        let once = suppress_overlaps(&rects, DEFAULT_NMS_THRESH);
        let twice = suppress_overlaps(&once, DEFAULT_NMS_THRESH);
        assert_eq!(once, twice);
        assert!(suppress_overlaps(&[], DEFAULT_NMS_THRESH).is_empty());
    }
}
