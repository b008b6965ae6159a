mod common;

use common::synthetic_lot::{rect_near, LotLayout, ASPHALT};
use parking_detector::image::Frame;
use parking_detector::occupancy::{AdaptiveMask, MaskExtractor};
use parking_detector::store::{load_slots, save_slots};
use parking_detector::{
    DetectionOutcome, GeometryParams, LineParams, OccupancyParams, OccupancyTracker,
    SlotDetector,
};

fn detector() -> SlotDetector {
    SlotDetector::new(LineParams::default(), GeometryParams::default())
}

#[test]
fn painted_lot_yields_three_slots() {
    let _ = env_logger::builder().is_test(true).try_init();
    let lot = LotLayout::default();
    let report = detector().detect(&lot.render());

    assert_eq!(
        report.outcome,
        DetectionOutcome::Found,
        "counts: {:?}",
        report.counts
    );
    assert_eq!(report.slots.len(), 3, "slots: {:?}", report.slots);
    let mut slots = report.slots.clone();
    slots.sort_by_key(|r| r.x1);
    for (found, expected) in slots.iter().zip(lot.expected_slots()) {
        assert!(
            rect_near(found, &expected, 4),
            "expected ~{expected:?}, got {found:?}"
        );
    }
    assert!(report.counts.raw_segments >= report.counts.merged_vertical);
    assert_eq!(report.counts.merged_vertical, 4);
    assert_eq!(report.counts.merged_horizontal, 2);
}

#[test]
fn blank_frame_reports_no_lines() {
    let frame = Frame::filled(200, 160, ASPHALT);
    let report = detector().detect(&frame);
    assert_eq!(report.outcome, DetectionOutcome::NoLines);
    assert!(report.slots.is_empty());
    assert_eq!(report.counts.raw_segments, 0);
}

#[test]
fn empty_lot_mask_stays_below_threshold() {
    let lot = LotLayout::default();
    let mask = AdaptiveMask::new().extract(&lot.render());
    for slot in lot.expected_slots() {
        let crop = mask.crop(slot.x1, slot.y1, slot.x2, slot.y2);
        let ratio = mask.count_set(&crop) as f64 / crop.area() as f64;
        assert!(ratio < 0.1, "empty slot ratio {ratio}");
    }
}

#[test]
fn bootstrap_then_track_a_parked_car() {
    let _ = env_logger::builder().is_test(true).try_init();
    let lot = LotLayout::default();
    let slots = detector().detect(&lot.render()).slots;
    assert_eq!(slots.len(), 3);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state/slots.json");
    save_slots(&path, &slots).unwrap();
    let slots = load_slots(&path).unwrap();

    let order: Vec<usize> = {
        let mut idx: Vec<usize> = (0..slots.len()).collect();
        idx.sort_by_key(|&i| slots[i].x1);
        idx
    };
    let middle = order[1];

    let mut tracker = OccupancyTracker::new(slots, OccupancyParams::default());
    let parked = lot.render_with_cars(&[1]);

    for frame_no in 1..=4 {
        let snap = tracker.update(&parked);
        assert_eq!(snap.available, 3, "flipped early at frame {frame_no}");
        assert_eq!(tracker.statuses()[middle].stable_count, frame_no);
    }
    let snap = tracker.update(&parked);
    assert_eq!((snap.available, snap.total), (2, 3));
    assert!(!snap.is_free[middle]);

    // One clear frame is not enough to free the slot again.
    let empty = lot.render();
    let snap = tracker.update(&empty);
    assert!(!snap.is_free[middle]);
    let snap = tracker.update(&parked);
    assert!(!snap.is_free[middle]);
    assert_eq!(tracker.statuses()[middle].stable_count, 0);
}
