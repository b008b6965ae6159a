use super::geometry::GeometryBounds;
use serde::{Deserialize, Serialize};

/// Thresholds of the slot geometry chain (classify, merge, build, suppress).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryParams {
    /// Angular tolerance around the horizontal/vertical axes, degrees.
    pub classify_angle_tol_deg: f32,
    /// Segments shorter than this are noise and never classified.
    pub min_segment_length: f32,
    /// Perpendicular distance below which consecutive segments merge.
    pub merge_dist_px: i32,
    pub slot_width_min: i32,
    pub slot_width_max: i32,
    pub slot_height_min: i32,
    pub slot_height_max: i32,
    /// Required extent overlap as a fraction of the rectangle side.
    pub overlap_ratio: f32,
    /// Suppression threshold on intersection over the candidate's own area.
    pub nms_overlap_thresh: f64,
}

impl Default for GeometryParams {
    fn default() -> Self {
        Self {
            classify_angle_tol_deg: 30.0,
            min_segment_length: super::classify::MIN_SEGMENT_LENGTH,
            merge_dist_px: 15,
            slot_width_min: 25,
            slot_width_max: 60,
            slot_height_min: 50,
            slot_height_max: 120,
            overlap_ratio: 0.5,
            nms_overlap_thresh: super::nms::DEFAULT_NMS_THRESH,
        }
    }
}

impl GeometryParams {
    pub fn classify_angle_tol_rad(&self) -> f32 {
        self.classify_angle_tol_deg.to_radians()
    }

    pub fn bounds(&self) -> GeometryBounds {
        GeometryBounds {
            width_min: self.slot_width_min,
            width_max: self.slot_width_max,
            height_min: self.slot_height_min,
            height_max: self.slot_height_max,
            overlap_ratio: self.overlap_ratio,
        }
    }
}
