use super::mask::{AdaptiveMask, MaskExtractor};
use crate::image::{BinaryMask, Frame};
use crate::slots::SlotRect;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

/// Thresholds of the per-slot occupancy classifier.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OccupancyParams {
    /// Foreground ratio below which a slot reads as free.
    pub empty_threshold: f64,
    /// Consecutive disagreeing frames needed to flip a slot.
    pub stability_threshold: u32,
    /// Blend factor of the slot fill in annotated frames.
    pub alpha: f32,
}

impl Default for OccupancyParams {
    fn default() -> Self {
        Self {
            empty_threshold: 0.25,
            stability_threshold: 5,
            alpha: 0.5,
        }
    }
}

/// Committed state of one slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotStatus {
    pub is_free: bool,
    /// Consecutive frames whose reading disagreed with `is_free`.
    pub stable_count: u32,
}

impl Default for SlotStatus {
    fn default() -> Self {
        Self {
            is_free: true,
            stable_count: 0,
        }
    }
}

/// Read-only view of the tracker after an update.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupancySnapshot {
    pub available: usize,
    pub total: usize,
    pub is_free: Vec<bool>,
}

/// Per-slot binary occupancy with hysteresis.
///
/// Owns one [`SlotStatus`] per slot, index-aligned with the slot list it was
/// built from. Every update returns a fresh [`OccupancySnapshot`].
pub struct OccupancyTracker {
    slots: Vec<SlotRect>,
    statuses: Vec<SlotStatus>,
    params: OccupancyParams,
    masker: Box<dyn MaskExtractor>,
}

impl OccupancyTracker {
    /// Tracker using the default adaptive-threshold mask.
    pub fn new(slots: Vec<SlotRect>, params: OccupancyParams) -> Self {
        Self::with_mask_extractor(slots, params, Box::new(AdaptiveMask::new()))
    }

    pub fn with_mask_extractor(
        slots: Vec<SlotRect>,
        params: OccupancyParams,
        masker: Box<dyn MaskExtractor>,
    ) -> Self {
        let statuses = vec![SlotStatus::default(); slots.len()];
        Self {
            slots,
            statuses,
            params,
            masker,
        }
    }

    pub fn slots(&self) -> &[SlotRect] {
        &self.slots
    }

    pub fn statuses(&self) -> &[SlotStatus] {
        &self.statuses
    }

    pub fn params(&self) -> &OccupancyParams {
        &self.params
    }

    /// Compute the frame's mask and update every slot from it.
    pub fn update(&mut self, frame: &Frame) -> OccupancySnapshot {
        let mask = self.masker.extract(frame);
        self.update_with_mask(&mask)
    }

    /// Update every slot from a precomputed mask.
    ///
    /// Slots whose clamped crop is empty keep their state for this frame.
    pub fn update_with_mask(&mut self, mask: &BinaryMask) -> OccupancySnapshot {
        for index in 0..self.slots.len() {
            let rect = self.slots[index];
            let crop = mask.crop(rect.x1, rect.y1, rect.x2, rect.y2);
            if crop.is_empty() {
                trace!("slot {index} crop is empty, skipping");
                continue;
            }
            let ratio = mask.count_set(&crop) as f64 / crop.area() as f64;
            let current_is_free = ratio < self.params.empty_threshold;
            trace!("slot {index} ratio={ratio:.3} free={current_is_free}");
            self.observe(index, current_is_free);
        }
        self.snapshot()
    }

    /// Feed one reading to a slot's hysteresis counter.
    ///
    /// Returns the committed state, or `None` for an unknown index.
    pub fn observe(&mut self, index: usize, current_is_free: bool) -> Option<bool> {
        let threshold = self.params.stability_threshold;
        let status = self.statuses.get_mut(index)?;
        if current_is_free != status.is_free {
            status.stable_count += 1;
            if status.stable_count >= threshold {
                status.is_free = current_is_free;
                status.stable_count = 0;
                debug!(
                    "slot {index} is now {}",
                    if current_is_free { "free" } else { "occupied" }
                );
            }
        } else {
            status.stable_count = 0;
        }
        Some(status.is_free)
    }

    pub fn snapshot(&self) -> OccupancySnapshot {
        let is_free: Vec<bool> = self.statuses.iter().map(|s| s.is_free).collect();
        OccupancySnapshot {
            available: is_free.iter().filter(|&&f| f).count(),
            total: self.slots.len(),
            is_free,
        }
    }
}
