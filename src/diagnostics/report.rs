use super::TimingBreakdown;
use crate::slots::{MergedLine, SlotRect};
use serde::Serialize;
use std::fmt;

/// Which stage, if any, came up empty during detection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DetectionOutcome {
    /// At least one slot survived suppression.
    Found,
    /// Classification left no vertical or no horizontal lines.
    NoLines,
    /// Lines were present but no pair of pairs formed a plausible slot.
    NoRectangles,
}

/// Item counts after each stage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageCounts {
    pub raw_segments: usize,
    pub vertical: usize,
    pub horizontal: usize,
    pub merged_vertical: usize,
    pub merged_horizontal: usize,
    pub candidates: usize,
    pub slots: usize,
}

/// Result produced by [`SlotDetector`](crate::SlotDetector).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    pub outcome: DetectionOutcome,
    pub slots: Vec<SlotRect>,
    pub counts: StageCounts,
    pub merged_vertical: Vec<MergedLine>,
    pub merged_horizontal: Vec<MergedLine>,
    pub timings: TimingBreakdown,
}

impl DetectionReport {
    pub fn found(&self) -> bool {
        self.outcome == DetectionOutcome::Found
    }
}

impl fmt::Display for DetectionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.counts;
        writeln!(f, "outcome: {:?}", self.outcome)?;
        writeln!(f, "raw segments: {}", c.raw_segments)?;
        writeln!(
            f,
            "classified: {} vertical, {} horizontal",
            c.vertical, c.horizontal
        )?;
        writeln!(
            f,
            "merged: {} vertical, {} horizontal",
            c.merged_vertical, c.merged_horizontal
        )?;
        writeln!(f, "candidates: {} -> slots: {}", c.candidates, c.slots)?;
        for (i, r) in self.slots.iter().enumerate() {
            writeln!(f, "  #{i}: ({}, {}) - ({}, {})", r.x1, r.y1, r.x2, r.y2)?;
        }
        for stage in &self.timings.stages {
            writeln!(f, "  {:<10} {:>8.3} ms", stage.label, stage.elapsed_ms)?;
        }
        write!(f, "total: {:.3} ms", self.timings.total_ms)
    }
}
