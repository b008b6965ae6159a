//! Per-slot occupancy over a stream of frames.
//!
//! Each frame is reduced to a foreground mask; the share of set pixels inside
//! a slot gives a noisy free/occupied reading, and a consecutive-disagreement
//! counter decides when that reading is trusted enough to flip the slot.

mod mask;
mod tracker;

pub use mask::{open_square, AdaptiveMask, MaskExtractor};
pub use tracker::{OccupancyParams, OccupancySnapshot, OccupancyTracker, SlotStatus};
