//! Reports and timing helpers shared by the detector and the binaries.
//!
//! `DetectionReport` is returned by the slot detector and serialized as JSON
//! by `slot_detect`; `FpsMeter` drives the monitor's frame-rate log.

pub mod fps;
pub mod report;
pub mod timing;

pub use fps::FpsMeter;
pub use report::{DetectionOutcome, DetectionReport, StageCounts};
pub use timing::{StageClock, StageTiming, TimingBreakdown};
