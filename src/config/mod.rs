//! JSON configuration for the binaries.
//!
//! Every threshold has a default; a config file only needs `frames`.
//!
//! ```json
//! {
//!   "frames": "data/frames",
//!   "slots_path": "data/slots.json",
//!   "detection": { "geometry": { "slot_width_max": 60 } },
//!   "occupancy": { "empty_threshold": 0.25, "stability_threshold": 5 },
//!   "output": { "annotated_dir": "out/annotated" }
//! }
//! ```

pub mod runtime;

pub use runtime::{load_config, DetectionConfig, OutputConfig, RuntimeConfig};
