use crate::error::{Error, Result};
use crate::occupancy::OccupancyParams;
use crate::segments::LineParams;
use crate::slots::GeometryParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration shared by `parking_monitor` and `slot_detect`.
#[derive(Clone, Debug, Deserialize)]
pub struct RuntimeConfig {
    /// Single image or a directory of frames.
    pub frames: PathBuf,
    /// Persisted slot list (JSON array of `[x1, y1, x2, y2]`).
    #[serde(default = "default_slots_path")]
    pub slots_path: PathBuf,
    /// Rewind the frame source when it runs out.
    #[serde(default = "default_loop_frames")]
    pub loop_frames: bool,
    /// Stop after this many processed frames.
    #[serde(default)]
    pub max_frames: Option<usize>,
    #[serde(default)]
    pub detection: DetectionConfig,
    #[serde(default)]
    pub occupancy: OccupancyParams,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    pub lines: LineParams,
    pub geometry: GeometryParams,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory receiving annotated frames from the monitor.
    pub annotated_dir: Option<PathBuf>,
    /// Directory receiving debug images from `slot_detect`.
    pub debug_dir: Option<PathBuf>,
    /// Detection report written by `slot_detect`.
    pub report_json: Option<PathBuf>,
}

fn default_slots_path() -> PathBuf {
    PathBuf::from("data/slots.json")
}

fn default_loop_frames() -> bool {
    true
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig> {
    let data = fs::read_to_string(path).map_err(|e| {
        Error::Config(format!("failed to read config {}: {e}", path.display()))
    })?;
    parse_config(&data)
        .map_err(|e| Error::Config(format!("failed to parse config {}: {e}", path.display())))
}

fn parse_config(data: &str) -> std::result::Result<RuntimeConfig, serde_json::Error> {
    serde_json::from_str(data)
}
