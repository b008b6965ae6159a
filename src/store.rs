//! Persistence of the bootstrapped slot list.
//!
//! The file is a JSON array of `[x1, y1, x2, y2]` arrays; list order is the
//! index order used by the occupancy tracker.
use crate::error::{Error, Result};
use crate::image::io::write_json_file;
use crate::slots::SlotRect;
use log::{debug, info};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Load slots from `path`. A missing file is an empty list.
pub fn load_slots(path: &Path) -> Result<Vec<SlotRect>> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("no slot file at {}", path.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(Error::io(path, e)),
    };
    let slots: Vec<SlotRect> = serde_json::from_str(&data).map_err(|e| Error::json(path, e))?;
    if let Some((index, rect)) = slots.iter().enumerate().find(|(_, r)| !r.is_well_formed()) {
        return Err(Error::Config(format!(
            "slot {index} in {} is not a rectangle: {:?}",
            path.display(),
            <[i32; 4]>::from(*rect)
        )));
    }
    info!("loaded {} slots from {}", slots.len(), path.display());
    Ok(slots)
}

/// Save slots to `path`, creating parent directories.
pub fn save_slots(path: &Path, slots: &[SlotRect]) -> Result<()> {
    write_json_file(path, &slots)?;
    info!("saved {} slots to {}", slots.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let slots = load_slots(&dir.path().join("absent.json")).unwrap();
        assert!(slots.is_empty());
    }

    #[test]
    fn round_trip_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/slots.json");
        let slots = vec![
            SlotRect::new(70, 0, 100, 80),
            SlotRect::new(10, 0, 40, 80),
            SlotRect::new(40, 0, 70, 80),
        ];
        save_slots(&path, &slots).unwrap();
        assert_eq!(load_slots(&path).unwrap(), slots);
    }

    #[test]
    fn malformed_file_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slots.json");
        fs::write(&path, "[[1, 2, 3]]").unwrap();
        assert!(matches!(load_slots(&path), Err(Error::Json { .. })));
    }

    #[test]
    fn inverted_rectangle_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slots.json");
        fs::write(&path, "[[10, 0, 40, 80], [2147483647, 0, 0, 80]]").unwrap();
        match load_slots(&path) {
            Err(Error::Config(msg)) => assert!(msg.contains("slot 1"), "{msg}"),
            other => panic!("expected config error, got {other:?}"),
        }
    }
}
