//! I/O helpers for frames, masks and JSON.
//!
//! - `load_frame`: read a PNG/JPEG/BMP into an owned RGB [`Frame`].
//! - `save_frame`: write a [`Frame`] to disk (format from the extension).
//! - `save_mask`: write a [`BinaryMask`] as an 8-bit grayscale PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{BinaryMask, Frame};
use crate::error::{Error, Result};
use image::{GrayImage, RgbImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert it to 8-bit RGB.
pub fn load_frame(path: &Path) -> Result<Frame> {
    let img = image::open(path)
        .map_err(|e| Error::image(path, e))?
        .into_rgb8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    Frame::new(width, height, img.into_raw())
}

/// Save an RGB frame, creating parent directories.
pub fn save_frame(frame: &Frame, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let buffer = RgbImage::from_raw(
        frame.width() as u32,
        frame.height() as u32,
        frame.data().to_vec(),
    )
    .ok_or_else(|| Error::InvalidFrame("failed to create RGB image buffer".to_string()))?;
    buffer.save(path).map_err(|e| Error::image(path, e))
}

/// Save a binary mask to a grayscale PNG.
pub fn save_mask(mask: &BinaryMask, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let buffer = GrayImage::from_raw(
        mask.width() as u32,
        mask.height() as u32,
        mask.data().to_vec(),
    )
    .ok_or_else(|| Error::InvalidFrame("failed to create mask image buffer".to_string()))?;
    buffer.save(path).map_err(|e| Error::image(path, e))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value).map_err(|e| Error::json(path, e))?;
    fs::write(path, json).map_err(|e| Error::io(path, e))
}

pub(crate) fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_is_written_as_grayscale_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("debug/mask.png");
        let mut mask = BinaryMask::new(4, 3);
        mask.set(1, 2, true);
        save_mask(&mask, &path).unwrap();

        let img = image::open(&path).unwrap().into_luma8();
        assert_eq!(img.dimensions(), (4, 3));
        assert_eq!(img.get_pixel(1, 2).0, [255]);
        assert_eq!(img.get_pixel(0, 0).0, [0]);
    }

    #[test]
    fn frame_survives_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");
        let mut frame = Frame::filled(5, 4, [10, 20, 30]);
        frame.set_pixel(3, 1, [200, 100, 0]);
        save_frame(&frame, &path).unwrap();
        assert_eq!(load_frame(&path).unwrap(), frame);
    }
}
