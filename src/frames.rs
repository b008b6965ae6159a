//! Frame sources for the binaries.
use crate::error::{Error, Result};
use crate::image::io::load_frame;
use crate::image::Frame;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

const IMAGE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "bmp"];

/// Sequential supplier of frames. `Ok(None)` marks the end of the stream.
pub trait FrameSource {
    fn next_frame(&mut self) -> Result<Option<Frame>>;
}

/// Frames read from a single image or a directory of images.
///
/// Directory entries are filtered by extension and sorted by file name.
#[derive(Clone, Debug)]
pub struct ImageSequence {
    paths: Vec<PathBuf>,
    cursor: usize,
    looping: bool,
}

impl ImageSequence {
    pub fn open(path: &Path) -> Result<Self> {
        let paths = if path.is_dir() {
            list_images(path)?
        } else if path.is_file() {
            vec![path.to_path_buf()]
        } else {
            return Err(Error::FrameSource(format!(
                "{} is neither a file nor a directory",
                path.display()
            )));
        };
        if paths.is_empty() {
            return Err(Error::FrameSource(format!(
                "no images found in {}",
                path.display()
            )));
        }
        debug!("opened {} frames from {}", paths.len(), path.display());
        Ok(Self::from_paths(paths))
    }

    pub fn from_paths(paths: Vec<PathBuf>) -> Self {
        Self {
            paths,
            cursor: 0,
            looping: false,
        }
    }

    /// Rewind to the first frame instead of ending the stream.
    pub fn with_looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }
}

impl FrameSource for ImageSequence {
    fn next_frame(&mut self) -> Result<Option<Frame>> {
        if self.cursor >= self.paths.len() {
            if !self.looping || self.paths.is_empty() {
                return Ok(None);
            }
            debug!("frame source exhausted, rewinding");
            self.cursor = 0;
        }
        let path = &self.paths[self.cursor];
        self.cursor += 1;
        load_frame(path)
            .map(Some)
            .map_err(|e| Error::FrameSource(format!("failed to read frame: {e}")))
    }
}

fn list_images(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| {
        Error::FrameSource(format!("cannot read directory {}: {e}", dir.display()))
    })?;
    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| Error::io(dir, e))?.path();
        let is_image = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
            .unwrap_or(false);
        if is_image && path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}
