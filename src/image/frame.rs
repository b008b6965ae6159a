//! Owned RGB frame (3 interleaved 8-bit channels, row-major, no padding).
use crate::error::{Error, Result};

// BT.601 luma weights in Q14 fixed point.
const LUMA_R: u32 = 4899;
const LUMA_G: u32 = 9617;
const LUMA_B: u32 = 1868;
const LUMA_SHIFT: u32 = 14;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Frame {
    /// Wrap an interleaved RGB buffer, checking its length against the size.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        let expected = width * height * 3;
        if data.len() != expected {
            return Err(Error::InvalidFrame(format!(
                "expected {expected} bytes for {width}x{height} RGB, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Frame filled with a single colour.
    pub fn filled(width: usize, height: usize, rgb: [u8; 3]) -> Self {
        let mut data = Vec::with_capacity(width * height * 3);
        for _ in 0..width * height {
            data.extend_from_slice(&rgb);
        }
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let i = (y * self.width + x) * 3;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, rgb: [u8; 3]) {
        let i = (y * self.width + x) * 3;
        self.data[i..i + 3].copy_from_slice(&rgb);
    }

    /// Fill the half-open pixel box `[x0, x1) × [y0, y1)`, clamped to the frame.
    pub fn fill_box(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, rgb: [u8; 3]) {
        let cx0 = x0.clamp(0, self.width as i32) as usize;
        let cx1 = x1.clamp(0, self.width as i32) as usize;
        let cy0 = y0.clamp(0, self.height as i32) as usize;
        let cy1 = y1.clamp(0, self.height as i32) as usize;
        for y in cy0..cy1 {
            for x in cx0..cx1 {
                self.set_pixel(x, y, rgb);
            }
        }
    }

    /// BT.601 grayscale conversion, one byte per pixel.
    pub fn to_gray(&self) -> Vec<u8> {
        self.data
            .chunks_exact(3)
            .map(|px| {
                let y = px[0] as u32 * LUMA_R
                    + px[1] as u32 * LUMA_G
                    + px[2] as u32 * LUMA_B
                    + (1 << (LUMA_SHIFT - 1));
                (y >> LUMA_SHIFT).min(255) as u8
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_mismatched_buffer() {
        assert!(Frame::new(4, 4, vec![0u8; 47]).is_err());
        assert!(Frame::new(4, 4, vec![0u8; 48]).is_ok());
    }

    #[test]
    fn gray_conversion_preserves_neutral_tones() {
        let frame = Frame::filled(3, 2, [128, 128, 128]);
        assert!(frame.to_gray().iter().all(|&v| v == 128));
        let white = Frame::filled(1, 1, [255, 255, 255]);
        assert_eq!(white.to_gray(), vec![255]);
    }

    #[test]
    fn fill_box_clamps_to_bounds() {
        let mut frame = Frame::filled(4, 4, [0, 0, 0]);
        frame.fill_box(-2, -2, 2, 2, [9, 9, 9]);
        assert_eq!(frame.pixel(1, 1), [9, 9, 9]);
        assert_eq!(frame.pixel(2, 2), [0, 0, 0]);
    }
}
