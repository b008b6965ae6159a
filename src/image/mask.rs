//! Owned binary mask. Any non-zero byte counts as a set pixel.

pub const MASK_ON: u8 = 255;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryMask {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

/// Rectangle clamped to mask bounds, half-open on the max side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Crop {
    pub x0: usize,
    pub y0: usize,
    pub x1: usize,
    pub y1: usize,
}

impl Crop {
    pub fn width(&self) -> usize {
        self.x1 - self.x0
    }

    pub fn height(&self) -> usize {
        self.y1 - self.y0
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    pub fn area(&self) -> usize {
        self.width() * self.height()
    }
}

impl BinaryMask {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height],
        }
    }

    /// Wrap raw bytes; `data.len()` must equal `width * height`.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Option<Self> {
        (data.len() == width * height).then_some(Self {
            width,
            height,
            data,
        })
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

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    #[inline]
    pub fn is_set(&self, x: usize, y: usize) -> bool {
        self.data[y * self.width + x] != 0
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, on: bool) {
        self.data[y * self.width + x] = if on { MASK_ON } else { 0 };
    }

    /// Clamp the pixel box `[x1, x2) × [y1, y2)` to the mask.
    ///
    /// Boxes partly outside the mask are cut at the border; boxes fully
    /// outside or inverted collapse to an empty crop.
    pub fn crop(&self, x1: i32, y1: i32, x2: i32, y2: i32) -> Crop {
        let clamp_x = |v: i32| v.clamp(0, self.width as i32) as usize;
        let clamp_y = |v: i32| v.clamp(0, self.height as i32) as usize;
        let x0 = clamp_x(x1);
        let y0 = clamp_y(y1);
        Crop {
            x0,
            y0,
            x1: clamp_x(x2).max(x0),
            y1: clamp_y(y2).max(y0),
        }
    }

    /// Number of set pixels inside a crop.
    pub fn count_set(&self, crop: &Crop) -> usize {
        (crop.y0..crop.y1)
            .map(|y| {
                let row = &self.data[y * self.width..(y + 1) * self.width];
                row[crop.x0..crop.x1].iter().filter(|&&v| v != 0).count()
            })
            .sum()
    }

    /// Total number of set pixels.
    pub fn count_all(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crop_clamps_and_counts() {
        let mut mask = BinaryMask::new(10, 10);
        for y in 0..5 {
            for x in 0..5 {
                mask.set(x, y, true);
            }
        }
        let crop = mask.crop(-3, -3, 3, 3);
        assert_eq!((crop.width(), crop.height()), (3, 3));
        assert_eq!(mask.count_set(&crop), 9);

        let outside = mask.crop(20, 20, 30, 30);
        assert!(outside.is_empty());
        let inverted = mask.crop(6, 6, 2, 2);
        assert!(inverted.is_empty());
    }
}
