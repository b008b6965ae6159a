//! Owned single-channel f32 plane in row-major layout.
//!
//! Used for blurring, thresholding and gradients.

#[derive(Clone, Debug)]
pub struct ImageF32 {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Backing storage, `w * h` values
    pub data: Vec<f32>,
}

impl ImageF32 {
    /// Zero-initialized plane of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0.0; w * h],
        }
    }

    /// Widen 8-bit grayscale bytes, multiplying each by `scale`.
    ///
    /// `gray` must hold at least `w * h` bytes; extra bytes are ignored.
    pub fn from_gray(w: usize, h: usize, gray: &[u8], scale: f32) -> Self {
        let data = gray
            .iter()
            .take(w * h)
            .map(|&v| v as f32 * scale)
            .collect::<Vec<_>>();
        let mut out = Self { w, h, data };
        out.data.resize(w * h, 0.0);
        out
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[self.idx(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: f32) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    #[inline]
    pub fn row(&self, y: usize) -> &[f32] {
        &self.data[y * self.w..(y + 1) * self.w]
    }

    #[inline]
    pub fn row_mut(&mut self, y: usize) -> &mut [f32] {
        &mut self.data[y * self.w..(y + 1) * self.w]
    }
}
