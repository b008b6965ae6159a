use super::options::LineParams;
use super::region::Region;
use super::segment::LineSegment;
use crate::angle::{angular_difference, normalize_half_pi};
use crate::edges::sobel_gradients;
use crate::image::ImageF32;

const NEIGHBOURS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

#[derive(Clone, Copy, PartialEq, Eq)]
enum PixelState {
    Free,
    /// Below the magnitude threshold; never grown into.
    Weak,
    InRegion,
    Claimed,
    /// Seed of a rejected region; may still join another region.
    Tried,
}

pub(super) struct LsdExtractor {
    width: usize,
    height: usize,
    mag: Vec<f32>,
    orientation: Vec<f32>,
    state: Vec<PixelState>,
    angle_tol: f32,
    min_len: f32,
    min_region: usize,
    min_aligned: f32,
    stack: Vec<usize>,
    region: Region,
}

impl LsdExtractor {
    pub(super) fn new(l: &ImageF32, params: &LineParams) -> Self {
        let grad = sobel_gradients(l);
        let n = l.w * l.h;
        let mut orientation = vec![0.0f32; n];
        let mut state = vec![PixelState::Free; n];
        for (i, (o, s)) in orientation.iter_mut().zip(state.iter_mut()).enumerate() {
            let m = grad.mag.data[i];
            if m < params.magnitude_threshold || m <= 0.0 {
                *s = PixelState::Weak;
            } else {
                *o = normalize_half_pi(grad.gy.data[i].atan2(grad.gx.data[i]));
            }
        }
        Self {
            width: l.w,
            height: l.h,
            mag: grad.mag.data,
            orientation,
            state,
            angle_tol: params.angle_tolerance_rad(),
            min_len: params.min_length_px,
            min_region: params.min_region_px.max(2),
            min_aligned: params.min_aligned_fraction,
            stack: Vec::with_capacity(64),
            region: Region::default(),
        }
    }

    /// Strongest pixels seed first, so regions start on the crest of an edge
    /// rather than on its blurred flank or a corner.
    pub(super) fn extract(mut self) -> Vec<LineSegment> {
        let mut seeds: Vec<usize> = (0..self.state.len())
            .filter(|&i| self.state[i] == PixelState::Free)
            .collect();
        seeds.sort_by(|&a, &b| self.mag[b].total_cmp(&self.mag[a]));

        let mut segments = Vec::new();
        for seed in seeds {
            if self.state[seed] != PixelState::Free {
                continue;
            }
            self.grow(seed);
            match self.fit_segment() {
                Some(segment) => {
                    self.mark_region(PixelState::Claimed);
                    segments.push(segment);
                }
                None => {
                    self.mark_region(PixelState::Free);
                    self.state[seed] = PixelState::Tried;
                }
            }
        }
        segments
    }

    fn grow(&mut self, seed: usize) {
        self.region.clear();
        self.stack.clear();
        self.admit(seed);
        while let Some(idx) = self.stack.pop() {
            let region_angle = self.region.orientation();
            let (x, y) = (idx % self.width, idx / self.width);
            for (dx, dy) in NEIGHBOURS {
                let (xn, yn) = (x as isize + dx, y as isize + dy);
                if xn < 0 || yn < 0 || xn >= self.width as isize || yn >= self.height as isize {
                    continue;
                }
                let n_idx = yn as usize * self.width + xn as usize;
                let joinable = matches!(self.state[n_idx], PixelState::Free | PixelState::Tried);
                if joinable
                    && angular_difference(self.orientation[n_idx], region_angle) <= self.angle_tol
                {
                    self.admit(n_idx);
                }
            }
        }
    }

    fn admit(&mut self, idx: usize) {
        self.state[idx] = PixelState::InRegion;
        let (x, y) = (idx % self.width, idx / self.width);
        self.region.add(idx, x, y, self.orientation[idx]);
        self.stack.push(idx);
    }

    fn mark_region(&mut self, state: PixelState) {
        for &idx in &self.region.pixels {
            self.state[idx] = state;
        }
    }

    fn fit_segment(&self) -> Option<LineSegment> {
        if self.region.len() < self.min_region {
            return None;
        }

        let region_angle = self.region.orientation();
        let half_tol = 0.5 * self.angle_tol;
        let aligned = self
            .region
            .pixels
            .iter()
            .filter(|&&i| angular_difference(self.orientation[i], region_angle) <= half_tol)
            .count();
        if (aligned as f32) < self.min_aligned * self.region.len() as f32 {
            return None;
        }

        let axis = self.region.fit_axis()?;
        let (mut smin, mut smax) = (f32::INFINITY, f32::NEG_INFINITY);
        for &idx in &self.region.pixels {
            let s = axis.project((idx % self.width) as f32, (idx / self.width) as f32);
            smin = smin.min(s);
            smax = smax.max(s);
        }
        let len = smax - smin;
        if !len.is_finite() || len <= 0.0 || len < self.min_len {
            return None;
        }
        Some(LineSegment::from_f32(axis.point_at(smin), axis.point_at(smax)))
    }
}
