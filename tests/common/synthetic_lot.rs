use parking_detector::image::Frame;
use parking_detector::SlotRect;

pub const ASPHALT: [u8; 3] = [90, 90, 90];
pub const PAINT: [u8; 3] = [115, 115, 115];
pub const STRIPE: i32 = 4;

/// Painted lot layout: stripe centre lines in pixels.
pub struct LotLayout {
    pub width: usize,
    pub height: usize,
    pub columns: Vec<i32>,
    pub rows: Vec<i32>,
}

impl Default for LotLayout {
    fn default() -> Self {
        Self {
            width: 260,
            height: 200,
            columns: vec![40, 96, 152, 208],
            rows: vec![40, 150],
        }
    }
}

impl LotLayout {
    /// Slots bounded by adjacent stripe centre lines, left to right.
    pub fn expected_slots(&self) -> Vec<SlotRect> {
        let (top, bottom) = (self.rows[0], self.rows[self.rows.len() - 1]);
        self.columns
            .windows(2)
            .map(|w| SlotRect::new(w[0], top, w[1], bottom))
            .collect()
    }

    /// Empty lot: asphalt with painted stripes.
    pub fn render(&self) -> Frame {
        let mut frame = Frame::filled(self.width, self.height, ASPHALT);
        let half = STRIPE / 2;
        let (top, bottom) = (self.rows[0], self.rows[self.rows.len() - 1]);
        let (left, right) = (self.columns[0], self.columns[self.columns.len() - 1]);
        for &x in &self.columns {
            frame.fill_box(x - half, top - half, x + half, bottom + half, PAINT);
        }
        for &y in &self.rows {
            frame.fill_box(left - half, y - half, right + half, y + half, PAINT);
        }
        frame
    }

    /// Lot with a car parked in each listed slot.
    pub fn render_with_cars(&self, occupied: &[usize]) -> Frame {
        let mut frame = self.render();
        let slots = self.expected_slots();
        for &i in occupied {
            draw_car(&mut frame, &slots[i]);
        }
        frame
    }
}

/// Dark body with a grid of bright panel seams, inset from the slot lines.
pub fn draw_car(frame: &mut Frame, slot: &SlotRect) {
    let inset = 6;
    let (x0, y0) = (slot.x1 + inset, slot.y1 + inset);
    let (x1, y1) = (slot.x2 - inset, slot.y2 - inset);
    frame.fill_box(x0, y0, x1, y1, [30, 30, 30]);
    let mut x = x0 + 6;
    while x + 2 <= x1 {
        frame.fill_box(x, y0, x + 2, y1, [200, 200, 200]);
        x += 8;
    }
    let mut y = y0 + 6;
    while y + 2 <= y1 {
        frame.fill_box(x0, y, x1, y + 2, [200, 200, 200]);
        y += 8;
    }
}

/// True when every coordinate of `a` is within `tol` pixels of `b`.
pub fn rect_near(a: &SlotRect, b: &SlotRect, tol: i32) -> bool {
    (a.x1 - b.x1).abs() <= tol
        && (a.y1 - b.y1).abs() <= tol
        && (a.x2 - b.x2).abs() <= tol
        && (a.y2 - b.y2).abs() <= tol
}
