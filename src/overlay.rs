//! Debug and monitor drawing on RGB frames.
use crate::image::Frame;
use crate::segments::LineSegment;
use crate::slots::SlotRect;

pub const FREE_COLOR: [u8; 3] = [0, 255, 0];
pub const OCCUPIED_COLOR: [u8; 3] = [255, 0, 0];
pub const VERTICAL_COLOR: [u8; 3] = [0, 0, 255];
pub const HORIZONTAL_COLOR: [u8; 3] = [255, 0, 0];

const PANEL_HEIGHT: usize = 100;
const PANEL_OPACITY: f32 = 0.6;
const CELL_MARGIN: usize = 20;
const CELL_GAP: usize = 4;

/// Fill each slot in its status colour and blend the fill over `frame`.
///
/// Rectangles include both corners. `alpha` is the weight of the fill.
pub fn draw_slots(frame: &Frame, slots: &[SlotRect], is_free: &[bool], alpha: f32) -> Frame {
    let mut painted = frame.clone();
    for (rect, &free) in slots.iter().zip(is_free) {
        let color = if free { FREE_COLOR } else { OCCUPIED_COLOR };
        painted.fill_box(
            rect.x1,
            rect.y1,
            rect.x2.saturating_add(1),
            rect.y2.saturating_add(1),
            color,
        );
    }
    blend(&painted, frame, alpha)
}

/// `alpha * top + (1 - alpha) * bottom`, rounded per channel.
pub fn blend(top: &Frame, bottom: &Frame, alpha: f32) -> Frame {
    let alpha = alpha.clamp(0.0, 1.0);
    let data = top
        .data()
        .iter()
        .zip(bottom.data())
        .map(|(&t, &b)| (alpha * t as f32 + (1.0 - alpha) * b as f32).round() as u8)
        .collect();
    // Mismatched sizes leave the bottom frame untouched.
    Frame::new(bottom.width(), bottom.height(), data).unwrap_or_else(|_| bottom.clone())
}

/// Rasterise segments with a square pen of `thickness` pixels.
pub fn draw_lines(frame: &mut Frame, lines: &[LineSegment], color: [u8; 3], thickness: usize) {
    let r0 = (thickness.max(1) as i32 - 1) / 2;
    let r1 = thickness.max(1) as i32 - 1 - r0;
    for line in lines {
        for_each_line_pixel(line, |x, y| {
            frame.fill_box(x - r0, y - r0, x + r1 + 1, y + r1 + 1, color);
        });
    }
}

/// Darken a band at the top of the frame and draw one cell per slot:
/// `available` green cells followed by occupied red ones.
pub fn draw_status_bar(frame: &mut Frame, available: usize, total: usize) {
    let (w, h) = (frame.width(), frame.height());
    let band = PANEL_HEIGHT.min(h);
    let mut dark = frame.clone();
    dark.fill_box(0, 0, w as i32, band as i32, [0, 0, 0]);
    *frame = blend(&dark, frame, PANEL_OPACITY);
    if band < h {
        let end = (band + 2).min(h);
        frame.fill_box(0, band as i32, w as i32, end as i32, FREE_COLOR);
    }

    if total == 0 || w <= 2 * CELL_MARGIN || band <= 2 * CELL_MARGIN {
        return;
    }
    let span = w - 2 * CELL_MARGIN;
    let cell = (span / total).max(1);
    let y0 = CELL_MARGIN as i32;
    let y1 = (band - CELL_MARGIN) as i32;
    for i in 0..total {
        let x0 = CELL_MARGIN + i * cell;
        if x0 >= w - CELL_MARGIN {
            break;
        }
        let x1 = (x0 + cell.saturating_sub(CELL_GAP).max(1)).min(w - CELL_MARGIN);
        let color = if i < available { FREE_COLOR } else { OCCUPIED_COLOR };
        frame.fill_box(x0 as i32, y0, x1 as i32, y1, color);
    }
}

/// Bresenham walk over every pixel of a segment, endpoints included.
fn for_each_line_pixel(line: &LineSegment, mut visit: impl FnMut(i32, i32)) {
    let (mut x, mut y) = (line.x1, line.y1);
    let dx = (line.x2 - line.x1).abs();
    let dy = -(line.y2 - line.y1).abs();
    let sx = if line.x1 < line.x2 { 1 } else { -1 };
    let sy = if line.y1 < line.y2 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        visit(x, y);
        if x == line.x2 && y == line.y2 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_blend_with_status_colour() {
        let frame = Frame::filled(20, 10, [0, 0, 100]);
        let slots = [SlotRect::new(0, 0, 4, 4), SlotRect::new(10, 0, 14, 4)];
        let out = draw_slots(&frame, &slots, &[true, false], 0.5);
        assert_eq!(out.pixel(2, 2), [0, 128, 50]);
        assert_eq!(out.pixel(4, 4), [0, 128, 50]);
        assert_eq!(out.pixel(12, 2), [128, 0, 50]);
        assert_eq!(out.pixel(7, 7), [0, 0, 100]);
    }

    #[test]
    fn slot_reaching_coordinate_limit_is_clipped() {
        let frame = Frame::filled(8, 8, [0, 0, 0]);
        let slots = [SlotRect::new(4, 4, i32::MAX, i32::MAX)];
        let out = draw_slots(&frame, &slots, &[true], 1.0);
        assert_eq!(out.pixel(7, 7), FREE_COLOR);
        assert_eq!(out.pixel(3, 3), [0, 0, 0]);
    }

    #[test]
    fn lines_cover_both_endpoints() {
        let mut frame = Frame::filled(12, 12, [0, 0, 0]);
        draw_lines(&mut frame, &[LineSegment::new(1, 1, 10, 7)], [9, 9, 9], 1);
        assert_eq!(frame.pixel(1, 1), [9, 9, 9]);
        assert_eq!(frame.pixel(10, 7), [9, 9, 9]);
        assert_eq!(frame.pixel(10, 1), [0, 0, 0]);
    }

    #[test]
    fn status_bar_draws_cells() {
        let mut frame = Frame::filled(200, 150, [200, 200, 200]);
        draw_status_bar(&mut frame, 1, 2);
        assert_eq!(frame.pixel(25, 50), FREE_COLOR);
        assert_eq!(frame.pixel(120, 50), OCCUPIED_COLOR);
        assert_eq!(frame.pixel(5, 5), [80, 80, 80]);
        assert_eq!(frame.pixel(5, 140), [200, 200, 200]);
    }
}
