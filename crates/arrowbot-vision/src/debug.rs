//! Calibration rendering.
//!
//! Writes visible markers onto a captured frame so the layout numbers
//! can be tuned by eye: one coordinate-tinted square per cell center, a
//! small dot on every sample point tinted by the classified rotation
//! (red if the pixel classifies as nothing), and a marker on the advance
//! button.

use image::{Rgba, RgbaImage};

use crate::layout::BoardLayout;
use crate::recognize::classify;

/// Paint a filled square of side `size` centered on `(x, y)`, clipped
/// to the frame.
pub fn dot(frame: &mut RgbaImage, x: i32, y: i32, size: i32, color: Rgba<u8>) {
    let (width, height) = (frame.width() as i32, frame.height() as i32);

    let x_min = (x - size / 2).max(0);
    let y_min = (y - size / 2).max(0);
    let x_max = (x + size / 2).min(width);
    let y_max = (y + size / 2).min(height);

    for py in y_min..y_max {
        for px in x_min..x_max {
            frame.put_pixel(px as u32, py as u32, color);
        }
    }
}

/// Mark every cell center, every sample point and the advance button.
pub fn render_debug(frame: &mut RgbaImage, layout: &BoardLayout, advance: Option<(i32, i32)>) {
    for (x, y, px, py) in layout.cell_points() {
        let tint = Rgba([(36 * x) as u8, (36 * y) as u8, 0x7f, 0xff]);
        dot(frame, px, py, 50, tint);

        let (sx, sy) = layout.sample_point(x, y);
        let sample_color = match sample_pixel(frame, sx, sy).and_then(classify) {
            Some(rot) => {
                let level = 42 * (rot + 1);
                Rgba([level, level, level, 0xff])
            }
            None => Rgba([0xff, 0x00, 0x00, 0xff]),
        };
        dot(frame, sx, sy, 10, sample_color);
    }

    if let Some((bx, by)) = advance {
        dot(frame, bx, by, 50, Rgba([0xff, 0x7f, 0x7f, 0xff]));
    }
}

fn sample_pixel(frame: &RgbaImage, x: i32, y: i32) -> Option<Rgba<u8>> {
    if x < 0 || y < 0 || x as u32 >= frame.width() || y as u32 >= frame.height() {
        return None;
    }
    Some(*frame.get_pixel(x as u32, y as u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_fills_the_requested_square() {
        let mut frame = RgbaImage::new(100, 100);
        let red = Rgba([0xff, 0, 0, 0xff]);
        dot(&mut frame, 50, 50, 10, red);

        assert_eq!(*frame.get_pixel(45, 45), red);
        assert_eq!(*frame.get_pixel(54, 54), red);
        assert_eq!(*frame.get_pixel(44, 50), Rgba([0, 0, 0, 0]));
        assert_eq!(*frame.get_pixel(55, 50), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn dot_clips_at_the_frame_edge() {
        let mut frame = RgbaImage::new(20, 20);
        let red = Rgba([0xff, 0, 0, 0xff]);
        dot(&mut frame, 0, 0, 10, red);
        dot(&mut frame, 19, 19, 10, red);
        dot(&mut frame, -30, -30, 10, red);

        assert_eq!(*frame.get_pixel(0, 0), red);
        assert_eq!(*frame.get_pixel(4, 4), red);
        assert_eq!(*frame.get_pixel(19, 19), red);
        assert_eq!(*frame.get_pixel(10, 10), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn render_debug_marks_cells_and_advance_button() {
        let mut frame = RgbaImage::new(400, 400);
        let layout = BoardLayout {
            circle_radius: 20,
            origin_x: 200,
            origin_y: 40,
            sample_dx: 0,
            sample_dy: 0,
        };
        render_debug(&mut frame, &layout, Some((200, 380)));

        // The topmost circle center and the advance button got painted.
        assert_ne!(*frame.get_pixel(200, 40), Rgba([0, 0, 0, 0]));
        assert_eq!(*frame.get_pixel(200, 380), Rgba([0xff, 0x7f, 0x7f, 0xff]));
    }
}
