//! Frame decoding and cell color classification.

use arrowbot_solver::Board;
use image::{Rgba, RgbaImage};

use crate::error::{Result, VisionError};
use crate::layout::BoardLayout;

/// The six grayscale levels the puzzle renders arrow directions with,
/// indexed by rotation value.
pub const ARROW_LEVELS: [u8; 6] = [0x00, 0x0d, 0x1b, 0x28, 0x36, 0x44];

/// Decode a captured PNG into an RGBA frame.
pub fn decode_frame(png: &[u8]) -> Result<RgbaImage> {
    let frame = image::load_from_memory(png)?.to_rgba8();
    tracing::debug!(width = frame.width(), height = frame.height(), "decoded frame");
    Ok(frame)
}

/// Refuse frames that do not match the calibrated screen size.
///
/// Calibration is in absolute pixels, so a rotated screen or a changed
/// resolution would sample garbage; `None` skips the check on that axis.
pub fn expect_frame_size(
    frame: &RgbaImage,
    expected_width: Option<u32>,
    expected_height: Option<u32>,
) -> Result<()> {
    let (width, height) = frame.dimensions();
    let width_ok = expected_width.map_or(true, |w| w == width);
    let height_ok = expected_height.map_or(true, |h| h == height);
    if width_ok && height_ok {
        return Ok(());
    }
    Err(VisionError::UnexpectedFrameSize {
        expected_width: expected_width.unwrap_or(width),
        expected_height: expected_height.unwrap_or(height),
        width,
        height,
    })
}

/// Classify a sample pixel as a rotation value.
///
/// Exact match only: the puzzle renders flat colors, so any deviation
/// means the sample point is off a cell or mid-animation.
pub fn classify(pixel: Rgba<u8>) -> Option<u8> {
    let Rgba([r, g, b, a]) = pixel;
    if a != 0xff || r != g || g != b {
        return None;
    }
    ARROW_LEVELS.iter().position(|&level| level == r).map(|i| i as u8)
}

/// Read the rotation state of every cell from a frame.
///
/// Aborts on the first unclassifiable sample; a partial board is never
/// produced. The caller is expected to retry with a fresh capture.
pub fn read_board(frame: &RgbaImage, layout: &BoardLayout) -> Result<Board> {
    let mut board = Board::new();
    for (x, y, _, _) in layout.cell_points() {
        let (sx, sy) = layout.sample_point(x, y);
        let pixel = pixel_at(frame, sx, sy)?;
        let rot = classify(pixel).ok_or(VisionError::UnrecognizedColor {
            x: sx,
            y: sy,
            pixel: pixel.0,
        })?;
        board.set(x, y, rot);
    }
    Ok(board)
}

fn pixel_at(frame: &RgbaImage, x: i32, y: i32) -> Result<Rgba<u8>> {
    let (width, height) = frame.dimensions();
    if x < 0 || y < 0 || x as u32 >= width || y as u32 >= height {
        return Err(VisionError::OutOfFrame { x, y });
    }
    Ok(*frame.get_pixel(x as u32, y as u32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrowbot_solver::cells;

    fn layout() -> BoardLayout {
        BoardLayout {
            circle_radius: 10,
            origin_x: 100,
            origin_y: 20,
            sample_dx: 0,
            sample_dy: 3,
        }
    }

    fn frame_with_rotations(rot_of: impl Fn(i32, i32) -> u8) -> RgbaImage {
        let mut frame = RgbaImage::from_pixel(200, 200, Rgba([0xff, 0xff, 0xff, 0xff]));
        let l = layout();
        for (x, y) in cells() {
            let (sx, sy) = l.sample_point(x, y);
            let level = ARROW_LEVELS[usize::from(rot_of(x, y))];
            frame.put_pixel(sx as u32, sy as u32, Rgba([level, level, level, 0xff]));
        }
        frame
    }

    #[test]
    fn classify_maps_all_six_levels() {
        for (rot, &level) in ARROW_LEVELS.iter().enumerate() {
            let pixel = Rgba([level, level, level, 0xff]);
            assert_eq!(classify(pixel), Some(rot as u8));
        }
    }

    #[test]
    fn classify_rejects_unknown_pixels() {
        assert_eq!(classify(Rgba([0x0e, 0x0e, 0x0e, 0xff])), None);
        assert_eq!(classify(Rgba([0x0d, 0x0d, 0x0e, 0xff])), None);
        assert_eq!(classify(Rgba([0x0d, 0x0d, 0x0d, 0x80])), None);
        assert_eq!(classify(Rgba([0xff, 0x00, 0x00, 0xff])), None);
    }

    #[test]
    fn read_board_recovers_every_cell() {
        let frame = frame_with_rotations(|x, y| ((x + y) % 6) as u8);
        let board = read_board(&frame, &layout()).unwrap();
        for (x, y) in cells() {
            assert_eq!(board.get(x, y), ((x + y) % 6) as u8, "({x}, {y})");
        }
    }

    #[test]
    fn unknown_color_aborts_the_read() {
        let mut frame = frame_with_rotations(|_, _| 0);
        let (sx, sy) = layout().sample_point(3, 3);
        frame.put_pixel(sx as u32, sy as u32, Rgba([0x10, 0x10, 0x10, 0xff]));

        match read_board(&frame, &layout()) {
            Err(VisionError::UnrecognizedColor { x, y, pixel }) => {
                assert_eq!((x, y), (sx, sy));
                assert_eq!(pixel, [0x10, 0x10, 0x10, 0xff]);
            }
            other => panic!("expected UnrecognizedColor, got {other:?}"),
        }
    }

    #[test]
    fn sample_outside_frame_is_an_error() {
        let frame = RgbaImage::new(50, 50);
        let result = read_board(&frame, &layout());
        assert!(matches!(result, Err(VisionError::OutOfFrame { .. })));
    }

    #[test]
    fn frame_size_guard() {
        let frame = RgbaImage::new(1080, 2400);
        assert!(expect_frame_size(&frame, None, None).is_ok());
        assert!(expect_frame_size(&frame, Some(1080), None).is_ok());
        assert!(expect_frame_size(&frame, Some(1080), Some(2400)).is_ok());

        let result = expect_frame_size(&frame, Some(1440), Some(2400));
        assert!(matches!(
            result,
            Err(VisionError::UnexpectedFrameSize { expected_width: 1440, width: 1080, .. })
        ));
    }
}
