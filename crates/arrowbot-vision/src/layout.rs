//! Board-to-screen geometry.
//!
//! The puzzle renders the hexagon rotated: board rows run down-right on
//! screen, so a row index picks a screen column and the position within
//! a row advances down the screen. Calibration pins the topmost circle
//! center and the circle radius; everything else follows from hex
//! packing (column pitch is `radius * sqrt(3)`, row pitch `radius`).

use arrowbot_solver::{cells, first_x, CENTER};

/// Calibrated mapping from board cells to screen pixels.
#[derive(Debug, Clone)]
pub struct BoardLayout {
    /// Radius of one puzzle circle, in pixels.
    pub circle_radius: i32,
    /// Screen x of the topmost circle center.
    pub origin_x: i32,
    /// Screen y of the topmost circle center.
    pub origin_y: i32,
    /// Sample-point offset from a circle center.
    pub sample_dx: i32,
    /// Sample-point offset from a circle center.
    pub sample_dy: i32,
}

impl BoardLayout {
    /// Screen position of the center of cell `(x, y)`.
    pub fn cell_to_image(&self, x: i32, y: i32) -> (i32, i32) {
        let mx = x - first_x(y);
        let row_offset = (y - CENTER).abs();

        let ix = -(y - CENTER);
        let iy = row_offset + 2 * mx;

        let px = f64::from(self.origin_x)
            + f64::from(ix) * f64::from(self.circle_radius) * 3f64.sqrt();
        let py = f64::from(self.origin_y) + f64::from(iy) * f64::from(self.circle_radius);

        (px as i32, py as i32)
    }

    /// Screen position of the sample point of cell `(x, y)`.
    pub fn sample_point(&self, x: i32, y: i32) -> (i32, i32) {
        let (px, py) = self.cell_to_image(x, y);
        (px + self.sample_dx, py + self.sample_dy)
    }

    /// Enumerate every valid cell with its screen position, row-major.
    pub fn cell_points(&self) -> impl Iterator<Item = (i32, i32, i32, i32)> + '_ {
        cells().map(|(x, y)| {
            let (px, py) = self.cell_to_image(x, y);
            (x, y, px, py)
        })
    }
}
