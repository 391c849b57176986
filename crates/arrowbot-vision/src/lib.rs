//! Screen recognition for the arrow puzzle.
//!
//! Turns a captured screenshot into a populated [`Board`]: the layout
//! maps board cells to screen pixels, the classifier maps the six
//! grayscale arrow renderings to rotation values, and the debug renderer
//! writes a calibration image with every meaningful position marked.
//!
//! Recognition is deliberately strict: a sample pixel that matches none
//! of the six known levels aborts the whole attempt with
//! [`VisionError::UnrecognizedColor`] rather than guessing. The caller
//! retries with a fresh capture.
//!
//! [`Board`]: arrowbot_solver::Board

mod debug;
mod error;
mod layout;
mod recognize;

pub use debug::{dot, render_debug};
pub use error::{Result, VisionError};
pub use layout::BoardLayout;
pub use recognize::{classify, decode_frame, expect_frame_size, read_board, ARROW_LEVELS};
