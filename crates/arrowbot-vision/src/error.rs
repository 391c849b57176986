//! Error types for arrowbot-vision.

use thiserror::Error;

/// Result type for vision operations.
pub type Result<T> = std::result::Result<T, VisionError>;

/// Errors that can occur while recognizing a captured frame.
#[derive(Debug, Error)]
pub enum VisionError {
    /// The capture could not be decoded as a PNG.
    #[error("frame decode error: {0}")]
    Decode(#[from] image::ImageError),

    /// The frame does not match the calibrated screen size.
    #[error("unexpected frame size: expected {expected_width}x{expected_height}, got {width}x{height}")]
    UnexpectedFrameSize {
        expected_width: u32,
        expected_height: u32,
        width: u32,
        height: u32,
    },

    /// A sample point fell outside the frame.
    #[error("sample point ({x}, {y}) outside the frame")]
    OutOfFrame { x: i32, y: i32 },

    /// A sample pixel matched none of the six arrow levels.
    #[error("unrecognized cell color {pixel:?} at ({x}, {y})")]
    UnrecognizedColor { x: i32, y: i32, pixel: [u8; 4] },
}
