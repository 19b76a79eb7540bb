//! Error types shared across the workspace.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("viewport and resolution produce an empty raster ({width}x{height})")]
    EmptyRaster { width: i64, height: i64 },

    #[error("gradient needs at least 2 color stops, got {0}")]
    GradientTooSmall(usize),

    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
}
