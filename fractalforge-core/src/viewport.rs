use serde::{Deserialize, Serialize};

/// Rectangular region of the complex plane to render.
///
/// Corners are given in complex coordinates: `left`/`right` bound the real
/// axis, `top`/`bottom` the imaginary axis. Row 0 of the raster maps to
/// `top`, so `top > bottom` for the usual orientation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Viewport {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Extent along the real axis.
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Extent along the imaginary axis.
    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    /// Complex-plane point under pixel (x, y) of a raster with the given
    /// dimensions: linear interpolation across the viewport, with y running
    /// from `top` at row 0 down to `bottom`.
    pub fn point_at(&self, x: u32, y: u32, raster_width: u32, raster_height: u32) -> (f64, f64) {
        (
            self.left + (self.right - self.left) * x as f64 / raster_width as f64,
            self.top + (self.bottom - self.top) * y as f64 / raster_height as f64,
        )
    }
}
