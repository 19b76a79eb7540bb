//! Render configuration.
//!
//! Every rendering parameter is supplied programmatically through
//! [`RenderConfig`]; there is no configuration file or flag parsing in
//! the core contract.

use crate::color::Rgb;
use crate::error::Error;
use crate::viewport::Viewport;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Escape-time cutoff used when none is configured.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Squared escape radius used when none is configured.
pub const DEFAULT_STOP_NORM: f64 = 400.0;

/// Complete description of one render.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Complex-plane rectangle to render.
    pub viewport: Viewport,
    /// Pixels per unit of complex-plane distance. Only used at
    /// construction time to size the raster.
    pub resolution: f64,
    /// Iteration budget before a point counts as interior.
    pub max_iterations: u32,
    /// Squared norm beyond which an orbit counts as escaped.
    pub stop_norm: f64,
    /// Color for points that never escape.
    pub body_color: Rgb,
    /// Gradient stops for escaped points, in interpolation order.
    pub stops: Vec<Rgb>,
    /// Where the finished PNG goes.
    pub output_path: PathBuf,
}

impl RenderConfig {
    /// Configuration with default iteration and escape limits, a black
    /// body, and no gradient stops. Stops must be added before the config
    /// passes validation.
    pub fn new(viewport: Viewport, resolution: f64) -> Self {
        Self {
            viewport,
            resolution,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            stop_norm: DEFAULT_STOP_NORM,
            body_color: Rgb::BLACK,
            stops: Vec::new(),
            output_path: PathBuf::from("fractal.png"),
        }
    }

    /// Raster dimensions implied by the viewport and resolution, truncated
    /// toward zero. May be zero or negative for degenerate viewports; use
    /// [`validate`](Self::validate) to reject those.
    pub fn raster_dimensions(&self) -> (i64, i64) {
        (
            (self.resolution * self.viewport.width()) as i64,
            (self.resolution * self.viewport.height()) as i64,
        )
    }

    /// Fail-fast checks run before any allocation: the raster must have at
    /// least one pixel on each axis, and the gradient needs two stops for
    /// interpolation to be defined. Returns the raster dimensions.
    pub fn validate(&self) -> Result<(u32, u32), Error> {
        let (width, height) = self.raster_dimensions();
        if width < 1 || height < 1 {
            return Err(Error::EmptyRaster { width, height });
        }
        if self.stops.len() < 2 {
            return Err(Error::GradientTooSmall(self.stops.len()));
        }
        Ok((width as u32, height as u32))
    }
}
