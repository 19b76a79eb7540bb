use crate::color::Rgb;
use crate::error::Error;
use std::f64::consts::PI;

/// Ordered list of color stops sampled by normalized escape intensity.
///
/// Insertion order is significant: intensity `n` blends between the stops
/// at `floor(n)` and `floor(n) + 1`. At least two stops are required for
/// the blend to be well-defined, enforced at construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Gradient {
    stops: Vec<Rgb>,
}

impl Gradient {
    pub fn new(stops: Vec<Rgb>) -> Result<Self, Error> {
        if stops.len() < 2 {
            return Err(Error::GradientTooSmall(stops.len()));
        }
        Ok(Self { stops })
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn stops(&self) -> &[Rgb] {
        &self.stops
    }

    /// Sample the gradient at a normalized intensity `n >= 0`.
    ///
    /// Uses a cosine blend, `mix = 0.5 * (1 + cos(pi * fract(n)))`, instead
    /// of a linear one; the blend weight reaches 0 and 1 with zero slope at
    /// the stop boundaries, which removes banding there. The stop index is
    /// clamped so the second stop of the pair never runs past the final
    /// stop, even for `n` at or beyond `len() - 1`.
    pub fn sample(&self, n: f64) -> Rgb {
        let n = n.max(0.0);
        let index = (n as usize).min(self.stops.len() - 2);
        let frac = n - index as f64;
        let mix = 0.5 * (1.0 + (PI * frac).cos());

        let first = self.stops[index];
        let second = self.stops[index + 1];
        Rgb::new(
            blend(first.red, second.red, mix),
            blend(first.green, second.green, mix),
            blend(first.blue, second.blue, mix),
        )
    }
}

/// Channel-wise blend; the result is truncated into byte range.
fn blend(first: u8, second: u8, mix: f64) -> u8 {
    (first as f64 * mix + second as f64 * (1.0 - mix)) as u8
}
