use fractalforge_core::{Gradient, Rgb, Viewport};
use num_complex::Complex64;

/// Escape-time outcome for a single point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Escape {
    /// The orbit stayed bounded for the full iteration budget.
    Interior,
    /// The orbit left the escape radius after `iterations` steps;
    /// `z_norm_sqr` is |z|² at that moment, used for smooth coloring.
    Escaped { iterations: u32, z_norm_sqr: f64 },
}

/// Read-only per-pixel computation state, shared by every render worker.
///
/// Holds the viewport-to-raster mapping, the iteration limits, and the two
/// smoothing coefficients precomputed from them. Built once per render;
/// must be rebuilt if any parameter changes.
#[derive(Clone, Debug)]
pub struct PointComputer {
    viewport: Viewport,
    width: u32,
    height: u32,
    max_iterations: u32,
    stop_norm: f64,
    body_color: Rgb,
    gradient: Gradient,
    m_smooth: f64,
    b_smooth: f64,
}

/// One step of the Mandelbrot recurrence.
#[inline]
fn step(z: Complex64, c: Complex64) -> Complex64 {
    z * z + c
}

impl PointComputer {
    pub fn new(
        viewport: Viewport,
        width: u32,
        height: u32,
        max_iterations: u32,
        stop_norm: f64,
        body_color: Rgb,
        gradient: Gradient,
    ) -> Self {
        // Slope and intercept of the smoothed iteration count, calibrated
        // against a large reference sample (1e5) and the escape threshold.
        let reference = step(Complex64::new(1e5, 0.0), Complex64::new(0.0, 0.0));
        let m_smooth = 1.0 / (0.5 * reference.norm_sqr().log2() / 1e5f64.log2()).log2();
        let b_smooth = (0.5 * stop_norm.log2()).log2() * m_smooth;

        Self {
            viewport,
            width,
            height,
            max_iterations,
            stop_norm,
            body_color,
            gradient,
            m_smooth,
            b_smooth,
        }
    }

    pub fn m_smooth(&self) -> f64 {
        self.m_smooth
    }

    pub fn b_smooth(&self) -> f64 {
        self.b_smooth
    }

    /// Escape-time iteration for an arbitrary point `c`.
    ///
    /// The orbit starts at `c` rather than zero; the smoothing constants
    /// are calibrated against this starting condition, so both must change
    /// together. An orbit that first exceeds the escape radius on its
    /// final budgeted step still counts as interior.
    pub fn escape(&self, c: Complex64) -> Escape {
        let mut z = c;
        let mut n = 0u32;
        while n < self.max_iterations && z.norm_sqr() < self.stop_norm {
            z = step(z, c);
            n += 1;
        }

        if n >= self.max_iterations {
            Escape::Interior
        } else {
            Escape::Escaped {
                iterations: n,
                z_norm_sqr: z.norm_sqr(),
            }
        }
    }

    /// Escape-time iteration for the pixel at (x, y).
    pub fn escape_at(&self, x: u32, y: u32) -> Escape {
        let (re, im) = self.viewport.point_at(x, y, self.width, self.height);
        self.escape(Complex64::new(re, im))
    }

    /// Color for the pixel at (x, y).
    pub fn color_at(&self, x: u32, y: u32) -> Rgb {
        match self.escape_at(x, y) {
            Escape::Interior => self.body_color,
            Escape::Escaped {
                iterations,
                z_norm_sqr,
            } => {
                // Continuous iteration count; removes the banding a raw
                // integer count would produce.
                let smoothed =
                    iterations as f64 + self.b_smooth - self.m_smooth * (0.5 * z_norm_sqr.log2()).log2();

                // Saturating map into gradient-index space. Stays strictly
                // below stops - 1; clamped at zero because an orbit that
                // overshoots the escape radius far enough can drive the
                // smoothed count negative.
                let intensity = ((1.0 - (-0.05 * smoothed).exp())
                    * (self.gradient.len() - 1) as f64)
                    .max(0.0);
                self.gradient.sample(intensity)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn computer(max_iterations: u32) -> PointComputer {
        let gradient = Gradient::new(vec![
            Rgb::new(0, 0, 40),
            Rgb::new(0, 50, 100),
            Rgb::new(0, 200, 0),
            Rgb::new(255, 255, 100),
            Rgb::new(255, 255, 255),
        ])
        .unwrap();
        PointComputer::new(
            Viewport::new(-2.7, 1.25, 1.7, -1.25),
            2200,
            1250,
            max_iterations,
            400.0,
            Rgb::BLACK,
            gradient,
        )
    }

    #[test]
    fn origin_never_escapes() {
        let result = computer(100).escape(Complex64::new(0.0, 0.0));
        assert_eq!(result, Escape::Interior);
    }

    #[test]
    fn far_point_escapes_before_the_first_step() {
        // |c|² = 625 already exceeds the escape threshold.
        let result = computer(100).escape(Complex64::new(25.0, 0.0));
        assert_eq!(
            result,
            Escape::Escaped {
                iterations: 0,
                z_norm_sqr: 625.0
            }
        );
    }

    #[test]
    fn outside_point_escapes_after_two_steps() {
        // z starts at c = 2: 2 -> 6 -> 38, and 38² = 1444 >= 400.
        let result = computer(100).escape(Complex64::new(2.0, 0.0));
        assert_eq!(
            result,
            Escape::Escaped {
                iterations: 2,
                z_norm_sqr: 1444.0
            }
        );
    }

    #[test]
    fn escape_on_final_budgeted_step_counts_as_interior() {
        // c = 5: |c|² = 25 stays under the threshold, the single allowed
        // step lands on z = 30 with |z|² = 900, but the budget is spent.
        let result = computer(1).escape(Complex64::new(5.0, 0.0));
        assert_eq!(result, Escape::Interior);
    }

    #[test]
    fn zero_iteration_budget_is_always_interior() {
        let result = computer(0).escape(Complex64::new(2.0, 0.0));
        assert_eq!(result, Escape::Interior);
    }

    #[test]
    fn iteration_count_never_exceeds_the_budget() {
        let computer = computer(40);
        for y in (0..1250).step_by(125) {
            for x in (0..2200).step_by(200) {
                if let Escape::Escaped { iterations, .. } = computer.escape_at(x, y) {
                    assert!(iterations < 40);
                }
            }
        }
    }

    #[test]
    fn slope_coefficient_is_one_for_the_reference_sample() {
        // The reference sample 1e5 makes the log-ratio exactly two, so the
        // slope collapses to 1 up to rounding.
        assert!((computer(100).m_smooth() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn intercept_coefficient_matches_the_escape_threshold() {
        // log2(0.5 * log2(400)) ~= 2.1118 for the default threshold.
        assert!((computer(100).b_smooth() - 2.1118).abs() < 1e-3);
    }

    #[test]
    fn interior_pixels_take_the_body_color() {
        let computer = computer(100);
        // Pixel under the origin: x = 2.7 / 4.4 * 2200 = 1350, y = 625.
        assert_eq!(computer.escape_at(1350, 625), Escape::Interior);
        assert_eq!(computer.color_at(1350, 625), Rgb::BLACK);
    }

    #[test]
    fn colors_are_deterministic() {
        let computer = computer(100);
        for (x, y) in [(0, 0), (100, 700), (2199, 1249), (1350, 625)] {
            assert_eq!(computer.color_at(x, y), computer.color_at(x, y));
        }
    }
}
