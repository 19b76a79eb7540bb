use anyhow::Context;
use fractalforge_compute::{ConsoleProgress, MandelbrotEngine};
use fractalforge_core::{RenderConfig, Rgb, Viewport};
use log::info;
use std::time::Instant;

/// Reference render: the classic full-set view at 500 pixels per unit,
/// which comes out to a 2200x1250 raster.
fn reference_config() -> RenderConfig {
    let mut config = RenderConfig::new(Viewport::new(-2.7, 1.25, 1.7, -1.25), 500.0);
    config.stops = vec![
        Rgb::new(0, 0, 40),
        Rgb::new(0, 50, 100),
        Rgb::new(0, 200, 0),
        Rgb::new(255, 255, 100),
        Rgb::new(255, 255, 255),
    ];
    config.output_path = "mandelbrot.png".into();
    config
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = reference_config();
    let mut engine = MandelbrotEngine::new(&config)?;
    let pixels = engine.raster().pixel_count();

    let start = Instant::now();
    engine.render(&mut ConsoleProgress);
    println!();
    let seconds = start.elapsed().as_secs_f64();

    println!(
        "Fractal produced in {:.3} seconds ({:.1} nsec/pixel)",
        seconds,
        seconds * 1e9 / pixels as f64
    );

    engine
        .write_png(&config.output_path)
        .with_context(|| format!("writing {}", config.output_path.display()))?;
    info!("wrote {}", config.output_path.display());

    Ok(())
}
