//! The rendering engine: owns the raster and drives the per-pixel
//! computation, either on the calling thread or across a worker pool.

use crate::blocks::{column_blocks, BLOCK_COUNT};
use crate::point_compute::PointComputer;
use crate::progress::ProgressSink;
use crossbeam::channel;
use fractalforge_core::{Error, Gradient, PixelRect, Raster, RenderConfig, Rgb};
use log::{debug, info};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A block of pixels computed by one worker, tagged with its partition
/// index so the receiver knows where to place it.
struct BlockResult {
    index: usize,
    pixels: Vec<Rgb>,
}

/// Owns a raster plus everything needed to fill it with one Mandelbrot
/// render. Construction validates the configuration, allocates the raster,
/// and precomputes the smoothing coefficients; `render` fills the pixels.
pub struct MandelbrotEngine {
    computer: PointComputer,
    raster: Raster,
}

impl MandelbrotEngine {
    pub fn new(config: &RenderConfig) -> Result<Self, Error> {
        let (width, height) = config.validate()?;
        let gradient = Gradient::new(config.stops.clone())?;
        info!("allocating {}x{} raster", width, height);

        Ok(Self {
            computer: PointComputer::new(
                config.viewport,
                width,
                height,
                config.max_iterations,
                config.stop_norm,
                config.body_color,
                gradient,
            ),
            raster: Raster::new(width, height),
        })
    }

    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    pub fn into_raster(self) -> Raster {
        self.raster
    }

    /// Compute one block into an owned pixel vector, row-major within the
    /// block.
    fn render_block(computer: &PointComputer, block: &PixelRect) -> Vec<Rgb> {
        let mut pixels = Vec::with_capacity(block.area() as usize);
        for y in block.y..block.bottom() {
            for x in block.x..block.right() {
                pixels.push(computer.color_at(x, y));
            }
        }
        pixels
    }

    /// Render every pixel on the calling thread.
    pub fn render_single_threaded(&mut self) {
        let full = PixelRect::new(0, 0, self.raster.width(), self.raster.height());
        let pixels = Self::render_block(&self.computer, &full);
        self.raster.blit(&full, &pixels);
    }

    /// Render across one worker per hardware thread (minimum one).
    ///
    /// The raster is partitioned into column blocks; workers claim block
    /// indices from a shared counter with fetch-add, so each block is
    /// computed by exactly one worker. Completed blocks come back over a
    /// channel and are written into the raster by the receiving side,
    /// which also drives the progress sink once per block. Returns only
    /// after every worker has joined; the result is pixel-identical to
    /// [`render_single_threaded`](Self::render_single_threaded).
    pub fn render<P: ProgressSink>(&mut self, progress: &mut P) {
        let blocks = column_blocks(self.raster.width(), self.raster.height(), BLOCK_COUNT);
        let workers = num_cpus::get().max(1);
        debug!("rendering {} blocks on {} workers", blocks.len(), workers);

        let next_block = AtomicUsize::new(0);
        let next_block = &next_block;
        let blocks = &blocks;
        let computer = &self.computer;
        let raster = &mut self.raster;
        let (sender, receiver) = channel::unbounded::<BlockResult>();

        crossbeam::thread::scope(|scope| {
            for _ in 0..workers {
                let sender = sender.clone();
                scope.spawn(move |_| loop {
                    let index = next_block.fetch_add(1, Ordering::SeqCst);
                    if index >= blocks.len() {
                        break;
                    }
                    let pixels = Self::render_block(computer, &blocks[index]);
                    if sender.send(BlockResult { index, pixels }).is_err() {
                        break;
                    }
                });
            }
            // Close the assembly side's copy so the receive loop ends once
            // the workers are done.
            drop(sender);

            let total = blocks.len();
            let mut completed = 0;
            for result in receiver {
                raster.blit(&blocks[result.index], &result.pixels);
                completed += 1;
                progress.block_complete(completed, total);
            }
        })
        .expect("render worker panicked");
    }

    /// Serialize the raster to a PNG file.
    pub fn write_png(&self, path: &Path) -> Result<(), Error> {
        self.raster.write_png(path)
    }
}
