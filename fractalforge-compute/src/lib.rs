pub mod blocks;
pub mod engine;
pub mod point_compute;
pub mod progress;

pub use blocks::{column_blocks, BLOCK_COUNT};
pub use engine::MandelbrotEngine;
pub use point_compute::{Escape, PointComputer};
pub use progress::{ConsoleProgress, NoProgress, ProgressSink};

// Re-export core types for convenience
pub use fractalforge_core::*;
