use std::io::{self, Write};

/// Observer for render progress.
///
/// Advisory only: implementations receive one call per completed block and
/// must not influence the rendered output.
pub trait ProgressSink {
    fn block_complete(&mut self, completed: usize, total: usize);
}

/// Discards all progress updates.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn block_complete(&mut self, _completed: usize, _total: usize) {}
}

/// Prints an in-place percentage readout to stdout.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleProgress;

impl ProgressSink for ConsoleProgress {
    fn block_complete(&mut self, completed: usize, total: usize) {
        print!("\rProcessing... {}%", completed * 100 / total.max(1));
        io::stdout().flush().ok();
    }
}
