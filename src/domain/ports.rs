use crate::domain::model::{BenchResult, OutputFormat};
use crate::utils::error::Result;

/// Character console the benchmark driver reports through.
pub trait Console {
    /// Writes `text` without a terminator.
    fn msg(&mut self, text: &str) -> Result<()>;
    /// Terminates the current line.
    fn lf(&mut self) -> Result<()>;
}

/// A benchmark kernel that can be timed in batches.
pub trait Benchmark {
    fn name(&self) -> &str;

    /// Runs the kernel `cnt` times and returns a value derived from the work.
    fn test(&mut self, cnt: u32) -> i32;

    /// Runs the loop skeleton of [`Benchmark::test`] without the kernel body.
    fn overhead(&mut self, cnt: u32) -> i32;
}

pub trait Executor {
    /// Measures `bench` and reports the outcome on `console`.
    ///
    /// Returns `Ok(None)` when no iteration count produced a usable timing.
    fn perform(
        &mut self,
        bench: &mut dyn Benchmark,
        console: &mut dyn Console,
    ) -> Result<Option<BenchResult>>;
}

pub trait Clock {
    fn time_millis(&self) -> u64;
}

pub trait ConfigProvider {
    fn min_ms(&self) -> u64;
    fn start_count(&self) -> u32;
    fn max_count(&self) -> u32;
    fn sieve_size(&self) -> usize;
    fn output_format(&self) -> OutputFormat;
    fn output_path(&self) -> Option<&str>;
}
