use crate::core::sieve::{Sieve, DEFAULT_SIEVE_SIZE};
use crate::domain::model::{KernelReport, KERNEL_SUITE};
use crate::domain::ports::{Benchmark, Console, Executor};
use crate::utils::error::Result;
use chrono::Utc;

pub const BANNER: &str = "Kernel Benchmarks:";

/// Driver for the kernel benchmark suite: prints the banner, then hands one
/// fresh [`Sieve`] to the executor.
pub struct KernelBenchmarks<C: Console, E: Executor> {
    console: C,
    executor: E,
    sieve_size: usize,
}

impl<C: Console, E: Executor> KernelBenchmarks<C, E> {
    pub fn new(console: C, executor: E) -> Self {
        Self {
            console,
            executor,
            sieve_size: DEFAULT_SIEVE_SIZE,
        }
    }

    pub fn with_sieve_size(mut self, sieve_size: usize) -> Self {
        self.sieve_size = sieve_size;
        self
    }

    pub fn run(&mut self) -> Result<KernelReport> {
        let started_at = Utc::now();
        tracing::info!("🚀 Running {} (sieve size {})", KERNEL_SUITE, self.sieve_size);

        self.console.msg(BANNER)?;
        self.console.lf()?;

        let mut sieve = Sieve::with_size(self.sieve_size);
        let result = self.executor.perform(&mut sieve, &mut self.console)?;

        Ok(KernelReport {
            suite: KERNEL_SUITE.to_string(),
            started_at,
            finished_at: Utc::now(),
            attempted: vec![sieve.name().to_string()],
            results: result.into_iter().collect(),
        })
    }

    pub fn into_parts(self) -> (C, E) {
        (self.console, self.executor)
    }
}
