use crate::domain::model::BenchResult;
use crate::domain::ports::{Benchmark, Clock, ConfigProvider, Console, Executor};
use crate::utils::error::{BenchError, Result};

pub const DEFAULT_MIN_MS: u64 = 1000;
pub const DEFAULT_START_COUNT: u32 = 1;
pub const DEFAULT_MAX_COUNT: u32 = 1 << 30;

/// Doubles the iteration count until one batch, minus its loop overhead,
/// runs for at least `min_ms`, then reports iterations per second.
pub struct CalibratingExecutor<C: Clock> {
    clock: C,
    min_ms: u64,
    start_count: u32,
    max_count: u32,
}

impl<C: Clock> CalibratingExecutor<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            min_ms: DEFAULT_MIN_MS,
            start_count: DEFAULT_START_COUNT,
            max_count: DEFAULT_MAX_COUNT,
        }
    }

    pub fn from_config<P: ConfigProvider>(clock: C, config: &P) -> Self {
        Self {
            clock,
            min_ms: config.min_ms(),
            start_count: config.start_count(),
            max_count: config.max_count(),
        }
    }

    pub fn with_min_ms(mut self, min_ms: u64) -> Self {
        self.min_ms = min_ms;
        self
    }

    pub fn with_counts(mut self, start_count: u32, max_count: u32) -> Self {
        self.start_count = start_count;
        self.max_count = max_count;
        self
    }

    fn timed<F: FnOnce() -> i32>(&self, f: F) -> (u64, i32) {
        let start = self.clock.time_millis();
        let value = f();
        let stop = self.clock.time_millis();
        (stop.saturating_sub(start), value)
    }

    fn report_no_result(
        &self,
        name: &str,
        console: &mut dyn Console,
    ) -> Result<Option<BenchResult>> {
        tracing::warn!(
            "⚠️ {} never reached {}ms below {} iterations",
            name,
            self.min_ms,
            self.max_count
        );
        console.msg(name)?;
        console.msg(" no result")?;
        console.lf()?;
        Ok(None)
    }
}

impl<C: Clock> Executor for CalibratingExecutor<C> {
    fn perform(
        &mut self,
        bench: &mut dyn Benchmark,
        console: &mut dyn Console,
    ) -> Result<Option<BenchResult>> {
        let name = bench.name().to_string();

        if self.start_count == 0 {
            return Err(BenchError::ExecutionError {
                benchmark: name,
                message: "start count must be at least 1".to_string(),
            });
        }

        let mut cnt = self.start_count;
        loop {
            if cnt > self.max_count {
                return self.report_no_result(&name, console);
            }

            let (elapsed_ms, checksum) = self.timed(|| bench.test(cnt));
            let (overhead_ms, _) = self.timed(|| bench.overhead(cnt));
            let net_ms = elapsed_ms.saturating_sub(overhead_ms);

            tracing::debug!(
                "{}: cnt={} elapsed={}ms overhead={}ms net={}ms",
                name,
                cnt,
                elapsed_ms,
                overhead_ms,
                net_ms
            );

            if net_ms > 0 && net_ms >= self.min_ms {
                let iterations = u64::from(cnt);
                let score = iterations * 1000 / net_ms;

                tracing::info!(
                    "⏱️ {}: {} iterations/s ({} iterations in {}ms)",
                    name,
                    score,
                    cnt,
                    net_ms
                );

                console.msg(&name)?;
                console.msg(" ")?;
                console.msg(&score.to_string())?;
                console.lf()?;

                return Ok(Some(BenchResult {
                    name,
                    iterations,
                    elapsed_ms,
                    overhead_ms,
                    net_ms,
                    score,
                    checksum,
                }));
            }

            cnt = match cnt.checked_mul(2) {
                Some(next) => next,
                None => return self.report_no_result(&name, console),
            };
        }
    }
}
