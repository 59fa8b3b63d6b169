use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const KERNEL_SUITE: &str = "Kernel Benchmarks";

/// Outcome of one calibrated benchmark measurement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchResult {
    pub name: String,
    /// Iteration count of the accepted calibration round.
    pub iterations: u64,
    pub elapsed_ms: u64,
    pub overhead_ms: u64,
    pub net_ms: u64,
    /// Iterations per second.
    pub score: u64,
    pub checksum: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KernelReport {
    pub suite: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    /// Names of every benchmark handed to the executor, in run order.
    #[serde(default)]
    pub attempted: Vec<String>,
    pub results: Vec<BenchResult>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
