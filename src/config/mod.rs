pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::model::OutputFormat;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "cli")]
use toml_config::TomlConfig;

/// Command line options. Every tuning flag overrides the matching TOML key.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "kernel-bench")]
#[command(about = "Runs the kernel benchmarks (Sieve) and reports iterations per second")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Minimum net run time of the accepted calibration round
    #[arg(long)]
    pub min_ms: Option<u64>,

    /// Iteration count of the first calibration round
    #[arg(long)]
    pub start_count: Option<u32>,

    /// Give up once the iteration count exceeds this
    #[arg(long)]
    pub max_count: Option<u32>,

    /// Number of sieve flags
    #[arg(long)]
    pub sieve_size: Option<usize>,

    /// Report format written after the console lines
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log CPU and memory usage around the run")]
    pub monitor: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the TOML file named by `--config` (or the defaults) and applies
    /// the command line overrides.
    pub fn load(&self) -> Result<TomlConfig> {
        let base = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        Ok(self.apply_overrides(base))
    }

    pub fn apply_overrides(&self, mut config: TomlConfig) -> TomlConfig {
        if let Some(min_ms) = self.min_ms {
            config.execution.min_ms = min_ms;
        }
        if let Some(start_count) = self.start_count {
            config.execution.start_count = start_count;
        }
        if let Some(max_count) = self.max_count {
            config.execution.max_count = max_count;
        }
        if let Some(size) = self.sieve_size {
            config.sieve.size = size;
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if let Some(path) = &self.output {
            config.output.path = Some(path.clone());
        }
        if self.monitor {
            config.monitoring.enabled = true;
        }
        config
    }
}
