pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::cli::{SystemClock, WriterConsole};
pub use crate::config::toml_config::TomlConfig;
pub use crate::core::{execute::CalibratingExecutor, kernel::KernelBenchmarks, sieve::Sieve};
pub use crate::domain::model::{BenchResult, KernelReport, OutputFormat};
pub use crate::utils::error::{BenchError, Result};
