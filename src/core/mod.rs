pub mod execute;
pub mod kernel;
pub mod report;
pub mod sieve;

pub use crate::domain::model::{BenchResult, KernelReport, OutputFormat};
pub use crate::domain::ports::{Benchmark, Clock, ConfigProvider, Console, Executor};
pub use crate::utils::error::Result;
