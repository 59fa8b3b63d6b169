use crate::core::execute::{DEFAULT_MAX_COUNT, DEFAULT_MIN_MS, DEFAULT_START_COUNT};
use crate::core::sieve::DEFAULT_SIEVE_SIZE;
use crate::domain::model::OutputFormat;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{BenchError, Result};
use crate::utils::validation::{self, Validate};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MAX_SIEVE_SIZE: usize = 1_000_000;
pub const COUNT_LIMIT: u32 = 1 << 31;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub execution: ExecutionConfig,
    pub sieve: SieveConfig,
    pub output: OutputConfig,
    pub monitoring: MonitoringConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutionConfig {
    pub min_ms: u64,
    pub start_count: u32,
    pub max_count: u32,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            min_ms: DEFAULT_MIN_MS,
            start_count: DEFAULT_START_COUNT,
            max_count: DEFAULT_MAX_COUNT,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SieveConfig {
    pub size: usize,
}

impl Default for SieveConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIEVE_SIZE,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| BenchError::ConfigError {
            message: format!("cannot read '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| BenchError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| BenchError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_positive_number("execution.min_ms", self.execution.min_ms, 1)?;
        validation::validate_range(
            "execution.start_count",
            self.execution.start_count,
            1,
            self.execution.max_count.max(1),
        )?;
        validation::validate_range(
            "execution.max_count",
            self.execution.max_count,
            1,
            COUNT_LIMIT,
        )?;
        validation::validate_range("sieve.size", self.sieve.size, 1, MAX_SIEVE_SIZE)?;

        if let Some(path) = &self.output.path {
            validation::validate_path("output.path", path)?;
        }

        Ok(())
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.enabled
    }
}

impl ConfigProvider for TomlConfig {
    fn min_ms(&self) -> u64 {
        self.execution.min_ms
    }

    fn start_count(&self) -> u32 {
        self.execution.start_count
    }

    fn max_count(&self) -> u32 {
        self.execution.max_count
    }

    fn sieve_size(&self) -> usize {
        self.sieve.size
    }

    fn output_format(&self) -> OutputFormat {
        self.output.format
    }

    fn output_path(&self) -> Option<&str> {
        self.output.path.as_deref()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config.min_ms(), DEFAULT_MIN_MS);
        assert_eq!(config.start_count(), 1);
        assert_eq!(config.max_count(), 1 << 30);
        assert_eq!(config.sieve_size(), 100);
        assert_eq!(config.output_format(), OutputFormat::Text);
        assert!(config.output_path().is_none());
        assert!(!config.monitoring_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[execution]
min_ms = 200
start_count = 16
max_count = 65536

[sieve]
size = 8190

[output]
format = "json"
path = "./kernel-report.json"

[monitoring]
enabled = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.min_ms(), 200);
        assert_eq!(config.start_count(), 16);
        assert_eq!(config.max_count(), 65536);
        assert_eq!(config.sieve_size(), 8190);
        assert_eq!(config.output_format(), OutputFormat::Json);
        assert_eq!(config.output_path(), Some("./kernel-report.json"));
        assert!(config.monitoring_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("KERNEL_BENCH_TEST_REPORT", "/tmp/sieve.json");

        let toml_content = r#"
[output]
path = "${KERNEL_BENCH_TEST_REPORT}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.output_path(), Some("/tmp/sieve.json"));

        std::env::remove_var("KERNEL_BENCH_TEST_REPORT");
    }

    #[test]
    fn test_unset_env_var_is_left_in_place() {
        let toml_content = r#"
[output]
path = "${KERNEL_BENCH_SURELY_UNSET_VAR}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.output_path(), Some("${KERNEL_BENCH_SURELY_UNSET_VAR}"));
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let err = TomlConfig::from_toml_str("[execution\nmin_ms = 1").unwrap_err();
        assert!(matches!(err, BenchError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let err = TomlConfig::from_toml_str("[output]\nformat = \"xml\"\n").unwrap_err();
        assert!(matches!(err, BenchError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_validation() {
        let zero_min = TomlConfig::from_toml_str("[execution]\nmin_ms = 0\n").unwrap();
        assert!(zero_min.validate().is_err());

        let start_above_max =
            TomlConfig::from_toml_str("[execution]\nstart_count = 64\nmax_count = 32\n").unwrap();
        assert!(start_above_max.validate().is_err());

        let huge_sieve = TomlConfig::from_toml_str("[sieve]\nsize = 2000000\n").unwrap();
        assert!(huge_sieve.validate().is_err());

        let empty_path = TomlConfig::from_toml_str("[output]\npath = \"\"\n").unwrap();
        assert!(empty_path.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[sieve]\nsize = 500\n").unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.sieve_size(), 500);
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = TomlConfig::from_file("/nonexistent/kernel-bench.toml").unwrap_err();
        assert!(matches!(err, BenchError::ConfigError { .. }));
    }
}
