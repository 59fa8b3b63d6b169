use crate::core::kernel::BANNER;
use crate::domain::model::{KernelReport, OutputFormat};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use std::io::Write;
use std::path::Path;

pub fn render(report: &KernelReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(report)?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Text => {
            let mut text = format!("{}\n", BANNER);
            for name in &report.attempted {
                match report.results.iter().find(|result| &result.name == name) {
                    Some(result) => text.push_str(&format!("{} {}\n", name, result.score)),
                    None => text.push_str(&format!("{} no result\n", name)),
                }
            }
            Ok(text)
        }
    }
}

/// Writes the report where the configuration asks for it.
///
/// With an output path the rendered report goes to that file. Without one,
/// JSON goes to `stdout` and text is skipped, since the console already
/// printed it. Returns the path written, if any.
pub fn emit<P: ConfigProvider, W: Write>(
    report: &KernelReport,
    config: &P,
    stdout: &mut W,
) -> Result<Option<String>> {
    let format = config.output_format();

    match config.output_path() {
        Some(path) => {
            let rendered = render(report, format)?;
            if let Some(parent) = Path::new(path).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(path, rendered)?;
            tracing::info!("📁 Report saved to: {}", path);
            Ok(Some(path.to_string()))
        }
        None if format == OutputFormat::Json => {
            stdout.write_all(render(report, format)?.as_bytes())?;
            stdout.flush()?;
            Ok(None)
        }
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::toml_config::TomlConfig;
    use crate::domain::model::{BenchResult, KERNEL_SUITE};
    use crate::utils::error::BenchError;
    use chrono::Utc;
    use tempfile::TempDir;

    fn sample_report() -> KernelReport {
        KernelReport {
            suite: KERNEL_SUITE.to_string(),
            started_at: Utc::now(),
            finished_at: Utc::now(),
            attempted: vec!["Sieve".to_string()],
            results: vec![BenchResult {
                name: "Sieve".to_string(),
                iterations: 2048,
                elapsed_ms: 1010,
                overhead_ms: 10,
                net_ms: 1000,
                score: 2048,
                checksum: 45,
            }],
        }
    }

    #[test]
    fn test_render_text() {
        let text = render(&sample_report(), OutputFormat::Text).unwrap();
        assert_eq!(text, "Kernel Benchmarks:\nSieve 2048\n");
    }

    #[test]
    fn test_render_text_matches_console_without_result() {
        let mut report = sample_report();
        report.results.clear();

        let text = render(&report, OutputFormat::Text).unwrap();
        assert_eq!(text, "Kernel Benchmarks:\nSieve no result\n");
    }

    #[test]
    fn test_emit_text_file_without_result() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("kernel.txt");

        let mut report = sample_report();
        report.results.clear();
        let mut config = TomlConfig::default();
        config.output.path = Some(path.to_str().unwrap().to_string());

        emit(&report, &config, &mut Vec::<u8>::new()).unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "Kernel Benchmarks:\nSieve no result\n"
        );
    }

    #[test]
    fn test_emit_into_directory_is_critical_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = TomlConfig::default();
        config.output.format = OutputFormat::Json;
        config.output.path = Some(temp_dir.path().to_str().unwrap().to_string());

        let err = emit(&sample_report(), &config, &mut Vec::<u8>::new()).unwrap_err();

        assert!(matches!(err, BenchError::IoError(_)));
        assert_eq!(err.severity().exit_code(), 3);
    }

    #[test]
    fn test_render_json() {
        let json = render(&sample_report(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["suite"], "Kernel Benchmarks");
        assert_eq!(value["results"][0]["name"], "Sieve");
        assert_eq!(value["results"][0]["score"], 2048);
        assert_eq!(value["attempted"][0], "Sieve");
    }

    #[test]
    fn test_emit_text_without_path_writes_nothing() {
        let config = TomlConfig::default();
        let mut stdout = Vec::new();
        let written = emit(&sample_report(), &config, &mut stdout).unwrap();
        assert!(written.is_none());
        assert!(stdout.is_empty());
    }

    #[test]
    fn test_emit_json_to_stdout() {
        let mut config = TomlConfig::default();
        config.output.format = OutputFormat::Json;
        let mut stdout = Vec::new();

        emit(&sample_report(), &config, &mut stdout).unwrap();

        let report: KernelReport = serde_json::from_slice(&stdout).unwrap();
        assert_eq!(report.results.len(), 1);
    }

    #[test]
    fn test_emit_to_file_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("reports/kernel.json");

        let mut config = TomlConfig::default();
        config.output.format = OutputFormat::Json;
        config.output.path = Some(path.to_str().unwrap().to_string());
        let mut stdout = Vec::new();

        let written = emit(&sample_report(), &config, &mut stdout).unwrap();

        assert_eq!(written.as_deref(), path.to_str());
        assert!(stdout.is_empty());
        let saved: KernelReport =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved.results[0].checksum, 45);
    }
}
