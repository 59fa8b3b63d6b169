use clap::Parser;
use kernel_bench::core::report;
use kernel_bench::domain::ports::ConfigProvider;
use kernel_bench::utils::monitor::SystemMonitor;
use kernel_bench::utils::{logger, validation::Validate};
use kernel_bench::{
    BenchError, CalibratingExecutor, CliConfig, KernelBenchmarks, KernelReport, SystemClock,
    TomlConfig, WriterConsole,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting kernel-bench");
    tracing::debug!("CLI config: {:?}", cli);

    let loaded = cli.load().and_then(|config| {
        config.validate()?;
        Ok(config)
    });

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            exit_on_failure("Configuration validation failed", &e);
            return Ok(());
        }
    };

    tracing::debug!("Resolved config: {:?}", config);

    let mut monitor = SystemMonitor::new(config.monitoring_enabled());
    if monitor.is_enabled() {
        tracing::info!("🔍 System monitoring enabled");
    }
    monitor.log_stats("Before benchmarks");

    let report = match run_kernel(&config) {
        Ok(report) => report,
        Err(e) => {
            exit_on_failure("Kernel benchmarks failed", &e);
            return Ok(());
        }
    };

    monitor.log_final_stats();

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = report::emit(&report, &config, &mut stdout) {
        exit_on_failure("Writing the kernel report failed", &e);
    }

    Ok(())
}

fn run_kernel(config: &TomlConfig) -> kernel_bench::Result<KernelReport> {
    let console = WriterConsole::new(std::io::stdout());
    let executor = CalibratingExecutor::from_config(SystemClock::new(), config);

    KernelBenchmarks::new(console, executor)
        .with_sieve_size(config.sieve_size())
        .run()
}

/// Logs `e` and exits with its severity's code; low severity returns instead.
fn exit_on_failure(stage: &str, e: &BenchError) {
    tracing::error!(
        "❌ {}: {} (Category: {:?}, Severity: {:?})",
        stage,
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    let exit_code = e.severity().exit_code();
    if exit_code > 0 {
        std::process::exit(exit_code);
    }
}
