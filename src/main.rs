use anyhow::Context;
use secure_erase_export::adapters::outbound::console::StderrProgressReporter;
use secure_erase_export::adapters::outbound::filesystem::{
    FileSystemArchiver, FileSystemExportWriter, FileSystemReportSource,
};
use secure_erase_export::adapters::outbound::formatters::TabDelimitedFormatter;
use secure_erase_export::adapters::outbound::logging::{
    init_logging, parse_level, LoggingOptions, TracingActivityLog,
};
use secure_erase_export::adapters::outbound::watch::ShutdownFlag;
use secure_erase_export::application::dto::SweepRequest;
use secure_erase_export::application::factories::TriggerFactory;
use secure_erase_export::application::use_cases::{ProcessReportsUseCase, WatchReportsUseCase};
use secure_erase_export::cli::Args;
use secure_erase_export::config::{load_config_from_path, ConfigFile};
use secure_erase_export::shared::error::{ExitCode, ExportError};
use secure_erase_export::shared::path_safety::validate_directory;
use secure_erase_export::shared::Result;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::Level;

fn main() {
    match run() {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn run() -> Result<ExitCode> {
    // Parse command-line arguments (clap exits with code 2 on usage errors)
    let args = Args::parse_args();

    let config = load_config_from_path(&args.config)?;
    init_logging(&logging_options(&args, &config)?)?;

    let input_directory = config.input_directory();
    validate_input_directory(&input_directory)?;

    let request = SweepRequest::new(input_directory.clone()).excluding(args.config.clone());

    // Create adapters (Dependency Injection)
    let progress_reporter = if std::io::stderr().is_terminal() {
        StderrProgressReporter::new()
    } else {
        StderrProgressReporter::quiet()
    };
    let use_case = ProcessReportsUseCase::new(
        FileSystemReportSource::new(),
        TabDelimitedFormatter::new(),
        FileSystemExportWriter::new(config.output_directory()),
        FileSystemArchiver::new(config.archive_directory()),
        TracingActivityLog::new(),
        progress_reporter,
    );

    if !args.watch {
        let summary = use_case.execute(&request)?;
        eprintln!("📋 {}", summary);
        if summary.has_failures() {
            eprintln!("⚠️  Warning: Some files could not be processed and were left in the input directory.");
            eprintln!("💡 Hint: See the log for details; they are retried on the next run.");
            return Ok(ExitCode::FilesFailed);
        }
        return Ok(ExitCode::Success);
    }

    let shutdown = install_shutdown_handler()?;
    let poll_interval = args
        .poll_interval
        .map(Duration::from_secs)
        .unwrap_or_else(|| config.poll_interval());
    let trigger = TriggerFactory::create(args.trigger, &input_directory, poll_interval, shutdown)?;

    eprintln!(
        "👀 Watching {} ({} trigger). Press Ctrl-C to stop.",
        input_directory.display(),
        args.trigger
    );
    let mut watcher = WatchReportsUseCase::new(use_case, trigger, TracingActivityLog::new());
    let total = watcher.execute(&request);
    eprintln!("✅ Stopped. {}", total);

    Ok(ExitCode::Success)
}

fn logging_options(args: &Args, config: &ConfigFile) -> Result<LoggingOptions> {
    let level = match config.logging.level.as_deref() {
        Some(level) => parse_level(level)?,
        None => Level::INFO,
    };
    let log_file = args
        .log_file
        .clone()
        .or_else(|| config.logging.log_file.as_ref().map(PathBuf::from));
    Ok(LoggingOptions { log_file, level })
}

fn validate_input_directory(path: &Path) -> Result<()> {
    validate_directory(path, "input directory").map_err(|e| {
        ExportError::InvalidDirectory {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
        .into()
    })
}

/// Sets the returned flag when Ctrl-C is received.
///
/// The signal is awaited on a single-threaded tokio runtime owned by a
/// dedicated thread; the rest of the program stays synchronous.
fn install_shutdown_handler() -> Result<ShutdownFlag> {
    let shutdown = Arc::new(AtomicBool::new(false));
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start signal handler runtime")?;

    let flag = shutdown.clone();
    thread::Builder::new()
        .name("shutdown-signal".to_string())
        .spawn(move || {
            runtime.block_on(async {
                match tokio::signal::ctrl_c().await {
                    Ok(()) => {
                        tracing::info!("Shutdown requested; finishing the current sweep");
                        flag.store(true, Ordering::SeqCst);
                    }
                    Err(e) => tracing::error!("Unable to listen for Ctrl-C: {}", e),
                }
            });
        })
        .context("Failed to spawn signal handler thread")?;

    Ok(shutdown)
}
