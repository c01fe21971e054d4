use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use crash_collector::cli::{Args, Commands};
use crash_collector::config::{load_or_create_config, ReportConfig};
use crash_collector::handler::report_error;
use crash_collector::report::Report;

fn main() -> Result<()> {
    // Parse arguments
    let args = Args::parse();

    // Initialize logging
    initialize_logging(args.verbose)?;

    match &args.command {
        Commands::InitConfig { path } => {
            info!("Creating default configuration file at {}", path.display());
            ReportConfig::create_default_config_file(path)?;
            info!("Configuration created successfully");
            Ok(())
        }
        Commands::Sample { message, context } => {
            let config = load_or_create_config(args.config.as_deref())?;
            let registry = config.build_registry();
            info!("Collectors: {}", registry.names().join(", "));

            let error = context
                .iter()
                .fold(anyhow!(message.clone()), |error, line| error.context(line.clone()));

            let (report, summary) = report_error(&registry, &error);
            info!(
                "Report {} collected ({} of {} collectors succeeded)",
                report.report_id,
                summary.succeeded.len(),
                summary.collectors_run()
            );

            write_report(&report, args.output.as_deref())
        }
    }
}

/// Initialize logging with the specified verbosity level
fn initialize_logging(verbose: bool) -> Result<()> {
    let log_level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    TermLogger::init(
        log_level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .context("Failed to initialize logger")?;
    Ok(())
}

/// Print the report as JSON, or save it when an output path is given
fn write_report(report: &Report, output: Option<&Path>) -> Result<()> {
    let json = report.to_json_pretty()?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create directory: {}", parent.display())
                    })?;
                }
            }
            fs::write(path, json)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            info!("Report written to {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}
