use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments for the crash-report tool.
///
/// The tool builds crash reports with the configured collector set. It is
/// used to inspect what a report looks like on a given host and to create
/// configuration files.
#[derive(Parser, Debug)]
#[command(name = "crash-report", about = "Collect a diagnostic crash report")]
pub struct Args {
    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to configuration YAML file
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a default configuration file
    InitConfig {
        /// Path to save the configuration file
        #[arg(default_value = crate::constants::DEFAULT_CONFIG_PATH)]
        path: PathBuf,
    },

    /// Build a report for a synthetic error
    Sample {
        /// Message of the synthetic error
        #[arg(short, long, default_value = "sample failure")]
        message: String,

        /// Context lines wrapped around the error, innermost first
        #[arg(long = "context")]
        context: Vec<String>,
    },
}
