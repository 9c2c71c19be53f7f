// SPDX-License-Identifier: PMPL-1.0-or-later

//! transloco-check: reports locale files and translation keys missing
//! relative to a reference locale.
//!
//! Exits with status 1 when anything is missing so it can gate CI.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;
use transloco_check::config::CheckConfig;
use transloco_check::report::{self, ReportOutputFormat};
use transloco_check::scan;

#[derive(Parser)]
#[command(name = "transloco-check")]
#[command(version)]
#[command(about = "Check that every locale file carries all keys of the reference locale")]
#[command(long_about = None)]
struct Cli {
    /// Root of the translation tree [default: ../src/assets/i18n]
    #[arg(value_name = "BASE_DIR")]
    base_directory: Option<PathBuf>,

    /// JSON or YAML file with reference_filename, required_filenames, base_directory
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Locale file treated as the source of truth [default: de.json]
    #[arg(short, long, value_name = "FILE")]
    reference: Option<String>,

    /// Locale files every translation directory must contain
    #[arg(long, value_name = "FILES", value_delimiter = ',')]
    require: Option<Vec<String>>,

    /// Report format
    #[arg(short, long, value_enum, default_value = "text")]
    format: ReportOutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Exit 0 even when translations are missing
    #[arg(long)]
    no_fail: bool,

    /// Log every directory and file checked
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

impl Cli {
    /// Defaults, then the config file, then flags
    fn resolve_config(&self) -> Result<CheckConfig> {
        let config = match &self.config {
            Some(path) => CheckConfig::load(path)?,
            None => CheckConfig::default(),
        }
        .with_overrides(
            self.base_directory.clone(),
            self.reference.clone(),
            self.require.clone(),
        );
        config.validate()?;
        Ok(config)
    }
}

fn init_logging(cli: &Cli) {
    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_ansi(!cli.no_color)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(&cli);

    let config = cli.resolve_config()?;
    tracing::debug!(
        "scanning {} (reference {}, {} required files)",
        config.base_directory.display(),
        config.reference_filename,
        config.required_filenames.len()
    );

    let scan_report = scan::run(&config)?;

    if let Some(output_path) = &cli.output {
        report::save_report(&scan_report, cli.format, output_path)?;
        println!("Report saved to: {}", output_path.display());
    } else {
        report::print_report(&scan_report, cli.format, !cli.no_color)?;
    }

    Ok(ExitCode::from(scan_report.exit_code(cli.no_fail)))
}
