use anyhow::Result;
use clap::Parser;
use sbomscan::{
    audit,
    config::Config,
    model::{ScanReport, ScanStatus},
    output::{format_report, print_report, OutputFormat},
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Exit codes for CI integration
mod exit_codes {
    pub const CLEAN: u8 = 0;
    pub const INFECTED: u8 = 1;
    pub const INPUT_ERROR: u8 = 2;
}

#[derive(Parser)]
#[command(name = "sbomscan")]
#[command(
    author,
    version,
    about = "Scan SBOMs and npm lockfiles for denylisted packages"
)]
struct Cli {
    /// SBOM or lockfile to scan (CycloneDX, SPDX, package-lock.json, package.json)
    manifest: Option<PathBuf>,

    /// Text file listing vulnerable packages, one per line
    denylist: Option<PathBuf>,

    /// Output format (text, table, json)
    #[arg(short, long)]
    format: Option<String>,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Read configuration from this file instead of the default location
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(exit_codes::INPUT_ERROR)
        }
    }
}

fn init_logging(verbose: bool) {
    let log_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn run(cli: Cli) -> Result<u8> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let manifest = cli
        .manifest
        .unwrap_or_else(|| PathBuf::from(&config.default_manifest));
    let denylist = cli
        .denylist
        .unwrap_or_else(|| PathBuf::from(&config.default_denylist));
    let format_str = cli.format.unwrap_or(config.default_format.clone());
    let format = OutputFormat::from_str(&format_str).map_err(|e| anyhow::anyhow!(e))?;

    tracing::debug!(
        manifest = %manifest.display(),
        denylist = %denylist.display(),
        "starting scan"
    );
    let report = audit(&manifest, &denylist, &config.ignore);

    if let Some(path) = cli.output {
        std::fs::write(&path, format_report(&report, format)?)?;
        if format != OutputFormat::Json {
            println!("Report written to: {}", path.display());
        }
    } else {
        print_report(&report, format)?;
    }

    Ok(exit_code(&report))
}

fn exit_code(report: &ScanReport) -> u8 {
    match report.status {
        ScanStatus::Clean => exit_codes::CLEAN,
        ScanStatus::Infected => exit_codes::INFECTED,
        ScanStatus::NoDenylist | ScanStatus::Failed => exit_codes::INPUT_ERROR,
    }
}
