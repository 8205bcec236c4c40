//! colorscan - color literal scanner binary.

use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use colorscan_core::TailwindMode;
use tracing::error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use colorscan_cli::{Input, OutputFormat, Overrides, ScanConfig, ScanSummary, build_scanner, scan_inputs};

/// Report color literals (hex, rgb(), hsl() and named colors) in files
#[derive(Parser)]
#[command(name = "colorscan")]
#[command(version)]
struct Args {
    /// Files to scan; reads stdin when none are given
    files: Vec<PathBuf>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Tailwind palette mode (disabled, normal, lsp, both)
    #[arg(long)]
    tailwind: Option<TailwindMode>,

    /// Recognize every CSS color form
    #[arg(long)]
    css: bool,

    /// Do not recognize named colors
    #[arg(long)]
    no_names: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Enable JSON logging
    #[arg(long)]
    json_logs: bool,
}

fn setup_logging(level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .init();
    }
}

fn run(args: Args) -> anyhow::Result<ScanSummary> {
    let mut config = match &args.config {
        Some(path) => ScanConfig::load_or_default(Some(path.as_path()))
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ScanConfig::load_or_default(None).context("Failed to load default config")?,
    };
    config.apply(&Overrides {
        tailwind: args.tailwind,
        css: args.css,
        no_names: args.no_names,
        format: args.format,
    });

    let mut scanner = build_scanner(&config).context("Invalid scanner configuration")?;

    let inputs: Vec<Input> = if args.files.is_empty() {
        vec![Input::Stdin]
    } else {
        args.files.into_iter().map(Input::File).collect()
    };

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let summary = scan_inputs(&mut scanner, &inputs, config.output.format, &mut out)
        .context("Failed to write results")?;
    out.flush().context("Failed to write results")?;

    Ok(summary)
}

fn main() -> ExitCode {
    let args = Args::parse();

    setup_logging(&args.log_level, args.json_logs);

    match run(args) {
        Ok(summary) if summary.failed == 0 => ExitCode::SUCCESS,
        Ok(summary) => {
            error!("{} of {} inputs could not be read", summary.failed, summary.failed + summary.scanned);
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
