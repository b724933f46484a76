// file: src/main.rs
// description: commandline application entry point
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use parse2json::utils::logging::{format_info, format_success};
use parse2json::{Config, PipelineOrchestrator};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "parse2json")]
#[command(version)]
#[command(about = "Convert nmap, dig and traceroute output files into JSON", long_about = None)]
struct Cli {
    #[arg(short, long, value_name = "FILE", env = "PARSE2JSON_CONFIG")]
    config: Option<PathBuf>,

    /// Directory to scan; overrides scan.root
    #[arg(short, long, value_name = "DIR")]
    root: Option<PathBuf>,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if !cli.color {
        colored::control::set_override(false);
    }
    parse2json::utils::logging::init_logger(cli.color, cli.verbose);

    let mut config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(root) = cli.root {
        config.scan.root = root;
    }

    info!("Scanning {}", config.scan.root.display());

    let stats = PipelineOrchestrator::new(config)
        .with_color(cli.color)
        .run()
        .context("Conversion aborted")?;

    println!(
        "{}",
        format_success(&format!(
            "Converted {} of {} files",
            stats.files_converted, stats.files_discovered
        ))
    );
    println!(
        "{}",
        format_info(&format!(
            "scan: {}, query: {}, trace: {}",
            stats.scan_records, stats.query_records, stats.trace_records
        ))
    );

    Ok(())
}
