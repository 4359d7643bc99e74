// ABOUTME: CLI that scrapes one judge problem into <root>/BOJ-<id>/ with config.yaml and testcases/.
// ABOUTME: Reports every written file, warning and error from the scrape as a status line.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, Result};
use boj_problem::options::{DEFAULT_ORIGIN, DEFAULT_TEST_ROOT};
use boj_problem::{ByteSize, ScrapeReport, Scraper};
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Download a problem's limits and sample test cases.
#[derive(Parser, Debug)]
#[command(name = "boj")]
#[command(about = "Scrape a problem's limits and samples into a local test directory", long_about = None)]
struct Args {
    /// Problem identifier, e.g. 1000
    problem_id: String,

    /// Directory the BOJ-<id> folder is created in
    #[arg(long, default_value = DEFAULT_TEST_ROOT)]
    root: PathBuf,

    /// Judge origin the problem page is fetched from
    #[arg(long, default_value = DEFAULT_ORIGIN)]
    origin: String,

    /// Parse a saved problem page instead of fetching it
    #[arg(long)]
    html: Option<PathBuf>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

fn run(args: &Args) -> Result<ScrapeReport> {
    let scraper = Scraper::builder()
        .origin(&args.origin)
        .test_root(&args.root)
        .build()?;

    let report = match &args.html {
        Some(path) => {
            let html = fs::read_to_string(path)
                .map_err(|e| anyhow!("failed to read {:?}: {}", path, e))?;
            scraper.scrape_html(&args.problem_id, &html)?
        }
        None => scraper.scrape(&args.problem_id)?,
    };
    Ok(report)
}

fn log_report(report: &ScrapeReport) {
    for diagnostic in &report.diagnostics {
        if diagnostic.is_error() {
            error!("❌ {}", diagnostic);
        } else {
            warn!("⚠️ {}", diagnostic);
        }
    }

    for write in report.writes.iter().filter(|w| w.is_ok()) {
        info!("✅ Added {}", write.file_name());
    }

    let limit = &report.config.limit;
    info!(
        "{}: time {} ms, memory {} -> {} ({} written, {} failed)",
        report.problem_id,
        limit.cpu_time,
        ByteSize(limit.memory),
        report.problem_dir.display(),
        report.files_written(),
        report.files_failed(),
    );
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging();

    match run(&args) {
        Ok(report) => {
            log_report(&report);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("❌ {}", err);
            ExitCode::from(1)
        }
    }
}
