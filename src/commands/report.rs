//! Report command implementation.
//!
//! The report command:
//! 1. Loads and normalizes the crawl log
//! 2. Computes every chapter's tables
//! 3. Writes the JSON report
//! 4. Writes SVG charts (if requested)

use super::models::ReportArgs;
use crate::aggregator::build_report;
use crate::output::{text, write_report, write_report_charts};
use crate::parser::load_crawl_log;
use crate::utils::config::AnalysisConfig;
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the report command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Crawl log missing, malformed, or lacking columns
/// * File write errors
pub fn execute_report(args: ReportArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Step 1/3: Loading crawl log...");
    let dataset = load_crawl_log(&args.log_path).with_context(|| {
        format!("Failed to load crawl log {}", args.log_path.display())
    })?;

    info!("Step 2/3: Aggregating chapters...");
    let source = args.log_path.display().to_string();
    let report = build_report(&dataset, &args.config, &source);

    debug!(
        "Report: {} killers, {} floor tiers, {} race win rates",
        report.deaths.killers.len(),
        report.deaths.floors.len(),
        report.win_rates.races.len()
    );

    info!("Step 3/3: Writing output files...");
    write_report(&report, &args.output_json).context("Failed to write report JSON")?;
    info!("✓ Report written to: {}", args.output_json.display());

    if let Some(chart_dir) = &args.chart_dir {
        write_report_charts(&report, chart_dir).context("Failed to write SVG charts")?;
    }

    if args.print_summary {
        println!("{}", text::heading("REPORT SUMMARY"));
        println!("{}", text::summary_block(&report.summary));
    }

    info!(
        "Report completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

/// Validate report arguments
///
/// **Public** - can be called before execute_report for early validation
pub fn validate_args(args: &ReportArgs) -> Result<()> {
    validate_config(&args.config)?;

    if args.output_json.as_os_str().is_empty() {
        anyhow::bail!("Output path cannot be empty");
    }

    if let Some(dir) = &args.chart_dir {
        if dir.as_os_str().is_empty() {
            anyhow::bail!("Chart directory cannot be empty");
        }
    }

    Ok(())
}

/// Validate aggregation thresholds
///
/// **Public** - shared by every command that aggregates
pub fn validate_config(config: &AnalysisConfig) -> Result<()> {
    if config.top_n == 0 {
        anyhow::bail!("top_n must be greater than 0");
    }

    if config.min_samples == 0 {
        anyhow::bail!("min_samples must be greater than 0");
    }

    if config.place_limit == 0 {
        anyhow::bail!("place_limit must be greater than 0");
    }

    Ok(())
}
