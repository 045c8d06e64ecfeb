use crate::dashboard::render::render_intro;
use crate::dashboard::{render_chapter, Chapter};
use crate::output::read_report;
use crate::parser::load_crawl_log;
use crate::utils::config::{AnalysisConfig, SCHEMA_VERSION};
use anyhow::{Context, Result};
use std::path::Path;

/// Print the intro page headline metrics
pub fn print_summary(log_path: &Path) -> Result<()> {
    let dataset = load_crawl_log(log_path)
        .with_context(|| format!("Failed to load crawl log {}", log_path.display()))?;

    print!("{}", render_intro(&dataset));
    Ok(())
}

/// Print one analysis chapter
pub fn print_chapter(log_path: &Path, chapter: Chapter, config: &AnalysisConfig) -> Result<()> {
    let dataset = load_crawl_log(log_path)
        .with_context(|| format!("Failed to load crawl log {}", log_path.display()))?;

    print!("{}", render_chapter(chapter, &dataset, config));
    Ok(())
}

/// Validate a report JSON file
pub fn validate_report_file(file_path: &Path) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(file_path)?;

    if report.version != SCHEMA_VERSION {
        anyhow::bail!(
            "Unsupported report version {} (expected {})",
            report.version,
            SCHEMA_VERSION
        );
    }

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Source: {}", report.source);
    println!("  Games: {}", report.summary.total_games);
    println!("  Win rate: {:.2}%", report.summary.win_rate);
    println!("  Killers ranked: {}", report.deaths.killers.len());
    println!("  Generated at: {}", report.generated_at);

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Crawl Archive Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string            - Schema version (e.g., '1.0.0')");
        println!("  source: string             - Crawl log path");
        println!("  min_samples: number        - Sample cutoff for cross-tabs and win rates");
        println!("  top_n: number              - Length of ranked tables");
        println!("  summary: object            - Games, wins, win rate, top race, top killer");
        println!("  preferences: object");
        println!("    races/classes/gods: array - {{category, count, percentage}}");
        println!("    race_gods: object        - {{columns, rows: [{{category, samples, shares}}]}}");
        println!("  deaths: object");
        println!("    killers/one_shots/places: array - {{category, count, percentage}}");
        println!("    levels: array            - {{level, deaths}}");
        println!("    floors: array            - {{tier, lords: [{{place, killer, kills, secondary, danger}}]}}");
        println!("  win_rates: object");
        println!("    races/classes/gods: array - {{category, plays, wins, win_rate}}");
        println!("  generated_at: string       - ISO 8601 timestamp");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Crawl Archive v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Death and victory analytics for Dungeon Crawl Stone Soup game logs.");
}
