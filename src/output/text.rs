//! Terminal rendering of chart tables.
//!
//! Bar charts are drawn with block characters; colours come from `colored`
//! and switch off automatically when stdout is not a terminal.

use crate::aggregator::floors::{DangerLevel, FloorLord, TierFloors};
use crate::aggregator::metrics::{CategoryShare, CrossTab, WinRate};
use crate::aggregator::summary::{LevelBucket, Summary};
use colored::{Color, Colorize};
use std::fmt::Write as _;

const BAR_WIDTH: usize = 40;
const LABEL_WIDTH: usize = 24;

/// Section heading underlined with `=`
pub fn heading(title: &str) -> String {
    format!(
        "\n{}\n{}\n",
        title.bold().red(),
        "=".repeat(title.chars().count())
    )
}

/// Horizontal bar chart of percentages
pub fn share_chart(title: &str, table: &[CategoryShare], color: Color) -> String {
    let bars: Vec<(String, f64, String)> = table
        .iter()
        .map(|s| (s.category.clone(), s.percentage, format!("{:.1}%", s.percentage)))
        .collect();
    bar_chart(title, &bars, color)
}

/// Horizontal bar chart of raw counts
pub fn count_chart(title: &str, table: &[CategoryShare], color: Color) -> String {
    let bars: Vec<(String, f64, String)> = table
        .iter()
        .map(|s| (s.category.clone(), s.count as f64, s.count.to_string()))
        .collect();
    bar_chart(title, &bars, color)
}

/// Horizontal bar chart of win rates with play counts
pub fn win_rate_chart(title: &str, table: &[WinRate], color: Color) -> String {
    let bars: Vec<(String, f64, String)> = table
        .iter()
        .map(|w| {
            (
                w.category.clone(),
                w.win_rate,
                format!("{:.1}% ({}/{})", w.win_rate, w.wins, w.plays),
            )
        })
        .collect();
    bar_chart(title, &bars, color)
}

fn bar_chart(title: &str, bars: &[(String, f64, String)], color: Color) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", title.bold());

    if bars.is_empty() {
        let _ = writeln!(out, "  {}", "No data".dimmed());
        return out;
    }

    let max = bars.iter().map(|(_, v, _)| *v).fold(0.0_f64, f64::max);
    for (label, value, text) in bars {
        let len = if max > 0.0 {
            ((value / max) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        let _ = writeln!(
            out,
            "  {:>width$} {} {}",
            truncate(label, LABEL_WIDTH),
            "█".repeat(len).color(color),
            text,
            width = LABEL_WIDTH
        );
    }
    out
}

/// Percentage grid, one row per row category
pub fn heatmap(title: &str, table: &CrossTab) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", title.bold());

    if table.is_empty() {
        let _ = writeln!(out, "  {}", "No category has enough samples".dimmed());
        return out;
    }

    let _ = write!(out, "  {:>14}", "");
    for column in &table.columns {
        let _ = write!(out, " {:>6}", truncate(column, 6));
    }
    out.push('\n');

    for row in &table.rows {
        let _ = write!(out, "  {:>14}", truncate(&row.category, 14));
        for share in &row.shares {
            let cell = format!("{:>6.0}", share);
            let cell = if *share >= 50.0 {
                cell.bright_yellow().bold()
            } else if *share >= 20.0 {
                cell.yellow()
            } else if *share > 0.0 {
                cell.normal()
            } else {
                cell.dimmed()
            };
            let _ = write!(out, " {}", cell);
        }
        out.push('\n');
    }
    out
}

/// Deaths per experience level
pub fn level_histogram(title: &str, buckets: &[LevelBucket]) -> String {
    let bars: Vec<(String, f64, String)> = buckets
        .iter()
        .map(|b| (format!("XL {}", b.level), b.deaths as f64, b.deaths.to_string()))
        .collect();
    bar_chart(title, &bars, Color::Red)
}

/// Headline metrics block
pub fn summary_block(summary: &Summary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "  {:<14} {}", "Expeditions".cyan(), summary.total_games);
    let _ = writeln!(out, "  {:<14} {:.2}%", "Win rate".cyan(), summary.win_rate);
    let _ = writeln!(
        out,
        "  {:<14} {}",
        "Most picked".cyan(),
        summary.top_race.as_deref().unwrap_or("-")
    );
    let _ = writeln!(
        out,
        "  {:<14} {}",
        "Deadliest".cyan(),
        summary.top_killer.as_deref().unwrap_or("-")
    );
    out
}

/// Floor lords of one tier
pub fn floor_lords(tier: &TierFloors) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", format!("{} floors", tier.tier).bold());

    if tier.lords.is_empty() {
        let _ = writeln!(out, "  {}", "No data".dimmed());
        return out;
    }

    for lord in &tier.lords {
        let _ = writeln!(out, "{}", floor_lord_line(lord));
    }
    out
}

fn floor_lord_line(lord: &FloorLord) -> String {
    let beware = if lord.secondary.is_empty() {
        "none".to_string()
    } else {
        lord.secondary.join(", ")
    };
    format!(
        "  {:>9} {:<28} {:>5} kills {}  beware: {}",
        lord.place.cyan().bold(),
        truncate(&lord.killer, 28),
        lord.kills,
        danger_marker(lord.danger),
        beware.dimmed()
    )
}

fn danger_marker(danger: DangerLevel) -> String {
    match danger {
        DangerLevel::Low => "!".red().to_string(),
        DangerLevel::High => "!!".red().bold().to_string(),
        DangerLevel::Extreme => "!!!".bright_red().bold().to_string(),
    }
}

/// Shorten a label to at most `max` characters
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let mut short: String = text.chars().take(max.saturating_sub(1)).collect();
        short.push('…');
        short
    }
}
