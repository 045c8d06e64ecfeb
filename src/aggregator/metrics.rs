//! Grouped statistics over runs.
//!
//! Frequency tables, cross-tabulated shares and win rates. All functions
//! are pure and independent of input order: equal counts (or rates) are
//! ranked by category name.

use super::filter::one_shot_view;
use crate::parser::schema::{Column, RunRecord};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A category with its count and share of the non-empty total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub category: String,
    pub count: usize,
    /// Percentage of all non-empty values of the column
    pub percentage: f64,
}

/// Row-normalized contingency table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CrossTab {
    /// Column categories, alphabetical
    pub columns: Vec<String>,

    /// Rows with enough samples, most sampled first
    pub rows: Vec<CrossTabRow>,
}

/// One row of a `CrossTab`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossTabRow {
    pub category: String,
    pub samples: usize,
    /// Percentage per column, aligned with `CrossTab::columns`; sums to 100
    pub shares: Vec<f64>,
}

impl CrossTab {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Share for a given row/column pair, if both exist
    pub fn share(&self, row: &str, column: &str) -> Option<f64> {
        let col_index = self.columns.iter().position(|c| c == column)?;
        self.rows
            .iter()
            .find(|r| r.category == row)
            .and_then(|r| r.shares.get(col_index).copied())
    }
}

/// Play and win counts for a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WinRate {
    pub category: String,
    pub plays: usize,
    pub wins: usize,
    /// Wins as a percentage of plays
    pub win_rate: f64,
}

/// Count non-empty values of a column, most frequent first
///
/// **Public** - basis for frequency tables and modes
pub fn ranked_counts<'a, I>(records: I, column: Column) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a RunRecord>,
{
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in records {
        if let Some(value) = column.value(record) {
            *counts.entry(value).or_insert(0) += 1;
        }
    }

    // BTreeMap yields names in order and the sort is stable,
    // so ties stay alphabetical
    let mut ranked: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(value, count)| (value.to_string(), count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

/// Most frequent value of a column
pub fn mode<'a, I>(records: I, column: Column) -> Option<String>
where
    I: IntoIterator<Item = &'a RunRecord>,
{
    ranked_counts(records, column)
        .into_iter()
        .next()
        .map(|(category, _)| category)
}

/// Share of each category among non-empty values, top N
///
/// **Public** - drives every "preference" and "top killer" chart
///
/// # Arguments
/// * `records` - Runs to count
/// * `column` - Column to group by
/// * `top_n` - Number of categories to keep
pub fn frequency_table<'a, I>(records: I, column: Column, top_n: usize) -> Vec<CategoryShare>
where
    I: IntoIterator<Item = &'a RunRecord>,
{
    let ranked = ranked_counts(records, column);
    let total: usize = ranked.iter().map(|(_, count)| count).sum();

    debug!(
        "Frequency table for {:?}: {} categories over {} values",
        column,
        ranked.len(),
        total
    );

    ranked
        .into_iter()
        .take(top_n)
        .map(|(category, count)| CategoryShare {
            category,
            count,
            percentage: percentage(count, total),
        })
        .collect()
}

/// Cross-tabulate two columns, normalizing each row to 100%
///
/// **Public** - used for the race/god heatmap
///
/// Rows with fewer than `min_samples` paired values are dropped. Only
/// column categories present in the kept rows appear, so unlike a full
/// crosstab there are no all-zero columns for values seen only in dropped rows.
pub fn cross_tabulate<'a, I>(
    records: I,
    row_column: Column,
    col_column: Column,
    min_samples: usize,
) -> CrossTab
where
    I: IntoIterator<Item = &'a RunRecord>,
{
    let mut cells: BTreeMap<&str, BTreeMap<&str, usize>> = BTreeMap::new();
    for record in records {
        if let (Some(row), Some(col)) = (row_column.value(record), col_column.value(record)) {
            *cells.entry(row).or_default().entry(col).or_insert(0) += 1;
        }
    }

    let mut kept: Vec<(&str, usize, BTreeMap<&str, usize>)> = cells
        .into_iter()
        .map(|(row, counts)| (row, counts.values().sum::<usize>(), counts))
        .filter(|(_, samples, _)| *samples >= min_samples)
        .collect();
    kept.sort_by(|a, b| b.1.cmp(&a.1));

    let mut columns: Vec<String> = kept
        .iter()
        .flat_map(|(_, _, counts)| counts.keys().map(|c| c.to_string()))
        .collect();
    columns.sort();
    columns.dedup();

    let rows = kept
        .into_iter()
        .map(|(row, samples, counts)| CrossTabRow {
            category: row.to_string(),
            samples,
            shares: columns
                .iter()
                .map(|col| percentage(counts.get(col.as_str()).copied().unwrap_or(0), samples))
                .collect(),
        })
        .collect();

    CrossTab { columns, rows }
}

/// Win rate per category, best first
///
/// **Public** - drives the win-rate chapter
///
/// # Arguments
/// * `records` - Runs to group
/// * `column` - Column to group by
/// * `min_samples` - Categories with fewer plays are dropped
/// * `top_n` - Number of categories to keep
pub fn win_rates<'a, I>(records: I, column: Column, min_samples: usize, top_n: usize) -> Vec<WinRate>
where
    I: IntoIterator<Item = &'a RunRecord>,
{
    let mut groups: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
    for record in records {
        if let Some(value) = column.value(record) {
            let entry = groups.entry(value).or_insert((0, 0));
            entry.0 += 1;
            if record.is_win {
                entry.1 += 1;
            }
        }
    }

    let mut rates: Vec<WinRate> = groups
        .into_iter()
        .filter(|(_, (plays, _))| *plays >= min_samples)
        .map(|(category, (plays, wins))| WinRate {
            category: category.to_string(),
            plays,
            wins,
            win_rate: percentage(wins, plays),
        })
        .collect();

    rates.sort_by(|a, b| b.win_rate.total_cmp(&a.win_rate));
    rates.truncate(top_n);
    rates
}

/// Killers ranked by one-shot kills among the given deaths
///
/// A one-shot is a final blow that met or exceeded the victim's max HP.
pub fn one_shot_kills<'a, I>(deaths: I, top_n: usize) -> Vec<CategoryShare>
where
    I: IntoIterator<Item = &'a RunRecord>,
{
    let shots = one_shot_view(deaths);
    debug!("{} one-shot kills", shots.len());
    frequency_table(shots, Column::Killer, top_n)
}

/// Percentage helper, zero for an empty total
pub fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (part as f64 / total as f64) * 100.0
    }
}
