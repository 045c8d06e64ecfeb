//! Full analysis report, as written to JSON.

use super::chapters::{
    death_tables, preference_tables, win_rate_tables, DeathTables, PreferenceTables,
    WinRateTables,
};
use super::summary::{summarize, Summary};
use crate::parser::crawl_log::Dataset;
use crate::utils::config::{AnalysisConfig, SCHEMA_VERSION};
use serde::{Deserialize, Serialize};

/// Top-level report structure written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Schema version for compatibility checking
    pub version: String,

    /// Crawl log the report was computed from
    pub source: String,

    /// Minimum sample size used for cross-tabs and win rates
    pub min_samples: usize,

    /// Length of ranked tables
    pub top_n: usize,

    pub summary: Summary,
    pub preferences: PreferenceTables,
    pub deaths: DeathTables,
    pub win_rates: WinRateTables,

    /// Timestamp when report was generated
    pub generated_at: String,
}

/// Compute every chapter into one report
///
/// **Public** - used by the report command
pub fn build_report(dataset: &Dataset, config: &AnalysisConfig, source: &str) -> Report {
    use chrono::Utc;

    Report {
        version: SCHEMA_VERSION.to_string(),
        source: source.to_string(),
        min_samples: config.min_samples,
        top_n: config.top_n,
        summary: summarize(dataset),
        preferences: preference_tables(dataset, config),
        deaths: death_tables(dataset, config),
        win_rates: win_rate_tables(dataset, config),
        generated_at: Utc::now().to_rfc3339(),
    }
}
