//! Aggregation of normalized runs into chart tables.
//!
//! This module transforms a loaded dataset into:
//! - The death-only and one-shot views
//! - Frequency, cross-tab and win-rate tables
//! - Per-location killer rankings
//! - Chapter bundles and the full report

pub mod chapters;
pub mod filter;
pub mod floors;
pub mod metrics;
pub mod report;
pub mod summary;

// Re-export main types and functions
pub use chapters::{
    death_tables, preference_tables, win_rate_tables, DeathTables, PreferenceTables,
    WinRateTables,
};
pub use filter::{death_view, is_death, is_one_shot, one_shot_view};
pub use floors::{floor_lords, floor_lords_by_tier, tier_places, DangerLevel, FloorLord, Tier, TierFloors};
pub use metrics::{
    cross_tabulate, frequency_table, mode, one_shot_kills, ranked_counts, win_rates,
    CategoryShare, CrossTab, CrossTabRow, WinRate,
};
pub use report::{build_report, Report};
pub use summary::{level_histogram, summarize, LevelBucket, Summary};
