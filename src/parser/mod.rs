//! Crawl log loading and normalization.
//!
//! This module handles:
//! - Reading the CSV log and checking its header
//! - Filling sentinels and deriving win/race/place columns
//! - Defining the row schema shared by the aggregators

pub mod crawl_log;
pub mod normalize;
pub mod schema;

// Re-export main types
pub use crawl_log::{load_crawl_log, read_crawl_log, Dataset};
pub use normalize::{format_place, group_race, is_win, normalize_record, renormalize};
pub use schema::{Column, RawRecord, RunRecord};
