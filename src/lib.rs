//! Crawl Archive
//!
//! Death and victory analytics for Dungeon Crawl Stone Soup game logs.
//!
//! This crate provides the core implementation for the
//! `crawl-archive` CLI tool: loading a crawl log CSV, normalizing its
//! rows, aggregating them into chart tables, and presenting the results
//! as a terminal dashboard, a JSON report, or SVG charts.
//!
//! ## Getting Started
//!
//! ```bash
//! crawl-archive --log crawllog.csv browse
//! crawl-archive report --output report.json --charts charts/
//! ```

pub mod aggregator;
pub mod commands;
pub mod dashboard;
pub mod output;
pub mod parser;
pub mod utils;
