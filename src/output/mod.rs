//! Output writers and renderers for analysis results.
//!
//! This module handles presenting data in various formats:
//! - JSON reports
//! - SVG bar charts
//! - Terminal charts and tables

pub mod json;
pub mod svg;
pub mod text;

// Re-export main functions
pub use json::{read_report, report_to_string, write_report};
pub use svg::{render_bar_chart, write_report_charts, write_svg, BarChart, ValueFormat};
