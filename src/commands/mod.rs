//! CLI command implementations.
//!
//! Commands orchestrate the loader, aggregators and outputs to perform
//! user tasks.

pub mod browse;
pub mod models;
pub mod report;
pub mod utils;

// Re-export main command functions
pub use browse::{execute_browse, run_browser};
pub use models::ReportArgs;
pub use report::{execute_report, validate_args, validate_config};
pub use utils::{display_schema, display_version, print_chapter, print_summary, validate_report_file};
