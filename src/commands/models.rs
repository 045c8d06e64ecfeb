use crate::utils::config::{AnalysisConfig, DEFAULT_LOG_FILE};
use std::path::PathBuf;

/// Arguments for the report command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ReportArgs {
    /// Crawl log to analyse
    pub log_path: PathBuf,

    /// Output path for JSON report
    pub output_json: PathBuf,

    /// Directory for SVG charts (optional)
    pub chart_dir: Option<PathBuf>,

    /// Aggregation thresholds
    pub config: AnalysisConfig,

    /// Print the headline summary to stdout
    pub print_summary: bool,
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from(DEFAULT_LOG_FILE),
            output_json: PathBuf::from("report.json"),
            chart_dir: None,
            config: AnalysisConfig::default(),
            print_summary: false,
        }
    }
}
