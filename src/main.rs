//! Crawl Archive CLI
//!
//! Analytics dashboard over Dungeon Crawl Stone Soup crawl logs.
//! Browses preference, death and win-rate chapters in the terminal, or
//! writes them out as a JSON report with SVG charts.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use crawl_archive::commands::{
    display_schema, display_version, execute_browse, execute_report, print_chapter, print_summary,
    validate_args, validate_config, validate_report_file, ReportArgs,
};
use crawl_archive::dashboard::Chapter;
use crawl_archive::utils::config::{AnalysisConfig, DEFAULT_LOG_FILE, MIN_SAMPLE_SIZE, PLACE_LIMIT, TOP_N};
use env_logger::Env;
use std::path::PathBuf;

/// Crawl Archive - death and victory analytics for DCSS
#[derive(Parser, Debug)]
#[command(name = "crawl-archive")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Crawl log CSV to analyse
    #[arg(short, long, global = true, env = "CRAWL_LOG", default_value = DEFAULT_LOG_FILE)]
    log: PathBuf,

    /// Minimum games before a category is reported
    #[arg(long, global = true, default_value_t = MIN_SAMPLE_SIZE)]
    min_samples: usize,

    /// Number of entries in ranked tables
    #[arg(long, global = true, default_value_t = TOP_N)]
    top_n: usize,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Show headline numbers (intro page)
    Summary,

    /// Print one analysis chapter
    Chapter {
        /// Chapter to show
        #[arg(value_enum)]
        chapter: ChapterArg,
    },

    /// Navigate the dashboard interactively
    Browse,

    /// Write a JSON report of every chapter
    Report {
        /// Output path for JSON report
        #[arg(short, long, default_value = "report.json")]
        output: PathBuf,

        /// Directory for SVG bar charts (optional)
        #[arg(short, long)]
        charts: Option<PathBuf>,

        /// Print headline summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ChapterArg {
    Preferences,
    Deaths,
    WinRates,
}

impl From<ChapterArg> for Chapter {
    fn from(arg: ChapterArg) -> Self {
        match arg {
            ChapterArg::Preferences => Chapter::Preferences,
            ChapterArg::Deaths => Chapter::Deaths,
            ChapterArg::WinRates => Chapter::WinRates,
        }
    }
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let config = AnalysisConfig {
        min_samples: cli.min_samples,
        top_n: cli.top_n,
        place_limit: PLACE_LIMIT,
    };

    // Execute command
    match cli.command {
        Commands::Summary => {
            print_summary(&cli.log)?;
        }

        Commands::Chapter { chapter } => {
            validate_config(&config)?;
            print_chapter(&cli.log, chapter.into(), &config)?;
        }

        Commands::Browse => {
            validate_config(&config)?;
            execute_browse(&cli.log, &config)?;
        }

        Commands::Report {
            output,
            charts,
            summary,
        } => {
            let args = ReportArgs {
                log_path: cli.log,
                output_json: output,
                chart_dir: charts,
                config,
                print_summary: summary,
            };

            // Validate args first
            validate_args(&args)?;

            execute_report(args)?;
        }

        Commands::Validate { file } => {
            validate_report_file(&file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
