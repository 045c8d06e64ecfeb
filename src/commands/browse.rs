//! Interactive dashboard command.
//!
//! Loads the crawl log once, then redraws pages as the user navigates.

use crate::dashboard::{render_load_failure, render_page, transition, Action, Page};
use crate::parser::{load_crawl_log, Dataset};
use crate::utils::config::AnalysisConfig;
use anyhow::{Context, Result};
use log::{debug, warn};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Execute the browse command on stdin/stdout
///
/// **Public** - main entry point called from main.rs
///
/// A crawl log that cannot be loaded produces an empty-state page, not an
/// error.
pub fn execute_browse(log_path: &Path, config: &AnalysisConfig) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let dataset = match load_crawl_log(log_path) {
        Ok(dataset) => dataset,
        Err(e) => {
            warn!("Crawl log unavailable: {}", e);
            write!(out, "{}", render_load_failure(&e))?;
            return Ok(());
        }
    };

    let stdin = io::stdin();
    run_browser(&dataset, config, stdin.lock(), &mut out)
}

/// Drive the page state machine from line-based input
///
/// **Public** - generic over I/O so it can be scripted
///
/// Returns when the user quits or the input ends.
pub fn run_browser<R: BufRead, W: Write>(
    dataset: &Dataset,
    config: &AnalysisConfig,
    input: R,
    out: &mut W,
) -> Result<()> {
    let mut page = Page::default();
    write!(out, "{}", render_page(page, dataset, config))?;
    prompt(out)?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;

        let action = match line.parse::<Action>() {
            Ok(action) => action,
            Err(e) => {
                writeln!(out, "{}", e)?;
                prompt(out)?;
                continue;
            }
        };

        match transition(page, action) {
            Some(next) => {
                debug!("{:?} --{:?}--> {:?}", page, action, next);
                page = next;
                write!(out, "{}", render_page(page, dataset, config))?;
                prompt(out)?;
            }
            None => break,
        }
    }

    Ok(())
}

fn prompt<W: Write>(out: &mut W) -> Result<()> {
    write!(out, "> ")?;
    out.flush()?;
    Ok(())
}
