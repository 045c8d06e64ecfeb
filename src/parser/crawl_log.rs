//! Crawl log loader.
//!
//! Reads the CSV export of a game log server into a `Dataset`.
//! Failures come back as a typed `LoadError` so callers can tell a missing
//! file from a broken one.

use super::normalize::normalize_record;
use super::schema::{RawRecord, RunRecord};
use crate::aggregator::filter::is_death;
use crate::utils::config::REQUIRED_COLUMNS;
use crate::utils::error::LoadError;
use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, info, warn};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// All normalized runs of one crawl log
///
/// Loaded once per session and never mutated. The death-only view is
/// computed at construction time and handed out as a borrowed iterator.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    runs: Vec<RunRecord>,
    death_rows: Vec<usize>,
}

impl Dataset {
    /// Build a dataset from normalized records
    pub fn from_records(runs: Vec<RunRecord>) -> Self {
        let death_rows = runs
            .iter()
            .enumerate()
            .filter(|(_, run)| is_death(run))
            .map(|(index, _)| index)
            .collect();

        Self { runs, death_rows }
    }

    /// Every run in the log
    pub fn runs(&self) -> &[RunRecord] {
        &self.runs
    }

    /// Runs that ended in an actual death
    pub fn deaths(&self) -> impl Iterator<Item = &RunRecord> + Clone + '_ {
        self.death_rows.iter().map(move |&index| &self.runs[index])
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    pub fn death_count(&self) -> usize {
        self.death_rows.len()
    }
}

/// Load and normalize a crawl log from disk
///
/// **Public** - main entry point for loading
///
/// # Arguments
/// * `path` - Path to the CSV file
///
/// # Errors
/// * `LoadError::FileNotFound` - No file at `path`
/// * `LoadError::MissingColumn` - Header lacks a required column
/// * `LoadError::Parse` - Header unreadable or no row could be parsed
pub fn load_crawl_log(path: impl AsRef<Path>) -> Result<Dataset, LoadError> {
    let path = path.as_ref();

    info!("Loading crawl log: {}", path.display());

    if !path.is_file() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let file = File::open(path)?;
    let dataset = read_crawl_log(file)?;

    info!(
        "Loaded {} runs ({} deaths)",
        dataset.len(),
        dataset.death_count()
    );

    Ok(dataset)
}

/// Parse a crawl log from any reader
///
/// **Public** - used by `load_crawl_log` and tests
///
/// Short rows are kept, their missing trailing fields read as empty.
/// Malformed rows are skipped with a warning. The load only fails when the
/// header is unusable or every data row is malformed.
pub fn read_crawl_log<R: Read>(reader: R) -> Result<Dataset, LoadError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    check_required_columns(&headers)?;

    let mut runs = Vec::new();
    let mut skipped = 0usize;

    for (index, row) in csv_reader.deserialize::<RawRecord>().enumerate() {
        match row {
            Ok(raw) => runs.push(normalize_record(raw)),
            Err(e) => {
                // Log but don't fail - one bad line should not hide the rest
                warn!("Skipping malformed row {}: {}", index + 1, e);
                skipped += 1;
            }
        }
    }

    if runs.is_empty() && skipped > 0 {
        return Err(LoadError::Parse(format!(
            "All {} data rows failed to parse",
            skipped
        )));
    }

    debug!("Parsed {} rows, skipped {}", runs.len(), skipped);

    Ok(Dataset::from_records(runs))
}

/// Ensure every required column is present in the header
///
/// **Private** - internal validation
fn check_required_columns(headers: &StringRecord) -> Result<(), LoadError> {
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == *column) {
            return Err(LoadError::MissingColumn(column.to_string()));
        }
    }
    Ok(())
}
