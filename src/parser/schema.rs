//! Row schema for crawl logs.
//!
//! `RawRecord` mirrors the CSV columns as written by the log exporter.
//! `RunRecord` is the normalized form every aggregator works on.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One CSV row, exactly as found in the crawl log
///
/// Every field is optional: the loader checks required headers up front,
/// but individual cells may still be empty. Numeric cells that fail to
/// parse (or hold `"7.0"`-style floats) are read as `f64` or dropped.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub race: Option<String>,

    #[serde(default)]
    pub cls: Option<String>,

    /// Experience level at the end of the game
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub xl: Option<f64>,

    #[serde(default)]
    pub god: Option<String>,

    #[serde(default)]
    pub killer: Option<String>,

    /// Dungeon branch
    #[serde(default)]
    pub place: Option<String>,

    /// Depth within the branch
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub lvl: Option<f64>,

    /// Kill type, e.g. "winning", "mon", "quit"
    #[serde(default)]
    pub ktyp: Option<String>,

    /// Terminal message
    #[serde(default)]
    pub tmsg: Option<String>,

    /// Damage taken on the final turn
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub tdam: Option<f64>,

    /// Maximum hit points
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub mhp: Option<f64>,
}

/// A normalized game run
///
/// `god` and `killer` are always filled (sentinels replace absent values).
/// `is_win`, `race_grouped` and `formatted_place` are derived from the other
/// fields by the normalizer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunRecord {
    pub race: Option<String>,
    pub class: Option<String>,
    pub level: Option<u32>,
    pub god: String,
    pub killer: String,
    pub place: Option<String>,
    pub place_depth: Option<u32>,
    pub kill_type: Option<String>,
    pub terminal_message: Option<String>,
    pub turn_damage: Option<f64>,
    pub max_hp: Option<f64>,

    // Derived
    pub is_win: bool,
    pub race_grouped: Option<String>,
    pub formatted_place: Option<String>,
}

/// Categorical columns the aggregators can group by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Race,
    RaceGrouped,
    Class,
    God,
    Killer,
    Place,
    FormattedPlace,
    KillType,
}

impl Column {
    /// Value of this column for a record, `None` when the cell was empty
    pub fn value<'a>(&self, record: &'a RunRecord) -> Option<&'a str> {
        match self {
            Column::Race => record.race.as_deref(),
            Column::RaceGrouped => record.race_grouped.as_deref(),
            Column::Class => record.class.as_deref(),
            Column::God => Some(record.god.as_str()),
            Column::Killer => Some(record.killer.as_str()),
            Column::Place => record.place.as_deref(),
            Column::FormattedPlace => record.formatted_place.as_deref(),
            Column::KillType => record.kill_type.as_deref(),
        }
    }

    /// Human-readable column title
    pub fn title(&self) -> &'static str {
        match self {
            Column::Race => "Race",
            Column::RaceGrouped => "Race",
            Column::Class => "Class",
            Column::God => "God",
            Column::Killer => "Killer",
            Column::Place => "Branch",
            Column::FormattedPlace => "Place",
            Column::KillType => "Kill type",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
