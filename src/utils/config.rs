//! Configuration and constants for the analysis pipeline.

/// Crawl log read when no `--log` path is given
pub const DEFAULT_LOG_FILE: &str = "crawllog.csv";

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Categories with fewer samples than this are dropped from cross-tabs and win rates
pub const MIN_SAMPLE_SIZE: usize = 5;

/// Number of entries kept in ranked tables
pub const TOP_N: usize = 10;

/// Number of locations kept in the death place distribution
pub const PLACE_LIMIT: usize = 30;

// Columns the loader refuses to work without
pub const REQUIRED_COLUMNS: &[&str] = &["race", "cls", "place", "lvl", "ktyp", "tmsg"];

// Sentinels written by the normalizer for absent values
pub const NO_GOD: &str = "No God";
pub const UNKNOWN_KILLER: &str = "Unknown";

// Win detection
pub const WINNING_KILL_TYPE: &str = "winning";
pub const ESCAPE_TOKEN: &str = "escaped";

/// Any race containing this token collapses into one bucket
pub const DRACONIAN: &str = "Draconian";

/// The only branch whose depth is shown in place labels
pub const MAIN_DUNGEON: &str = "D";

/// Killer values that mark a non-lethal end of a game:
/// victory, quit, logged out, abandoned, wizard mode, starvation,
/// unresolved, miscast.
pub const DEATH_EXCLUSIONS: &[&str] = &[
    "winning",
    "quit",
    "user",
    "leaving",
    "wizmode",
    "starvation",
    "Unknown",
    "miscast",
];

/// Races left out of the race/god heatmap
pub const HEATMAP_EXCLUDED_RACES: &[&str] = &["Minotaur"];

// Location tiers, matched by substring against formatted places
pub const EARLY_PLACES: &[&str] = &[
    "D:1", "D:2", "D:3", "D:4", "D:5", "D:6", "D:7", "D:8", "D:9", "D:10", "D:11", "D:12",
    "D:13", "D:14", "D:15", "Temple",
];
pub const MID_PLACES: &[&str] = &["Lair", "Orc", "Snake", "Spider", "Shoals", "Swamp"];
pub const LATE_PLACES: &[&str] = &[
    "Vaults", "Depths", "Elf", "Crypt", "Slime", "Zot", "Hell", "Pan", "Tomb", "Abyss",
];

// Kill counts at which a floor lord is rated more dangerous
pub const HIGH_DANGER_KILLS: usize = 50;
pub const EXTREME_DANGER_KILLS: usize = 100;

/// Number of runner-up killers listed per location
pub const SECONDARY_KILLERS: usize = 2;

/// Runtime thresholds for the aggregators
///
/// **Public** - built from the constants above, overridable from the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Minimum plays/samples before a category is reported
    pub min_samples: usize,

    /// Entries kept in ranked tables
    pub top_n: usize,

    /// Entries kept in the place distribution
    pub place_limit: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_samples: MIN_SAMPLE_SIZE,
            top_n: TOP_N,
            place_limit: PLACE_LIMIT,
        }
    }
}
