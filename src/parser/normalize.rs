//! Field normalization for crawl log rows.
//!
//! Fills sentinels and derives the columns every chart groups by:
//! - `is_win` from the kill type and the terminal message
//! - `race_grouped`, collapsing Draconian colour variants
//! - `formatted_place`, adding the depth for the main dungeon

use super::schema::{RawRecord, RunRecord};
use crate::utils::config::{
    DRACONIAN, ESCAPE_TOKEN, MAIN_DUNGEON, NO_GOD, UNKNOWN_KILLER, WINNING_KILL_TYPE,
};

/// Normalize one raw CSV row
///
/// **Public** - called by the loader for every row
pub fn normalize_record(raw: RawRecord) -> RunRecord {
    let mut record = RunRecord {
        race: non_empty(raw.race),
        class: non_empty(raw.cls),
        level: to_whole(raw.xl),
        god: fill_sentinel(raw.god, NO_GOD),
        killer: fill_sentinel(raw.killer, UNKNOWN_KILLER),
        place: non_empty(raw.place),
        place_depth: to_whole(raw.lvl),
        kill_type: non_empty(raw.ktyp),
        terminal_message: non_empty(raw.tmsg),
        turn_damage: raw.tdam.filter(|v| v.is_finite()),
        max_hp: raw.mhp.filter(|v| v.is_finite()),
        is_win: false,
        race_grouped: None,
        formatted_place: None,
    };

    derive_fields(&mut record);
    record
}

/// Recompute derived fields of already-normalized records
///
/// **Public** - derived values depend only on base fields, so this is a
/// no-op on records produced by `normalize_record`
pub fn renormalize(records: &mut [RunRecord]) {
    for record in records {
        if record.god.is_empty() {
            record.god = NO_GOD.to_string();
        }
        if record.killer.is_empty() {
            record.killer = UNKNOWN_KILLER.to_string();
        }
        derive_fields(record);
    }
}

fn derive_fields(record: &mut RunRecord) {
    record.is_win = is_win(
        record.kill_type.as_deref(),
        record.terminal_message.as_deref(),
    );
    record.race_grouped = record.race.as_deref().map(group_race);
    record.formatted_place = record
        .place
        .as_deref()
        .map(|place| format_place(place, record.place_depth));
}

/// Decide whether a run ended in victory
///
/// **Public** - either signal is enough: a "winning" kill type, or a
/// terminal message mentioning an escape (any case)
pub fn is_win(kill_type: Option<&str>, message: Option<&str>) -> bool {
    let won = kill_type.is_some_and(|k| k == WINNING_KILL_TYPE);
    let escaped = message.is_some_and(|m| m.to_lowercase().contains(ESCAPE_TOKEN));
    won || escaped
}

/// Collapse every Draconian colour into one race bucket
pub fn group_race(race: &str) -> String {
    if race.contains(DRACONIAN) {
        DRACONIAN.to_string()
    } else {
        race.to_string()
    }
}

/// Build a location label such as "D:7" or "Lair"
///
/// Only the main dungeon carries a depth suffix.
pub fn format_place(place: &str, depth: Option<u32>) -> String {
    match depth {
        Some(depth) if place == MAIN_DUNGEON => format!("{}:{}", place, depth),
        _ => place.to_string(),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn fill_sentinel(value: Option<String>, sentinel: &str) -> String {
    non_empty(value).unwrap_or_else(|| sentinel.to_string())
}

// Depths and levels are exported as floats when the column has gaps
fn to_whole(value: Option<f64>) -> Option<u32> {
    value
        .filter(|v| v.is_finite() && *v >= 0.0)
        .map(|v| v.trunc() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(race: &str, ktyp: &str, tmsg: &str) -> RawRecord {
        RawRecord {
            race: Some(race.to_string()),
            cls: Some("Fighter".to_string()),
            ktyp: Some(ktyp.to_string()),
            tmsg: Some(tmsg.to_string()),
            place: Some("D".to_string()),
            lvl: Some(3.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_is_win_signals() {
        assert!(is_win(Some("winning"), Some("")));
        assert!(is_win(Some("quit"), Some("You escaped with the Orb")));
        assert!(is_win(Some("mon"), Some("ESCAPED from the dungeon")));
        assert!(!is_win(Some("quit"), Some("gave up")));
        assert!(!is_win(None, None));
        assert!(!is_win(Some("Winning"), None));
    }

    #[test]
    fn test_group_race() {
        assert_eq!(group_race("Red Draconian"), "Draconian");
        assert_eq!(group_race("Pale Draconian"), group_race("Red Draconian"));
        assert_eq!(group_race("Draconian"), "Draconian");
        assert_eq!(group_race("Minotaur"), "Minotaur");
    }

    #[test]
    fn test_format_place() {
        assert_eq!(format_place("D", Some(7)), "D:7");
        assert_eq!(format_place("D", None), "D");
        assert_eq!(format_place("Orc", Some(2)), "Orc");
        assert_eq!(format_place("Orc", None), "Orc");
    }

    #[test]
    fn test_sentinels_filled() {
        let record = normalize_record(raw("Human", "mon", "slain by an orc"));
        assert_eq!(record.god, NO_GOD);
        assert_eq!(record.killer, UNKNOWN_KILLER);

        let mut blank = raw("Human", "mon", "");
        blank.god = Some("  ".to_string());
        assert_eq!(normalize_record(blank).god, NO_GOD);
    }

    #[test]
    fn test_float_depth_is_truncated() {
        let mut row = raw("Human", "mon", "");
        row.lvl = Some(7.0);
        row.xl = Some(12.0);
        let record = normalize_record(row);
        assert_eq!(record.formatted_place.as_deref(), Some("D:7"));
        assert_eq!(record.level, Some(12));
    }

    #[test]
    fn test_negative_or_nan_depth_dropped() {
        let mut row = raw("Human", "mon", "");
        row.lvl = Some(f64::NAN);
        assert_eq!(normalize_record(row.clone()).place_depth, None);
        row.lvl = Some(-1.0);
        assert_eq!(normalize_record(row).formatted_place.as_deref(), Some("D"));
    }

    #[test]
    fn test_renormalize_is_idempotent() {
        let mut records = vec![
            normalize_record(raw("Grey Draconian", "winning", "")),
            normalize_record(raw("Minotaur", "quit", "escaped")),
            normalize_record(raw("Human", "mon", "killed by a rat")),
        ];
        let before = records.clone();

        renormalize(&mut records);
        assert_eq!(records, before);

        renormalize(&mut records);
        assert_eq!(records, before);
    }
}
