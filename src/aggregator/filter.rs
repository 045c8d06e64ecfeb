//! Row filters: the death-only view and one-shot kills.

use crate::parser::schema::RunRecord;
use crate::utils::config::DEATH_EXCLUSIONS;

/// True when the run ended in an actual death
///
/// Exclusion-based: any killer not listed in `DEATH_EXCLUSIONS` counts,
/// so new monster names need no list update. Match is exact and
/// case-sensitive.
pub fn is_death(record: &RunRecord) -> bool {
    !DEATH_EXCLUSIONS.contains(&record.killer.as_str())
}

/// Death-only view over a set of runs
pub fn death_view(records: &[RunRecord]) -> Vec<&RunRecord> {
    records.iter().filter(|r| is_death(r)).collect()
}

/// True when the final blow alone met or exceeded max HP
///
/// Runs missing either value are never one-shots.
pub fn is_one_shot(record: &RunRecord) -> bool {
    match (record.turn_damage, record.max_hp) {
        (Some(damage), Some(max_hp)) => damage >= max_hp,
        _ => false,
    }
}

/// One-shot kills among the given runs
pub fn one_shot_view<'a, I>(records: I) -> Vec<&'a RunRecord>
where
    I: IntoIterator<Item = &'a RunRecord>,
{
    records.into_iter().filter(|r| is_one_shot(r)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{normalize_record, RawRecord};

    fn run(killer: Option<&str>, tdam: Option<f64>, mhp: Option<f64>) -> RunRecord {
        normalize_record(RawRecord {
            race: Some("Human".to_string()),
            cls: Some("Fighter".to_string()),
            killer: killer.map(str::to_string),
            place: Some("D".to_string()),
            tdam,
            mhp,
            ..Default::default()
        })
    }

    #[test]
    fn test_exclusions_are_not_deaths() {
        for killer in DEATH_EXCLUSIONS {
            assert!(!is_death(&run(Some(*killer), None, None)), "{}", killer);
        }
        // Absent killer becomes "Unknown", which is excluded
        assert!(!is_death(&run(None, None, None)));
    }

    #[test]
    fn test_exclusion_match_is_case_sensitive() {
        assert!(is_death(&run(Some("Quit"), None, None)));
        assert!(is_death(&run(Some("unknown"), None, None)));
        assert!(is_death(&run(Some("Sigmund"), None, None)));
    }

    #[test]
    fn test_death_view_is_subset() {
        let runs = vec![
            run(Some("orc"), None, None),
            run(Some("winning"), None, None),
            run(Some("quit"), None, None),
            run(Some("hydra"), None, None),
        ];

        let deaths = death_view(&runs);
        assert_eq!(deaths.len(), 2);
        assert!(deaths.iter().all(|d| runs.contains(d)));
        assert!(deaths
            .iter()
            .all(|d| !DEATH_EXCLUSIONS.contains(&d.killer.as_str())));
    }

    #[test]
    fn test_one_shot_threshold() {
        assert!(is_one_shot(&run(Some("ogre"), Some(50.0), Some(40.0))));
        assert!(is_one_shot(&run(Some("ogre"), Some(40.0), Some(40.0))));
        assert!(!is_one_shot(&run(Some("ogre"), Some(30.0), Some(40.0))));
        assert!(!is_one_shot(&run(Some("ogre"), None, Some(40.0))));
        assert!(!is_one_shot(&run(Some("ogre"), Some(50.0), None)));
    }

    #[test]
    fn test_one_shot_view() {
        let runs = vec![
            run(Some("ogre"), Some(50.0), Some(40.0)),
            run(Some("rat"), Some(3.0), Some(40.0)),
        ];
        let shots = one_shot_view(&runs);
        assert_eq!(shots.len(), 1);
        assert_eq!(shots[0].killer, "ogre");
    }
}
