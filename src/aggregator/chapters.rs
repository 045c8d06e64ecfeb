//! Table bundles behind each dashboard chapter.
//!
//! The terminal renderer, the JSON report and the SVG charts all draw from
//! these, so every output shows the same numbers.

use super::floors::{floor_lords_by_tier, TierFloors};
use super::metrics::{
    cross_tabulate, frequency_table, one_shot_kills, win_rates, CategoryShare, CrossTab, WinRate,
};
use super::summary::{level_histogram, LevelBucket};
use crate::parser::crawl_log::Dataset;
use crate::parser::schema::{Column, RunRecord};
use crate::utils::config::{AnalysisConfig, HEATMAP_EXCLUDED_RACES, NO_GOD};
use log::debug;
use serde::{Deserialize, Serialize};

/// Chapter 1: what players pick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceTables {
    pub races: Vec<CategoryShare>,
    pub classes: Vec<CategoryShare>,
    /// Worshippers only
    pub gods: Vec<CategoryShare>,
    /// Share of each god per race
    pub race_gods: CrossTab,
}

/// Chapter 2: where and how characters die
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeathTables {
    pub killers: Vec<CategoryShare>,
    pub one_shots: Vec<CategoryShare>,
    pub places: Vec<CategoryShare>,
    pub levels: Vec<LevelBucket>,
    pub floors: Vec<TierFloors>,
}

/// Chapter 3: which picks win
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WinRateTables {
    pub races: Vec<WinRate>,
    pub classes: Vec<WinRate>,
    /// Worshippers only
    pub gods: Vec<WinRate>,
}

fn has_god(record: &RunRecord) -> bool {
    record.god != NO_GOD
}

/// Build the preference chapter
pub fn preference_tables(dataset: &Dataset, config: &AnalysisConfig) -> PreferenceTables {
    let runs = dataset.runs();
    let worshippers = || runs.iter().filter(|r| has_god(r));

    let heatmap_rows = worshippers().filter(|r| {
        !r.race
            .as_deref()
            .is_some_and(|race| HEATMAP_EXCLUDED_RACES.contains(&race))
    });

    PreferenceTables {
        races: frequency_table(runs, Column::RaceGrouped, config.top_n),
        classes: frequency_table(runs, Column::Class, config.top_n),
        gods: frequency_table(worshippers(), Column::God, config.top_n),
        race_gods: cross_tabulate(
            heatmap_rows,
            Column::RaceGrouped,
            Column::God,
            config.min_samples,
        ),
    }
}

/// Build the death chapter
pub fn death_tables(dataset: &Dataset, config: &AnalysisConfig) -> DeathTables {
    debug!("Building death tables over {} deaths", dataset.death_count());

    DeathTables {
        killers: frequency_table(dataset.deaths(), Column::Killer, config.top_n),
        one_shots: one_shot_kills(dataset.deaths(), config.top_n),
        places: frequency_table(dataset.deaths(), Column::FormattedPlace, config.place_limit),
        levels: level_histogram(dataset.deaths()),
        floors: floor_lords_by_tier(dataset.deaths()),
    }
}

/// Build the win-rate chapter
pub fn win_rate_tables(dataset: &Dataset, config: &AnalysisConfig) -> WinRateTables {
    let runs = dataset.runs();

    WinRateTables {
        races: win_rates(runs, Column::RaceGrouped, config.min_samples, config.top_n),
        classes: win_rates(runs, Column::Class, config.min_samples, config.top_n),
        gods: win_rates(
            runs.iter().filter(|r| has_god(r)),
            Column::God,
            config.min_samples,
            config.top_n,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::read_crawl_log;

    fn dataset() -> Dataset {
        let mut csv = String::from("race,cls,xl,god,killer,place,lvl,ktyp,tmsg,tdam,mhp\n");
        for _ in 0..5 {
            csv.push_str("Minotaur,Berserker,10,Trog,ogre,D,5,mon,slain,60,50\n");
            csv.push_str("Human,Wizard,5,Vehumet,orc,D,2,mon,slain,3,30\n");
            csv.push_str("Gnoll,Fighter,27,,winning,Zot,5,winning,escaped,,\n");
        }
        read_crawl_log(csv.as_bytes()).unwrap()
    }

    #[test]
    fn test_preference_tables() {
        let tables = preference_tables(&dataset(), &AnalysisConfig::default());

        assert_eq!(tables.races.len(), 3);
        assert!(tables.gods.iter().all(|g| g.category != NO_GOD));
        assert_eq!(tables.gods.len(), 2);
        // Minotaurs and godless runs stay out of the heatmap
        assert_eq!(tables.race_gods.rows.len(), 1);
        assert_eq!(tables.race_gods.share("Human", "Vehumet"), Some(100.0));
    }

    #[test]
    fn test_death_tables() {
        let tables = death_tables(&dataset(), &AnalysisConfig::default());

        assert_eq!(tables.killers.len(), 2);
        assert_eq!(tables.one_shots.len(), 1);
        assert_eq!(tables.one_shots[0].category, "ogre");
        assert_eq!(tables.one_shots[0].count, 5);
        assert_eq!(tables.places.len(), 2);
        assert_eq!(tables.floors[0].lords.len(), 2);
        assert_eq!(tables.floors[0].lords[0].place, "D:2");
    }

    #[test]
    fn test_win_rate_tables() {
        let tables = win_rate_tables(&dataset(), &AnalysisConfig::default());

        assert_eq!(tables.races[0].category, "Gnoll");
        assert_eq!(tables.races[0].win_rate, 100.0);
        assert_eq!(tables.classes.len(), 3);
        assert!(tables.gods.iter().all(|g| g.wins == 0));
    }
}
