//! Headline numbers and the death level histogram.

use super::metrics::{mode, percentage};
use crate::parser::crawl_log::Dataset;
use crate::parser::schema::{Column, RunRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Headline metrics shown on the intro page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_games: usize,
    pub total_wins: usize,
    /// Wins as a percentage of all games
    pub win_rate: f64,
    /// Most picked race (Draconians grouped)
    pub top_race: Option<String>,
    /// Most frequent killer among actual deaths
    pub top_killer: Option<String>,
}

/// Deaths at one experience level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelBucket {
    pub level: u32,
    pub deaths: usize,
}

/// Compute the intro-page headline metrics
pub fn summarize(dataset: &Dataset) -> Summary {
    let total_games = dataset.len();
    let total_wins = dataset.runs().iter().filter(|r| r.is_win).count();

    Summary {
        total_games,
        total_wins,
        win_rate: percentage(total_wins, total_games),
        top_race: mode(dataset.runs(), Column::RaceGrouped),
        top_killer: mode(dataset.deaths(), Column::Killer),
    }
}

/// Count deaths per experience level, lowest level first
///
/// Runs without a recorded level are skipped.
pub fn level_histogram<'a, I>(deaths: I) -> Vec<LevelBucket>
where
    I: IntoIterator<Item = &'a RunRecord>,
{
    let mut buckets: BTreeMap<u32, usize> = BTreeMap::new();
    for level in deaths.into_iter().filter_map(|r| r.level) {
        *buckets.entry(level).or_insert(0) += 1;
    }

    buckets
        .into_iter()
        .map(|(level, deaths)| LevelBucket { level, deaths })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::read_crawl_log;

    const LOG: &str = "race,cls,xl,god,killer,place,lvl,ktyp,tmsg,tdam,mhp
Red Draconian,Wizard,3,,orc,D,2,mon,slain,5,20
Pale Draconian,Fighter,3,Trog,orc,D,3,mon,slain,5,20
Minotaur,Berserker,27,Trog,winning,Zot,5,winning,escaped,,
Human,Hunter,,Okawaru,gnoll,D,1,mon,slain,30,20
";

    #[test]
    fn test_summarize() {
        let dataset = read_crawl_log(LOG.as_bytes()).unwrap();
        let summary = summarize(&dataset);

        assert_eq!(summary.total_games, 4);
        assert_eq!(summary.total_wins, 1);
        assert_eq!(summary.win_rate, 25.0);
        assert_eq!(summary.top_race.as_deref(), Some("Draconian"));
        assert_eq!(summary.top_killer.as_deref(), Some("orc"));
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(&Dataset::default());
        assert_eq!(summary.total_games, 0);
        assert_eq!(summary.win_rate, 0.0);
        assert_eq!(summary.top_race, None);
        assert_eq!(summary.top_killer, None);
    }

    #[test]
    fn test_level_histogram() {
        let dataset = read_crawl_log(LOG.as_bytes()).unwrap();
        let histogram = level_histogram(dataset.deaths());

        assert_eq!(histogram, vec![LevelBucket { level: 3, deaths: 2 }]);
    }
}
