//! Per-location killer analysis ("floor lords").
//!
//! For every location in a tier, find the monster that ends the most runs
//! there, how often, and the runners-up to watch out for.

use super::metrics::ranked_counts;
use crate::parser::schema::{Column, RunRecord};
use crate::utils::config::{
    EARLY_PLACES, EXTREME_DANGER_KILLS, HIGH_DANGER_KILLS, LATE_PLACES, MID_PLACES,
    SECONDARY_KILLERS,
};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

/// Dungeon progression tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Early,
    Mid,
    Late,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Early, Tier::Mid, Tier::Late];

    /// Place-label fragments that belong to this tier
    pub fn members(&self) -> &'static [&'static str] {
        match self {
            Tier::Early => EARLY_PLACES,
            Tier::Mid => MID_PLACES,
            Tier::Late => LATE_PLACES,
        }
    }

    /// True when a formatted place contains any member of this tier
    pub fn contains(&self, place: &str) -> bool {
        self.members().iter().any(|member| place.contains(member))
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Tier::Early => "Early",
            Tier::Mid => "Mid",
            Tier::Late => "Late",
        };
        f.write_str(label)
    }
}

/// How deadly a location's top killer is, by kill count
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DangerLevel {
    Low,
    High,
    Extreme,
}

impl DangerLevel {
    pub fn from_kills(kills: usize) -> Self {
        if kills < HIGH_DANGER_KILLS {
            DangerLevel::Low
        } else if kills < EXTREME_DANGER_KILLS {
            DangerLevel::High
        } else {
            DangerLevel::Extreme
        }
    }
}

/// The dominant killer at one location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorLord {
    pub place: String,
    pub killer: String,
    pub kills: usize,
    /// Next most frequent killers, most frequent first
    pub secondary: Vec<String>,
    pub danger: DangerLevel,
}

/// Floor lords for every location of one tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierFloors {
    pub tier: Tier,
    pub lords: Vec<FloorLord>,
}

/// Find the dominant killer of every location in a tier
///
/// **Public** - main entry point for floor analysis
///
/// # Arguments
/// * `deaths` - Death-only runs
/// * `tier` - Tier whose locations to report
///
/// # Returns
/// One entry per location, main-dungeon floors first by depth,
/// then other locations by name
pub fn floor_lords<'a, I>(deaths: I, tier: Tier) -> Vec<FloorLord>
where
    I: IntoIterator<Item = &'a RunRecord>,
{
    let deaths: Vec<&RunRecord> = deaths.into_iter().collect();

    tier_places(deaths.iter().copied(), tier)
        .into_iter()
        .filter_map(|place| {
            let here = deaths
                .iter()
                .copied()
                .filter(|d| d.formatted_place.as_deref() == Some(place.as_str()));
            let mut killers = ranked_counts(here, Column::Killer).into_iter();
            let (killer, kills) = killers.next()?;
            let secondary = killers
                .take(SECONDARY_KILLERS)
                .map(|(name, _)| name)
                .collect();

            Some(FloorLord {
                place,
                killer,
                kills,
                secondary,
                danger: DangerLevel::from_kills(kills),
            })
        })
        .collect()
}

/// Floor lords for all tiers
pub fn floor_lords_by_tier<'a, I>(deaths: I) -> Vec<TierFloors>
where
    I: IntoIterator<Item = &'a RunRecord> + Clone,
{
    Tier::ALL
        .iter()
        .map(|&tier| TierFloors {
            tier,
            lords: floor_lords(deaths.clone(), tier),
        })
        .collect()
}

/// Distinct formatted places belonging to a tier, in display order
pub fn tier_places<'a, I>(records: I, tier: Tier) -> Vec<String>
where
    I: IntoIterator<Item = &'a RunRecord>,
{
    let places: BTreeSet<&str> = records
        .into_iter()
        .filter_map(|r| r.formatted_place.as_deref())
        .filter(|place| tier.contains(place))
        .collect();

    let mut places: Vec<String> = places.into_iter().map(str::to_string).collect();
    places.sort_by(|a, b| compare_places(a, b));
    places
}

/// Main-dungeon floors ("D:n") by depth, then everything else by name
fn compare_places(a: &str, b: &str) -> Ordering {
    match (dungeon_depth(a), dungeon_depth(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

fn dungeon_depth(place: &str) -> Option<u32> {
    place.strip_prefix("D:")?.parse().ok()
}
