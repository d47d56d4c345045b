use crate::constants::*;
use crate::layouts::SweepOrder;
use crate::map_data::Race;
use serde::{Deserialize, Serialize};

/// How the solver walls off against the opponent.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum WallStrategy {
    /// Pick from the matchup table.
    #[default]
    Auto,
    /// Template search at the natural, falling back to the inner main ramp wall.
    NaturalTemplate,
    /// Main ramp wall with structures on the inner positions.
    MainRampInner,
    /// Main ramp wall with structures on the positions used against Protoss.
    MainRampVsProtoss,
    /// Supply structures on the main ramp's depot slots.
    MainRampDepots,
    NoWall,
}

impl WallStrategy {
    /// Matchup table for `Auto`.
    pub fn resolve(own: Race, enemy: Race) -> WallStrategy {
        match (own, enemy) {
            (Race::Protoss, Race::Terran) => WallStrategy::NoWall,
            (Race::Protoss, Race::Protoss) => WallStrategy::MainRampVsProtoss,
            (Race::Protoss, _) => WallStrategy::NaturalTemplate,
            (Race::Terran, _) => WallStrategy::MainRampDepots,
            (Race::Zerg, _) | (Race::Random, _) => WallStrategy::NoWall,
        }
    }

    /// Strategy tried when this one finds nothing.
    pub fn fallback(self) -> Option<WallStrategy> {
        match self {
            WallStrategy::NaturalTemplate => Some(WallStrategy::MainRampInner),
            _ => None,
        }
    }
}

/// Which of two equally scored natural walls is kept.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum WallTieBreak {
    /// The candidate found later in the sweep replaces the earlier one.
    #[default]
    LaterWins,
    /// The earliest candidate is kept.
    FirstWins,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub wall_strategy: WallStrategy,
    /// Layout sweep order; derived from the start location when unset.
    pub sweep_order: Option<SweepOrder>,
    pub tie_break: WallTieBreak,
    pub natural_search_min: i32,
    pub natural_search_max: i32,
    pub natural_search_width: i32,
    pub fill_window: i32,
    pub supply_power_distance: f32,
    pub supply_spiral_size: i32,
    pub debug: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            wall_strategy: WallStrategy::Auto,
            sweep_order: None,
            tie_break: WallTieBreak::LaterWins,
            natural_search_min: NATURAL_SEARCH_MIN,
            natural_search_max: NATURAL_SEARCH_MAX,
            natural_search_width: NATURAL_SEARCH_WIDTH,
            fill_window: FILL_WINDOW,
            supply_power_distance: SUPPLY_POWER_DISTANCE,
            supply_spiral_size: SUPPLY_SPIRAL_SIZE,
            debug: false,
        }
    }
}
