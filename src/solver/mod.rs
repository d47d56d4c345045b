//! The building solver.
//!
//! Runs once, on the first tick: classify the map into a `BuildGrid`, tag the
//! main base and first two expansions, build the wall the matchup calls for,
//! then fill the three zones with layout patterns. Afterwards consumers read
//! positions through the accessors.

pub mod natural;
pub mod ramp;
pub mod zones;

use crate::config::*;
use crate::constants::{footprint_of, StructureType};
use crate::grid::*;
use crate::layouts::SweepOrder;
use crate::location::*;
use crate::map_data::*;
use crate::path::*;
use log::*;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Serialize, Deserialize)]
pub enum SolverPhase {
    Uninitialized,
    ZonesColored,
    WallAttempted,
    BuildingsPlaced,
}

/// Wall structures by handle into the grid's arenas.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WallRecord {
    pub supply: Vec<BuildingHandle>,
    pub structures: Vec<BuildingHandle>,
    pub blocker: Option<Point2>,
}

/// A complete wall: supply structure, structures and the blocker's stand point.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WallPlacement {
    pub supply: Point2,
    pub blocker: Point2,
    pub structures: Vec<Point2>,
}

/// Pad and commit a wall. Padding goes down first so the supply structure
/// and structures keep clear of each other's surroundings.
pub(crate) fn save_wall(
    grid: &mut BuildGrid,
    supply: Point2,
    blocker: Point2,
    structures: &[Point2],
) -> WallRecord {
    grid.fill_and_save(supply, BlockerType::Building4x4, BuildArea::BuildingPadding);
    for structure in structures {
        grid.fill_and_save(*structure, BlockerType::Building5x5, BuildArea::BuildingPadding);
    }

    let supply = grid
        .fill_and_save(supply, BlockerType::Building2x2, BuildArea::Supply)
        .into_iter()
        .collect();
    let structures = structures
        .iter()
        .filter_map(|structure| {
            grid.fill_and_save(*structure, BlockerType::Building3x3, BuildArea::Building)
        })
        .collect();

    WallRecord {
        supply,
        structures,
        blocker: Some(blocker),
    }
}

pub struct BuildingSolver {
    config: SolverConfig,
    oracle: Box<dyn PathOracle>,
    grid: Option<BuildGrid>,
    phase: SolverPhase,
    wall: WallRecord,
    wall_strategy: Option<WallStrategy>,
}

impl BuildingSolver {
    pub fn new(config: SolverConfig, oracle: Box<dyn PathOracle>) -> Self {
        BuildingSolver {
            config,
            oracle,
            grid: None,
            phase: SolverPhase::Uninitialized,
            wall: WallRecord::default(),
            wall_strategy: None,
        }
    }

    /// Advance the solve to completion. Only the first call does work.
    pub fn tick(&mut self, source: &dyn MapDataSource) -> SolverPhase {
        while self.phase != SolverPhase::BuildingsPlaced {
            self.advance(source);
        }
        self.phase
    }

    /// Run the next phase.
    pub fn advance(&mut self, source: &dyn MapDataSource) -> SolverPhase {
        match self.phase {
            SolverPhase::Uninitialized => self.start(source),
            SolverPhase::ZonesColored => self.solve_walls(source),
            SolverPhase::WallAttempted => self.solve_buildings(source),
            SolverPhase::BuildingsPlaced => {}
        }
        debug!("BuildingSolver: phase {:?}", self.phase);
        self.phase
    }

    /// Build the grid and color the zones. Only runs from `Uninitialized`.
    pub(crate) fn start(&mut self, source: &dyn MapDataSource) {
        if self.phase != SolverPhase::Uninitialized {
            return;
        }
        let mut grid = BuildGrid::from_map(source);
        zones::color_zones(&mut grid, source);
        self.grid = Some(grid);
        self.phase = SolverPhase::ZonesColored;
    }

    /// Resolve the wall strategy and try it, then its fallback. Only runs
    /// from `ZonesColored`.
    pub(crate) fn solve_walls(&mut self, source: &dyn MapDataSource) {
        if self.phase != SolverPhase::ZonesColored {
            return;
        }
        let requested = match self.config.wall_strategy {
            WallStrategy::Auto => WallStrategy::resolve(source.own_race(), source.enemy_race()),
            strategy => strategy,
        };
        debug!(
            "BuildingSolver: {:?} vs {:?}, wall strategy {:?}",
            source.own_race(),
            source.enemy_race(),
            requested
        );

        let mut next = Some(requested);
        let mut applied = WallStrategy::NoWall;
        while let Some(strategy) = next {
            if self.apply_wall_strategy(strategy, source) {
                applied = strategy;
                break;
            }
            debug!("BuildingSolver: wall strategy {:?} found nothing", strategy);
            next = strategy.fallback();
        }
        self.wall_strategy = Some(applied);
        self.phase = SolverPhase::WallAttempted;
    }

    fn apply_wall_strategy(&mut self, strategy: WallStrategy, source: &dyn MapDataSource) -> bool {
        match strategy {
            WallStrategy::NaturalTemplate => self.try_natural_wall(source),
            WallStrategy::MainRampInner => {
                self.main_ramp_wall(source, RampPosition::GateInner, RampPosition::CoreInner)
            }
            WallStrategy::MainRampVsProtoss => self.main_ramp_wall(
                source,
                RampPosition::GateVsProtoss,
                RampPosition::CoreVsProtoss,
            ),
            WallStrategy::MainRampDepots => self.depot_wall(source),
            WallStrategy::NoWall | WallStrategy::Auto => true,
        }
    }

    /// Search for a template wall at the natural and commit the best one.
    ///
    /// Colors the zones first on a fresh solver. Once walls were attempted
    /// this does nothing and returns false. A found wall completes the wall
    /// phase; otherwise the next tick still runs the matchup's fallback.
    pub fn natural_wall(&mut self, source: &dyn MapDataSource) -> bool {
        if self.phase == SolverPhase::Uninitialized {
            self.start(source);
        }
        if self.phase != SolverPhase::ZonesColored {
            return false;
        }
        if !self.try_natural_wall(source) {
            return false;
        }
        self.wall_strategy = Some(WallStrategy::NaturalTemplate);
        self.phase = SolverPhase::WallAttempted;
        true
    }

    fn try_natural_wall(&mut self, source: &dyn MapDataSource) -> bool {
        let Some(grid) = self.grid.as_mut() else {
            return false;
        };

        let Some(candidate) =
            natural::search_natural_wall(grid, source, &self.config, self.oracle.as_ref())
        else {
            debug!("BuildingSolver: no natural wall found");
            return false;
        };

        debug!(
            "BuildingSolver: natural wall {} at {:?}, score {}",
            candidate.name, candidate.pivot, candidate.score
        );
        self.wall = natural::save_natural_wall(grid, &self.config, &candidate);
        true
    }

    fn main_ramp_wall(
        &mut self,
        source: &dyn MapDataSource,
        gate: RampPosition,
        core: RampPosition,
    ) -> bool {
        let (Some(grid), Some(ramp)) = (self.grid.as_mut(), main_ramp(source)) else {
            return false;
        };
        match ramp::main_ramp_wall(grid, ramp, gate, core) {
            Some(record) => {
                self.wall = record;
                true
            }
            None => false,
        }
    }

    fn depot_wall(&mut self, source: &dyn MapDataSource) -> bool {
        let (Some(grid), Some(ramp)) = (self.grid.as_mut(), main_ramp(source)) else {
            return false;
        };
        match ramp::depot_wall(grid, ramp) {
            Some(record) => {
                self.wall = record;
                true
            }
            None => false,
        }
    }

    /// Fill the main base and first two expansions with layout patterns.
    /// Only runs from `WallAttempted`.
    pub(crate) fn solve_buildings(&mut self, source: &dyn MapDataSource) {
        if self.phase != SolverPhase::WallAttempted {
            return;
        }
        self.phase = SolverPhase::BuildingsPlaced;
        let Some(grid) = self.grid.as_mut() else {
            return;
        };

        let race = source.own_race();
        let order = self.config.sweep_order.unwrap_or_else(|| {
            SweepOrder::from_start(source.start_location(), source.map_center())
        });

        for (zone, tag) in source.zones().iter().zip(ZoneArea::ALL) {
            zones::fill_zone(grid, race, zone, tag, order, self.config.fill_window);

            if tag == ZoneArea::OwnMain && race != Race::Protoss {
                if let Some(production) = grid.positions_mut(BuildArea::Building) {
                    production.sort_by_distance(source.start_location());
                }
            }
        }

        info!(
            "BuildingSolver: wall {:?} ({} supply, {} structures), {} supply, {} production",
            self.wall_strategy,
            self.wall.supply.len(),
            self.wall.structures.len(),
            grid.supply().len(),
            grid.production().len()
        );
    }

    pub fn phase(&self) -> SolverPhase {
        self.phase
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn grid(&self) -> Option<&BuildGrid> {
        self.grid.as_ref()
    }

    /// The strategy that produced the wall, once walls were attempted.
    pub fn wall_strategy(&self) -> Option<WallStrategy> {
        self.wall_strategy
    }

    /// Stand point of the unit plugging the wall gap.
    pub fn blocker(&self) -> Option<Point2> {
        self.wall.blocker
    }

    pub fn wall_structures(&self) -> Vec<Point2> {
        self.resolve(BuildArea::Building, &self.wall.structures)
    }

    pub fn wall_supply(&self) -> Vec<Point2> {
        self.resolve(BuildArea::Supply, &self.wall.supply)
    }

    pub fn supply_positions(&self) -> Vec<Point2> {
        self.positions(BuildArea::Supply, |_| true)
    }

    pub fn production_positions(&self) -> Vec<Point2> {
        self.positions(BuildArea::Building, |_| true)
    }

    pub fn not_wall_supply(&self) -> Vec<Point2> {
        self.positions(BuildArea::Supply, |handle| !self.wall.supply.contains(&handle))
    }

    pub fn not_wall_production(&self) -> Vec<Point2> {
        self.positions(BuildArea::Building, |handle| {
            !self.wall.structures.contains(&handle)
        })
    }

    /// Positions usable for a structure type, by its footprint.
    pub fn positions_for(&self, structure: StructureType) -> Vec<Point2> {
        match footprint_of(structure) {
            BlockerType::Building2x2 => self.supply_positions(),
            BlockerType::Building3x3 => self.production_positions(),
            _ => Vec::new(),
        }
    }

    /// The full wall, when one with a supply structure and a blocker was built.
    pub fn wall_placement(&self) -> Option<WallPlacement> {
        let supply = self.wall_supply().first().copied()?;
        let blocker = self.wall.blocker?;
        let structures = self.wall_structures();
        if structures.is_empty() {
            return None;
        }
        Some(WallPlacement {
            supply,
            blocker,
            structures,
        })
    }

    fn resolve(&self, area: BuildArea, handles: &[BuildingHandle]) -> Vec<Point2> {
        let Some(list) = self.grid.as_ref().and_then(|grid| grid.positions(area)) else {
            return Vec::new();
        };
        handles.iter().filter_map(|handle| list.get(*handle)).collect()
    }

    fn positions<F>(&self, area: BuildArea, keep: F) -> Vec<Point2>
    where
        F: Fn(BuildingHandle) -> bool,
    {
        self.grid
            .as_ref()
            .and_then(|grid| grid.positions(area))
            .map(|list| {
                list.iter()
                    .filter(|(handle, _)| keep(*handle))
                    .map(|(_, position)| position)
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn main_ramp(source: &dyn MapDataSource) -> Option<&RampInfo> {
    let ramp = source.zones().first().and_then(|zone| zone.ramp.as_ref());
    if ramp.is_none() {
        warn!("BuildingSolver: main zone has no ramp data");
    }
    ramp
}
