//! Template wall search at the natural expansion.
//!
//! Two sweeps run over a window in front of the natural, one per axis
//! convention. Every pivot at the natural's height is tried against the
//! templates of the matching family plus the diagonal family. A geometric
//! match is only accepted once the path oracle confirms the natural can no
//! longer reach the enemy start through it.

use super::{save_wall, WallRecord};
use crate::config::*;
use crate::constants::WALL_SUPPLY_SETBACK;
use crate::grid::*;
use crate::location::*;
use crate::map_data::*;
use crate::path::*;
use crate::terrain::*;
use crate::utility::spiral;
use crate::walls::*;
use log::*;

/// An accepted, path-validated wall before it is written to the grid.
#[derive(Clone, Debug, PartialEq)]
pub struct WallCandidate {
    pub name: &'static str,
    pub score: i32,
    pub pivot: Point2,
    /// Provisional supply position, refined when saved.
    pub supply: Point2,
    pub blocker: Point2,
    pub structures: Vec<Point2>,
}

/// Search axis, perpendicular sweep direction and primary template family.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SweepAxis {
    pub search: Point2,
    pub perpendicular: Point2,
    pub family: WallFamily,
}

impl SweepAxis {
    /// Axes for both sweeps, derived from the natural's center and the point
    /// behind its mineral line. The second sweep uses the complementary axis.
    pub fn pair(natural: &ZoneInfo) -> [SweepAxis; 2] {
        let v = natural.center_location - natural.behind_mineral_position_center;

        let first = if v.x.abs() > v.y.abs() {
            SweepAxis::along_x(Point2::axis_sign(v.x), -1.0)
        } else {
            SweepAxis::along_y(Point2::axis_sign(v.y), 1.0)
        };

        let second = if v.x.abs() < v.y.abs() {
            SweepAxis::along_x(Point2::axis_sign(v.x), -1.0)
        } else {
            SweepAxis::along_y(Point2::axis_sign(v.y), -1.0)
        };

        [first, second]
    }

    fn along_x(sign: f32, perpendicular_sign: f32) -> SweepAxis {
        SweepAxis {
            search: Point2::new(sign, 0.0),
            perpendicular: Point2::new(0.0, perpendicular_sign * sign),
            family: WallFamily::Vertical,
        }
    }

    fn along_y(sign: f32, perpendicular_sign: f32) -> SweepAxis {
        SweepAxis {
            search: Point2::new(0.0, sign),
            perpendicular: Point2::new(perpendicular_sign * sign, 0.0),
            family: WallFamily::Horizontal,
        }
    }

    pub fn templates(&self) -> Vec<WallFinder> {
        let mut templates = self.family.templates();
        templates.extend(WallFamily::Diagonal.templates());
        templates
    }
}

/// Run both sweeps; the first sweep that finds a wall wins.
pub fn search_natural_wall(
    grid: &BuildGrid,
    source: &dyn MapDataSource,
    config: &SolverConfig,
    oracle: &dyn PathOracle,
) -> Option<WallCandidate> {
    let natural = source.zones().get(1)?;
    let Some(enemy_start) = source.enemy_start_location() else {
        warn!("Natural wall: enemy start location unknown, skipping search");
        return None;
    };

    let pathing = source.terrain().pathing_grid();

    SweepAxis::pair(natural).iter().find_map(|axis| {
        find_wall_in_direction(
            grid,
            source.terrain(),
            &pathing,
            natural,
            enemy_start,
            axis,
            config,
            oracle,
        )
    })
}

/// One full sweep. Never exits early: a better template may match anywhere.
#[allow(clippy::too_many_arguments)]
pub fn find_wall_in_direction(
    grid: &BuildGrid,
    terrain: &MapTerrain,
    pathing: &GridArray<bool>,
    natural: &ZoneInfo,
    enemy_start: Point2,
    axis: &SweepAxis,
    config: &SolverConfig,
    oracle: &dyn PathOracle,
) -> Option<WallCandidate> {
    let center = BlockerType::Building3x3.normalize(natural.center_location);
    let zone_height = terrain.height_at(center)?;
    let templates = axis.templates();

    let mut best: Option<WallCandidate> = None;

    for i in config.natural_search_min..=config.natural_search_max {
        for j in -config.natural_search_width..=config.natural_search_width {
            let pivot = center + axis.search * i as f32 + axis.perpendicular * j as f32;

            if terrain.height_at(pivot) != Some(zone_height) {
                continue;
            }

            for finder in templates.iter() {
                if !finder.query(grid, pivot) {
                    continue;
                }

                let structures = finder.positions(pivot);
                let blocker = finder.blocker_position(pivot);

                let mut blocks: Vec<PathBlock> = structures
                    .iter()
                    .map(|position| PathBlock::new(*position, BlockerType::Building3x3))
                    .collect();
                blocks.push(PathBlock::new(blocker, BlockerType::Building1x1));

                let (_, distance) =
                    oracle.find_path(pathing, &blocks, natural.center_location, enemy_start);
                if distance > 0.0 {
                    trace!(
                        "Wall {} matched at {:?} but leaves a path of length {}",
                        finder.name,
                        pivot,
                        distance
                    );
                    continue;
                }

                let candidate = WallCandidate {
                    name: finder.name,
                    score: finder.score,
                    pivot,
                    supply: pivot - axis.search * WALL_SUPPLY_SETBACK,
                    blocker,
                    structures,
                };

                best = match best {
                    None => {
                        debug!("Natural wall {} found at {:?}", finder.name, pivot);
                        Some(candidate)
                    }
                    Some(current) if replaces(&candidate, &current, config.tie_break) => {
                        debug!(
                            "Better natural wall {} found at {:?} (score {} over {})",
                            finder.name, pivot, candidate.score, current.score
                        );
                        Some(candidate)
                    }
                    Some(current) => {
                        trace!(
                            "Natural wall {} at {:?} kept out by {}",
                            finder.name,
                            pivot,
                            current.name
                        );
                        Some(current)
                    }
                };
            }
        }
    }

    best
}

fn replaces(candidate: &WallCandidate, current: &WallCandidate, tie_break: WallTieBreak) -> bool {
    match candidate.score.cmp(&current.score) {
        std::cmp::Ordering::Greater => true,
        std::cmp::Ordering::Equal => tie_break == WallTieBreak::LaterWins,
        std::cmp::Ordering::Less => false,
    }
}

/// Reserve space around the structures, move the supply slot to the
/// nearest empty spot that still powers every structure, then commit.
pub fn save_natural_wall(
    grid: &mut BuildGrid,
    config: &SolverConfig,
    candidate: &WallCandidate,
) -> WallRecord {
    let paddings = [
        BlockerType::Building5x5,
        BlockerType::Building5x5,
        BlockerType::Building3x3,
    ];
    for (position, kind) in candidate.structures.iter().zip(paddings) {
        grid.fill_and_save(*position, kind, BuildArea::BuildingPadding);
    }

    let mut supply = candidate.supply.rounded();
    let size = config.supply_spiral_size;
    let slot = spiral(size, size).into_iter().map(|offset| supply + offset).find(|check| {
        grid.query_area(*check, BlockerType::Building2x2, is_empty)
            && candidate
                .structures
                .iter()
                .all(|structure| check.distance_to(*structure) < config.supply_power_distance)
    });
    match slot {
        Some(slot) => supply = slot,
        None => debug!(
            "Natural wall {}: no powered supply slot near {:?}, keeping it",
            candidate.name, supply
        ),
    }

    save_wall(grid, supply, candidate.blocker, &candidate.structures)
}
