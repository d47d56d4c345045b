mod common;

use common::*;
use rts_foreman::config::*;
use rts_foreman::constants::StructureType;
use rts_foreman::grid::*;
use rts_foreman::layouts::SweepOrder;
use rts_foreman::location::*;
use rts_foreman::map_data::*;
use rts_foreman::planner::*;
use rts_foreman::solver::zones::color_zones;
use rts_foreman::solver::BuildingSolver;
use rts_foreman::terrain::MapError;

fn zone_tags(grid: &BuildGrid) -> Vec<Option<ZoneArea>> {
    grid.iter().map(|(_, cell)| cell.zone).collect()
}

/// Every recorded footprint must own all of its cells.
fn assert_footprints_owned(grid: &BuildGrid, area: BuildArea, kind: BlockerType) {
    let list = grid.positions(area).expect("recorded area");
    for (handle, position) in list.iter() {
        for (x, y) in kind.rect(position).cells() {
            let cell = grid.get(x, y).expect("footprint on map");
            assert_eq!(cell.area, area, "cell ({}, {}) of {:?} at {:?}", x, y, area, position);
            assert_eq!(
                cell.building,
                Some(handle),
                "cell ({}, {}) of {:?} at {:?} owned by another footprint",
                x,
                y,
                area,
                position
            );
        }
    }
}

#[test]
fn full_solve_walls_natural_and_fills_zones() {
    let map = choke_map(Race::Protoss, Race::Zerg);
    let solver = solve_map(&map).expect("valid map");

    assert_eq!(solver.phase(), SolverPhase::BuildingsPlaced);
    assert_eq!(solver.wall_strategy(), Some(WallStrategy::NaturalTemplate));
    assert!(solver.wall_placement().is_some());
    assert!(!solver.supply_positions().is_empty());
    assert!(solver.production_positions().len() > 3);

    let wall = solver.wall_structures();
    let not_wall = solver.not_wall_production();
    assert_eq!(not_wall.len(), solver.production_positions().len() - wall.len());
    assert!(wall.iter().all(|position| !not_wall.contains(position)));
    assert_eq!(solver.not_wall_supply().len(), solver.supply_positions().len() - 1);
}

#[test]
fn solve_map_rejects_a_map_without_zones() {
    let map = MapSnapshot::new(choke_terrain(true), Vec::new(), Race::Protoss, Race::Zerg);
    assert!(matches!(solve_map(&map), Err(MapError::MissingMainZone)));
}

#[test]
fn placed_footprints_never_overlap() {
    for (own, enemy) in [
        (Race::Protoss, Race::Zerg),
        (Race::Terran, Race::Zerg),
        (Race::Zerg, Race::Terran),
    ] {
        let map = choke_map(own, enemy);
        let solver = solve_map(&map).expect("valid map");
        let grid = solver.grid().expect("grid");
        assert_footprints_owned(grid, BuildArea::Supply, BlockerType::Building2x2);
        assert_footprints_owned(grid, BuildArea::Building, BlockerType::Building3x3);
    }
}

#[test]
fn zone_coloring_is_idempotent() {
    let map = choke_map(Race::Protoss, Race::Zerg);
    let mut grid = BuildGrid::from_map(&map);
    color_zones(&mut grid, &map);
    let once = zone_tags(&grid);
    color_zones(&mut grid, &map);
    assert_eq!(once, zone_tags(&grid));
    assert!(once.contains(&Some(ZoneArea::OwnMain)));
    assert!(once.contains(&Some(ZoneArea::OwnNatural)));
}

#[test]
fn later_ticks_do_not_recompute() {
    let map = choke_map(Race::Terran, Race::Protoss);
    let mut solver = SolverBuilder::new().build();
    assert_eq!(solver.tick(&map), SolverPhase::BuildingsPlaced);
    let supply = solver.supply_positions();
    let production = solver.production_positions();

    assert_eq!(solver.tick(&map), SolverPhase::BuildingsPlaced);
    assert_eq!(solver.supply_positions(), supply);
    assert_eq!(solver.production_positions(), production);
}

#[test]
fn blocked_natural_falls_back_to_inner_ramp_wall() {
    let map = with_main_ramp(
        snapshot(unbuildable_choke_terrain(), Race::Protoss, Race::Zerg),
        main_ramp(),
    );
    let solver = solve_map(&map).expect("valid map");

    assert_eq!(solver.wall_strategy(), Some(WallStrategy::MainRampInner));
    assert_eq!(
        solver.wall_structures(),
        vec![Point2::new(6.5, 16.5), Point2::new(10.5, 16.5)]
    );
    assert_eq!(solver.blocker(), Some(Point2::new(8.5, 16.5)));
    assert_eq!(solver.wall_supply(), vec![Point2::new(4.0, 15.0)]);
}

#[test]
fn blocked_natural_without_ramp_data_builds_no_wall() {
    let map = snapshot(unbuildable_choke_terrain(), Race::Protoss, Race::Zerg);
    let solver = solve_map(&map).expect("valid map");

    assert_eq!(solver.phase(), SolverPhase::BuildingsPlaced);
    assert_eq!(solver.wall_strategy(), Some(WallStrategy::NoWall));
    assert!(solver.wall_placement().is_none());
    assert!(solver.wall_structures().is_empty());
    assert!(!solver.production_positions().is_empty());
}

#[test]
fn protoss_mirror_uses_vs_protoss_slots() {
    let map = with_main_ramp(choke_map(Race::Protoss, Race::Protoss), main_ramp());
    let solver = solve_map(&map).expect("valid map");
    assert_eq!(solver.wall_strategy(), Some(WallStrategy::MainRampVsProtoss));
    assert_eq!(
        solver.wall_structures(),
        vec![Point2::new(6.5, 17.5), Point2::new(10.5, 17.5)]
    );
}

#[test]
fn protoss_versus_terran_builds_no_wall() {
    let map = with_main_ramp(choke_map(Race::Protoss, Race::Terran), main_ramp());
    let solver = solve_map(&map).expect("valid map");
    assert_eq!(solver.wall_strategy(), Some(WallStrategy::NoWall));
    assert_eq!(solver.blocker(), None);
}

#[test]
fn terran_depot_wall_uses_ramp_slots() {
    let mut ramp = main_ramp();
    ramp.depot_in_middle = Some(Point2::new(8.0, 18.0));
    let map = with_main_ramp(choke_map(Race::Terran, Race::Zerg), ramp);
    let solver = solve_map(&map).expect("valid map");

    assert_eq!(solver.wall_strategy(), Some(WallStrategy::MainRampDepots));
    assert_eq!(
        solver.wall_supply(),
        vec![Point2::new(6.0, 17.0), Point2::new(10.0, 17.0), Point2::new(8.0, 18.0)]
    );
    assert_eq!(solver.blocker(), None);
    // Depots alone are not a full wall placement.
    assert!(solver.wall_placement().is_none());
}

#[test]
fn terran_without_middle_depot_builds_no_wall() {
    let map = with_main_ramp(choke_map(Race::Terran, Race::Zerg), main_ramp());
    let solver = solve_map(&map).expect("valid map");
    assert_eq!(solver.wall_strategy(), Some(WallStrategy::NoWall));
    assert!(solver.wall_supply().is_empty());
}

#[test]
fn explicit_strategy_overrides_matchup() {
    let map = choke_map(Race::Protoss, Race::Terran);
    let mut solver = SolverBuilder::new()
        .wall_strategy(WallStrategy::NaturalTemplate)
        .build();
    solver.tick(&map);
    assert_eq!(solver.wall_strategy(), Some(WallStrategy::NaturalTemplate));
    assert!(solver.wall_placement().is_some());
}

#[test]
fn sweep_order_decides_first_claimed_block() {
    let map = open_map(Race::Protoss, Race::Terran);

    let mut forward = SolverBuilder::new()
        .sweep_order(SweepOrder::new(false, false))
        .build();
    forward.tick(&map);
    let mut reversed = SolverBuilder::new()
        .sweep_order(SweepOrder::new(true, true))
        .build();
    reversed.tick(&map);

    let first_forward = forward.production_positions()[0];
    let first_reversed = reversed.production_positions()[0];
    assert!(
        first_forward.x < first_reversed.x,
        "forward {:?} reversed {:?}",
        first_forward,
        first_reversed
    );
    assert!(first_forward.y < first_reversed.y);
}

#[test]
fn terran_main_production_is_sorted_by_distance_to_start() {
    let map = open_map(Race::Terran, Race::Zerg);
    let solver = solve_map(&map).expect("valid map");
    let start = map.start_location;
    let distances: Vec<f32> = solver
        .production_positions()
        .iter()
        .map(|p| p.distance_to(start))
        .collect();
    assert!(distances.len() > 1);
    assert!(
        distances.windows(2).all(|w| w[0] <= w[1]),
        "production not sorted: {:?}",
        distances
    );
}

#[test]
fn zerg_keeps_larva_strip_clear() {
    let map = open_map(Race::Zerg, Race::Protoss);
    let solver = solve_map(&map).expect("valid map");
    let grid = solver.grid().expect("grid");
    for x in 32..37 {
        assert_eq!(
            grid.get(x, 29).map(|c| c.area),
            Some(BuildArea::BuildingPadding),
            "larva cell ({}, 29)",
            x
        );
    }
}

#[test]
fn positions_for_follow_footprints() {
    let map = choke_map(Race::Protoss, Race::Zerg);
    let solver = solve_map(&map).expect("valid map");
    assert_eq!(solver.positions_for(StructureType::Pylon), solver.supply_positions());
    assert_eq!(
        solver.positions_for(StructureType::Gateway),
        solver.production_positions()
    );
    assert!(solver.positions_for(StructureType::Nexus).is_empty());
}

#[test]
fn config_reads_from_json_with_defaults() {
    let config: SolverConfig = serde_json::from_str(
        r#"{
            "wall_strategy": "NoWall",
            "tie_break": "FirstWins",
            "sweep_order": { "reverse_x": true, "reverse_y": false }
        }"#,
    )
    .expect("config");

    assert_eq!(config.wall_strategy, WallStrategy::NoWall);
    assert_eq!(config.tie_break, WallTieBreak::FirstWins);
    assert_eq!(config.sweep_order, Some(SweepOrder::new(true, false)));
    assert_eq!(config.natural_search_min, 5);
    assert_eq!(config.natural_search_max, 14);
    assert_eq!(config.fill_window, 18);
    assert!(!config.debug);
}

#[test]
fn solver_ignores_unsolved_accessors() {
    let solver = BuildingSolver::new(
        SolverConfig::default(),
        Box::new(rts_foreman::path::AStarPathOracle),
    );
    assert!(solver.production_positions().is_empty());
    assert!(solver.not_wall_supply().is_empty());
    assert!(solver.grid().is_none());
}
