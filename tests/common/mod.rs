#![allow(dead_code)]

use rts_foreman::location::*;
use rts_foreman::map_data::*;
use rts_foreman::terrain::*;

pub const NATURAL_CENTER: Point2 = Point2::new(20.0, 20.0);
pub const BEHIND_MINERALS: Point2 = Point2::new(20.0, 14.0);
pub const ENEMY_START: Point2 = Point2::new(20.0, 39.0);

/// Cliff band rows, open except for the choke gap.
pub const BAND_ROWS: std::ops::RangeInclusive<i32> = 29..=31;
pub const GAP_COLUMNS: std::ops::RangeInclusive<i32> = 14..=23;
/// Row of walkable ramp cells just past the band, across the gap.
pub const RAMP_ROW: i32 = 32;

pub fn open_terrain(width: usize, height: usize) -> MapTerrain {
    MapTerrain::filled(width, height, TerrainFlags::OPEN, 1)
}

/// 40x40 flat map cut by a cliff band with a 10-cell gap north of the
/// natural. With `ramp` set, a one-cell ramp strip lines the far side of
/// the gap.
pub fn choke_terrain(ramp: bool) -> MapTerrain {
    let mut terrain = open_terrain(40, 40);
    for y in BAND_ROWS {
        for x in 0..40 {
            if !GAP_COLUMNS.contains(&x) {
                terrain.set_xy(x, y, TerrainFlags::NONE);
            }
        }
    }
    if ramp {
        for x in GAP_COLUMNS {
            terrain.set_xy(x, RAMP_ROW, TerrainFlags::PATHABLE | TerrainFlags::RAMP);
        }
    }
    terrain
}

/// Same choke, but the gap is a ramp too steep to build on.
pub fn unbuildable_choke_terrain() -> MapTerrain {
    let mut terrain = choke_terrain(false);
    for y in BAND_ROWS {
        for x in GAP_COLUMNS {
            terrain.set_xy(x, y, TerrainFlags::PATHABLE | TerrainFlags::RAMP);
        }
    }
    terrain
}

pub fn main_zone() -> ZoneInfo {
    ZoneInfo::new(Point2::new(6.5, 8.5), 6.0, Point2::new(2.0, 8.5))
}

pub fn natural_zone() -> ZoneInfo {
    ZoneInfo::new(NATURAL_CENTER, 8.0, BEHIND_MINERALS)
}

pub fn snapshot(terrain: MapTerrain, own_race: Race, enemy_race: Race) -> MapSnapshot {
    let mut snapshot = MapSnapshot::new(
        terrain,
        vec![main_zone(), natural_zone()],
        own_race,
        enemy_race,
    );
    snapshot.enemy_start_location = Some(ENEMY_START);
    snapshot
}

pub fn choke_map(own_race: Race, enemy_race: Race) -> MapSnapshot {
    snapshot(choke_terrain(true), own_race, enemy_race)
}

/// Ramp slots for a main ramp wall west of the main.
pub fn main_ramp() -> RampInfo {
    let mut ramp = RampInfo::default();
    ramp.positions.insert(RampPosition::Away, Point2::new(4.0, 15.0));
    ramp.positions.insert(RampPosition::Blocker, Point2::new(8.5, 16.5));
    ramp.positions.insert(RampPosition::GateInner, Point2::new(6.5, 16.5));
    ramp.positions.insert(RampPosition::CoreInner, Point2::new(10.5, 16.5));
    ramp.positions.insert(RampPosition::GateVsProtoss, Point2::new(6.5, 17.5));
    ramp.positions.insert(RampPosition::CoreVsProtoss, Point2::new(10.5, 17.5));
    ramp.corner_depots = vec![Point2::new(6.0, 17.0), Point2::new(10.0, 17.0)];
    ramp
}

pub fn with_main_ramp(mut snapshot: MapSnapshot, ramp: RampInfo) -> MapSnapshot {
    if let Some(main) = snapshot.zones.first_mut() {
        main.ramp = Some(ramp);
    }
    snapshot
}

/// Open 64x64 map with a single centered main.
pub fn open_map(own_race: Race, enemy_race: Race) -> MapSnapshot {
    let main = ZoneInfo::new(Point2::new(32.5, 32.5), 12.0, Point2::new(32.5, 24.0));
    MapSnapshot::new(open_terrain(64, 64), vec![main], own_race, enemy_race)
}
