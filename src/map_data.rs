use crate::location::*;
use crate::terrain::*;
use fnv::FnvHashMap;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub enum Race {
    Terran,
    Zerg,
    Protoss,
    Random,
}

/// Named reference positions around a base ramp, precomputed by the zone manager.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub enum RampPosition {
    /// Supply structure slot on the high ground, away from the ramp.
    Away,
    /// Stand point for the unit plugging the wall gap.
    Blocker,
    GateVsProtoss,
    CoreVsProtoss,
    GateInner,
    CoreInner,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RampInfo {
    pub positions: FnvHashMap<RampPosition, Point2>,
    pub corner_depots: Vec<Point2>,
    /// Present when a 2x2 structure fits between the corner depots.
    pub depot_in_middle: Option<Point2>,
}

impl RampInfo {
    pub fn position(&self, position: RampPosition) -> Option<Point2> {
        self.positions.get(&position).copied()
    }
}

/// Base location geometry supplied by the zone manager.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ZoneInfo {
    pub center_location: Point2,
    pub radius: f32,
    /// Reference point behind the zone's mineral line.
    pub behind_mineral_position_center: Point2,
    #[serde(default)]
    pub ramp: Option<RampInfo>,
    #[serde(default)]
    pub enemy_owned: bool,
}

impl ZoneInfo {
    pub fn new(
        center_location: Point2,
        radius: f32,
        behind_mineral_position_center: Point2,
    ) -> Self {
        ZoneInfo {
            center_location,
            radius,
            behind_mineral_position_center,
            ramp: None,
            enemy_owned: false,
        }
    }
}

/// Read-only view of the engine and zone manager used by the solver.
/// Implementations exist for live games and for offline snapshots.
pub trait MapDataSource {
    fn terrain(&self) -> &MapTerrain;

    /// Expansion zones: own main first, then expansions ordered by distance.
    fn zones(&self) -> &[ZoneInfo];

    fn own_race(&self) -> Race;

    fn enemy_race(&self) -> Race;

    fn start_location(&self) -> Point2;

    fn map_center(&self) -> Point2 {
        let terrain = self.terrain();
        Point2::new(terrain.width() as f32 / 2.0, terrain.height() as f32 / 2.0)
    }

    /// Known enemy start. Defaults to the first enemy-owned zone.
    fn enemy_start_location(&self) -> Option<Point2> {
        self.zones()
            .iter()
            .find(|zone| zone.enemy_owned)
            .map(|zone| zone.center_location)
    }

    fn minerals(&self) -> &[Point2] {
        &[]
    }

    fn geysers(&self) -> &[Point2] {
        &[]
    }

    /// Check the map can drive a solve: non-empty terrain and a main zone.
    fn validate(&self) -> Result<(), MapError> {
        let terrain = self.terrain();
        if terrain.width() == 0 || terrain.height() == 0 {
            return Err(MapError::EmptyMap {
                width: terrain.width(),
                height: terrain.height(),
            });
        }
        if self.zones().is_empty() {
            return Err(MapError::MissingMainZone);
        }
        Ok(())
    }
}

/// Offline snapshot of everything the solver reads from a game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MapSnapshot {
    pub terrain: MapTerrain,
    pub zones: Vec<ZoneInfo>,
    pub own_race: Race,
    pub enemy_race: Race,
    pub start_location: Point2,
    #[serde(default)]
    pub enemy_start_location: Option<Point2>,
    #[serde(default)]
    pub minerals: Vec<Point2>,
    #[serde(default)]
    pub geysers: Vec<Point2>,
}

impl MapSnapshot {
    pub fn new(
        terrain: MapTerrain,
        zones: Vec<ZoneInfo>,
        own_race: Race,
        enemy_race: Race,
    ) -> Self {
        let start_location = zones
            .first()
            .map(|zone| zone.center_location)
            .unwrap_or_default();
        MapSnapshot {
            terrain,
            zones,
            own_race,
            enemy_race,
            start_location,
            enemy_start_location: None,
            minerals: Vec::new(),
            geysers: Vec::new(),
        }
    }
}

impl MapDataSource for MapSnapshot {
    fn terrain(&self) -> &MapTerrain {
        &self.terrain
    }

    fn zones(&self) -> &[ZoneInfo] {
        &self.zones
    }

    fn own_race(&self) -> Race {
        self.own_race
    }

    fn enemy_race(&self) -> Race {
        self.enemy_race
    }

    fn start_location(&self) -> Point2 {
        self.start_location
    }

    fn enemy_start_location(&self) -> Option<Point2> {
        self.enemy_start_location.or_else(|| {
            self.zones
                .iter()
                .find(|zone| zone.enemy_owned)
                .map(|zone| zone.center_location)
        })
    }

    fn minerals(&self) -> &[Point2] {
        &self.minerals
    }

    fn geysers(&self) -> &[Point2] {
        &self.geysers
    }
}
