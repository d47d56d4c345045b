use crate::grid::BlockerType;
use serde::{Deserialize, Serialize};

/// A supply structure powers production structures within this distance.
pub const SUPPLY_POWER_DISTANCE: f32 = 6.5;

/// Natural wall sweep: distance from the natural's center along the search axis.
pub const NATURAL_SEARCH_MIN: i32 = 5;
pub const NATURAL_SEARCH_MAX: i32 = 14;
/// Natural wall sweep: perpendicular offset in each direction.
pub const NATURAL_SEARCH_WIDTH: i32 = 15;
/// Supply slot search around the computed wall supply position (side length).
pub const SUPPLY_SPIRAL_SIZE: i32 = 7;
/// Base layout window half-size around a zone center.
pub const FILL_WINDOW: i32 = 18;
/// Distance the wall supply structure sits behind the pivot along the search axis.
pub const WALL_SUPPLY_SETBACK: f32 = 2.5;

/// Structures the solver knows footprints for.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub enum StructureType {
    // 2x2
    SupplyDepot,
    Pylon,
    DarkShrine,
    PhotonCannon,
    ShieldBattery,
    TechLab,
    Reactor,
    MissileTurret,
    SporeCrawler,
    SpineCrawler,
    Spire,
    GreaterSpire,
    // 3x3
    Gateway,
    WarpGate,
    CyberneticsCore,
    Forge,
    RoboticsFacility,
    RoboticsBay,
    TemplarArchive,
    TwilightCouncil,
    Stargate,
    FleetBeacon,
    Assimilator,
    SpawningPool,
    RoachWarren,
    HydraliskDen,
    BanelingNest,
    EvolutionChamber,
    NydusNetwork,
    Extractor,
    InfestationPit,
    UltraliskCavern,
    Barracks,
    EngineeringBay,
    Factory,
    GhostAcademy,
    Starport,
    FusionCore,
    Bunker,
    Armory,
    Refinery,
    // 5x5
    Nexus,
    Hatchery,
    Lair,
    Hive,
    CommandCenter,
    OrbitalCommand,
    PlanetaryFortress,
}

/// Footprint a structure occupies once placed.
pub fn footprint_of(structure_type: StructureType) -> BlockerType {
    use StructureType::*;
    match structure_type {
        SupplyDepot | Pylon | DarkShrine | PhotonCannon | ShieldBattery | TechLab | Reactor
        | MissileTurret | SporeCrawler | SpineCrawler | Spire | GreaterSpire => {
            BlockerType::Building2x2
        }
        Nexus | Hatchery | Lair | Hive | CommandCenter | OrbitalCommand | PlanetaryFortress => {
            BlockerType::Building5x5
        }
        _ => BlockerType::Building3x3,
    }
}
