//! The classified build grid.
//!
//! Every map cell carries a `BuildArea` classification, an optional owning
//! zone and, for cells covered by a recorded structure, a handle into the
//! per-area `BuildingPositions` arena. Fills and queries take closures; any
//! cell outside the map is skipped, so fills are no-ops there and queries
//! hold vacuously.

use crate::location::*;
use crate::map_data::MapDataSource;
use crate::terrain::*;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub enum BuildArea {
    Empty,
    NotBuildable,
    Ramp,
    VisionBlocker,
    Mineral,
    Gas,
    TownHall,
    HighRock,
    Building,
    BuildingPadding,
    /// Supply/power structure footprint (2x2).
    Supply,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub enum ZoneArea {
    OwnMain,
    OwnNatural,
    OwnThird,
}

impl ZoneArea {
    /// Zones in expansion order: main, natural, third.
    pub const ALL: [ZoneArea; 3] = [ZoneArea::OwnMain, ZoneArea::OwnNatural, ZoneArea::OwnThird];

    pub fn expansion_index(self) -> usize {
        match self {
            ZoneArea::OwnMain => 0,
            ZoneArea::OwnNatural => 1,
            ZoneArea::OwnThird => 2,
        }
    }
}

/// Stable index of a recorded structure within its area's arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuildingHandle(u32);

impl BuildingHandle {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub struct GridCell {
    pub area: BuildArea,
    pub zone: Option<ZoneArea>,
    /// Handle of the structure covering this cell; `None` for terrain and padding.
    pub building: Option<BuildingHandle>,
}

impl GridCell {
    pub fn new(area: BuildArea) -> Self {
        GridCell {
            area,
            zone: None,
            building: None,
        }
    }
}

/// Square footprint kinds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub enum BlockerType {
    Building1x1,
    Building2x2,
    Building3x3,
    Building4x4,
    Building5x5,
}

impl BlockerType {
    pub fn size(self) -> f32 {
        match self {
            BlockerType::Building1x1 => 1.0,
            BlockerType::Building2x2 => 2.0,
            BlockerType::Building3x3 => 3.0,
            BlockerType::Building4x4 => 4.0,
            BlockerType::Building5x5 => 5.0,
        }
    }

    /// Snap an anchor to this footprint's parity: even footprints anchor on
    /// integer coordinates, odd footprints on cell centers.
    pub fn normalize(self, anchor: Point2) -> Point2 {
        match self {
            BlockerType::Building2x2 | BlockerType::Building4x4 => anchor.floor(),
            _ => anchor.floor().offset(0.5, 0.5),
        }
    }

    /// Rectangle covered by this footprint centered on `anchor` (not normalized).
    pub fn rect(self, anchor: Point2) -> Rectangle {
        let size = self.size();
        Rectangle::centered(anchor, size, size)
    }
}

/// Insertion-ordered record of placed anchors for one area.
///
/// Handles index the arena and never move. `order` is the preference order
/// handed to consumers and may be re-sorted freely.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BuildingPositions {
    positions: Vec<Point2>,
    order: Vec<BuildingHandle>,
}

impl BuildingPositions {
    pub fn push(&mut self, position: Point2) -> BuildingHandle {
        let handle = BuildingHandle(self.positions.len() as u32);
        self.positions.push(position);
        self.order.push(handle);
        handle
    }

    pub fn get(&self, handle: BuildingHandle) -> Option<Point2> {
        self.positions.get(handle.index()).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Handles and positions in preference order.
    pub fn iter(&self) -> impl Iterator<Item = (BuildingHandle, Point2)> + '_ {
        self.order
            .iter()
            .map(move |handle| (*handle, self.positions[handle.index()]))
    }

    pub fn to_vec(&self) -> Vec<Point2> {
        self.iter().map(|(_, position)| position).collect()
    }

    /// Re-sort the preference order by distance to `target`; the arena is untouched.
    pub fn sort_by_distance(&mut self, target: Point2) {
        let positions = &self.positions;
        self.order.sort_by(|a, b| {
            let da = positions[a.index()].distance_to(target);
            let db = positions[b.index()].distance_to(target);
            da.total_cmp(&db)
        });
    }
}

pub fn is_empty(cell: &GridCell) -> bool {
    cell.area == BuildArea::Empty
}

pub fn is_free(cell: &GridCell) -> bool {
    cell.area == BuildArea::Empty || cell.area == BuildArea::BuildingPadding
}

/// Cliffs and rocks. Ramps and vision blockers are walkable and do not count.
pub fn is_not_hard_wall(cell: &GridCell) -> bool {
    !matches!(cell.area, BuildArea::NotBuildable | BuildArea::HighRock)
}

pub fn fill_padding(cell: &mut GridCell) {
    if cell.area == BuildArea::Empty {
        cell.area = BuildArea::BuildingPadding;
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BuildGrid {
    cells: GridArray<GridCell>,
    supply: BuildingPositions,
    production: BuildingPositions,
}

impl BuildGrid {
    /// A grid of the given size with every cell empty.
    pub fn new(width: usize, height: usize) -> Self {
        BuildGrid {
            cells: GridArray::new(width, height, GridCell::new(BuildArea::Empty)),
            supply: BuildingPositions::default(),
            production: BuildingPositions::default(),
        }
    }

    /// Classify every cell from the engine's terrain layers, then overlay
    /// resources and town hall spots.
    pub fn from_map(source: &dyn MapDataSource) -> Self {
        let terrain = source.terrain();
        let mut grid = BuildGrid::new(terrain.width(), terrain.height());

        for y in 0..terrain.height() as i32 {
            for x in 0..terrain.width() as i32 {
                let area = classify_terrain(terrain.get_xy(x, y));
                if let Some(cell) = grid.cells.get_checked_mut(x, y) {
                    cell.area = area;
                }
            }
        }

        for mineral in source.minerals() {
            let rect = Rectangle::new(mineral.x - 1.0, mineral.y - 0.5, 2.0, 1.0);
            grid.fill_rect(rect, |cell| cell.area = BuildArea::Mineral);
        }

        for geyser in source.geysers() {
            let anchor = BlockerType::Building3x3.normalize(*geyser);
            grid.fill_area(anchor, BlockerType::Building3x3, |cell| {
                cell.area = BuildArea::Gas
            });
        }

        for zone in source.zones() {
            let anchor = BlockerType::Building5x5.normalize(zone.center_location);
            grid.fill_area(anchor, BlockerType::Building5x5, |cell| {
                cell.area = BuildArea::TownHall
            });
        }

        grid
    }

    pub fn width(&self) -> usize {
        self.cells.width()
    }

    pub fn height(&self) -> usize {
        self.cells.height()
    }

    pub fn get(&self, x: i32, y: i32) -> Option<&GridCell> {
        self.cells.get_checked(x, y)
    }

    /// Cell containing `point`, if on the map.
    pub fn cell_at(&self, point: Point2) -> Option<&GridCell> {
        let (x, y) = point.cell();
        self.get(x, y)
    }

    pub fn classify(&self, point: Point2) -> Option<BuildArea> {
        self.cell_at(point).map(|cell| cell.area)
    }

    pub fn fill_rect<F>(&mut self, rect: Rectangle, mut mutator: F)
    where
        F: FnMut(&mut GridCell),
    {
        for (x, y) in rect.cells() {
            if let Some(cell) = self.cells.get_checked_mut(x, y) {
                mutator(cell);
            }
        }
    }

    /// Like `fill_rect`, passing each cell's center point to the mutator.
    pub fn fill_rect_with_point<F>(&mut self, rect: Rectangle, mut mutator: F)
    where
        F: FnMut(&mut GridCell, Point2),
    {
        for (x, y) in rect.cells() {
            if let Some(cell) = self.cells.get_checked_mut(x, y) {
                mutator(cell, Point2::cell_center(x, y));
            }
        }
    }

    pub fn fill_area<F>(&mut self, anchor: Point2, kind: BlockerType, mutator: F)
    where
        F: FnMut(&mut GridCell),
    {
        self.fill_rect(kind.rect(anchor), mutator);
    }

    /// True iff `predicate` holds for every on-map cell of the rectangle.
    pub fn query_rect<F>(&self, rect: Rectangle, predicate: F) -> bool
    where
        F: Fn(&GridCell) -> bool,
    {
        rect.cells()
            .filter_map(|(x, y)| self.cells.get_checked(x, y))
            .all(predicate)
    }

    /// True iff every cell the rectangle covers is on the map.
    pub fn contains_rect(&self, rect: Rectangle) -> bool {
        let (xs, ys) = rect.cell_ranges();
        xs.start >= 0
            && ys.start >= 0
            && xs.end <= self.width() as i32
            && ys.end <= self.height() as i32
    }

    /// `query_rect` that fails instead of skipping off-map cells.
    pub fn query_rect_on_map<F>(&self, rect: Rectangle, predicate: F) -> bool
    where
        F: Fn(&GridCell) -> bool,
    {
        self.contains_rect(rect) && self.query_rect(rect, predicate)
    }

    pub fn query_area<F>(&self, anchor: Point2, kind: BlockerType, predicate: F) -> bool
    where
        F: Fn(&GridCell) -> bool,
    {
        self.query_rect(kind.rect(anchor), predicate)
    }

    /// Normalize `position` for `kind`, record it under `area` and mark every
    /// empty or padded cell of its footprint. Padding fills are not recorded.
    pub fn fill_and_save(
        &mut self,
        position: Point2,
        kind: BlockerType,
        area: BuildArea,
    ) -> Option<BuildingHandle> {
        let position = kind.normalize(position);
        let handle = self.positions_mut(area).map(|list| list.push(position));

        self.fill_area(position, kind, |cell| {
            if is_free(cell) {
                cell.area = area;
                cell.building = handle;
            }
        });

        handle
    }

    /// Arena for an area that records positions.
    pub fn positions(&self, area: BuildArea) -> Option<&BuildingPositions> {
        match area {
            BuildArea::Supply => Some(&self.supply),
            BuildArea::Building => Some(&self.production),
            _ => None,
        }
    }

    pub fn positions_mut(&mut self, area: BuildArea) -> Option<&mut BuildingPositions> {
        match area {
            BuildArea::Supply => Some(&mut self.supply),
            BuildArea::Building => Some(&mut self.production),
            _ => None,
        }
    }

    pub fn supply(&self) -> &BuildingPositions {
        &self.supply
    }

    pub fn production(&self) -> &BuildingPositions {
        &self.production
    }

    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &GridCell)> {
        self.cells.iter()
    }
}

fn classify_terrain(flags: TerrainFlags) -> BuildArea {
    if flags.contains(TerrainFlags::PLACEABLE) {
        BuildArea::Empty
    } else if flags.contains(TerrainFlags::HIGH_ROCK) {
        BuildArea::HighRock
    } else if flags.contains(TerrainFlags::PATHABLE) && flags.contains(TerrainFlags::RAMP) {
        BuildArea::Ramp
    } else if flags.contains(TerrainFlags::PATHABLE)
        && flags.contains(TerrainFlags::VISION_BLOCKER)
    {
        BuildArea::VisionBlocker
    } else {
        BuildArea::NotBuildable
    }
}
