use crate::location::*;
use bitflags::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

bitflags! {
    /// Static per-cell terrain layers reported by the engine.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct TerrainFlags: u8 {
        const NONE = 0;
        const PATHABLE = 1;
        const PLACEABLE = 2;
        const RAMP = 4;
        const VISION_BLOCKER = 8;
        const HIGH_ROCK = 16;
    }
}

impl TerrainFlags {
    /// Open ground: walkable and buildable.
    pub const OPEN: TerrainFlags = TerrainFlags::PATHABLE.union(TerrainFlags::PLACEABLE);
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapError {
    #[error("map dimensions must be non-zero (got {width}x{height})")]
    EmptyMap { width: usize, height: usize },
    #[error("{layer} layer has {actual} cells, expected {expected}")]
    LayerSize {
        layer: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("map data has no main base zone")]
    MissingMainZone,
}

/// A width x height array of per-cell data, stored row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct GridArray<T: Copy> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

impl<T: Copy> GridArray<T> {
    pub fn new(width: usize, height: usize, initial: T) -> Self {
        GridArray {
            width,
            height,
            data: vec![initial; width * height],
        }
    }

    pub fn from_vec(
        layer: &'static str,
        width: usize,
        height: usize,
        data: Vec<T>,
    ) -> Result<Self, MapError> {
        if width == 0 || height == 0 {
            return Err(MapError::EmptyMap { width, height });
        }
        if data.len() != width * height {
            return Err(MapError::LayerSize {
                layer,
                expected: width * height,
                actual: data.len(),
            });
        }
        Ok(GridArray {
            width,
            height,
            data,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> &T {
        &self.data[y * self.width + x]
    }

    #[inline]
    pub fn get_mut(&mut self, x: usize, y: usize) -> &mut T {
        let index = y * self.width + x;
        &mut self.data[index]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: T) {
        *self.get_mut(x, y) = value;
    }

    /// Bounds-checked lookup with signed coordinates.
    #[inline]
    pub fn get_checked(&self, x: i32, y: i32) -> Option<&T> {
        if self.in_bounds(x, y) {
            Some(self.get(x as usize, y as usize))
        } else {
            None
        }
    }

    #[inline]
    pub fn get_checked_mut(&mut self, x: i32, y: i32) -> Option<&mut T> {
        if self.in_bounds(x, y) {
            Some(self.get_mut(x as usize, y as usize))
        } else {
            None
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &T)> {
        let width = self.width;
        self.data.iter().enumerate().map(move |(i, v)| {
            let x = i % width;
            let y = i / width;
            ((x, y), v)
        })
    }
}

impl<T: Copy + Serialize> Serialize for GridArray<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (self.width, self.height, &self.data).serialize(serializer)
    }
}

impl<'de, T: Copy + Deserialize<'de>> Deserialize<'de> for GridArray<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (width, height, data) = <(usize, usize, Vec<T>)>::deserialize(deserializer)?;
        GridArray::from_vec("grid", width, height, data).map_err(serde::de::Error::custom)
    }
}

/// Static terrain of a map: walkability, placement, ramps and heights.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MapTerrain {
    flags: GridArray<u8>,
    heights: GridArray<u8>,
}

impl MapTerrain {
    pub fn new(
        width: usize,
        height: usize,
        flags: Vec<u8>,
        heights: Vec<u8>,
    ) -> Result<MapTerrain, MapError> {
        Ok(MapTerrain {
            flags: GridArray::from_vec("flags", width, height, flags)?,
            heights: GridArray::from_vec("heights", width, height, heights)?,
        })
    }

    /// Uniform terrain with every cell set to `flags` at `height`.
    pub fn filled(width: usize, height: usize, flags: TerrainFlags, terrain_height: u8) -> Self {
        MapTerrain {
            flags: GridArray::new(width, height, flags.bits()),
            heights: GridArray::new(width, height, terrain_height),
        }
    }

    pub fn width(&self) -> usize {
        self.flags.width()
    }

    pub fn height(&self) -> usize {
        self.flags.height()
    }

    /// Flags of a cell; out-of-bounds cells report no flags.
    pub fn get_xy(&self, x: i32, y: i32) -> TerrainFlags {
        self.flags
            .get_checked(x, y)
            .map(|bits| TerrainFlags::from_bits_truncate(*bits))
            .unwrap_or(TerrainFlags::NONE)
    }

    pub fn set_xy(&mut self, x: i32, y: i32, flags: TerrainFlags) {
        if let Some(cell) = self.flags.get_checked_mut(x, y) {
            *cell = flags.bits();
        }
    }

    pub fn set_height_xy(&mut self, x: i32, y: i32, terrain_height: u8) {
        if let Some(cell) = self.heights.get_checked_mut(x, y) {
            *cell = terrain_height;
        }
    }

    /// Raw terrain height byte of the cell containing `point`.
    pub fn height_at(&self, point: Point2) -> Option<u8> {
        let (x, y) = point.cell();
        self.heights.get_checked(x, y).copied()
    }

    /// Walkability bitmap handed to the path oracle.
    pub fn pathing_grid(&self) -> GridArray<bool> {
        let mut grid = GridArray::new(self.width(), self.height(), false);
        for ((x, y), bits) in self.flags.iter() {
            if TerrainFlags::from_bits_truncate(*bits).contains(TerrainFlags::PATHABLE) {
                grid.set(x, y, true);
            }
        }
        grid
    }
}

/// Neighbor offsets for 8-directional movement.
pub const NEIGHBORS_8: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
];
