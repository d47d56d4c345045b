//! Chokepoint wall templates.
//!
//! A `WallFinder` is a fixed arrangement of 3x3 structures around a pivot,
//! with one 1x1 gap left for a blocking unit. Templates are grouped by the
//! dominant axis of the chokepoint they fit.

pub mod diagonal;
pub mod horizontal;
pub mod vertical;

pub use diagonal::diagonal_walls;
pub use horizontal::horizontal_walls;
pub use vertical::vertical_walls;

use crate::grid::*;
use crate::location::*;

/// Score assigned to templates that don't specify one.
pub const DEFAULT_WALL_SCORE: i32 = 2;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum WallFamily {
    Vertical,
    Horizontal,
    Diagonal,
}

impl WallFamily {
    pub fn templates(self) -> Vec<WallFinder> {
        match self {
            WallFamily::Vertical => vertical_walls(),
            WallFamily::Horizontal => horizontal_walls(),
            WallFamily::Diagonal => diagonal_walls(),
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum MirrorAxis {
    /// Negate x offsets.
    X,
    /// Negate y offsets.
    Y,
}

/// An immutable wall template, all offsets relative to the pivot.
#[derive(Clone, Debug, PartialEq)]
pub struct WallFinder {
    pub name: &'static str,
    /// 3x3 structure offsets, 2 or 3 of them.
    pub buildings: Vec<(i32, i32)>,
    /// Gap check offsets; each must lean on a cliff or rock.
    pub checks: Vec<(i32, i32)>,
    /// Stand point of the unit plugging the gap.
    pub blocker: (i32, i32),
    pub score: i32,
}

impl WallFinder {
    /// Two-structure template with the pivot itself as the third structure.
    /// Checks are given relative to the structure they guard.
    pub fn new(
        name: &'static str,
        b1: (i32, i32),
        b2: (i32, i32),
        check_from_b1: (i32, i32),
        check_from_b2: (i32, i32),
        blocker: (i32, i32),
        score: i32,
    ) -> Self {
        WallFinder {
            name,
            buildings: vec![b1, b2, (0, 0)],
            checks: vec![
                (b1.0 + check_from_b1.0, b1.1 + check_from_b1.1),
                (b2.0 + check_from_b2.0, b2.1 + check_from_b2.1),
            ],
            blocker,
            score,
        }
    }

    /// Does the template fit at `pivot`? Every gap check area must touch hard
    /// terrain and every structure footprint must be empty and on the map.
    pub fn query(&self, grid: &BuildGrid, pivot: Point2) -> bool {
        let checks_hold = self.checks.iter().all(|&offset| {
            !grid.query_area(pivot + offset, BlockerType::Building3x3, is_not_hard_wall)
        });
        if !checks_hold {
            return false;
        }

        self.buildings.iter().all(|&offset| {
            let rect = BlockerType::Building3x3.rect(pivot + offset);
            grid.query_rect_on_map(rect, is_empty)
        })
    }

    /// Absolute structure positions for a pivot.
    pub fn positions(&self, pivot: Point2) -> Vec<Point2> {
        self.buildings.iter().map(|&offset| pivot + offset).collect()
    }

    pub fn blocker_position(&self, pivot: Point2) -> Point2 {
        pivot + self.blocker
    }

    /// The same template reflected across an axis through the pivot.
    pub fn mirrored(&self, axis: MirrorAxis) -> WallFinder {
        let flip = |(x, y): (i32, i32)| match axis {
            MirrorAxis::X => (-x, y),
            MirrorAxis::Y => (x, -y),
        };
        WallFinder {
            name: self.name,
            buildings: self.buildings.iter().copied().map(flip).collect(),
            checks: self.checks.iter().copied().map(flip).collect(),
            blocker: flip(self.blocker),
            score: self.score,
        }
    }

    /// Structural sanity: 2-3 non-overlapping structures, two checks, and a
    /// blocker outside every structure.
    pub fn validate(&self) -> bool {
        if !(2..=3).contains(&self.buildings.len()) || self.checks.len() != 2 {
            return false;
        }

        let overlaps = |a: (i32, i32), b: (i32, i32), reach: i32| {
            (a.0 - b.0).abs() < reach && (a.1 - b.1).abs() < reach
        };

        for (i, a) in self.buildings.iter().enumerate() {
            if self.buildings[i + 1..].iter().any(|b| overlaps(*a, *b, 3)) {
                return false;
            }
        }

        !self
            .buildings
            .iter()
            .any(|b| (b.0 - self.blocker.0).abs() <= 1 && (b.1 - self.blocker.1).abs() <= 1)
    }
}

/// Helper to create a template with the default score.
pub fn wf(
    name: &'static str,
    b1: (i32, i32),
    b2: (i32, i32),
    check_from_b1: (i32, i32),
    check_from_b2: (i32, i32),
    blocker: (i32, i32),
) -> WallFinder {
    WallFinder::new(name, b1, b2, check_from_b1, check_from_b2, blocker, DEFAULT_WALL_SCORE)
}

/// Helper to create a template with an explicit score.
pub fn wf_scored(
    name: &'static str,
    b1: (i32, i32),
    b2: (i32, i32),
    check_from_b1: (i32, i32),
    check_from_b2: (i32, i32),
    blocker: (i32, i32),
    score: i32,
) -> WallFinder {
    WallFinder::new(name, b1, b2, check_from_b1, check_from_b2, blocker, score)
}
