//! Path-finding oracle used to prove a wall candidate severs the lane.
//!
//! The oracle answers one question: with these temporary blocks on the
//! walkability bitmap, is there still a path from start to goal? A returned
//! distance of zero means no path.

use crate::grid::BlockerType;
use crate::location::*;
use crate::terrain::*;
use fnv::FnvHashSet;
use pathfinding::directed::astar::astar;

const STRAIGHT_COST: u32 = 10;
const DIAGONAL_COST: u32 = 14;

/// A temporary obstacle stamped onto the walkability bitmap.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct PathBlock {
    pub center: Point2,
    pub kind: BlockerType,
}

impl PathBlock {
    pub fn new(center: Point2, kind: BlockerType) -> Self {
        PathBlock { center, kind }
    }

    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> {
        self.kind.rect(self.center).cells()
    }
}

pub trait PathOracle {
    /// Find a path between two points with `blocks` marked unwalkable.
    /// Returns the path and its length; length 0 when no path exists.
    fn find_path(
        &self,
        pathing: &GridArray<bool>,
        blocks: &[PathBlock],
        start: Point2,
        goal: Point2,
    ) -> (Vec<Point2>, f32);
}

/// 8-directional A* over the walkability bitmap. Diagonal moves may not
/// cut a blocked corner. The goal cell is always enterable, since the enemy
/// town hall usually stands on it.
#[derive(Copy, Clone, Debug, Default)]
pub struct AStarPathOracle;

impl PathOracle for AStarPathOracle {
    fn find_path(
        &self,
        pathing: &GridArray<bool>,
        blocks: &[PathBlock],
        start: Point2,
        goal: Point2,
    ) -> (Vec<Point2>, f32) {
        let blocked: FnvHashSet<(i32, i32)> = blocks.iter().flat_map(|b| b.cells()).collect();
        let walkable = |x: i32, y: i32| {
            pathing.get_checked(x, y).copied().unwrap_or(false) && !blocked.contains(&(x, y))
        };

        let start_pos = start.cell();
        let goal_pos = goal.cell();

        let result = astar(
            &start_pos,
            |&(x, y)| {
                NEIGHBORS_8
                    .iter()
                    .filter_map(|&(dx, dy)| {
                        let nx = x + dx;
                        let ny = y + dy;
                        let is_goal = (nx, ny) == goal_pos;
                        if !is_goal && !walkable(nx, ny) {
                            return None;
                        }
                        if dx != 0 && dy != 0 {
                            if !walkable(x + dx, y) || !walkable(x, y + dy) {
                                return None;
                            }
                            return Some(((nx, ny), DIAGONAL_COST));
                        }
                        Some(((nx, ny), STRAIGHT_COST))
                    })
                    .collect::<Vec<_>>()
            },
            |&(x, y)| {
                let dx = (x - goal_pos.0).unsigned_abs();
                let dy = (y - goal_pos.1).unsigned_abs();
                let (lo, hi) = if dx < dy { (dx, dy) } else { (dy, dx) };
                DIAGONAL_COST * lo + STRAIGHT_COST * (hi - lo)
            },
            |&pos| pos == goal_pos,
        );

        match result {
            Some((cells, cost)) => {
                let path = cells
                    .into_iter()
                    .map(|(x, y)| Point2::cell_center(x, y))
                    .collect();
                (path, cost as f32 / STRAIGHT_COST as f32)
            }
            None => (Vec::new(), 0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corridor() -> GridArray<bool> {
        // 10x10 open map with a wall across y = 5 except a 3-wide gap at x 3..=5.
        let mut grid = GridArray::new(10, 10, true);
        for x in 0..10 {
            if !(3..=5).contains(&x) {
                grid.set(x, 5, false);
            }
        }
        grid
    }

    #[test]
    fn open_gap_has_path() {
        let (path, distance) = AStarPathOracle.find_path(
            &corridor(),
            &[],
            Point2::new(4.5, 1.5),
            Point2::new(4.5, 8.5),
        );
        assert!(distance > 0.0);
        assert_eq!(path.first(), Some(&Point2::new(4.5, 1.5)));
        assert_eq!(path.last(), Some(&Point2::new(4.5, 8.5)));
    }

    #[test]
    fn blocked_gap_reports_zero_distance() {
        let blocks = [PathBlock::new(Point2::new(4.5, 5.5), BlockerType::Building3x3)];
        let (path, distance) = AStarPathOracle.find_path(
            &corridor(),
            &blocks,
            Point2::new(4.5, 1.5),
            Point2::new(4.5, 8.5),
        );
        assert_eq!(distance, 0.0);
        assert!(path.is_empty());
    }

    #[test]
    fn diagonal_moves_do_not_squeeze_between_corners() {
        let mut grid = GridArray::new(4, 4, true);
        // Two blocks touching at a corner: (1,1) and (2,2) open, (1,2) and (2,1) closed.
        grid.set(1, 2, false);
        grid.set(2, 1, false);
        grid.set(0, 2, false);
        grid.set(0, 3, false);
        grid.set(2, 0, false);
        grid.set(3, 0, false);
        let (_, distance) = AStarPathOracle.find_path(
            &grid,
            &[],
            Point2::new(0.5, 0.5),
            Point2::new(3.5, 3.5),
        );
        assert_eq!(distance, 0.0);
    }

    #[test]
    fn unwalkable_goal_is_still_reachable() {
        let mut grid = GridArray::new(5, 1, true);
        grid.set(4, 0, false);
        let (_, distance) = AStarPathOracle.find_path(
            &grid,
            &[],
            Point2::new(0.5, 0.5),
            Point2::new(4.5, 0.5),
        );
        assert_eq!(distance, 4.0);
    }
}
