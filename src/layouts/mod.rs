//! Base layout patterns.
//!
//! Each pattern tests a precondition rectangle anchored at a sweep cell and,
//! if it is clear, places supply and production footprints at fixed offsets
//! and pads around them so later patterns keep their distance. The first
//! pattern to claim a cell wins it.

pub mod protoss;
pub mod terran;
pub mod zerg;

use crate::grid::*;
use crate::location::*;
use crate::map_data::Race;
use itertools::iproduct;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub enum LayoutPattern {
    /// Three supply slots over a 2x2 block of production structures.
    ProductionBlock,
    /// Supply slot with one production structure to its right.
    SupplyPair,
    /// Supply slot with one production structure to its left.
    SupplyPairReversed,
    /// Two production structures interleaved with three supply slots.
    TerranBlock,
    /// One production structure above a row of three supply slots.
    TerranRow,
    /// 2x2 block of production structures.
    ZergBlock,
    /// Single production structure.
    ZergSingle,
}

impl LayoutPattern {
    /// Try to claim the layout with its corner at `pos`.
    pub fn try_place(self, grid: &mut BuildGrid, pos: Point2) -> bool {
        match self {
            LayoutPattern::ProductionBlock => protoss::production_block(grid, pos),
            LayoutPattern::SupplyPair => protoss::supply_pair(grid, pos),
            LayoutPattern::SupplyPairReversed => protoss::supply_pair_reversed(grid, pos),
            LayoutPattern::TerranBlock => terran::terran_block(grid, pos),
            LayoutPattern::TerranRow => terran::terran_row(grid, pos),
            LayoutPattern::ZergBlock => zerg::zerg_block(grid, pos),
            LayoutPattern::ZergSingle => zerg::zerg_single(grid, pos),
        }
    }

    /// Pattern passes for a race and zone, in the order they sweep.
    pub fn passes(race: Race, zone: ZoneArea, order: SweepOrder) -> Vec<LayoutPattern> {
        match race {
            Race::Protoss => {
                let pair = if order.reverse_x {
                    LayoutPattern::SupplyPairReversed
                } else {
                    LayoutPattern::SupplyPair
                };
                if zone == ZoneArea::OwnMain {
                    vec![LayoutPattern::ProductionBlock, pair]
                } else {
                    vec![pair]
                }
            }
            Race::Terran => vec![LayoutPattern::TerranBlock, LayoutPattern::TerranRow],
            Race::Zerg | Race::Random => vec![LayoutPattern::ZergBlock, LayoutPattern::ZergSingle],
        }
    }
}

/// Iteration order of the layout sweep. Cells claimed earlier win, so the
/// order decides which positions a crowded base ends up with.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct SweepOrder {
    /// Sweep x from high to low.
    pub reverse_x: bool,
    /// Sweep y from high to low.
    pub reverse_y: bool,
}

impl SweepOrder {
    pub fn new(reverse_x: bool, reverse_y: bool) -> Self {
        SweepOrder {
            reverse_x,
            reverse_y,
        }
    }

    /// Sweep from the start location's map quadrant toward the map center.
    pub fn from_start(start: Point2, map_center: Point2) -> Self {
        SweepOrder {
            reverse_x: start.x < map_center.x,
            reverse_y: start.y < map_center.y,
        }
    }

    /// Offsets in `[-window, window)` on both axes, x outer and y inner.
    pub fn offsets(self, window: i32) -> Vec<(i32, i32)> {
        let axis = |reverse: bool| -> Vec<i32> {
            if reverse {
                (-window..window).rev().collect()
            } else {
                (-window..window).collect()
            }
        };
        let xs = axis(self.reverse_x);
        let ys = axis(self.reverse_y);
        iproduct!(xs, ys).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_order_follows_start_quadrant() {
        let center = Point2::new(50.0, 50.0);
        assert_eq!(
            SweepOrder::from_start(Point2::new(20.0, 80.0), center),
            SweepOrder::new(true, false)
        );
        assert_eq!(
            SweepOrder::from_start(Point2::new(80.0, 20.0), center),
            SweepOrder::new(false, true)
        );
    }

    #[test]
    fn offsets_cover_window_in_requested_direction() {
        let forward = SweepOrder::new(false, false).offsets(2);
        assert_eq!(forward.len(), 16);
        assert_eq!(forward[0], (-2, -2));
        assert_eq!(forward[1], (-2, -1));
        assert_eq!(forward[15], (1, 1));

        let reversed = SweepOrder::new(true, true).offsets(2);
        assert_eq!(reversed[0], (1, 1));
        assert_eq!(reversed[15], (-2, -2));
    }

    #[test]
    fn protoss_pair_direction_tracks_sweep() {
        let passes = LayoutPattern::passes(
            Race::Protoss,
            ZoneArea::OwnNatural,
            SweepOrder::new(true, false),
        );
        assert_eq!(passes, vec![LayoutPattern::SupplyPairReversed]);
        let passes = LayoutPattern::passes(Race::Protoss, ZoneArea::OwnMain, SweepOrder::default());
        assert_eq!(passes, vec![LayoutPattern::ProductionBlock, LayoutPattern::SupplyPair]);
    }

    #[test]
    fn blocked_precondition_places_nothing() {
        let mut grid = BuildGrid::new(20, 20);
        grid.fill_rect(Rectangle::new(5.0, 5.0, 1.0, 1.0), fill_padding);
        for pattern in [
            LayoutPattern::ProductionBlock,
            LayoutPattern::TerranBlock,
            LayoutPattern::TerranRow,
            LayoutPattern::ZergBlock,
            LayoutPattern::ZergSingle,
        ] {
            assert!(!pattern.try_place(&mut grid, Point2::new(5.0, 5.0)), "{:?}", pattern);
        }
        assert!(grid.supply().is_empty());
        assert!(grid.production().is_empty());
    }
}
