use crate::grid::*;
use crate::location::*;

/// 2x2 block of production structures with a cross-shaped padding ring.
pub fn zerg_block(grid: &mut BuildGrid, pos: Point2) -> bool {
    let rect = Rectangle::new(pos.x, pos.y, 6.0, 6.0);
    if !grid.query_rect_on_map(rect, is_empty) {
        return false;
    }

    for (dx, dy) in [(1.5, 1.5), (4.5, 1.5), (1.5, 4.5), (4.5, 4.5)] {
        grid.fill_and_save(pos.offset(dx, dy), BlockerType::Building3x3, BuildArea::Building);
    }

    grid.fill_rect(Rectangle::new(pos.x - 2.0, pos.y - 1.0, 10.0, 8.0), fill_padding);
    grid.fill_rect(Rectangle::new(pos.x - 1.0, pos.y - 2.0, 8.0, 10.0), fill_padding);
    true
}

pub fn zerg_single(grid: &mut BuildGrid, pos: Point2) -> bool {
    if !grid.query_rect_on_map(Rectangle::new(pos.x, pos.y, 3.0, 3.0), is_empty) {
        return false;
    }

    grid.fill_and_save(pos.offset(1.5, 1.5), BlockerType::Building3x3, BuildArea::Building);
    grid.fill_rect(Rectangle::new(pos.x, pos.y, 5.0, 5.0), fill_padding);
    true
}
