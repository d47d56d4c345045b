use crate::grid::*;
use crate::location::*;

/// Two production structures interleaved with three supply slots in a 7x8
/// block. The whole block is padded afterwards.
pub fn terran_block(grid: &mut BuildGrid, pos: Point2) -> bool {
    let rect = Rectangle::new(pos.x, pos.y, 7.0, 8.0);
    if !grid.query_rect_on_map(rect, is_empty) {
        return false;
    }

    for supply in [pos + (1, 3), pos + (6, 4), pos + (6, 6)] {
        grid.fill_and_save(supply, BlockerType::Building2x2, BuildArea::Supply);
    }
    for production in [pos.offset(1.5, 5.5), pos.offset(3.5, 2.5)] {
        grid.fill_and_save(production, BlockerType::Building3x3, BuildArea::Building);
    }

    grid.fill_rect(rect, fill_padding);
    true
}

/// One production structure with room for an addon, and a row of three
/// supply slots above it.
pub fn terran_row(grid: &mut BuildGrid, pos: Point2) -> bool {
    let rect = Rectangle::new(pos.x, pos.y, 6.0, 5.0);
    if !grid.query_rect_on_map(rect, is_empty) {
        return false;
    }

    for supply in [pos + (1, 4), pos + (3, 4), pos + (5, 4)] {
        grid.fill_and_save(supply, BlockerType::Building2x2, BuildArea::Supply);
    }
    grid.fill_and_save(pos.offset(1.5, 1.5), BlockerType::Building3x3, BuildArea::Building);

    grid.fill_rect(Rectangle::new(pos.x, pos.y, 7.0, 5.0), fill_padding);
    true
}
