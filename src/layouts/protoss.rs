use crate::grid::*;
use crate::location::*;

/// Three supply slots along the bottom edge over a 2x2 block of production
/// structures, with walk-out lanes on both sides. Main zone only.
pub fn production_block(grid: &mut BuildGrid, pos: Point2) -> bool {
    let rect = Rectangle::new(pos.x, pos.y, 6.0, 9.0);
    let exit_left = Rectangle::new(pos.x - 2.0, pos.y + 4.0, 2.0, 2.0);
    let exit_right = Rectangle::new(pos.x + 6.0, pos.y + 4.0, 2.0, 2.0);

    if !grid.query_rect_on_map(rect, is_empty)
        || !grid.query_rect(exit_left, is_free)
        || !grid.query_rect(exit_right, is_free)
    {
        return false;
    }

    let mut supply = vec![pos + (1, 1), pos + (3, 1), pos + (5, 1)];
    let production = [
        pos.offset(1.5, 3.5),
        pos.offset(4.5, 3.5),
        pos.offset(1.5, 6.5),
        pos.offset(4.5, 6.5),
    ];

    // Corner slot would seal the lane below the block.
    if !grid.query_area(supply[0] + (0, -1), BlockerType::Building2x2, is_free) {
        supply.remove(0);
    }

    for position in supply {
        grid.fill_and_save(position, BlockerType::Building2x2, BuildArea::Supply);
    }
    for position in production {
        grid.fill_and_save(position, BlockerType::Building3x3, BuildArea::Building);
    }

    grid.fill_rect(Rectangle::new(pos.x - 2.0, pos.y - 2.0, 10.0, 12.0), fill_padding);
    true
}

pub fn supply_pair(grid: &mut BuildGrid, pos: Point2) -> bool {
    place_pair(grid, pos, pos.x + 2.0, pos.offset(3.5, 1.5))
}

pub fn supply_pair_reversed(grid: &mut BuildGrid, pos: Point2) -> bool {
    place_pair(grid, pos, pos.x - 3.0, pos.offset(-1.5, 1.5))
}

fn place_pair(grid: &mut BuildGrid, pos: Point2, production_x: f32, production: Point2) -> bool {
    let supply_rect = Rectangle::new(pos.x, pos.y, 2.0, 2.0);
    let production_rect = Rectangle::new(production_x, pos.y, 3.0, 3.0);

    if !grid.query_rect_on_map(supply_rect, is_empty)
        || !grid.query_rect_on_map(production_rect, is_empty)
    {
        return false;
    }

    grid.fill_and_save(pos + (1, 1), BlockerType::Building2x2, BuildArea::Supply);
    grid.fill_and_save(production, BlockerType::Building3x3, BuildArea::Building);
    grid.fill_area(production, BlockerType::Building5x5, fill_padding);
    true
}
