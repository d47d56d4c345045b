use crate::grid::*;
use crate::layouts::*;
use crate::location::*;
use crate::map_data::*;
use crate::terrain::*;
use log::*;

/// Tag empty cells within the zone's radius at the center's height. Cells
/// already owned by an earlier zone are left alone.
pub fn color_zone(grid: &mut BuildGrid, terrain: &MapTerrain, zone: &ZoneInfo, tag: ZoneArea) {
    let center = zone.center_location.floor();
    let Some(height) = terrain.height_at(center) else {
        warn!("Zone {:?} center {:?} is off the map", tag, center);
        return;
    };
    let radius = zone.radius;

    let rect = Rectangle::new(center.x - radius, center.y - radius, radius * 2.0, radius * 2.0);
    grid.fill_rect_with_point(rect, |cell, point| {
        if cell.area == BuildArea::Empty
            && cell.zone.is_none()
            && terrain.height_at(point) == Some(height)
            && point.distance_to(center) <= radius
        {
            cell.zone = Some(tag);
        }
    });
}

/// Color the main base and the first two expansions.
pub fn color_zones(grid: &mut BuildGrid, source: &dyn MapDataSource) {
    for (zone, tag) in source.zones().iter().zip(ZoneArea::ALL) {
        color_zone(grid, source.terrain(), zone, tag);
    }
}

/// Sweep the window around a zone center and claim every cell still owned by
/// the zone with the race's layout patterns. Returns how many layouts fit.
pub fn fill_zone(
    grid: &mut BuildGrid,
    race: Race,
    zone: &ZoneInfo,
    tag: ZoneArea,
    order: SweepOrder,
    window: i32,
) -> usize {
    let center = zone.center_location.floor();

    if matches!(race, Race::Zerg | Race::Random) {
        // Keep larva room under the hatchery.
        let larva = Rectangle::new(center.x, center.y - 3.0, 5.0, 1.0);
        grid.fill_rect(larva, fill_padding);
    }

    let offsets = order.offsets(window);
    let mut placed = 0;

    for pattern in LayoutPattern::passes(race, tag, order) {
        for &offset in offsets.iter() {
            let pos = center + offset;
            match grid.cell_at(pos) {
                Some(cell) if cell.zone == Some(tag) => {}
                _ => continue,
            }

            if pattern.try_place(grid, pos) {
                placed += 1;
            }
        }
    }

    debug!("Zone {:?}: placed {} layouts", tag, placed);
    placed
}
