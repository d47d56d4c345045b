use super::{save_wall, WallRecord};
use crate::grid::*;
use crate::map_data::*;
use log::*;

/// Supply structures on the ramp's corner depot slots plus the middle slot.
/// Only applies when a structure fits in the middle.
pub fn depot_wall(grid: &mut BuildGrid, ramp: &RampInfo) -> Option<WallRecord> {
    let middle = ramp.depot_in_middle?;

    let supply = ramp
        .corner_depots
        .iter()
        .copied()
        .chain(std::iter::once(middle))
        .filter_map(|position| {
            grid.fill_and_save(position, BlockerType::Building2x2, BuildArea::Supply)
        })
        .collect();

    Some(WallRecord {
        supply,
        structures: Vec::new(),
        blocker: None,
    })
}

/// Supply structure away from the ramp with two structures on the given
/// ramp slots. Any missing reference position skips the wall.
pub fn main_ramp_wall(
    grid: &mut BuildGrid,
    ramp: &RampInfo,
    gate: RampPosition,
    core: RampPosition,
) -> Option<WallRecord> {
    let (Some(supply), Some(blocker), Some(gate_pos), Some(core_pos)) = (
        ramp.position(RampPosition::Away),
        ramp.position(RampPosition::Blocker),
        ramp.position(gate),
        ramp.position(core),
    ) else {
        debug!("Ramp wall {:?}/{:?}: reference positions missing", gate, core);
        return None;
    };

    Some(save_wall(grid, supply, blocker, &[gate_pos, core_pos]))
}
