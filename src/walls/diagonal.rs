use super::*;

/// Diagonal walls for ramps and chokepoints that cut across both axes.
/// Always searched regardless of the natural's dominant axis.
pub fn diagonal_walls() -> Vec<WallFinder> {
    vec![
        wf("d1", (2, 4), (-3, -2), (0, 1), (-1, 0), (1, 2)),
        wf("d2", (-2, -4), (3, 2), (0, -1), (1, 0), (-1, -2)),
        wf("d3", (4, 2), (-2, -3), (1, 0), (0, -1), (2, 1)),
        wf("d4", (-4, -2), (2, 3), (-1, 0), (0, 1), (-2, -1)),
        wf("d5", (2, 4), (-3, -1), (0, 1), (-1, 0), (1, 2)),
        wf("d6", (-2, -4), (3, 1), (0, -1), (1, 0), (-1, -2)),
        wf("d7", (4, 2), (-1, -3), (1, 0), (0, -1), (2, 1)),
        wf("d8", (-4, -2), (1, 3), (-1, 0), (0, 1), (-2, -1)),
        wf("d9", (-3, 1), (2, -4), (-1, 0), (0, -1), (1, -2)),
        wf("d10", (3, -1), (-2, 4), (1, 0), (0, 1), (-1, 2)),
    ]
}
