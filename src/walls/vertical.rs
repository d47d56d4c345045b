use super::*;

/// Walls across a lane that runs along the x axis: structures stacked in y.
///
/// ```text
///   B      B = 3x3 structure at (0, 4)
///   u      u = blocker at (0, 2)
///   P      P = pivot structure at (0, 0)
///   B      B = 3x3 structure at (0, -3)
/// ```
///
/// The straight wall scores highest; the widest hybrids lowest.
pub fn vertical_walls() -> Vec<WallFinder> {
    vec![
        // Straight
        wf_scored("v1", (0, -3), (0, 4), (0, -1), (0, 1), (0, 2), 5),
        wf("v2", (1, -3), (0, 4), (0, -1), (0, 1), (0, 2)),
        wf("v3", (-1, -3), (0, 4), (0, -1), (0, 1), (0, 2)),
        wf("v4", (1, -3), (-1, 4), (0, -1), (0, 1), (0, 2)),
        wf("v5", (-1, -3), (1, 4), (0, -1), (0, 1), (0, 2)),
        // Hybrid: one structure leans sideways onto the cliff
        wf("hv1", (2, -3), (-1, 4), (1, 0), (0, 1), (0, 2)),
        wf("hv2", (-2, -3), (1, 4), (-1, 0), (0, 1), (0, 2)),
        wf("hv3", (2, 3), (-1, -4), (1, 0), (0, -1), (0, -2)),
        wf("hv4", (-2, 3), (1, -4), (-1, 0), (0, -1), (0, -2)),
        wf_scored("hv5", (2, -3), (-2, 4), (1, 0), (0, 1), (-1, 2), 1),
        wf_scored("hv6", (-2, -3), (2, 4), (-1, 0), (0, 1), (1, 2), 1),
        wf_scored("hv7", (2, 3), (-2, -4), (1, 0), (0, -1), (-1, -2), 1),
        wf_scored("hv8", (-2, 3), (2, -4), (-1, 0), (0, -1), (1, -2), 1),
    ]
}
