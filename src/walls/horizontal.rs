use super::*;

/// Walls across a lane that runs along the y axis: structures side by side in x.
///
/// ```text
/// B P u B      B = 3x3 structures at (-3, 0) and (4, 0)
///              P = pivot structure, u = blocker at (2, 0)
/// ```
pub fn horizontal_walls() -> Vec<WallFinder> {
    vec![
        // Straight
        wf_scored("h1", (-3, 0), (4, 0), (-1, 0), (1, 0), (2, 0), 5),
        wf("h2", (-3, 1), (4, 0), (-1, 0), (1, 0), (2, 0)),
        wf("h3", (-3, -1), (4, 0), (-1, 0), (1, 0), (2, 0)),
        wf("h4", (-3, 1), (4, -1), (-1, 0), (1, 0), (2, 0)),
        wf("h5", (-3, -1), (4, 1), (-1, 0), (1, 0), (2, 0)),
        // Hybrid
        wf("hh1", (-3, 2), (4, -1), (0, 1), (1, 0), (2, 0)),
        wf("hh2", (-3, -2), (4, 1), (0, -1), (1, 0), (2, 0)),
        wf("hh3", (3, 2), (-4, -1), (0, 1), (-1, 0), (-2, 0)),
        wf("hh4", (3, -2), (-4, 1), (0, -1), (-1, 0), (-2, 0)),
        wf_scored("hh5", (-3, 2), (4, -2), (0, 1), (1, 0), (2, -1), 1),
        wf_scored("hh6", (-3, -2), (4, 2), (0, -1), (1, 0), (2, 1), 1),
        wf_scored("hh7", (3, 2), (-4, -2), (0, 1), (-1, 0), (-2, -1), 1),
        wf_scored("hh8", (3, -2), (-4, 2), (0, -1), (-1, 0), (-2, 1), 1),
    ]
}
