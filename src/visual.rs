use super::grid::*;
use super::location::*;
use super::solver::BuildingSolver;

/// Debug drawing backend, e.g. the engine's debug boxes.
pub trait SolverVisualizer {
    fn draw_cell(&mut self, x: i32, y: i32, area: BuildArea);

    fn draw_blocker(&mut self, position: Point2);
}

/// Cells worth drawing; open ground and terrain are skipped.
fn is_drawn(area: BuildArea) -> bool {
    matches!(
        area,
        BuildArea::Building
            | BuildArea::TownHall
            | BuildArea::Supply
            | BuildArea::Mineral
            | BuildArea::Gas
    )
}

impl BuildingSolver {
    /// Draw occupied cells and the blocker. Does nothing unless `debug` is set.
    pub fn render(&self, visualizer: &mut dyn SolverVisualizer) {
        if !self.config().debug {
            return;
        }

        if let Some(blocker) = self.blocker() {
            visualizer.draw_blocker(blocker);
        }

        if let Some(grid) = self.grid() {
            for ((x, y), cell) in grid.iter() {
                if is_drawn(cell.area) {
                    visualizer.draw_cell(x as i32, y as i32, cell.area);
                }
            }
        }
    }
}

fn glyph(cell: &GridCell) -> char {
    match cell.area {
        BuildArea::Empty => match cell.zone {
            Some(ZoneArea::OwnMain) => '1',
            Some(ZoneArea::OwnNatural) => '2',
            Some(ZoneArea::OwnThird) => '3',
            None => '.',
        },
        BuildArea::NotBuildable => '#',
        BuildArea::Ramp => '/',
        BuildArea::VisionBlocker => '~',
        BuildArea::Mineral => 'm',
        BuildArea::Gas => 'g',
        BuildArea::TownHall => 'T',
        BuildArea::HighRock => 'R',
        BuildArea::Building => 'B',
        BuildArea::BuildingPadding => '+',
        BuildArea::Supply => 'S',
    }
}

/// Text dump of the grid, highest row first.
pub fn render_ascii(grid: &BuildGrid) -> String {
    let mut out = String::with_capacity((grid.width() + 1) * grid.height());
    for y in (0..grid.height() as i32).rev() {
        for x in 0..grid.width() as i32 {
            out.push(grid.get(x, y).map(glyph).unwrap_or(' '));
        }
        out.push('\n');
    }
    out
}
