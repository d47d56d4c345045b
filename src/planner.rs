//! Public API for the building solver.
//!
//! The `SolverBuilder` provides a fluent API for configuring a solve. The
//! builder produces a `BuildingSolver` that is ticked by the bot's update
//! loop, or run to completion with `solve_map`.

use crate::layouts::SweepOrder;
use crate::map_data::MapDataSource;
use crate::terrain::MapError;
use crate::path::*;
use crate::solver::BuildingSolver;

// Re-export key types for convenience
pub use crate::config::{SolverConfig, WallStrategy, WallTieBreak};
pub use crate::map_data::{MapSnapshot, Race};
pub use crate::solver::{SolverPhase, WallPlacement};

/// Builder for configuring a solve.
pub struct SolverBuilder {
    config: SolverConfig,
    oracle: Box<dyn PathOracle>,
}

impl SolverBuilder {
    /// Default configuration with the A* path oracle.
    pub fn new() -> Self {
        SolverBuilder {
            config: SolverConfig::default(),
            oracle: Box::new(AStarPathOracle),
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Override the matchup table (default: `WallStrategy::Auto`).
    pub fn wall_strategy(mut self, strategy: WallStrategy) -> Self {
        self.config.wall_strategy = strategy;
        self
    }

    /// Fix the layout sweep order instead of deriving it from the start location.
    pub fn sweep_order(mut self, order: SweepOrder) -> Self {
        self.config.sweep_order = Some(order);
        self
    }

    pub fn tie_break(mut self, tie_break: WallTieBreak) -> Self {
        self.config.tie_break = tie_break;
        self
    }

    /// Natural wall search window: axis distance range and perpendicular half-width.
    pub fn natural_search(mut self, min: i32, max: i32, width: i32) -> Self {
        self.config.natural_search_min = min;
        self.config.natural_search_max = max;
        self.config.natural_search_width = width;
        self
    }

    pub fn path_oracle(mut self, oracle: Box<dyn PathOracle>) -> Self {
        self.oracle = oracle;
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.config.debug = debug;
        self
    }

    pub fn build(self) -> BuildingSolver {
        BuildingSolver::new(self.config, self.oracle)
    }
}

impl Default for SolverBuilder {
    fn default() -> Self {
        SolverBuilder::new()
    }
}

/// Validate the map and run a solve to completion with the default
/// configuration (for offline use).
pub fn solve_map(source: &dyn MapDataSource) -> Result<BuildingSolver, MapError> {
    source.validate()?;
    let mut solver = SolverBuilder::default().build();
    solver.tick(source);
    Ok(solver)
}
