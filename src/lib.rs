pub mod config;
pub mod constants;
pub mod grid;
pub mod layouts;
pub mod location;
pub mod map_data;
pub mod path;
pub mod planner;
pub mod solver;
pub mod terrain;
pub mod utility;
pub mod walls;

pub mod visual;
pub use visual::*;

pub use planner::*;
