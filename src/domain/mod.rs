mod cell;
mod error;
mod grid;
mod registry;
pub mod palette;
pub mod transition;

pub use cell::Cell;
pub use error::GeometryError;
pub use grid::{Coordinate, Geometry, Point};
pub use registry::CellRegistry;
pub use transition::{Cause, Fate, Plan, step};
