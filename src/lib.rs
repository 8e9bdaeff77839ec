// Domain layer - Core simulation logic
pub mod domain;

// Application layer - Mode state machine and constants
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, CellRegistry, Coordinate, Geometry, GeometryError};
pub use application::{Config, Controller, Mode, SimulationState};
pub use ui::Button;
