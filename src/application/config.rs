use std::time::Duration;

use crate::domain::{Geometry, GeometryError};

/// Fixed program constants. There is no configuration file.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub title: &'static str,
    pub window_width: i32,
    pub window_height: i32,
    /// Grid area extents in pixels, anchored at the window origin
    pub grid_width: i32,
    pub grid_height: i32,
    pub cell_size: i32,
    /// Pause after every generation while running
    pub cycle_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Conway's Game of Life",
            window_width: 900,
            window_height: 720,
            grid_width: 720,
            grid_height: 720,
            cell_size: 10,
            cycle_delay: Duration::from_secs(1),
        }
    }
}

impl Config {
    /// Validated grid geometry for these constants
    pub fn geometry(&self) -> Result<Geometry, GeometryError> {
        Geometry::new(self.grid_width, self.grid_height, self.cell_size)
    }
}
