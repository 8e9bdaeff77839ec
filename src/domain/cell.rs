use std::fmt;

use chrono::{DateTime, Local};

use super::grid::{Coordinate, Point};

/// Cell is the metadata record for one live coordinate.
/// A cell that dies and is later reborn at the same place is a new Cell.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    /// Raw position the cell was created from (informational)
    pub spawn_point: Point,
    /// Coordinate the cell occupies; also its registry key
    pub node: Coordinate,
    /// Wall-clock creation time (informational)
    pub created: DateTime<Local>,
    /// Cycle during which the cell appeared
    pub cycle_created: u64,
    /// Cycles survived at this coordinate, starting at 1
    pub generations: u64,
}

impl Cell {
    /// Create a freshly placed cell
    pub fn new(spawn_point: Point, node: Coordinate, cycle: u64) -> Self {
        Self {
            spawn_point,
            node,
            created: Local::now(),
            cycle_created: cycle,
            generations: 1,
        }
    }

    /// A cell born by reproduction spawns exactly on its node
    pub fn born(node: Coordinate, cycle: u64) -> Self {
        Self::new((node.x as f32, node.y as f32), node, cycle)
    }

    /// Count one more survived cycle
    pub fn age(&mut self) {
        self.generations += 1;
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Node:{} Spawn Position:({}, {}) Created:{} Cycle:{} Generations:{}",
            self.node,
            self.spawn_point.0,
            self.spawn_point.1,
            self.created.format("%a %b %e %H:%M:%S %Y"),
            self.cycle_created,
            self.generations,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cell_starts_at_one_generation() {
        let cell = Cell::new((13.0, 27.0), Coordinate::new(10, 20), 4);
        assert_eq!(cell.generations, 1);
        assert_eq!(cell.cycle_created, 4);
        assert_eq!(cell.spawn_point, (13.0, 27.0));
    }

    #[test]
    fn test_born_cell_spawns_on_node() {
        let cell = Cell::born(Coordinate::new(30, 40), 9);
        assert_eq!(cell.spawn_point, (30.0, 40.0));
        assert_eq!(cell.node, Coordinate::new(30, 40));
    }

    #[test]
    fn test_age_increments() {
        let mut cell = Cell::born(Coordinate::new(0, 0), 1);
        cell.age();
        cell.age();
        assert_eq!(cell.generations, 3);
    }

    #[test]
    fn test_display_line() {
        let cell = Cell::new((15.0, 7.0), Coordinate::new(10, 0), 2);
        let line = cell.to_string();
        assert!(line.starts_with("Node:(10, 0) Spawn Position:(15, 7) Created:"));
        assert!(line.ends_with("Cycle:2 Generations:1"));
    }
}
