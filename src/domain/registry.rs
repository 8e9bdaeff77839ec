use std::collections::HashMap;
use std::fmt::Write;

use super::cell::Cell;
use super::grid::{Coordinate, Geometry, Point};

/// CellRegistry is the sparse set of live cells keyed by coordinate.
/// A coordinate is a key iff a cell is alive there.
#[derive(Clone, Debug)]
pub struct CellRegistry {
    geometry: Geometry,
    cells: HashMap<Coordinate, Cell>,
}

impl CellRegistry {
    /// Create an empty registry over the given grid
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            cells: HashMap::new(),
        }
    }

    pub const fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.cells.contains_key(&coord)
    }

    pub fn get(&self, coord: Coordinate) -> Option<&Cell> {
        self.cells.get(&coord)
    }

    /// Iterate over live cells in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.values()
    }

    /// Place a cell under `raw`. Returns the new cell, or `None` when the
    /// position is off-grid or already occupied.
    pub fn create(&mut self, raw: Point, cycle: u64) -> Option<&Cell> {
        let node = self.geometry.quantize(raw);
        if !self.geometry.is_valid(node) || self.cells.contains_key(&node) {
            return None;
        }
        Some(&*self.cells.entry(node).or_insert(Cell::new(raw, node, cycle)))
    }

    /// Remove the cell under `raw`, if any
    pub fn destroy(&mut self, raw: Point) -> Option<Cell> {
        let node = self.geometry.quantize(raw);
        self.cells.remove(&node)
    }

    /// Remove every cell. The cycle counter lives elsewhere and is untouched.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Add one generation to every live cell
    pub fn age_all(&mut self) {
        self.cells.values_mut().for_each(Cell::age);
    }

    /// Coordinates and ages for drawing
    pub fn snapshot_for_render(&self) -> Vec<(Coordinate, u64)> {
        self.cells
            .values()
            .map(|cell| (cell.node, cell.generations))
            .collect()
    }

    /// Human-readable listing of every live cell, sorted by coordinate
    pub fn dump(&self, cycle: u64) -> String {
        let mut nodes: Vec<_> = self.cells.keys().copied().collect();
        nodes.sort();

        let mut out = format!("    === Grid State :: Cycle {} ===", cycle);
        for node in nodes {
            if let Some(cell) = self.cells.get(&node) {
                let _ = write!(out, "\n{}", cell);
            }
        }
        out
    }

    /// Remove a cell by coordinate (used by the transition step)
    pub(super) fn remove(&mut self, coord: Coordinate) {
        self.cells.remove(&coord);
    }

    /// Insert a cell at its own node (used by the transition step)
    pub(super) fn insert(&mut self, cell: Cell) {
        self.cells.insert(cell.node, cell);
    }
}
