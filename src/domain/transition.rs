use log::debug;

use super::cell::Cell;
use super::grid::{Coordinate, Geometry};
use super::registry::CellRegistry;

/// Why a live cell is removed
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cause {
    Underpopulation,
    Overcrowding,
}

/// What happens to one coordinate in a single cycle
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Fate {
    Unchanged,
    Death(Cause),
    Birth,
}

impl Fate {
    /// Conway's rule (B3/S23) for one coordinate:
    /// 1. Live cell with fewer than 2 neighbors dies
    /// 2. Live cell with more than 3 neighbors dies
    /// 3. Dead cell with exactly 3 neighbors is born
    /// 4. Everything else stays as it is
    pub const fn of(alive: bool, neighbors: u8) -> Self {
        match (alive, neighbors) {
            (true, 0 | 1) => Fate::Death(Cause::Underpopulation),
            (true, 2 | 3) => Fate::Unchanged,
            (true, _) => Fate::Death(Cause::Overcrowding),
            (false, 3) => Fate::Birth,
            (false, _) => Fate::Unchanged,
        }
    }
}

/// Deaths and births decided from one read of a registry
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Plan {
    pub deaths: Vec<Coordinate>,
    pub births: Vec<Coordinate>,
}

/// Live neighbors of `coord` in `registry`
pub fn live_neighbor_count(registry: &CellRegistry, geometry: &Geometry, coord: Coordinate) -> u8 {
    geometry
        .neighbors_of(coord)
        .iter()
        .filter(|&&n| registry.contains(n))
        .count() as u8
}

/// Decide every coordinate's fate without touching the registry
pub fn plan(registry: &CellRegistry, geometry: &Geometry) -> Plan {
    geometry
        .coordinates()
        .fold(Plan::default(), |mut plan, coord| {
            let neighbors = live_neighbor_count(registry, geometry, coord);
            match Fate::of(registry.contains(coord), neighbors) {
                Fate::Death(_) => plan.deaths.push(coord),
                Fate::Birth => plan.births.push(coord),
                Fate::Unchanged => {}
            }
            plan
        })
}

/// Advance one cycle. Births are stamped with `cycle`.
/// The input registry is only read; the result is a fresh registry.
pub fn step(registry: &CellRegistry, geometry: &Geometry, cycle: u64) -> CellRegistry {
    let plan = plan(registry, geometry);
    debug!(
        "cycle {}: {} deaths, {} births",
        cycle,
        plan.deaths.len(),
        plan.births.len()
    );

    let mut next = registry.clone();
    plan.deaths.iter().for_each(|&coord| next.remove(coord));
    plan.births
        .into_iter()
        .for_each(|coord| next.insert(Cell::born(coord, cycle)));
    next
}
