//! Step throughput on random soups of the default grid

use std::time::Instant;
use rand::Rng;
use life_grid::{CellRegistry, Config, Geometry, domain::step};

/// Fill roughly `density` of the grid with live cells
fn random_soup(geometry: Geometry, density: f64) -> CellRegistry {
    let mut rng = rand::rng();
    let mut registry = CellRegistry::new(geometry);
    for coord in geometry.coordinates() {
        if rng.random_bool(density) {
            registry.create((coord.x as f32, coord.y as f32), 1);
        }
    }
    registry
}

/// Mean milliseconds per cycle, with final population
fn benchmark_step(geometry: Geometry, density: f64, iterations: u64) -> (f64, usize) {
    let mut registry = random_soup(geometry, density);

    let start = Instant::now();
    for cycle in 2..iterations + 2 {
        registry.age_all();
        registry = step(&registry, &geometry, cycle);
    }
    let ms = start.elapsed().as_secs_f64() * 1000.0 / iterations as f64;
    (ms, registry.len())
}

fn main() {
    println!("=== Game of Life Step Benchmark ===\n");

    let geometry = match Config::default().geometry() {
        Ok(geometry) => geometry,
        Err(err) => {
            eprintln!("invalid grid: {}", err);
            return;
        }
    };
    let cells = geometry.cell_count();
    let iterations = 200;

    println!("{:>10} {:>12} {:>16} {:>12}", "Density", "ms/gen", "cells/sec", "Population");
    println!("{:-<54}", "");

    for density in [0.05, 0.15, 0.3, 0.5] {
        let (ms, population) = benchmark_step(geometry, density, iterations);
        let throughput = cells as f64 / (ms / 1000.0);
        println!(
            "{:>9.0}% {:>12.3} {:>15.1}M {:>12}",
            density * 100.0,
            ms,
            throughput / 1_000_000.0,
            population
        );
    }
}
