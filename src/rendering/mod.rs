use macroquad::prelude::*;

use crate::application::{Config, Mode};
use crate::domain::{Coordinate, Point, palette};
use crate::ui::{BUTTON_X, Button};

const GRID_BACKGROUND: Color = Color::new(92.0 / 255.0, 117.0 / 255.0, 94.0 / 255.0, 1.0);
const PANEL_BACKGROUND: Color = Color::new(156.0 / 255.0, 159.0 / 255.0, 132.0 / 255.0, 1.0);
const GRID_LINE: Color = Color::new(0.0, 0.0, 0.0, 0.15);

/// Color for a cell of the given age
fn cell_color(generations: u64) -> Color {
    let (r, g, b) = palette::ramp(generations);
    Color::from_rgba(r, g, b, 255)
}

/// Draw live cells colored by age, then the grid lines over them
pub fn draw_grid(cells: &[(Coordinate, u64)], config: &Config) {
    let size = config.cell_size as f32;
    let (width, height) = (config.grid_width as f32, config.grid_height as f32);

    draw_rectangle(0.0, 0.0, width, height, GRID_BACKGROUND);

    for &(node, generations) in cells {
        draw_rectangle(node.x as f32, node.y as f32, size, size, cell_color(generations));
    }

    for i in (0..=config.grid_width).step_by(config.cell_size as usize) {
        draw_line(i as f32, 0.0, i as f32, height, 1.0, GRID_LINE);
    }
    for i in (0..=config.grid_height).step_by(config.cell_size as usize) {
        draw_line(0.0, i as f32, width, i as f32, 1.0, GRID_LINE);
    }
}

/// Draw the side panel: separator, buttons and status labels
pub fn draw_controls(
    config: &Config,
    buttons: &[Button],
    mode: Mode,
    cycle: u64,
    population: usize,
    mouse_pos: Point,
) {
    let panel_x = config.grid_width as f32 + 1.0;
    let panel_width = config.window_width as f32 - panel_x;
    let height = config.window_height as f32;

    draw_rectangle(config.grid_width as f32, 0.0, 1.0, height, BLACK);
    draw_rectangle(panel_x, 0.0, panel_width, height, PANEL_BACKGROUND);

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let (status, status_color) = match mode {
        Mode::Editing => ("Editing", Color::from_rgba(255, 165, 0, 255)),
        Mode::Running => ("Running", Color::from_rgba(0, 120, 0, 255)),
    };

    let labels = [
        ("Status:".to_string(), 60.0, 16.0, BLACK),
        (status.to_string(), 80.0, 20.0, status_color),
        ("Cycle:".to_string(), 120.0, 16.0, BLACK),
        (cycle.to_string(), 140.0, 20.0, DARKGRAY),
        ("Population:".to_string(), 180.0, 16.0, BLACK),
        (population.to_string(), 200.0, 20.0, DARKGRAY),
        ("LMB: Paint  RMB: Erase".to_string(), 600.0, 12.0, DARKGRAY),
        ("Esc: Quit".to_string(), 615.0, 12.0, DARKGRAY),
    ];

    labels.iter().for_each(|(text, y, size, color)| {
        draw_text(text, BUTTON_X - 20.0, *y, *size, *color);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_color_follows_ramp() {
        assert_eq!(cell_color(1), Color::from_rgba(17, 255, 0, 255));
        assert_eq!(cell_color(30), Color::from_rgba(255, 0, 0, 255));
    }
}
