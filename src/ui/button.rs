use macroquad::prelude::*;

use crate::application::Control;
use crate::domain::Point;

/// Button is one fixed control region of the side panel
#[derive(Clone)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    text: String,
    control: Control,
    color: Color,
    hover_color: Color,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, text: impl Into<String>, control: Control) -> Self {
        Self {
            x,
            y,
            width,
            height,
            text: text.into(),
            control,
            color: Color::from_rgba(92, 117, 94, 255),
            hover_color: Color::from_rgba(120, 150, 122, 255),
        }
    }

    pub const fn control(&self) -> Control {
        self.control
    }

    /// Check if a position lies inside the button
    pub fn contains(&self, (px, py): Point) -> bool {
        px >= self.x
            && px <= self.x + self.width
            && py >= self.y
            && py <= self.y + self.height
    }

    /// Draw button, highlighted under the pointer
    pub fn draw(&self, mouse_pos: Point) {
        let color = if self.contains(mouse_pos) {
            self.hover_color
        } else {
            self.color
        };

        draw_rectangle(self.x, self.y, self.width, self.height, color);
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, BLACK);

        let text_size = measure_text(&self.text, None, 20, 1.0);
        draw_text(
            &self.text,
            self.x + (self.width - text_size.width) / 2.0,
            self.y + (self.height + text_size.height) / 2.0,
            20.0,
            WHITE,
        );
    }
}
