use macroquad::prelude::*;

use crate::application::{Event, PointerButton};
use crate::domain::Point;
use crate::ui::{self, Button};

const POINTER_BUTTONS: [(MouseButton, PointerButton); 2] = [
    (MouseButton::Left, PointerButton::Primary),
    (MouseButton::Right, PointerButton::Secondary),
];

/// Drain this frame's input into controller events
pub fn poll_events(buttons: &[Button]) -> Vec<Event> {
    let mouse_pos = mouse_position();
    let mut events = Vec::new();

    if is_key_pressed(KeyCode::Escape) {
        events.push(Event::Cancel);
    }

    for (mouse_button, button) in POINTER_BUTTONS {
        if is_mouse_button_pressed(mouse_button) {
            events.push(press(buttons, button, mouse_pos));
        }
        if is_mouse_button_released(mouse_button) {
            events.push(Event::PointerUp(button));
        }
    }

    events
}

/// A press on a control activates it; anywhere else it is a pointer press
fn press(buttons: &[Button], button: PointerButton, position: Point) -> Event {
    ui::control_at(buttons, position)
        .map_or(Event::PointerDown { button, position }, Event::Control)
}
