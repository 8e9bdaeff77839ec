mod button;

pub use button::Button;

use crate::application::Control;
use crate::domain::Point;

pub const BUTTON_X: f32 = 760.0;
pub const BUTTON_WIDTH: f32 = 100.0;
pub const BUTTON_HEIGHT: f32 = 40.0;

/// Create the four control buttons at their fixed panel positions
pub fn create_buttons() -> Vec<Button> {
    [
        (300.0, "Start", Control::Start),
        (350.0, "Stop", Control::Stop),
        (450.0, "State", Control::State),
        (500.0, "Clear", Control::Clear),
    ]
    .into_iter()
    .map(|(y, text, control)| Button::new(BUTTON_X, y, BUTTON_WIDTH, BUTTON_HEIGHT, text, control))
    .collect()
}

/// Control under a position, if any
pub fn control_at(buttons: &[Button], position: Point) -> Option<Control> {
    buttons
        .iter()
        .find(|button| button.contains(position))
        .map(Button::control)
}
