//! Age-to-color ramp for live cells.
//!
//! The ramp walks the edge of the RGB cube: green → yellow → red → magenta
//! → blue → cyan → green, moving one channel by [`STEP`] per generation.
//! It depends on the generation count alone.

/// Channel increment per generation
pub const STEP: u8 = 17;

/// Generations spent on each leg of the walk (255 / 17)
pub const LEG: u64 = 15;

/// Generations before the ramp repeats
pub const PERIOD: u64 = LEG * 6;

/// RGB color for a cell that has lived `generation` cycles
pub const fn ramp(generation: u64) -> (u8, u8, u8) {
    let position = generation % PERIOD;
    let up = (position % LEG) as u8 * STEP;
    let down = 255 - up;
    match position / LEG {
        0 => (up, 255, 0),
        1 => (255, down, 0),
        2 => (255, 0, up),
        3 => (down, 0, 255),
        4 => (0, up, 255),
        _ => (0, 255, down),
    }
}
