mod config;
mod simulation;

pub use config::Config;
pub use simulation::{Control, Controller, Event, Flow, Mode, PointerButton, SimulationState, Tick};
