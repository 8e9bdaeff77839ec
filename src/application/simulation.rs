use log::{debug, info};

use crate::domain::{CellRegistry, Coordinate, Geometry, Point, step};

/// Controller mode. Editing allows manual changes; Running advances cycles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Editing,
    Running,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    /// Paints cells
    Primary,
    /// Erases cells
    Secondary,
}

/// The four fixed control regions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Start,
    Stop,
    Clear,
    State,
}

/// Discrete input delivered to the controller
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    PointerDown { button: PointerButton, position: Point },
    PointerUp(PointerButton),
    Control(Control),
    Cancel,
}

/// Whether the main loop should keep going
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// What one loop tick did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    Idle,
    Edited,
    /// A cycle completed; the caller paces before the next one
    Advanced,
}

/// SimulationState holds everything that changes while the program runs.
#[derive(Clone, Debug)]
pub struct SimulationState {
    pub geometry: Geometry,
    pub registry: CellRegistry,
    pub cycle: u64,
    pub mode: Mode,
}

impl SimulationState {
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            registry: CellRegistry::new(geometry),
            cycle: 1,
            mode: Mode::default(),
        }
    }

    /// Run one generation: bump the cycle, age everyone, then apply the rule
    pub fn advance(&mut self) {
        self.cycle += 1;
        self.registry.age_all();
        self.registry = step(&self.registry, &self.geometry, self.cycle);
        debug!("cycle {}: population {}", self.cycle, self.registry.len());
    }
}

/// Controller interprets input events against the simulation state.
pub struct Controller {
    state: SimulationState,
    primary_held: bool,
    secondary_held: bool,
}

impl Controller {
    pub fn new(geometry: Geometry) -> Self {
        Self {
            state: SimulationState::new(geometry),
            primary_held: false,
            secondary_held: false,
        }
    }

    pub const fn state(&self) -> &SimulationState {
        &self.state
    }

    pub const fn mode(&self) -> Mode {
        self.state.mode
    }

    pub const fn cycle(&self) -> u64 {
        self.state.cycle
    }

    /// Live cells and their ages, copied out for drawing
    pub fn snapshot(&self) -> Vec<(Coordinate, u64)> {
        self.state.registry.snapshot_for_render()
    }

    /// Apply one input event
    pub fn handle(&mut self, event: Event) -> Flow {
        match (self.state.mode, event) {
            (_, Event::Cancel) => return Flow::Exit,
            (_, Event::PointerUp(button)) => self.set_held(button, false),
            (Mode::Editing, Event::Control(Control::Start)) => {
                info!("starting at cycle {}", self.state.cycle);
                self.state.mode = Mode::Running;
            }
            (Mode::Running, Event::Control(Control::Stop)) => {
                info!("stopped at cycle {}", self.state.cycle);
                self.state.mode = Mode::Editing;
            }
            (Mode::Editing, Event::Control(Control::Clear)) => {
                info!("cleared {} cells", self.state.registry.len());
                self.state.registry.clear();
            }
            (Mode::Editing, Event::Control(Control::State)) => {
                println!("{}", self.state.registry.dump(self.state.cycle));
            }
            (Mode::Editing, Event::PointerDown { button, position }) => {
                if self.state.geometry.contains(position) {
                    self.set_held(button, true);
                }
            }
            _ => {}
        }
        Flow::Continue
    }

    /// Once per loop iteration, after events: paint or erase under a held
    /// button while editing, or advance one generation while running
    pub fn tick(&mut self, pointer: Point) -> Tick {
        match self.state.mode {
            Mode::Running => {
                self.state.advance();
                Tick::Advanced
            }
            Mode::Editing if self.primary_held => {
                if let Some(cell) = self.state.registry.create(pointer, self.state.cycle) {
                    info!("{}", cell);
                }
                Tick::Edited
            }
            Mode::Editing if self.secondary_held => {
                if let Some(cell) = self.state.registry.destroy(pointer) {
                    debug!("destroyed {}", cell.node);
                }
                Tick::Edited
            }
            Mode::Editing => Tick::Idle,
        }
    }

    fn set_held(&mut self, button: PointerButton, held: bool) {
        match button {
            PointerButton::Primary => self.primary_held = held,
            PointerButton::Secondary => self.secondary_held = held,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> Controller {
        Controller::new(Geometry::new(100, 100, 10).unwrap())
    }

    fn press(c: &mut Controller, button: PointerButton, position: Point) {
        c.handle(Event::PointerDown { button, position });
    }

    fn paint(c: &mut Controller, cells: &[(f32, f32)]) {
        for &position in cells {
            press(c, PointerButton::Primary, position);
            c.tick(position);
            c.handle(Event::PointerUp(PointerButton::Primary));
        }
    }

    fn live(c: &Controller) -> Vec<Coordinate> {
        let mut nodes: Vec<_> = c.snapshot().into_iter().map(|(node, _)| node).collect();
        nodes.sort();
        nodes
    }

    #[test]
    fn test_starts_editing_at_cycle_one() {
        let c = controller();
        assert_eq!(c.mode(), Mode::Editing);
        assert_eq!(c.cycle(), 1);
        assert!(c.snapshot().is_empty());
    }

    #[test]
    fn test_start_and_stop() {
        let mut c = controller();
        c.handle(Event::Control(Control::Start));
        assert_eq!(c.mode(), Mode::Running);

        // Repeated start is ignored
        c.handle(Event::Control(Control::Start));
        assert_eq!(c.mode(), Mode::Running);

        c.handle(Event::Control(Control::Stop));
        assert_eq!(c.mode(), Mode::Editing);

        c.handle(Event::Control(Control::Stop));
        assert_eq!(c.mode(), Mode::Editing);
    }

    #[test]
    fn test_cancel_exits_in_any_mode() {
        let mut c = controller();
        assert_eq!(c.handle(Event::Cancel), Flow::Exit);
        c.handle(Event::Control(Control::Start));
        assert_eq!(c.handle(Event::Cancel), Flow::Exit);
        assert_eq!(c.handle(Event::Control(Control::Stop)), Flow::Continue);
    }

    #[test]
    fn test_held_primary_paints_every_tick() {
        let mut c = controller();
        press(&mut c, PointerButton::Primary, (5.0, 5.0));

        assert_eq!(c.tick((5.0, 5.0)), Tick::Edited);
        assert_eq!(c.tick((15.0, 5.0)), Tick::Edited);
        assert_eq!(c.tick((15.0, 8.0)), Tick::Edited);
        assert_eq!(live(&c), vec![Coordinate::new(0, 0), Coordinate::new(10, 0)]);

        c.handle(Event::PointerUp(PointerButton::Primary));
        assert_eq!(c.tick((25.0, 5.0)), Tick::Idle);
        assert_eq!(c.snapshot().len(), 2);
    }

    #[test]
    fn test_held_secondary_erases() {
        let mut c = controller();
        paint(&mut c, &[(0.0, 0.0), (10.0, 0.0)]);

        press(&mut c, PointerButton::Secondary, (3.0, 3.0));
        c.tick((3.0, 3.0));
        c.tick((50.0, 50.0));
        c.handle(Event::PointerUp(PointerButton::Secondary));

        assert_eq!(live(&c), vec![Coordinate::new(10, 0)]);
    }

    #[test]
    fn test_press_outside_grid_does_not_paint() {
        let mut c = controller();
        press(&mut c, PointerButton::Primary, (150.0, 20.0));
        assert_eq!(c.tick((50.0, 50.0)), Tick::Idle);
        assert!(c.snapshot().is_empty());
    }

    #[test]
    fn test_running_ignores_editing_input() {
        let mut c = controller();
        c.handle(Event::Control(Control::Start));

        press(&mut c, PointerButton::Primary, (5.0, 5.0));
        c.handle(Event::Control(Control::Clear));
        c.tick((5.0, 5.0));
        c.handle(Event::Control(Control::Stop));

        assert_eq!(c.tick((5.0, 5.0)), Tick::Idle);
        assert!(c.snapshot().is_empty());
    }

    #[test]
    fn test_clear_keeps_cycle() {
        let mut c = controller();
        paint(&mut c, &[(0.0, 0.0), (10.0, 0.0), (0.0, 10.0), (10.0, 10.0)]);
        c.handle(Event::Control(Control::Start));
        c.tick((0.0, 0.0));
        c.tick((0.0, 0.0));
        c.handle(Event::Control(Control::Stop));

        c.handle(Event::Control(Control::Clear));
        assert!(c.snapshot().is_empty());
        assert_eq!(c.cycle(), 3);
    }

    #[test]
    fn test_running_advances_blinker() {
        let mut c = controller();
        paint(&mut c, &[(10.0, 0.0), (10.0, 10.0), (10.0, 20.0)]);
        c.handle(Event::Control(Control::Start));

        assert_eq!(c.tick((0.0, 0.0)), Tick::Advanced);
        assert_eq!(c.cycle(), 2);
        assert_eq!(
            live(&c),
            vec![Coordinate::new(0, 10), Coordinate::new(10, 10), Coordinate::new(20, 10)]
        );

        c.tick((0.0, 0.0));
        assert_eq!(c.cycle(), 3);
        assert_eq!(
            live(&c),
            vec![Coordinate::new(10, 0), Coordinate::new(10, 10), Coordinate::new(10, 20)]
        );
    }

    #[test]
    fn test_advance_ages_before_transition() {
        let mut state = SimulationState::new(Geometry::new(100, 100, 10).unwrap());
        for (x, y) in [(0.0, 0.0), (10.0, 0.0), (0.0, 10.0), (10.0, 10.0)] {
            state.registry.create((x, y), state.cycle);
        }

        state.advance();
        state.advance();

        assert_eq!(state.cycle, 3);
        assert!(state.registry.iter().all(|cell| cell.generations == 3));
        assert!(state.registry.iter().all(|cell| cell.cycle_created == 1));
    }

    #[test]
    fn test_births_are_stamped_with_new_cycle() {
        let mut state = SimulationState::new(Geometry::new(100, 100, 10).unwrap());
        for (x, y) in [(10.0, 0.0), (10.0, 10.0), (10.0, 20.0)] {
            state.registry.create((x, y), state.cycle);
        }

        state.advance();

        let born = state.registry.get(Coordinate::new(0, 10)).unwrap();
        assert_eq!(born.cycle_created, 2);
        assert_eq!(born.generations, 1);
        // The surviving center was aged before the rule ran
        assert_eq!(state.registry.get(Coordinate::new(10, 10)).unwrap().generations, 2);
    }

    #[test]
    fn test_paint_records_current_cycle() {
        let mut c = controller();
        c.handle(Event::Control(Control::Start));
        c.tick((0.0, 0.0));
        c.handle(Event::Control(Control::Stop));

        paint(&mut c, &[(42.0, 42.0)]);
        let cell = c.state().registry.get(Coordinate::new(40, 40)).unwrap();
        assert_eq!(cell.cycle_created, 2);
        assert_eq!(cell.spawn_point, (42.0, 42.0));
    }
}
