use log::error;
use macroquad::prelude::*;
use life_grid::{
    Config, Controller,
    application::{Flow, Tick},
    rendering, input, ui,
};

fn window_conf() -> Conf {
    let config = Config::default();
    Conf {
        window_title: config.title.to_owned(),
        window_width: config.window_width,
        window_height: config.window_height,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::default();
    let geometry = match config.geometry() {
        Ok(geometry) => geometry,
        Err(err) => {
            error!("invalid grid: {}", err);
            return;
        }
    };

    let mut controller = Controller::new(geometry);
    let buttons = ui::create_buttons();

    loop {
        // Input first; Escape ends the loop
        let events = input::poll_events(&buttons);
        if events.into_iter().any(|event| controller.handle(event) == Flow::Exit) {
            break;
        }

        // Paint/erase or advance one generation, pacing after each one
        if controller.tick(mouse_position()) == Tick::Advanced {
            std::thread::sleep(config.cycle_delay);
        }

        // Render from a copy of the live cells
        clear_background(WHITE);
        let cells = controller.snapshot();
        rendering::draw_grid(&cells, &config);
        rendering::draw_controls(
            &config,
            &buttons,
            controller.mode(),
            controller.cycle(),
            cells.len(),
            mouse_position(),
        );

        next_frame().await;
    }
}
