#[macro_use]
extern crate derive_more;

use ggez::conf::{WindowMode, WindowSetup};
use ggez::{event, ContextBuilder};

use crate::app::config::Config;
use crate::app::game::Game;
use crate::error::{Error, ErrorConversion, Result};

mod app;
mod basic;
mod entity;
mod error;
mod food;
mod grid;
mod snake;

fn main() -> Result {
    let config = Config::default();
    config.validate().with_trace_step("main")?;

    let (width, height) = config.window_size();
    let wm = WindowMode::default()
        .dimensions(width, height)
        .resizable(false);
    let ws = WindowSetup::default().title("Grid Snake").vsync(true);

    let (ctx, event_loop) = ContextBuilder::new("grid_snake", "grid_snake")
        .window_mode(wm)
        .window_setup(ws)
        .build()
        .map_err(Error::from)
        .with_trace_step("main")?;

    let game = Game::new(config);
    event::run(ctx, event_loop, game)
}
