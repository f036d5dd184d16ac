pub mod config;
pub mod control;
pub mod game;
pub mod palette;
