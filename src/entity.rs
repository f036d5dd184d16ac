use ggez::graphics::Color;
use ggez::input::keyboard::KeyCode;

use crate::basic::GridPoint;
use crate::food::Food;
use crate::grid::Grid;
use crate::snake::Snake;

/// What happened to an entity during a tick. The game loop drains
/// events right after the entity that produced them updates, instead
/// of delivering them through callbacks that would mutate the game
/// re-entrantly mid-update.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Event {
    Died,
    Ate(GridPoint),
}

/// Anything that occupies grid cells and takes part in the tick
pub enum Entity {
    Snake(Snake),
    Food(Food),
}

impl Entity {
    /// Advance one tick against the previous tick's grid and report
    /// the cells claimed for the next one
    pub fn on_tick(&mut self, grid: &Grid) -> (Vec<(GridPoint, Color)>, Vec<Event>) {
        match self {
            Entity::Snake(snake) => snake.on_tick(grid),
            Entity::Food(food) => (food.cells(), Vec::new()),
        }
    }

    /// Keys are dispatched to every entity, food's arm is the
    /// explicit no-op handler
    pub fn on_key(&mut self, key: KeyCode) {
        match self {
            Entity::Snake(snake) => snake.on_key(key),
            Entity::Food(_) => {}
        }
    }

    /// The cells the entity currently claims, without advancing it
    pub fn cells(&self) -> Vec<(GridPoint, Color)> {
        match self {
            Entity::Snake(snake) => snake.cells(),
            Entity::Food(food) => food.cells(),
        }
    }
}

/// All cells currently claimed by any entity, sorted and deduplicated
pub fn occupied_cells(entities: &[Entity]) -> Vec<GridPoint> {
    let mut cells: Vec<_> = entities
        .iter()
        .flat_map(|entity| entity.cells())
        .map(|(pos, _)| pos)
        .collect();
    cells.sort_unstable();
    cells.dedup();
    cells
}
