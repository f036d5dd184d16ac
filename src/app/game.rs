use ggez::event::EventHandler;
use ggez::graphics::{Canvas, DrawMode, DrawParam, Mesh, MeshBuilder, Rect};
use ggez::input::keyboard::{KeyCode, KeyInput};
use ggez::{Context, GameResult};
use rand::prelude::*;

use crate::app::config::Config;
use crate::app::control::Control;
use crate::basic::GridPoint;
use crate::entity::{occupied_cells, Entity, Event};
use crate::food::Food;
use crate::grid::Grid;
use crate::snake::Snake;

pub struct Game {
    config: Config,
    control: Control,
    grid: Grid,
    /// Registration order is update order: the snake goes first, food
    /// after it, and later grid claims overwrite earlier ones
    entities: Vec<Entity>,
    /// Set by a death event mid-tick, acted on once the entity pass
    /// has finished so the tick never observes a half-replaced game
    pending_reset: bool,
    rng: ThreadRng,
}

impl Game {
    /// `config` is expected to have passed [`Config::validate`]
    pub fn new(config: Config) -> Self {
        let mut game = Self {
            control: Control::new(config.tick_interval),
            grid: Grid::new(config.grid_dim),
            entities: Vec::new(),
            pending_reset: false,
            rng: thread_rng(),
            config,
        };
        game.reset();
        game
    }

    /// Fresh grid, fresh snake, fresh food. The grid stays empty
    /// until the next tick rebuilds it from the new entities.
    fn reset(&mut self) {
        self.grid = Grid::new(self.config.grid_dim);
        self.entities.clear();

        self.entities.push(Entity::Snake(Snake::new(
            self.config.grid_dim,
            self.config.start_length,
            self.config.palette.snake,
        )));

        // the spawn scan runs against the snake's actual cells, not
        // the just-cleared grid
        let occupied = occupied_cells(&self.entities);
        if let Some(food) = Food::spawn(
            self.config.grid_dim,
            &occupied,
            self.config.palette.food,
            &mut self.rng,
        ) {
            self.entities.push(Entity::Food(food));
        }
    }

    /// One simulation step: every entity, in registration order,
    /// reports its claims against the old grid into a replacement
    /// grid, and its events are drained before the next entity runs.
    /// A food spawned mid-pass is appended and still participates in
    /// this tick. The new grid is committed atomically at the end,
    /// unless a death arrived, in which case it is discarded and the
    /// game resets instead.
    fn tick(&mut self) {
        let mut new_grid = Grid::new(self.grid.dim());

        let mut idx = 0;
        while idx < self.entities.len() {
            let (claims, events) = self.entities[idx].on_tick(&self.grid);
            new_grid.occupy(&claims);
            for event in events {
                match event {
                    Event::Died => self.pending_reset = true,
                    Event::Ate(pos) => self.consume_food(pos),
                }
            }
            idx += 1;
        }

        if self.pending_reset {
            self.pending_reset = false;
            self.reset();
        } else {
            self.grid = new_grid;
        }
    }

    /// Remove the food at `pos` and spawn a replacement on a cell no
    /// entity currently occupies. An `Ate` with no food at `pos` is
    /// ignored (the head can land on a non-food colored cell).
    fn consume_food(&mut self, pos: GridPoint) {
        let eaten = self
            .entities
            .iter()
            .position(|entity| matches!(entity, Entity::Food(food) if food.position == pos));
        let eaten = match eaten {
            Some(idx) => idx,
            None => return,
        };
        self.entities.remove(eaten);

        let occupied = occupied_cells(&self.entities);
        if let Some(food) = Food::spawn(
            self.config.grid_dim,
            &occupied,
            self.config.palette.food,
            &mut self.rng,
        ) {
            self.entities.push(Entity::Food(food));
        }
    }
}

impl EventHandler<ggez::GameError> for Game {
    fn update(&mut self, _ctx: &mut Context) -> GameResult {
        if self.control.tick_due() {
            self.tick();
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let mut canvas = Canvas::from_frame(ctx, self.config.palette.background);

        let side = self.config.cell_side;
        let mut builder = MeshBuilder::new();
        let mut occupied = false;
        for (pos, color) in self.grid.occupied() {
            builder.rectangle(
                DrawMode::fill(),
                Rect::new(pos.x as f32 * side, pos.y as f32 * side, side, side),
                color,
            )?;
            occupied = true;
        }
        if occupied {
            let mesh = Mesh::from_data(ctx, builder.build());
            canvas.draw(&mesh, DrawParam::default());
        }

        canvas.finish(ctx)
    }

    fn key_down_event(&mut self, _ctx: &mut Context, input: KeyInput, _repeated: bool) -> GameResult {
        let key = match input.keycode {
            Some(key) => key,
            None => return Ok(()),
        };

        for entity in &mut self.entities {
            entity.on_key(key);
        }

        match key {
            // manual single step, works while paused
            KeyCode::T => self.tick(),
            KeyCode::R => self.reset(),
            KeyCode::Q => self.control.toggle(),
            _ => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic::{Dir, GridDim};
    use ggez::graphics::Color;

    fn game_on_grid(dim: GridDim) -> Game {
        let mut config = Config::default();
        config.grid_dim = dim;
        config.validate().unwrap();
        Game::new(config)
    }

    fn snake_mut(game: &mut Game) -> &mut Snake {
        match &mut game.entities[0] {
            Entity::Snake(snake) => snake,
            _ => panic!("snake is not the first entity"),
        }
    }

    fn food_mut(game: &mut Game) -> &mut Food {
        game.entities
            .iter_mut()
            .find_map(|entity| match entity {
                Entity::Food(food) => Some(food),
                _ => None,
            })
            .expect("no food entity")
    }

    #[test]
    fn test_reset_spawns_snake_and_food_apart() {
        for _ in 0..10 {
            let mut game = game_on_grid(GridDim { x: 5, y: 5 });
            assert_eq!(game.entities.len(), 2);
            let snake_pos = snake_mut(&mut game).position;
            assert_eq!(snake_pos, GridPoint { x: 2, y: 2 });
            assert_ne!(food_mut(&mut game).position, snake_pos);
        }
    }

    #[test]
    fn test_out_of_bounds_death_resets() {
        let mut game = game_on_grid(GridDim { x: 5, y: 5 });
        {
            let snake = snake_mut(&mut game);
            snake.position = GridPoint { x: 4, y: 0 };
            snake.velocity = Dir::R.vector();
        }
        game.tick();

        assert!(!game.pending_reset);
        assert_eq!(game.entities.len(), 2);
        let snake = snake_mut(&mut game);
        assert_eq!(snake.length, 3);
        assert_eq!(snake.position, GridPoint { x: 2, y: 2 });
        assert!(snake.tail.is_empty());
    }

    #[test]
    fn test_eating_replaces_food_and_grows() {
        let mut game = game_on_grid(GridDim { x: 20, y: 20 });
        let head = snake_mut(&mut game).position;
        let food_pos = head + Dir::R.vector() + Dir::R.vector();
        food_mut(&mut game).position = food_pos;

        // first tick paints the food onto the grid, second one eats
        // it since the eat check runs against the previous grid
        game.tick();
        assert_eq!(snake_mut(&mut game).length, 3);
        game.tick();

        let snake_cells: Vec<_> = snake_mut(&mut game)
            .cells()
            .into_iter()
            .map(|(pos, _)| pos)
            .collect();
        assert_eq!(snake_mut(&mut game).length, 4);
        assert!(snake_cells.contains(&food_pos));

        assert_eq!(game.entities.len(), 2);
        let new_food_pos = food_mut(&mut game).position;
        assert_ne!(new_food_pos, food_pos);
        assert!(!snake_cells.contains(&new_food_pos));
        // the replacement already claimed its cell this tick
        assert_eq!(game.grid.color_at(new_food_pos), Some(Color::RED));
    }

    #[test]
    fn test_grid_rebuild_deterministic() {
        let mut game = game_on_grid(GridDim { x: 20, y: 20 });
        game.tick();
        game.tick();

        let rebuild = |entities: &[Entity]| {
            let mut grid = Grid::new(GridDim { x: 20, y: 20 });
            for entity in entities {
                grid.occupy(&entity.cells());
            }
            grid
        };
        assert_eq!(rebuild(&game.entities), rebuild(&game.entities));
    }

    #[test]
    fn test_tick_commits_grid_atomically() {
        let mut game = game_on_grid(GridDim { x: 20, y: 20 });
        assert_eq!(game.grid.occupied().count(), 0, "grid empty after reset");

        food_mut(&mut game).position = GridPoint { x: 0, y: 0 };
        game.tick();
        // head, one tail segment, food
        assert_eq!(game.grid.occupied().count(), 3);
    }
}
