use std::collections::VecDeque;
use std::iter;

use ggez::graphics::Color;
use ggez::input::keyboard::KeyCode;

use crate::basic::{Dir, GridDim, GridPoint};
use crate::entity::Event;
use crate::grid::Grid;

pub struct Snake {
    pub position: GridPoint,
    /// Unit, axis-aligned. Input replaces it between ticks, the
    /// change only shows in movement on the following tick
    pub velocity: GridPoint,
    pub length: usize,
    /// Previous head positions, oldest first
    pub tail: VecDeque<GridPoint>,
    pub color: Color,
}

impl Snake {
    /// Starts centered, heading right, with an empty tail that fills
    /// up over the first few ticks
    pub fn new(grid_dim: GridDim, length: usize, color: Color) -> Self {
        Self {
            position: GridPoint {
                x: grid_dim.x / 2,
                y: grid_dim.y / 2,
            },
            velocity: Dir::R.vector(),
            length,
            tail: VecDeque::new(),
            color,
        }
    }

    pub fn on_key(&mut self, key: KeyCode) {
        let dir = match key {
            KeyCode::W => Dir::U,
            KeyCode::S => Dir::D,
            KeyCode::A => Dir::L,
            KeyCode::D => Dir::R,
            _ => return,
        };
        self.turn(dir);
    }

    /// A requested direction is rejected if either of its components
    /// is the negation of the corresponding nonzero component of the
    /// current velocity (the snake can't reverse onto itself). The
    /// check is per-axis, not a full-vector comparison.
    pub fn turn(&mut self, dir: Dir) {
        let requested = dir.vector();
        let reverses = self.velocity.x != 0 && requested.x == -self.velocity.x
            || self.velocity.y != 0 && requested.y == -self.velocity.y;
        if !reverses {
            self.velocity = requested;
        }
    }

    /// Advance one tick: record the old head in the tail, trim the
    /// tail to `length - 1`, move the head, then check for death and
    /// food. `grid` is the previous tick's grid, the eat check is
    /// judged against it. Returns the cells claimed for the next grid
    /// along with what happened.
    pub fn on_tick(&mut self, grid: &Grid) -> (Vec<(GridPoint, Color)>, Vec<Event>) {
        let mut events = Vec::new();

        self.tail.push_back(self.position);
        while self.tail.len() > self.length - 1 {
            self.tail.pop_front();
        }

        self.position += self.velocity;

        // death comes before the eat check
        if !grid.contains(self.position) || self.tail.contains(&self.position) {
            events.push(Event::Died);
        }

        if !grid.is_empty(self.position) {
            self.length += 1;
            events.push(Event::Ate(self.position));
        }

        (self.cells(), events)
    }

    /// Head first, then the tail oldest first
    pub fn cells(&self) -> Vec<(GridPoint, Color)> {
        iter::once(self.position)
            .chain(self.tail.iter().copied())
            .map(|pos| (pos, self.color))
            .collect()
    }
}
