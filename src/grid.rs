use ggez::graphics::Color;
use itertools::iproduct;

use crate::basic::{GridDim, GridPoint};

/// Cell occupancy for one tick. Storage is row-major (`y * width + x`)
/// and cells are addressed `(x, y)`, column then row. The grid is
/// rebuilt wholesale every tick, never patched across ticks, so no
/// stale state survives except through the entities' own memory.
#[derive(Clone, PartialEq, Debug)]
pub struct Grid {
    dim: GridDim,
    cells: Vec<Option<Color>>,
}

impl Grid {
    pub fn new(dim: GridDim) -> Self {
        Self {
            dim,
            cells: vec![None; (dim.x * dim.y) as usize],
        }
    }

    pub fn dim(&self) -> GridDim {
        self.dim
    }

    pub fn contains(&self, pos: GridPoint) -> bool {
        (0..self.dim.x).contains(&pos.x) && (0..self.dim.y).contains(&pos.y)
    }

    fn index(&self, pos: GridPoint) -> usize {
        (pos.y * self.dim.x + pos.x) as usize
    }

    /// Claims are applied in order, a later writer overwrites an
    /// earlier one at the same cell. Out-of-bounds claims are dropped
    /// silently: leaving the grid is reported by the entity that did
    /// it, not here.
    pub fn occupy(&mut self, claims: &[(GridPoint, Color)]) {
        for &(pos, color) in claims {
            if self.contains(pos) {
                let idx = self.index(pos);
                self.cells[idx] = Some(color);
            }
        }
    }

    /// `None` for empty cells and for positions outside the grid
    pub fn color_at(&self, pos: GridPoint) -> Option<Color> {
        if self.contains(pos) {
            self.cells[self.index(pos)]
        } else {
            None
        }
    }

    pub fn is_empty(&self, pos: GridPoint) -> bool {
        self.color_at(pos).is_none()
    }

    /// All occupied cells with their colors, row by row
    pub fn occupied(&self) -> impl Iterator<Item = (GridPoint, Color)> + '_ {
        iproduct!(0..self.dim.y, 0..self.dim.x).filter_map(move |(y, x)| {
            let pos = GridPoint { x, y };
            self.color_at(pos).map(|color| (pos, color))
        })
    }
}

#[test]
fn test_out_of_bounds_claims_dropped() {
    let mut grid = Grid::new(GridDim { x: 4, y: 3 });
    grid.occupy(&[
        (GridPoint { x: -1, y: 0 }, Color::GREEN),
        (GridPoint { x: 4, y: 0 }, Color::GREEN),
        (GridPoint { x: 0, y: 3 }, Color::GREEN),
        (GridPoint { x: 2, y: 1 }, Color::GREEN),
    ]);
    assert_eq!(grid.occupied().count(), 1);
    assert_eq!(grid.color_at(GridPoint { x: 2, y: 1 }), Some(Color::GREEN));
    assert!(grid.is_empty(GridPoint { x: -1, y: 0 }));
    assert!(grid.is_empty(GridPoint { x: 4, y: 0 }));
}

#[test]
fn test_last_write_wins() {
    let pos = GridPoint { x: 1, y: 1 };
    let mut grid = Grid::new(GridDim { x: 3, y: 3 });
    grid.occupy(&[(pos, Color::GREEN), (pos, Color::RED)]);
    assert_eq!(grid.color_at(pos), Some(Color::RED));
}
