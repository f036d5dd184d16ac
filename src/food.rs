use ggez::graphics::Color;
use rand::Rng;

use crate::basic::{GridDim, GridPoint};

/// A single piece of food. It claims exactly its own cell every tick
/// and never changes until the snake's head lands on it, at which
/// point the game removes it and spawns a replacement.
pub struct Food {
    pub position: GridPoint,
    pub color: Color,
}

impl Food {
    /// Rejection-sample uniformly random cells until one misses the
    /// occupied set. `occupied` must be sorted and deduplicated (see
    /// [`crate::entity::occupied_cells`]). Returns `None` when no free
    /// cell exists at all, since sampling would never terminate.
    pub fn spawn(
        grid_dim: GridDim,
        occupied: &[GridPoint],
        color: Color,
        rng: &mut impl Rng,
    ) -> Option<Self> {
        if occupied.len() as i64 >= grid_dim.x as i64 * grid_dim.y as i64 {
            return None;
        }
        loop {
            let position = GridPoint {
                x: rng.gen_range(0..grid_dim.x),
                y: rng.gen_range(0..grid_dim.y),
            };
            if occupied.binary_search(&position).is_err() {
                return Some(Self { position, color });
            }
        }
    }

    pub fn cells(&self) -> Vec<(GridPoint, Color)> {
        vec![(self.position, self.color)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::iproduct;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn all_cells(dim: GridDim) -> Vec<GridPoint> {
        iproduct!(0..dim.x, 0..dim.y)
            .map(|(x, y)| GridPoint { x, y })
            .collect()
    }

    #[test]
    fn test_spawn_avoids_occupied() {
        let dim = GridDim { x: 3, y: 3 };
        let free = GridPoint { x: 1, y: 2 };
        let mut occupied = all_cells(dim);
        occupied.retain(|&pos| pos != free);
        occupied.sort_unstable();

        // one free cell out of nine, every seed must find it
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let food = Food::spawn(dim, &occupied, Color::RED, &mut rng).unwrap();
            assert_eq!(food.position, free);
        }
    }

    #[test]
    fn test_spawn_on_full_grid() {
        let dim = GridDim { x: 3, y: 3 };
        let mut occupied = all_cells(dim);
        occupied.sort_unstable();

        let mut rng = StdRng::seed_from_u64(0);
        assert!(Food::spawn(dim, &occupied, Color::RED, &mut rng).is_none());
    }
}
