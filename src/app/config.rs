use std::time::Duration;

use crate::app::palette::Palette;
use crate::basic::GridDim;
use crate::error::{Error, Result};

/// Construction parameters, all with the defaults the game ships with
#[derive(Clone, Debug)]
pub struct Config {
    pub grid_dim: GridDim,
    pub start_length: usize,
    pub tick_interval: Duration,
    /// Pixel side length of one cell, the window is sized to fit the
    /// whole grid
    pub cell_side: f32,
    pub palette: Palette,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid_dim: GridDim { x: 20, y: 20 },
            start_length: 3,
            tick_interval: Duration::from_millis(80),
            cell_side: 30.,
            palette: Palette::default(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result {
        if self.grid_dim.x <= 0 || self.grid_dim.y <= 0 {
            return Err(Error::config(format!(
                "grid dimensions must be positive, got {:?}",
                self.grid_dim
            )));
        }
        if self.start_length == 0 {
            return Err(Error::config("snake length must be at least 1"));
        }
        // at least one cell must stay free for food to spawn on
        let cells = self.grid_dim.x as i64 * self.grid_dim.y as i64;
        if self.start_length as i64 >= cells {
            return Err(Error::config(format!(
                "snake length {} leaves no room on a {:?} grid",
                self.start_length, self.grid_dim
            )));
        }
        if self.tick_interval.is_zero() {
            return Err(Error::config("tick interval must be nonzero"));
        }
        if self.cell_side <= 0. {
            return Err(Error::config("cell side must be positive"));
        }
        Ok(())
    }

    pub fn window_size(&self) -> (f32, f32) {
        (
            self.grid_dim.x as f32 * self.cell_side,
            self.grid_dim.y as f32 * self.cell_side,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_configs_rejected() {
        let mut config = Config::default();
        config.grid_dim = GridDim { x: 0, y: 20 };
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.start_length = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.grid_dim = GridDim { x: 2, y: 2 };
        config.start_length = 4;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.tick_interval = Duration::ZERO;
        assert!(config.validate().is_err());
    }
}
