use ggez::graphics::Color;

/// Colors for the three kinds of thing on screen. Cells carry their
/// entity's color, points carry none, so equality between positions
/// never depends on color.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub snake: Color,
    pub food: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::BLACK,
            snake: Color::GREEN,
            food: Color::RED,
        }
    }
}
