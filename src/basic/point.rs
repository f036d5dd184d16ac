use std::fmt::{Debug, Error, Formatter};

/// Integer cell coordinate, `x` is the column and `y` is the row.
/// Positions may transiently leave the grid mid-tick (that's how
/// death is detected), so components are signed.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Add, AddAssign, Neg)]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

pub type GridDim = GridPoint;

impl Debug for GridPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "<{}, {}>", self.x, self.y)
    }
}
