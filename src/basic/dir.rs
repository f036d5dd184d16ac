use std::ops::Neg;

use crate::basic::GridPoint;
use Dir::*;

/// The four axis-aligned movement directions, named for their effect
/// on screen coordinates (`U` decreases `y`)
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Dir {
    U,
    D,
    L,
    R,
}

impl Dir {
    /// The unit vector a head travels by in one tick
    pub fn vector(self) -> GridPoint {
        match self {
            U => GridPoint { x: 0, y: -1 },
            D => GridPoint { x: 0, y: 1 },
            L => GridPoint { x: -1, y: 0 },
            R => GridPoint { x: 1, y: 0 },
        }
    }

    pub fn iter() -> impl Iterator<Item = Self> {
        [U, D, L, R].iter().copied()
    }
}

impl Neg for Dir {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            U => D,
            D => U,
            L => R,
            R => L,
        }
    }
}

#[test]
fn test_dir_vectors() {
    for dir in Dir::iter() {
        let v = dir.vector();
        // unit and axis-aligned
        assert_eq!(v.x.abs() + v.y.abs(), 1);
        assert_eq!((-dir).vector(), -v);
    }
}
