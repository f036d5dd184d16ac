pub use dir::Dir;
pub use point::{GridDim, GridPoint};

mod dir;
mod point;
