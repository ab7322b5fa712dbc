mod error;
mod shelf_life;

pub use error::*;
pub use shelf_life::*;
