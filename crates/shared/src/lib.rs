pub mod inventory;
pub mod recipe;

pub use inventory::*;
pub use recipe::*;
