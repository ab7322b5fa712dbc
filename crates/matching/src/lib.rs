pub mod filter;
pub mod grouping;
pub mod keyset;
pub mod normalise;
pub mod score;
pub mod tables;

pub use filter::*;
pub use grouping::*;
pub use keyset::*;
pub use normalise::*;
pub use score::*;
pub use tables::*;
