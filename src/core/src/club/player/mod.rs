pub mod player;
pub mod position;

pub use player::*;
pub use position::*;
