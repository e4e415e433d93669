pub mod builder;
pub mod tactics;
pub mod team;

pub use builder::*;
pub use tactics::*;
pub use team::*;
