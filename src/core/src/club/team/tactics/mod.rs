pub mod tactics;

pub use tactics::*;
