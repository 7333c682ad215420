// lib.rs - Conway's Game of Life on a fixed-size, non-wrapping grid

pub mod config;
pub mod error;
pub mod grid;
pub mod parse;
pub mod patterns;
pub mod render;

pub use config::{Args, Config, Seed, run};
pub use error::LifeError;
pub use grid::Grid;
pub use patterns::{PATTERNS, Pattern};
pub use render::Representation;
