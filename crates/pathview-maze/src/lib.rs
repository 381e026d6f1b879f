//! Maze generation for pathview cost grids.

pub mod mazegen;

pub use mazegen::MazeGen;
