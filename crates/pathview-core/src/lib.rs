//! **pathview-core** — Grid pathfinding playground (core types).
//!
//! This crate provides the foundational types shared across the *pathview*
//! ecosystem: cell addressing, row-major grid indexing, and the mutable
//! cost grid that search and maze generation operate on.

pub mod cell;
pub mod grid;
pub mod index;

pub use cell::Cell;
pub use grid::{BLOCKED, CostGrid, GridConfig, OPEN};
pub use index::{CellIter, GridIndex};
