//! Shortest-path search over a cost grid.
//!
//! This crate provides the two search engines of the *pathview* ecosystem:
//!
//! - **Dijkstra** uniform-cost search ([`dijkstra`])
//! - **A\*** heuristic-guided search ([`astar`])
//!
//! Both engines run from a grid's start cell toward its goal and return a
//! [`SearchResult`] holding the distance table, the predecessor links, and
//! the order in which cells settled, so a consumer can replay the
//! exploration step by step or reconstruct the final path at its own pace.
//!
//! Determinism is part of the contract: equal selection priorities always
//! settle the earliest cell in row-major order, and an equal-cost candidate
//! route never replaces an already recorded predecessor.

mod astar;
mod dijkstra;
mod distance;
mod result;

pub use astar::astar;
pub use dijkstra::dijkstra;
pub use distance::{euclidean, manhattan};
pub use result::{SearchResult, UNREACHABLE};
