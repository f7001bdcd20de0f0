//! **warren-core** — grid, cell, and wall primitives for maze pathfinding.
//!
//! This crate provides the read-only world model consumed by the search in
//! *warren-paths*: geometry primitives, the per-cell wall flags that gate
//! traversal between adjacent cells, and a bounded grid of such cells.

pub mod cell;
pub mod geom;
pub mod grid;

pub use cell::{Cell, Direction, Walls};
pub use geom::{Point, Range};
pub use grid::Grid;
