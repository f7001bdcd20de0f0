//! Wall-aware pathfinding for maze grids.
//!
//! This crate provides an **A\*** shortest-path search
//! ([`PathFinder::find_path`]) over grids whose cells are separated by
//! per-side walls, as modeled in *warren-core*. Traversal between two
//! adjacent cells is allowed only when neither cell has a wall on the
//! shared side, so a wall declared on a single side blocks the edge in
//! both directions.
//!
//! The search reads the world through the [`Maze`] trait, which is
//! implemented for [`warren_core::Grid`]; [`PathFinder`] owns and reuses
//! the search working set so repeated queries incur no allocations after
//! warm-up.

mod astar;
mod distance;
mod pathfinder;
mod traits;

pub use distance::euclidean;
pub use pathfinder::PathFinder;
pub use traits::Maze;
