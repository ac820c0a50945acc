//! Uninformed search over 2-D text mazes.
//!
//! A [`Maze`] is parsed from a plain-text grid and handed to [`solve`]
//! together with an [`Algorithm`] selecting stack-order (depth-first) or
//! queue-order (breadth-first) expansion. Both orders share one expansion
//! loop; the frontier's removal end is the only behavioral difference.

pub mod find;
pub mod grid;

pub use find::{solve, Algorithm, Solution, SolveError};
pub use grid::{Direction, Maze, Point};
