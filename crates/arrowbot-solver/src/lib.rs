//! Arrow puzzle solver core.
//!
//! The puzzle board is a hexagon of axial radius 3, stored as a 7x7
//! rhombus with trimmed corners: 37 cells, each holding an arrow in one
//! of six directions. Tapping a cell rotates it and its six neighbors
//! one step, mod 6. The solver computes, for an observed board, the
//! exact number of taps per cell that returns every arrow to rest.
//!
//! # Algorithm
//!
//! The tap rule is linear over Z/6Z, so the solution is algebraic, not a
//! search:
//!
//! 1. An elimination sweep cancels each cell by tapping the cell one
//!    column to its right, walking outward from the center row so every
//!    perturbation lands before its column is processed.
//! 2. One sweep leaves at most three nonzero cells on the right edge.
//!    The board's boundary ties those residuals together, and a fixed
//!    corrective tap sequence on the left edge cancels them.
//! 3. A second sweep distributes the correction's side effects.
//!
//! The result is the unique closed-form solution, always found in two
//! passes; there is no unsolvable outcome.

mod board;
mod grid;
mod plan;
mod solve;

pub use board::Board;
pub use grid::{cells, first_x, in_bounds, last_x, CELL_COUNT, CENTER, ROT_STEPS, SIZE};
pub use plan::{Click, Clicks, TapPlan};
pub use solve::solve;
