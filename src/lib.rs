//! Five point stencil over a dense row-major grid.
//!
//! Each time step computes `next` from `current` with fixed edge rules,
//! reports cells whose magnitude converged, then averages `next` into
//! `current`. Parallel engines split rows and linear index ranges into
//! contiguous blocks and give bit identical results to the serial ones.

pub mod build_info;
pub mod cli;
pub mod convergence;
pub mod csv;
pub mod decomposition;
pub mod error;
pub mod grid;
pub mod image;
pub mod par_slice;
pub mod sink;
pub mod solver;
pub mod stencil;
pub mod util;
