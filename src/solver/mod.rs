//! Time stepping: update, report, advance, repeated `nt` times.

mod engine;
mod time_step;

pub use engine::*;
pub use time_step::*;
