//! Scan for cells whose magnitude barely moved during a step.

use crate::error::*;
use crate::grid::Grid;
use crate::sink::RecordSink;

/// Cells with `| |next| - |current| |` strictly below this are reported.
pub const TOLERANCE: f64 = 1e-2;

/// One converged cell at time step `t`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LogRecord {
    pub t: usize,
    pub i: usize,
    pub j: usize,
    /// `|current[i, j]|`
    pub current: f64,
    /// `|next[i, j]|`
    pub next: f64,
}

#[inline]
pub fn converged(current: f64, next: f64) -> bool {
    (next.abs() - current.abs()).abs() < TOLERANCE
}

/// Emit a record for every cell, corners included, in row-major order
/// where `current` and `next` agree in magnitude within [`TOLERANCE`].
/// Returns the number of records emitted.
pub fn report<S: RecordSink + ?Sized>(
    t: usize,
    current: &Grid,
    next: &Grid,
    sink: &mut S,
) -> Result<usize> {
    profiling::scope!("convergence: report");
    let shape = current.shape();
    debug_assert_eq!(shape, next.shape());
    let mut emitted = 0;
    for (k, (c, n)) in current.buffer().iter().zip(next.buffer()).enumerate() {
        if converged(*c, *n) {
            let (i, j) = shape.linear_to_coord(k);
            sink.record(LogRecord {
                t,
                i,
                j,
                current: c.abs(),
                next: n.abs(),
            })?;
            emitted += 1;
        }
    }
    Ok(emitted)
}
