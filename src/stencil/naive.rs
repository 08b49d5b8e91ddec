use super::*;
use crate::grid::Grid;

/// Reference update: one row-major pass, classifying every cell.
/// Corners keep whatever `next` held.
pub fn naive_apply(current: &Grid, next: &mut Grid) {
    profiling::scope!("stencil: naive");
    let shape = current.shape();
    debug_assert_eq!(shape, next.shape());
    for i in 0..shape.nx {
        for j in 0..shape.ny {
            if let Some(value) = Region::classify(shape, i, j).apply(current, i, j) {
                next.set(i, j, value);
            }
        }
    }
}
