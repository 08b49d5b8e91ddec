//! The five point update.
//! Interior cells average their four neighbours, each edge mixes in a
//! fixed constant in place of its missing neighbour.
//! Every rule multiplies its four term sum by one quarter.
//! Corners match no rule and are never written.

mod direct;
mod naive;
mod region;

pub use direct::*;
pub use naive::*;
pub use region::*;

pub const QUARTER: f64 = 0.25;

/// Stands in for the missing row above row 0.
pub const TOP_EDGE: f64 = 10.0;

/// Stands in for the missing row below row nx - 1.
pub const BOTTOM_EDGE: f64 = 5.0;

/// Stands in for the missing column left of column 0.
pub const LEFT_EDGE: f64 = 15.45;

/// Subtracted in place of the missing column right of column ny - 1.
pub const RIGHT_EDGE: f64 = 6.7;

/// Interior rule at linear index `l` of a row-major buffer with `ny` columns.
#[inline(always)]
pub fn interior_rule(ib: &[f64], ny: usize, l: usize) -> f64 {
    (ib[l + ny] + ib[l - ny] + ib[l - 1] + ib[l + 1]) * QUARTER
}

/// Top row rule, `l == j`.
#[inline(always)]
pub fn top_rule(ib: &[f64], ny: usize, l: usize) -> f64 {
    (ib[l + ny] + TOP_EDGE + ib[l - 1] + ib[l + 1]) * QUARTER
}

/// Bottom row rule, `l == (nx - 1) * ny + j`.
#[inline(always)]
pub fn bottom_rule(ib: &[f64], ny: usize, l: usize) -> f64 {
    (BOTTOM_EDGE + ib[l - ny] + ib[l - 1] + ib[l + 1]) * QUARTER
}

/// Left column rule, `l == i * ny`.
#[inline(always)]
pub fn left_rule(ib: &[f64], ny: usize, l: usize) -> f64 {
    (ib[l + ny] + ib[l - ny] + LEFT_EDGE + ib[l + 1]) * QUARTER
}

/// Right column rule, `l == i * ny + ny - 1`.
#[inline(always)]
pub fn right_rule(ib: &[f64], ny: usize, l: usize) -> f64 {
    (ib[l + ny] + ib[l - ny] + ib[l - 1] - RIGHT_EDGE) * QUARTER
}
