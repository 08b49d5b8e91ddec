use super::*;
use crate::decomposition::Decomposer;
use crate::grid::Grid;
use std::ops::Range;

/// Interior update for `rows`, writing columns `[1, ny - 2]` of each row.
/// `out` holds exactly those rows of `next`; columns 0 and `ny - 1`
/// are left for the edge pass.
pub fn apply_interior_rows(
    ib: &[f64],
    ny: usize,
    rows: Range<usize>,
    out: &mut [f64],
) {
    debug_assert_eq!(out.len(), rows.len() * ny);
    for (i, o_row) in rows.zip(out.chunks_exact_mut(ny)) {
        let up = &ib[(i - 1) * ny..i * ny];
        let mid = &ib[i * ny..(i + 1) * ny];
        let down = &ib[(i + 1) * ny..(i + 2) * ny];
        for j in 1..ny - 1 {
            o_row[j] = (down[j] + up[j] + mid[j - 1] + mid[j + 1]) * QUARTER;
        }
    }
}

/// Edge passes: top and bottom rows, then left and right columns.
/// Corners are not touched.
pub fn apply_edges(current: &Grid, next: &mut Grid) {
    profiling::scope!("stencil: edges");
    let shape = current.shape();
    let (nx, ny) = (shape.nx, shape.ny);
    let ib = current.buffer();
    let ob = next.buffer_mut();

    let bottom_base = (nx - 1) * ny;
    for j in 1..ny - 1 {
        ob[j] = top_rule(ib, ny, j);
        ob[bottom_base + j] = bottom_rule(ib, ny, bottom_base + j);
    }

    for i in 1..nx - 1 {
        let left = i * ny;
        let right = left + ny - 1;
        ob[left] = left_rule(ib, ny, left);
        ob[right] = right_rule(ib, ny, right);
    }
}

/// Hoisted update: interior rows split across `decomposer`,
/// edges computed serially once the workers have joined.
pub fn direct_apply(current: &Grid, next: &mut Grid, decomposer: &Decomposer) {
    profiling::scope!("stencil: direct");
    let shape = current.shape();
    debug_assert_eq!(shape, next.shape());
    let (nx, ny) = (shape.nx, shape.ny);
    let ib = current.buffer();

    {
        profiling::scope!("stencil: interior");
        let out = &mut next.buffer_mut()[ny..(nx - 1) * ny];
        decomposer.run(shape.interior_rows(), out, ny, |rows, o| {
            apply_interior_rows(ib, ny, rows, o)
        });
    }

    apply_edges(current, next);
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::decomposition::Backend;
    use crate::grid::Fields;
    use crate::util::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn top_edge_formula() {
        let mut fields = Fields::initialize(5, 5).unwrap();
        let (current, next) = fields.split_for_update();
        direct_apply(current, next, &Decomposer::serial());

        let c = &fields.current;
        let expected =
            0.25 * (c.get(1, 2) + 10.0 + c.get(0, 1) + c.get(0, 3));
        assert_approx_eq!(f64, fields.next.get(0, 2), expected, epsilon = 1e-9);
    }

    #[test]
    fn every_rule_by_hand() {
        let shape = GridShape::new(4, 4).unwrap();
        let current =
            Grid::from_fn(shape, |i, j| (i * 4 + j) as f64).unwrap();
        let mut next = Grid::zeros(shape).unwrap();
        direct_apply(&current, &mut next, &Decomposer::serial());
        let c = |i, j| current.get(i, j);

        // interior (1, 1)
        assert_approx_eq!(
            f64,
            next.get(1, 1),
            0.25 * (c(2, 1) + c(0, 1) + c(1, 0) + c(1, 2))
        );
        // bottom (3, 2)
        assert_approx_eq!(
            f64,
            next.get(3, 2),
            0.25 * (5.0 + c(2, 2) + c(3, 1) + c(3, 3))
        );
        // left (2, 0)
        assert_approx_eq!(
            f64,
            next.get(2, 0),
            0.25 * (c(3, 0) + c(1, 0) + 15.45 + c(2, 1))
        );
        // right (1, 3)
        assert_approx_eq!(
            f64,
            next.get(1, 3),
            0.25 * (c(2, 3) + c(0, 3) + c(1, 2) - 6.7)
        );
    }

    #[test]
    fn corners_untouched() {
        let shape = GridShape::new(6, 5).unwrap();
        let current = Grid::from_fn(shape, |i, j| (i + j) as f64).unwrap();
        let mut next = Grid::from_fn(shape, |_, _| 42.0).unwrap();
        direct_apply(&current, &mut next, &Decomposer::new(3, Backend::Rayon));
        for (i, j) in shape.corners() {
            assert_eq!(next.get(i, j), 42.0);
        }
        for (i, j) in shape.coord_iter() {
            if Region::classify(shape, i, j) != Region::Corner {
                assert_ne!(next.get(i, j), 42.0, "({i}, {j}) not written");
            }
        }
    }

    #[test]
    fn matches_naive() {
        let fields = Fields::initialize(23, 9).unwrap();
        let mut expected = fields.next.clone();
        naive_apply(&fields.current, &mut expected);

        for backend in [Backend::Serial, Backend::Rayon, Backend::Threads] {
            for workers in [1, 2, 3, 7, 21, 64] {
                let mut next = fields.next.clone();
                let decomposer = Decomposer::new(workers, backend);
                direct_apply(&fields.current, &mut next, &decomposer);
                assert_eq!(next, expected, "{backend:?} x{workers}");
            }
        }
    }
}
