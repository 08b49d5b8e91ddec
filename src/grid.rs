//! Grid store: the two same-shaped fields the time loop works on.
//! `current` holds the evolving field, `next` receives each stencil update.

use crate::error::*;
use crate::util::*;

/// Dense row-major field of `nx * ny` doubles.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    shape: GridShape,
    buffer: Vec<f64>,
}

impl Grid {
    /// Allocate a zero filled grid.
    /// Allocation failure is reported instead of aborting.
    pub fn zeros(shape: GridShape) -> Result<Self> {
        let n = shape.checked_len()?;
        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(n)
            .map_err(|_| StencilError::Allocation {
                nx: shape.nx,
                ny: shape.ny,
            })?;
        buffer.resize(n, 0.0);
        Ok(Grid { shape, buffer })
    }

    /// Allocate a grid and fill every cell from `f(i, j)`.
    pub fn from_fn<F: Fn(usize, usize) -> f64>(
        shape: GridShape,
        f: F,
    ) -> Result<Self> {
        let mut grid = Self::zeros(shape)?;
        for (k, value) in grid.buffer.iter_mut().enumerate() {
            let (i, j) = shape.linear_to_coord(k);
            *value = f(i, j);
        }
        Ok(grid)
    }

    #[inline]
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    #[inline]
    pub fn buffer(&self) -> &[f64] {
        &self.buffer
    }

    #[inline]
    pub fn buffer_mut(&mut self) -> &mut [f64] {
        &mut self.buffer
    }

    #[track_caller]
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.buffer[self.shape.coord_to_linear(i, j)]
    }

    #[track_caller]
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        let index = self.shape.coord_to_linear(i, j);
        self.buffer[index] = value;
    }

    /// Slice of row `i`.
    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        let start = i * self.shape.ny;
        &self.buffer[start..start + self.shape.ny]
    }

    /// Minimum and maximum value, ignoring NaN.
    pub fn min_max(&self) -> (f64, f64) {
        self.buffer.iter().filter(|v| !v.is_nan()).fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(lo, hi), v| (lo.min(*v), hi.max(*v)),
        )
    }
}

/// Initial value of `current` at `(i, j)`: `i^2 * j * sin(pi / nx * i)`.
#[inline]
pub fn initial_value(nx: usize, i: usize, j: usize) -> f64 {
    let i_f = i as f64;
    let i_sq = i_f * i_f;
    i_sq * j as f64 * (std::f64::consts::PI / nx as f64 * i_f).sin()
}

/// The pair of fields owned by a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Fields {
    pub current: Grid,
    pub next: Grid,
}

impl Fields {
    /// Build `current` from the closed form initial condition
    /// and zero `next`.
    pub fn initialize(nx: usize, ny: usize) -> Result<Self> {
        let shape = GridShape::new(nx, ny)?;
        let current = Grid::from_fn(shape, |i, j| initial_value(nx, i, j))?;
        let next = Grid::zeros(shape)?;
        Ok(Fields { current, next })
    }

    #[inline]
    pub fn shape(&self) -> GridShape {
        debug_assert_eq!(self.current.shape(), self.next.shape());
        self.current.shape()
    }

    /// Borrow `current` read only and `next` mutably at once.
    pub fn split_for_update(&mut self) -> (&Grid, &mut Grid) {
        (&self.current, &mut self.next)
    }

    /// Borrow `current` mutably and `next` read only at once.
    pub fn split_for_advance(&mut self) -> (&mut Grid, &Grid) {
        (&mut self.current, &self.next)
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn initialize_test() {
        let fields = Fields::initialize(5, 4).unwrap();
        let shape = fields.shape();
        assert_eq!(shape, GridShape { nx: 5, ny: 4 });
        assert!(fields.next.buffer().iter().all(|v| *v == 0.0));

        // Row 0 and column 0 are zero because of the i^2 and j factors.
        for j in 0..4 {
            assert_eq!(fields.current.get(0, j), 0.0);
        }
        for i in 0..5 {
            assert_eq!(fields.current.get(i, 0), 0.0);
        }

        let expected =
            4.0 * 3.0 * (std::f64::consts::PI / 5.0 * 2.0).sin();
        assert_approx_eq!(f64, fields.current.get(2, 3), expected);
    }

    #[test]
    fn initialize_is_deterministic() {
        let a = Fields::initialize(17, 6).unwrap();
        let b = Fields::initialize(17, 6).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn initialize_rejects_small() {
        assert!(matches!(
            Fields::initialize(2, 5),
            Err(StencilError::InvalidDimensions { nx: 2, ny: 5 })
        ));
    }

    #[test]
    fn initialize_rejects_overflow() {
        assert!(matches!(
            Fields::initialize(usize::MAX / 2, 3),
            Err(StencilError::Allocation { .. })
        ));
    }

    #[test]
    fn row_and_set() {
        let shape = GridShape::new(3, 4).unwrap();
        let mut grid = Grid::zeros(shape).unwrap();
        grid.set(1, 2, 7.5);
        assert_eq!(grid.row(1), &[0.0, 0.0, 7.5, 0.0]);
        assert_eq!(grid.min_max(), (0.0, 7.5));
    }
}
