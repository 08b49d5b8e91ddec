use crate::error::*;

/// Row-major shape of a grid with `nx` rows and `ny` columns.
/// Maps between `(i, j)` coordinates and linear buffer indices,
/// `(i, j) -> i * ny + j`.
#[derive(Hash, Debug, Copy, Clone, Eq, PartialEq)]
pub struct GridShape {
    pub nx: usize,
    pub ny: usize,
}

impl std::fmt::Display for GridShape {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> Result<(), std::fmt::Error> {
        write!(f, "{}x{}", self.nx, self.ny)
    }
}

impl GridShape {
    /// Smallest extent on either axis, the stencil needs
    /// one interior row and column.
    pub const MIN_EXTENT: usize = 3;

    /// Create a shape, rejecting grids without an interior.
    pub fn new(nx: usize, ny: usize) -> Result<Self> {
        if nx < Self::MIN_EXTENT || ny < Self::MIN_EXTENT {
            return Err(StencilError::InvalidDimensions { nx, ny });
        }
        Ok(GridShape { nx, ny })
    }

    /// Return the number of cells, or an allocation error
    /// if that count does not fit in `usize`.
    pub fn checked_len(&self) -> Result<usize> {
        self.nx.checked_mul(self.ny).ok_or(StencilError::Allocation {
            nx: self.nx,
            ny: self.ny,
        })
    }

    /// Return the number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.nx * self.ny
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    #[track_caller]
    pub fn coord_to_linear(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < self.nx && j < self.ny, "({i}, {j}) outside {self}");
        i * self.ny + j
    }

    #[inline]
    pub fn linear_to_coord(&self, index: usize) -> (usize, usize) {
        (index / self.ny, index % self.ny)
    }

    /// Interior rows `[1, nx - 2]` as a half open range.
    #[inline]
    pub fn interior_rows(&self) -> std::ops::Range<usize> {
        1..self.nx - 1
    }

    /// Interior columns `[1, ny - 2]` as a half open range.
    #[inline]
    pub fn interior_cols(&self) -> std::ops::Range<usize> {
        1..self.ny - 1
    }

    /// The four corners, which no update rule writes.
    pub fn corners(&self) -> [(usize, usize); 4] {
        [
            (0, 0),
            (0, self.ny - 1),
            (self.nx - 1, 0),
            (self.nx - 1, self.ny - 1),
        ]
    }

    /// Return iterator over all coordinates in linear ordering.
    pub fn coord_iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.len()).map(|k| self.linear_to_coord(k))
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn rejects_small_shapes() {
        assert!(GridShape::new(2, 10).is_err());
        assert!(GridShape::new(10, 2).is_err());
        assert!(GridShape::new(0, 0).is_err());
        assert!(GridShape::new(3, 3).is_ok());
    }

    #[test]
    fn checked_len_overflow() {
        let shape = GridShape {
            nx: usize::MAX,
            ny: 3,
        };
        assert!(matches!(
            shape.checked_len(),
            Err(StencilError::Allocation { .. })
        ));
    }

    #[test]
    fn coord_to_linear_test() {
        let shape = GridShape::new(20, 7).unwrap();
        assert_eq!(shape.coord_to_linear(5, 3), 5 * 7 + 3);
        assert_eq!(shape.coord_to_linear(0, 0), 0);
        assert_eq!(shape.coord_to_linear(19, 6), shape.len() - 1);
    }

    #[test]
    fn linear_to_coord_test() {
        let shape = GridShape::new(10, 10).unwrap();
        assert_eq!(shape.linear_to_coord(67), (6, 7));

        let shape = GridShape::new(4, 9).unwrap();
        for (k, (i, j)) in shape.coord_iter().enumerate() {
            assert_eq!(shape.coord_to_linear(i, j), k);
        }
    }

    #[test]
    fn ranges_and_corners() {
        let shape = GridShape::new(5, 4).unwrap();
        assert_eq!(shape.interior_rows(), 1..4);
        assert_eq!(shape.interior_cols(), 1..3);
        assert_eq!(shape.corners(), [(0, 0), (0, 3), (4, 0), (4, 3)]);
    }
}
