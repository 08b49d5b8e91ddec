use super::*;
use crate::grid::Grid;
use crate::util::*;

/// Which update rule a cell falls under.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Region {
    Interior,
    Top,
    Bottom,
    Left,
    Right,
    Corner,
}

impl Region {
    pub const ALL: [Region; 6] = [
        Region::Interior,
        Region::Top,
        Region::Bottom,
        Region::Left,
        Region::Right,
        Region::Corner,
    ];

    /// Classify `(i, j)`. Exactly one region matches every cell.
    pub fn classify(shape: GridShape, i: usize, j: usize) -> Region {
        debug_assert!(i < shape.nx && j < shape.ny);
        let top = i == 0;
        let bottom = i == shape.nx - 1;
        let left = j == 0;
        let right = j == shape.ny - 1;
        match (top || bottom, left || right) {
            (true, true) => Region::Corner,
            (false, false) => Region::Interior,
            (true, false) if top => Region::Top,
            (true, false) => Region::Bottom,
            (false, true) if left => Region::Left,
            (false, true) => Region::Right,
        }
    }

    /// Evaluate this region's rule for `(i, j)` against `current`.
    /// Corners have no rule.
    #[inline]
    pub fn apply(self, current: &Grid, i: usize, j: usize) -> Option<f64> {
        let shape = current.shape();
        let ib = current.buffer();
        let ny = shape.ny;
        let l = shape.coord_to_linear(i, j);
        match self {
            Region::Interior => Some(interior_rule(ib, ny, l)),
            Region::Top => Some(top_rule(ib, ny, l)),
            Region::Bottom => Some(bottom_rule(ib, ny, l)),
            Region::Left => Some(left_rule(ib, ny, l)),
            Region::Right => Some(right_rule(ib, ny, l)),
            Region::Corner => None,
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn classify_test() {
        let shape = GridShape::new(5, 4).unwrap();
        assert_eq!(Region::classify(shape, 0, 0), Region::Corner);
        assert_eq!(Region::classify(shape, 4, 3), Region::Corner);
        assert_eq!(Region::classify(shape, 0, 3), Region::Corner);
        assert_eq!(Region::classify(shape, 4, 0), Region::Corner);
        assert_eq!(Region::classify(shape, 0, 1), Region::Top);
        assert_eq!(Region::classify(shape, 4, 2), Region::Bottom);
        assert_eq!(Region::classify(shape, 2, 0), Region::Left);
        assert_eq!(Region::classify(shape, 3, 3), Region::Right);
        assert_eq!(Region::classify(shape, 2, 2), Region::Interior);
    }

    #[test]
    fn region_counts() {
        let (nx, ny) = (7, 5);
        let shape = GridShape::new(nx, ny).unwrap();
        let count = |r: Region| {
            shape
                .coord_iter()
                .filter(|(i, j)| Region::classify(shape, *i, *j) == r)
                .count()
        };
        assert_eq!(count(Region::Interior), (nx - 2) * (ny - 2));
        assert_eq!(count(Region::Top), ny - 2);
        assert_eq!(count(Region::Bottom), ny - 2);
        assert_eq!(count(Region::Left), nx - 2);
        assert_eq!(count(Region::Right), nx - 2);
        assert_eq!(count(Region::Corner), 4);
        let total: usize = Region::ALL.iter().map(|r| count(*r)).sum();
        assert_eq!(total, nx * ny);
    }
}
