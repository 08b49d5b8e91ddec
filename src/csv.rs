use crate::error::*;
use crate::grid::Grid;
use std::io::prelude::*;

/// Write `grid` to `output`, one line per row, comma separated.
pub fn write_csv<W: Write>(grid: &Grid, output: &mut W) -> Result<()> {
    let shape = grid.shape();
    for i in 0..shape.nx {
        let row = grid.row(i);
        write!(output, "{}", row[0])?;
        for r in &row[1..] {
            write!(output, ", {r}")?;
        }
        writeln!(output)?;
    }
    Ok(())
}

/// Write `grid` as csv to the file at `path`.
pub fn write_csv_file<P: AsRef<std::path::Path>>(grid: &Grid, path: &P) -> Result<()> {
    tracing::info!(path = ?path.as_ref(), "writing csv");
    let file = std::fs::File::create(path).map_err(|source| {
        StencilError::OutputUnavailable {
            path: path.as_ref().to_path_buf(),
            source,
        }
    })?;
    let mut output = std::io::BufWriter::new(file);
    write_csv(grid, &mut output)?;
    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::util::*;

    #[test]
    fn csv_layout() {
        let shape = GridShape::new(3, 3).unwrap();
        let grid = Grid::from_fn(shape, |i, j| (i * 10 + j) as f64 * 0.5).unwrap();
        let mut output = Vec::new();
        write_csv(&grid, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert_eq!(text, "0, 0.5, 1\n5, 5.5, 6\n10, 10.5, 11\n");
    }
}
