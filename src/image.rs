use crate::error::*;
use crate::grid::Grid;

/// Map every cell of `grid` to a pixel, row `i` becomes image row `i`.
/// Values are normalized by the grid's min and max and colored with
/// the TURBO gradient.
pub fn grid_image(grid: &Grid) -> image::RgbImage {
    let shape = grid.shape();
    let (lo, hi) = grid.min_max();
    let range = hi - lo;
    let gradient = colorous::TURBO;
    let mut img = image::RgbImage::new(shape.ny as u32, shape.nx as u32);
    for (l, v) in grid.buffer().iter().enumerate() {
        let (i, j) = shape.linear_to_coord(l);
        let r = if range > 0.0 && range.is_finite() {
            ((v - lo) / range).clamp(0.0, 1.0)
        } else {
            0.5
        };
        let c = gradient.eval_continuous(r);
        img.put_pixel(j as u32, i as u32, image::Rgb(c.as_array()));
    }
    img
}

/// Save a heatmap of `grid` to `path`, format from the extension.
pub fn write_image<P: AsRef<std::path::Path>>(grid: &Grid, path: &P) -> Result<()> {
    tracing::info!(path = ?path.as_ref(), "writing image");
    grid_image(grid)
        .save(path)
        .map_err(|e| StencilError::Snapshot(e.to_string()))
}
