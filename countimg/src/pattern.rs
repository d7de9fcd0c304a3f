//! Count pattern: each pixel encodes its own coordinates.
//!
//! The row index goes in the high nibble and the column index in the low
//! nibble, so a 16x16 grid holds every byte value exactly once, 0x00 in the
//! top-left corner through 0xFF in the bottom-right. Coordinates are masked to
//! four bits, which makes larger grids repeat the 16x16 tile.

#[cfg(feature = "parallel")]
use rayon::{iter::IndexedParallelIterator, iter::ParallelIterator, slice::ParallelSliceMut};

use crate::grid::{Grid, GridShape};

/// Byte stored at (row, col): `((row & 0xF) << 4) | (col & 0xF)`.
#[inline]
pub fn count_value(row: usize, col: usize) -> u8 {
    (((row & 0xF) << 4) | (col & 0xF)) as u8
}

/// Fill every channel of every pixel with its count value.
pub fn fill_count(grid: &mut Grid) {
    let shape = grid.shape();
    if shape.is_empty() {
        return;
    }
    let row_len = shape.row_len();

    #[cfg(feature = "parallel")]
    {
        grid.as_bytes_mut()
            .par_chunks_exact_mut(row_len)
            .enumerate()
            .for_each(|(y, row)| fill_row(row, y, shape.channels));
    }

    #[cfg(not(feature = "parallel"))]
    {
        for (y, row) in grid.as_bytes_mut().chunks_exact_mut(row_len).enumerate() {
            fill_row(row, y, shape.channels);
        }
    }
}

fn fill_row(row: &mut [u8], y: usize, channels: usize) {
    for (x, pixel) in row.chunks_exact_mut(channels).enumerate() {
        pixel.fill(count_value(y, x));
    }
}

/// Allocate a grid of the given shape and fill it with the count pattern.
pub fn generate(shape: GridShape) -> Grid {
    let mut grid = Grid::zeros(shape);
    fill_count(&mut grid);
    grid
}

/// The 16x16 single-channel reference fixture.
pub fn generate_default() -> Grid {
    generate(GridShape::default())
}
