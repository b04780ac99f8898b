//! Finite differences over a 2D sample grid.
//!
//! Centered differences at interior nodes, second-order one-sided stencils
//! at the first and last node of each axis. The boundary stencil needs three
//! samples, so callers must hand in grids with at least 3 nodes per axis.

use crate::grid::Grid2;

/// Partial derivative along the row axis, with uniform spacing `h`.
pub fn partial_u(f: &Grid2, h: f64) -> Grid2 {
    debug_assert!(f.rows() >= 3);
    let (rows, cols) = (f.rows(), f.cols());
    let mut out = Grid2::zeros(rows, cols);
    for j in 0..cols {
        out.set(0, j, (-3.0 * f.at(0, j) + 4.0 * f.at(1, j) - f.at(2, j)) / (2.0 * h));
        for i in 1..rows - 1 {
            out.set(i, j, (f.at(i + 1, j) - f.at(i - 1, j)) / (2.0 * h));
        }
        out.set(
            rows - 1,
            j,
            (3.0 * f.at(rows - 1, j) - 4.0 * f.at(rows - 2, j) + f.at(rows - 3, j)) / (2.0 * h),
        );
    }
    out
}

/// Partial derivative along the column axis, with uniform spacing `h`.
pub fn partial_v(f: &Grid2, h: f64) -> Grid2 {
    debug_assert!(f.cols() >= 3);
    let (rows, cols) = (f.rows(), f.cols());
    let mut out = Grid2::zeros(rows, cols);
    for i in 0..rows {
        out.set(i, 0, (-3.0 * f.at(i, 0) + 4.0 * f.at(i, 1) - f.at(i, 2)) / (2.0 * h));
        for j in 1..cols - 1 {
            out.set(i, j, (f.at(i, j + 1) - f.at(i, j - 1)) / (2.0 * h));
        }
        out.set(
            i,
            cols - 1,
            (3.0 * f.at(i, cols - 1) - 4.0 * f.at(i, cols - 2) + f.at(i, cols - 3)) / (2.0 * h),
        );
    }
    out
}
