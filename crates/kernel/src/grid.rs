use serde::{Deserialize, Serialize};

/// Dense row-major 2D array of f64 samples.
///
/// Rows index the first parameter axis, columns the second. All derived
/// arrays of a sampled surface share one shape, so index (i, j) refers to
/// the same sample across every grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid2 {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Grid2 {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut grid = Self::zeros(rows, cols);
        for i in 0..rows {
            for j in 0..cols {
                grid.set(i, j, f(i, j));
            }
        }
        grid
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn at(&self, i: usize, j: usize) -> f64 {
        debug_assert!(i < self.rows && j < self.cols);
        self.data[i * self.cols + j]
    }

    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        debug_assert!(i < self.rows && j < self.cols);
        self.data[i * self.cols + j] = value;
    }
}

/// `count` evenly spaced samples over [start, stop], endpoints inclusive.
///
/// The final sample is forced to `stop` exactly rather than accumulated,
/// so the grid always reaches the interval boundary.
pub fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    debug_assert!(count >= 2);
    let step = (stop - start) / (count - 1) as f64;
    let mut samples: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
    samples[count - 1] = stop;
    samples
}
