//! Matrix type for 2D numeric data.

use super::Vector;
use serde::{Deserialize, Serialize};

/// A 2D matrix of floating-point values (row-major storage).
///
/// Feature blocks and the final design matrix are `Matrix<f32>`. A matrix
/// may have zero columns: an extractor whose vocabulary came out empty still
/// produces one (zero-width) row per instance.
///
/// # Examples
///
/// ```
/// use perfilar::primitives::Matrix;
///
/// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("data length matches rows * cols");
/// assert_eq!(m.shape(), (2, 3));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Copy> Matrix<T> {
    /// Creates a new matrix from a vector of data.
    ///
    /// # Errors
    ///
    /// Returns an error if data length doesn't match rows * cols.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, &'static str> {
        if data.len() != rows * cols {
            return Err("Data length must equal rows * cols");
        }
        Ok(Self { data, rows, cols })
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Gets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[row * self.cols + col]
    }

    /// Sets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.data[row * self.cols + col] = value;
    }

    /// Returns a row as a Vector.
    #[must_use]
    pub fn row(&self, row_idx: usize) -> Vector<T> {
        let start = row_idx * self.cols;
        let end = start + self.cols;
        Vector::from_slice(&self.data[start..end])
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl Matrix<f32> {
    /// Creates a matrix of zeros.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Builds a matrix from equal-length rows.
    ///
    /// `width` disambiguates the column count when `rows` is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if any row's length differs from `width`.
    pub fn from_rows(rows: &[Vec<f32>], width: usize) -> Result<Self, &'static str> {
        let mut data = Vec::with_capacity(rows.len() * width);
        for row in rows {
            if row.len() != width {
                return Err("All rows must have the same length");
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            rows: rows.len(),
            cols: width,
        })
    }

    /// Concatenates blocks horizontally into one matrix.
    ///
    /// Every block must have the same row count. Zero-width blocks are
    /// tolerated and contribute no columns.
    ///
    /// # Errors
    ///
    /// Returns an error if `blocks` is empty or row counts disagree.
    ///
    /// # Examples
    ///
    /// ```
    /// use perfilar::primitives::Matrix;
    ///
    /// let a = Matrix::from_vec(2, 1, vec![1.0, 2.0]).expect("valid");
    /// let b = Matrix::from_vec(2, 2, vec![3.0, 4.0, 5.0, 6.0]).expect("valid");
    /// let m = Matrix::hstack(&[a, b]).expect("matching row counts");
    /// assert_eq!(m.shape(), (2, 3));
    /// assert_eq!(m.get(1, 2), 6.0);
    /// ```
    pub fn hstack(blocks: &[Self]) -> Result<Self, &'static str> {
        let first = blocks.first().ok_or("hstack needs at least one block")?;
        let rows = first.rows;
        if blocks.iter().any(|b| b.rows != rows) {
            return Err("All blocks must have the same row count");
        }

        let cols: usize = blocks.iter().map(|b| b.cols).sum();
        let mut data = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for block in blocks {
                let start = row * block.cols;
                data.extend_from_slice(&block.data[start..start + block.cols]);
            }
        }

        Ok(Self { data, rows, cols })
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
