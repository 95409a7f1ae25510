//! Dense row-major matrix storage.
//!
//! ## Purpose
//!
//! This module provides `Matrix2D`, the rectangular container used for 2D
//! sample grids (`x`, `y`, `z`) and for the coefficient table of a `TwoD`
//! polynomial.
//!
//! ## Design notes
//!
//! * **Row-major**: Element `(r, c)` lives at `r * cols + c` of a single `Vec`.
//! * **Fixed shape**: No implicit resizing after construction.
//! * **Slice semantics**: Out-of-range indexing panics, exactly like slice
//!   indexing. Use `get` for a checked lookup.
//!
//! ## Invariants
//!
//! * `data.len() == rows * cols` at all times.
//!
//! ## Non-goals
//!
//! * This module does not implement linear algebra (see `math::linalg`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec::Vec};
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::{Index, IndexMut};
use num_traits::Zero;

// Internal dependencies
use crate::primitives::errors::PolyfitError;

// ============================================================================
// Matrix2D
// ============================================================================

/// Dense, row-major 2D container with `(row, col)` indexing.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix2D<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Copy + Zero> Matrix2D<T> {
    /// Create a zero-filled matrix of the given shape.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![T::zero(); rows * cols],
        }
    }
}

impl<T> Matrix2D<T> {
    /// Create a matrix from a flat row-major buffer.
    pub fn from_row_major(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, PolyfitError> {
        if data.len() != rows * cols {
            return Err(PolyfitError::InvalidInput(format!(
                "buffer of {} elements cannot fill a {}x{} matrix",
                data.len(),
                rows,
                cols
            )));
        }
        Ok(Self { rows, cols, data })
    }

    /// Create a matrix by evaluating `f(row, col)` for every element.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut data = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                data.push(f(r, c));
            }
        }
        Self { rows, cols, data }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Shape as `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when the matrix holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Row-major view of all elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// View of a single row.
    #[inline]
    pub fn row(&self, r: usize) -> &[T] {
        &self.data[r * self.cols..(r + 1) * self.cols]
    }

    /// Checked element access.
    #[inline]
    pub fn get(&self, r: usize, c: usize) -> Option<&T> {
        if r < self.rows && c < self.cols {
            self.data.get(r * self.cols + c)
        } else {
            None
        }
    }

    /// Iterate over all elements in row-major order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consume the matrix and return the row-major buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Apply `f` to every element, keeping the shape.
    pub fn map<U, F>(&self, f: F) -> Matrix2D<U>
    where
        F: FnMut(&T) -> U,
    {
        Matrix2D {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(f).collect(),
        }
    }
}

impl<T: Clone> Matrix2D<T> {
    /// Create a matrix from a list of equally long rows.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self, PolyfitError> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(PolyfitError::InvalidInput(format!(
                    "row {} has {} columns, expected {}",
                    r,
                    row.len(),
                    cols
                )));
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// Return the transposed matrix.
    pub fn transpose(&self) -> Self {
        Self::from_fn(self.cols, self.rows, |r, c| self[(c, r)].clone())
    }
}

// ============================================================================
// Indexing
// ============================================================================

impl<T> Index<(usize, usize)> for Matrix2D<T> {
    type Output = T;

    #[inline]
    fn index(&self, (r, c): (usize, usize)) -> &T {
        assert!(
            r < self.rows && c < self.cols,
            "index ({r}, {c}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.data[r * self.cols + c]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix2D<T> {
    #[inline]
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut T {
        assert!(
            r < self.rows && c < self.cols,
            "index ({r}, {c}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &mut self.data[r * self.cols + c]
    }
}
