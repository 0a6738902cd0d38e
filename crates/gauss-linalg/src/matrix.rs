//! Augmented matrices.
//!
//! A [`Matrix`] holds `m` equations in `k` unknowns as `m` rows of `k + 1`
//! entries: the coefficients followed by the constant. Entries are stored
//! in row-major order.

use std::ops::{Index, IndexMut};

use gauss_scalar::Scalar;

use crate::error::{LinalgError, Result};

/// Augmented matrix `[A | b]` stored in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<S> {
    /// Matrix entries in row-major order.
    data: Vec<S>,
    /// Number of equations.
    num_rows: usize,
    /// Number of unknowns plus one.
    num_cols: usize,
}

impl<S: Scalar> Matrix<S> {
    /// Creates an augmented matrix from its rows.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::InvalidMatrix`] if there are no rows, fewer than
    /// two columns (one coefficient plus the constant), or rows of differing
    /// length.
    pub fn from_rows(rows: Vec<Vec<S>>) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Err(LinalgError::InvalidMatrix("matrix has no rows".into()));
        };
        let num_cols = first.len();
        if num_cols < 2 {
            return Err(LinalgError::InvalidMatrix(format!(
                "an augmented matrix needs at least 2 columns, found {num_cols}"
            )));
        }
        if let Some((index, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != num_cols) {
            return Err(LinalgError::InvalidMatrix(format!(
                "row {} has {} entries, expected {num_cols}",
                index + 1,
                row.len()
            )));
        }

        let num_rows = rows.len();
        Ok(Self {
            data: rows.into_iter().flatten().collect(),
            num_rows,
            num_cols,
        })
    }

    /// Creates an augmented matrix from integer rows.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Matrix::from_rows`].
    pub fn from_integers<const N: usize>(rows: &[[i64; N]]) -> Result<Self> {
        Self::from_rows(
            rows.iter()
                .map(|row| row.iter().map(|&v| S::from_i64(v)).collect())
                .collect(),
        )
    }

    /// Parses one text line per row.
    ///
    /// Entries are separated by commas when the line contains one, otherwise
    /// by whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Parse`] naming the first bad entry, or the
    /// errors of [`Matrix::from_rows`].
    pub fn parse_rows<T: AsRef<str>>(lines: &[T]) -> Result<Self> {
        let mut rows = Vec::with_capacity(lines.len());
        for (row, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            let tokens: Vec<&str> = if line.contains(',') {
                line.split(',').map(str::trim).collect()
            } else {
                line.split_whitespace().collect()
            };

            let entries = tokens
                .iter()
                .enumerate()
                .map(|(col, token)| {
                    S::parse(token).map_err(|source| LinalgError::Parse {
                        row: row + 1,
                        col: col + 1,
                        source,
                    })
                })
                .collect::<Result<Vec<S>>>()?;
            rows.push(entries);
        }
        Self::from_rows(rows)
    }

    /// Builds the system `I·x = values`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::InvalidMatrix`] if `values` is empty.
    pub fn identity_system(values: &[S]) -> Result<Self> {
        let n = values.len();
        Self::from_rows(
            values
                .iter()
                .enumerate()
                .map(|(i, value)| {
                    let mut row = vec![S::zero(); n + 1];
                    row[i] = S::one();
                    row[n] = value.clone();
                    row
                })
                .collect(),
        )
    }

    /// Returns the number of rows (equations).
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns, constant column included.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Returns the number of unknowns.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.num_cols - 1
    }

    /// Index of the constant column.
    #[must_use]
    pub fn constant_col(&self) -> usize {
        self.num_cols - 1
    }

    /// Returns a reference to the entry at (row, col).
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&S> {
        if row < self.num_rows && col < self.num_cols {
            Some(&self.data[row * self.num_cols + col])
        } else {
            None
        }
    }

    /// Returns a slice of the specified row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[S] {
        let start = row * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    fn row_mut(&mut self, row: usize) -> &mut [S] {
        let start = row * self.num_cols;
        &mut self.data[start..start + self.num_cols]
    }

    /// Iterates over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &[S]> {
        self.data.chunks(self.num_cols)
    }

    /// The coefficient part of a row.
    #[must_use]
    pub fn coefficients(&self, row: usize) -> &[S] {
        &self.row(row)[..self.num_vars()]
    }

    /// The constant entry of a row.
    #[must_use]
    pub fn constant(&self, row: usize) -> &S {
        &self[(row, self.constant_col())]
    }

    /// Copies the entries out as nested vectors.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<S>> {
        self.rows().map(<[S]>::to_vec).collect()
    }

    /// Swaps two rows in-place.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let i_start = i * self.num_cols;
        let j_start = j * self.num_cols;
        for k in 0..self.num_cols {
            self.data.swap(i_start + k, j_start + k);
        }
    }

    /// Multiplies a whole row by `factor`.
    pub fn scale_row(&mut self, row: usize, factor: &S) {
        for entry in self.row_mut(row) {
            *entry = entry.clone() * factor.clone();
        }
    }

    /// Divides the entries of `row` from column `from` onward by `divisor`.
    ///
    /// # Errors
    ///
    /// Returns a scalar error if `divisor` is zero; the row is left untouched.
    pub fn divide_row_from(&mut self, row: usize, from: usize, divisor: &S) -> Result<()> {
        let inverse = S::one().checked_div(divisor)?;
        for entry in &mut self.row_mut(row)[from..] {
            *entry = entry.clone() * inverse.clone();
        }
        Ok(())
    }

    /// `row[target] -= factor * row[source]` over columns `from..`.
    pub fn sub_scaled_row_from(&mut self, target: usize, source: usize, factor: &S, from: usize) {
        for k in from..self.num_cols {
            let delta = factor.clone() * self[(source, k)].clone();
            self[(target, k)] = self[(target, k)].clone() - delta;
        }
    }

    /// Returns true if every entry of `row` from column `from` onward is zero.
    #[must_use]
    pub fn is_zero_from(&self, row: usize, from: usize) -> bool {
        self.row(row)[from..].iter().all(S::is_zero)
    }
}

impl<S> Index<(usize, usize)> for Matrix<S> {
    type Output = S;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row * self.num_cols + col]
    }
}

impl<S> IndexMut<(usize, usize)> for Matrix<S> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[row * self.num_cols + col]
    }
}
