//! # Dense matrices
//!
//! The constraint matrix of a standard form problem is stored densely, row by row. Problems only
//! ever grow by appending rows and columns, so the operations here are limited to construction,
//! element access, row scaling, concatenation and products with vectors.
use std::cmp::max;
use std::fmt;
use std::slice::Iter;

use crate::data::linear_algebra::inner_product;

/// Uses a `Vec<Vec<f64>>` as underlying data structure, one inner `Vec` per row.
///
/// Dimensions are fixed at creation, except that rows and columns can be appended.
#[derive(Clone, Debug, PartialEq)]
pub struct Dense {
    data: Vec<Vec<f64>>,
    nr_rows: usize,
    nr_columns: usize,
}

impl Dense {
    /// Create a `Dense` matrix from row major data.
    ///
    /// # Arguments
    ///
    /// * `data`: Rows of the matrix, all of the same length.
    #[must_use]
    pub fn from_data(data: Vec<Vec<f64>>) -> Self {
        let (nr_rows, nr_columns) = get_data_dimensions(&data);
        Self { data, nr_rows, nr_columns }
    }

    /// Create a dense square identity matrix of size `len`.
    #[must_use]
    pub fn identity(len: usize) -> Self {
        let data = (0..len)
            .map(|i| (0..len).map(|j| if i == j { 1f64 } else { 0f64 }).collect())
            .collect();

        Self { data, nr_rows: len, nr_columns: len }
    }

    /// Create a dense matrix of zero's of dimension `nr_rows` x `nr_columns`.
    #[must_use]
    pub fn zeros(nr_rows: usize, nr_columns: usize) -> Self {
        Self { data: vec![vec![0f64; nr_columns]; nr_rows], nr_rows, nr_columns }
    }

    /// Get the value at coordinate (`i`, `j`).
    #[must_use]
    pub fn get_value(&self, i: usize, j: usize) -> f64 {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        self.data[i][j]
    }

    /// Get all values in row `i` of this matrix.
    #[must_use]
    pub fn row(&self, i: usize) -> &[f64] {
        debug_assert!(i < self.nr_rows);

        &self.data[i]
    }

    /// Iterate over the rows of this matrix.
    pub fn rows(&self) -> Iter<'_, Vec<f64>> {
        self.data.iter()
    }

    /// Get all values in column `j` of this matrix.
    #[must_use]
    pub fn column(&self, j: usize) -> Vec<f64> {
        debug_assert!(j < self.nr_columns);

        self.data.iter().map(|row| row[j]).collect()
    }

    /// Multiply row `i` with a factor `factor`.
    pub fn multiply_row(&mut self, i: usize, factor: f64) {
        debug_assert!(i < self.nr_rows);

        for value in &mut self.data[i] {
            *value *= factor;
        }
    }

    /// Concatenate another matrix to the "right" (high column indices) of this matrix.
    ///
    /// The number of rows must be equal.
    #[must_use]
    pub fn hcat(mut self, other: &Dense) -> Self {
        debug_assert_eq!(self.nr_rows, other.nr_rows);

        for (row, other_row) in self.data.iter_mut().zip(&other.data) {
            row.extend_from_slice(other_row);
        }
        self.nr_columns += other.nr_columns;

        self
    }

    /// Append a row at the bottom of the matrix.
    pub fn push_row(&mut self, row: Vec<f64>) {
        debug_assert_eq!(row.len(), self.nr_columns);

        self.data.push(row);
        self.nr_rows += 1;
    }

    /// Append a column at the right of the matrix.
    pub fn push_column(&mut self, column: &[f64]) {
        debug_assert_eq!(column.len(), self.nr_rows);

        for (row, &value) in self.data.iter_mut().zip(column) {
            row.push(value);
        }
        self.nr_columns += 1;
    }

    /// Collect a subset of the columns into a new matrix, in the order given.
    ///
    /// This is used to build the square matrix of basis columns.
    #[must_use]
    pub fn select_columns(&self, columns: &[usize]) -> Self {
        debug_assert!(columns.iter().all(|&j| j < self.nr_columns));

        let data = self.data.iter()
            .map(|row| columns.iter().map(|&j| row[j]).collect())
            .collect();

        Self { data, nr_rows: self.nr_rows, nr_columns: columns.len() }
    }

    /// Compute `Ax` for a vector `x` with a value for each column.
    #[must_use]
    pub fn mul_vector(&self, x: &[f64]) -> Vec<f64> {
        debug_assert_eq!(x.len(), self.nr_columns);

        self.data.iter().map(|row| inner_product(row, x)).collect()
    }

    /// Compute the inner product of column `j` with a vector `y` with a value for each row.
    #[must_use]
    pub fn column_inner_product(&self, j: usize, y: &[f64]) -> f64 {
        debug_assert!(j < self.nr_columns);
        debug_assert_eq!(y.len(), self.nr_rows);

        self.data.iter().zip(y).map(|(row, &v)| row[j] * v).sum()
    }

    /// Get the number of rows in this matrix.
    #[must_use]
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Get the number of columns in this matrix.
    #[must_use]
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    /// Get the data of this matrix.
    #[must_use]
    pub fn data(self) -> Vec<Vec<f64>> {
        self.data
    }
}

/// If all row sizes agree, return the dimensions of `data`.
fn get_data_dimensions(data: &[Vec<f64>]) -> (usize, usize) {
    let nr_rows = data.len();
    let nr_columns = data.first().map_or(0, Vec::len);

    debug_assert!(
        data.iter().all(|row| row.len() == nr_columns),
        "Row lengths not equal: first row has length {}", nr_columns,
    );

    (nr_rows, nr_columns)
}

impl fmt::Display for Dense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.data.iter()
            .map(|row| row.iter().map(f64::to_string).collect::<Vec<_>>())
            .collect::<Vec<_>>();

        let row_counter_width = self.nr_rows.saturating_sub(1).to_string().len();
        let column_width = (0..self.nr_columns).map(|j| {
            max(j.to_string().len(), rows.iter().map(|row| row[j].len()).max().unwrap_or(0))
        }).collect::<Vec<_>>();

        // Column counters
        write!(f, "{0:>width$} |", "", width = row_counter_width)?;
        for (j, width) in column_width.iter().enumerate() {
            write!(f, " {0:^width$}", j, width = width)?;
        }
        writeln!(f)?;

        // Separator
        let total_width = (row_counter_width + 1) + 1 +
            column_width.iter().map(|l| 1 + l).sum::<usize>();
        writeln!(f, "{}", "-".repeat(total_width))?;

        // Row counter and row data
        for (i, row) in rows.into_iter().enumerate() {
            write!(f, "{0:>width$} |", i, width = row_counter_width)?;
            for (width, value) in column_width.iter().zip(row) {
                write!(f, " {0:^width$}", value, width = width)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
