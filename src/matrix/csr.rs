//! Compressed Sparse Row (CSR) matrix format implementation

use std::fmt;

use ndarray::Array2;
use num_traits::{Num, Signed};

use crate::utils::exclusive_scan;

/// A sparse matrix in Compressed Sparse Row (CSR) format
///
/// The CSR format stores a sparse matrix using three arrays:
/// - row_ptr: Array of size n_rows + 1 containing indices into col_idx and values arrays
/// - col_idx: Array of size nnz containing column indices of non-zero elements
/// - values: Array of size nnz containing the non-zero values
///
/// Column indices within a row are kept strictly increasing, so a matrix never
/// holds two entries for the same (row, column) position and iterating it in
/// storage order is row-major and deterministic.
#[derive(Clone, PartialEq)]
pub struct SparseMatrixCSR<T> {
    /// Number of rows in the matrix
    pub n_rows: usize,

    /// Number of columns in the matrix
    pub n_cols: usize,

    /// Row pointers (size: n_rows + 1)
    /// row_ptr[i] is the index in col_idx and values where row i starts
    /// row_ptr[n_rows] is equal to nnz
    pub row_ptr: Vec<usize>,

    /// Column indices (size: nnz)
    pub col_idx: Vec<usize>,

    /// Non-zero values (size: nnz)
    pub values: Vec<T>,
}

impl<T> SparseMatrixCSR<T>
where
    T: Copy + Num,
{
    /// Creates a new CSR matrix with the given dimensions and data
    ///
    /// # Panics
    ///
    /// Panics if the input arrays are inconsistent:
    /// - row_ptr.len() must be n_rows + 1
    /// - col_idx.len() must equal values.len()
    /// - row_ptr[n_rows] must equal col_idx.len()
    /// - column indices must be in bounds and strictly increasing within a row
    pub fn new(
        n_rows: usize,
        n_cols: usize,
        row_ptr: Vec<usize>,
        col_idx: Vec<usize>,
        values: Vec<T>,
    ) -> Self {
        assert_eq!(row_ptr.len(), n_rows + 1, "row_ptr.len() must be n_rows + 1");
        assert_eq!(col_idx.len(), values.len(), "col_idx.len() must equal values.len()");
        assert_eq!(
            row_ptr[n_rows],
            col_idx.len(),
            "row_ptr[n_rows] must equal col_idx.len()"
        );

        for &col in &col_idx {
            assert!(col < n_cols, "Column index {} out of bounds (n_cols = {})", col, n_cols);
        }

        for i in 0..n_rows {
            let row = &col_idx[row_ptr[i]..row_ptr[i + 1]];
            assert!(
                row.windows(2).all(|w| w[0] < w[1]),
                "Column indices of row {} must be strictly increasing",
                i
            );
        }

        Self {
            n_rows,
            n_cols,
            row_ptr,
            col_idx,
            values,
        }
    }

    /// Builds a matrix from (row, col, value) triplets in any order.
    ///
    /// Entries sharing a position are summed, which is how a random component
    /// and a diagonal shift are merged into one matrix.
    ///
    /// # Panics
    ///
    /// Panics if a triplet lies outside `n_rows × n_cols`.
    pub fn from_triplets(
        n_rows: usize,
        n_cols: usize,
        mut triplets: Vec<(usize, usize, T)>,
    ) -> Self {
        for &(row, col, _) in &triplets {
            assert!(
                row < n_rows && col < n_cols,
                "Triplet ({}, {}) out of bounds ({} × {})",
                row,
                col,
                n_rows,
                n_cols
            );
        }

        // Sort by row, then column
        triplets.sort_unstable_by(|a, b| a.0.cmp(&b.0).then(a.1.cmp(&b.1)));

        // Combine duplicates
        let mut combined: Vec<(usize, usize, T)> = Vec::with_capacity(triplets.len());
        for (row, col, val) in triplets {
            match combined.last_mut() {
                Some(last) if last.0 == row && last.1 == col => last.2 = last.2 + val,
                _ => combined.push((row, col, val)),
            }
        }

        let mut row_counts = vec![0usize; n_rows];
        for &(row, _, _) in &combined {
            row_counts[row] += 1;
        }
        let row_ptr = exclusive_scan(&row_counts);

        let (col_idx, values): (Vec<usize>, Vec<T>) = combined.into_iter().map(|(_, col, val)| (col, val)).unzip();

        Self::new(n_rows, n_cols, row_ptr, col_idx, values)
    }

    /// Returns the number of non-zero elements in the matrix
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Returns (n_rows, n_cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.n_cols)
    }

    /// Fraction of stored entries, nnz / (n_rows · n_cols)
    pub fn density(&self) -> f64 {
        let cells = self.n_rows as f64 * self.n_cols as f64;
        if cells == 0.0 {
            0.0
        } else {
            self.nnz() as f64 / cells
        }
    }

    /// Returns an iterator over the non-zero elements in row i
    ///
    /// Each item is a tuple (col_idx, value) representing a non-zero element
    pub fn row_iter(&self, i: usize) -> impl Iterator<Item = (usize, &T)> {
        assert!(i < self.n_rows, "Row index out of bounds");

        let start = self.row_ptr[i];
        let end = self.row_ptr[i + 1];

        self.col_idx[start..end]
            .iter()
            .zip(&self.values[start..end])
            .map(|(&col, val)| (col, val))
    }

    /// Iterates all stored entries as (row, col, value) in row-major order
    pub fn triplet_iter(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        (0..self.n_rows).flat_map(move |i| self.row_iter(i).map(move |(j, &v)| (i, j, v)))
    }

    /// Looks up the stored value at (i, j), if any
    pub fn get(&self, i: usize, j: usize) -> Option<T> {
        if i >= self.n_rows {
            return None;
        }
        let start = self.row_ptr[i];
        let end = self.row_ptr[i + 1];
        self.col_idx[start..end]
            .binary_search(&j)
            .ok()
            .map(|k| self.values[start + k])
    }

    /// Returns `self + alpha * I` over the leading diagonal
    pub fn add_scaled_identity(&self, alpha: T) -> Self {
        let diag = self.n_rows.min(self.n_cols);
        let mut triplets: Vec<_> = self.triplet_iter().collect();
        triplets.extend((0..diag).map(|i| (i, i, alpha)));
        Self::from_triplets(self.n_rows, self.n_cols, triplets)
    }

    /// Expands the matrix into a dense row-major array
    pub fn to_dense(&self) -> Array2<T> {
        let mut dense = Array2::zeros((self.n_rows, self.n_cols));
        for (i, j, v) in self.triplet_iter() {
            dense[[i, j]] = v;
        }
        dense
    }

    /// Creates an empty matrix with the given dimensions
    pub fn zeros(n_rows: usize, n_cols: usize) -> Self {
        Self {
            n_rows,
            n_cols,
            row_ptr: vec![0; n_rows + 1],
            col_idx: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Creates an identity matrix of the given size
    pub fn identity(n: usize) -> Self {
        Self {
            n_rows: n,
            n_cols: n,
            row_ptr: (0..=n).collect(),
            col_idx: (0..n).collect(),
            values: vec![T::one(); n],
        }
    }
}

impl<T> SparseMatrixCSR<T>
where
    T: Copy + Num + Signed + PartialOrd,
{
    /// Checks `|a_ij - a_ji| <= tol` for every stored entry.
    pub fn is_symmetric(&self, tol: T) -> bool {
        if self.n_rows != self.n_cols {
            return false;
        }
        self.triplet_iter().all(|(i, j, v)| {
            let mirror = self.get(j, i).unwrap_or_else(T::zero);
            (v - mirror).abs() <= tol
        })
    }

    /// Row diagonal dominance: `|a_ii| >= sum_{j != i} |a_ij|` for every row.
    pub fn is_diagonally_dominant(&self) -> bool {
        (0..self.n_rows).all(|i| {
            let mut diag = T::zero();
            let mut off = T::zero();
            for (j, &v) in self.row_iter(i) {
                if i == j {
                    diag = v.abs();
                } else {
                    off = off + v.abs();
                }
            }
            diag >= off
        })
    }

    /// Sum of the entries of row i
    pub fn row_sum(&self, i: usize) -> T {
        self.row_iter(i).fold(T::zero(), |acc, (_, &v)| acc + v)
    }
}

impl<T: fmt::Debug + Copy + Num> fmt::Debug for SparseMatrixCSR<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SparseMatrixCSR {{")?;
        writeln!(f, "  dimensions: {} × {}", self.n_rows, self.n_cols)?;
        writeln!(f, "  nnz: {}", self.nnz())?;

        let max_rows_to_print = 5.min(self.n_rows);
        if max_rows_to_print > 0 {
            writeln!(f, "  content sample:")?;

            for i in 0..max_rows_to_print {
                write!(f, "    row {}: ", i)?;
                let entries: Vec<_> = self.row_iter(i).collect();

                if entries.is_empty() {
                    writeln!(f, "(empty)")?;
                    continue;
                }
                for (col, val) in entries.iter().take(5) {
                    write!(f, "({}, {:?}) ", col, val)?;
                }
                if entries.len() > 5 {
                    write!(f, "... ({} more)", entries.len() - 5)?;
                }
                writeln!(f)?;
            }

            if self.n_rows > max_rows_to_print {
                writeln!(f, "    ... ({} more rows)", self.n_rows - max_rows_to_print)?;
            }
        }

        write!(f, "}}")
    }
}
