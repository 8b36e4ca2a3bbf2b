//! Sparse matrix machinery for assembling grid operators.
//!
//! Finite-difference operators carry only a handful of non-zero entries per
//! row relative to their total dimension, so every operator in this crate is
//! held in compressed sparse row (CSR) form. Matrices are assembled from
//! whole batches of `(row, col, value)` triplets and converted to CSR once;
//! nothing is inserted entry-by-entry.

use ndarray as nd;
use num_complex::Complex64 as C64;
use num_traits::Num;
use crate::Arr1;

/// A sparse matrix in compressed sparse row format.
///
/// Instances are immutable once built; every operation below returns a new
/// matrix. Within each row, column indices are stored in ascending order.
/// The scalar type is `f64` for every operator except momentum, which is
/// complex-valued.
#[derive(Clone, Debug, PartialEq)]
pub struct CsMat<A> {
    rows: usize,
    cols: usize,
    row_ptr: Vec<usize>,
    col_idx: Vec<usize>,
    values: Vec<A>,
}

impl<A> CsMat<A> {
    /// Matrix dimensions as `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) { (self.rows, self.cols) }

    /// Number of stored entries.
    pub fn nnz(&self) -> usize { self.values.len() }

    /// Iterate over stored entries as `(row, col, value)` triplets in
    /// row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &A)> + '_ {
        self.row_ptr.windows(2).enumerate()
            .flat_map(move |(i, w)| {
                self.col_idx[w[0]..w[1]].iter()
                    .zip(&self.values[w[0]..w[1]])
                    .map(move |(&j, v)| (i, j, v))
            })
    }
}

impl<A: Copy + Num> CsMat<A> {
    /// Build a `rows × cols` matrix from a batch of `(row, col, value)`
    /// triplets; values at duplicate positions are summed.
    ///
    /// *Panics if any index lies outside the matrix dimensions.*
    pub fn from_triplets(
        rows: usize,
        cols: usize,
        mut triplets: Vec<(usize, usize, A)>,
    ) -> Self
    {
        triplets.sort_by_key(|&(i, j, _)| (i, j));
        let mut counts: Vec<usize> = vec![0; rows];
        let mut col_idx: Vec<usize> = Vec::with_capacity(triplets.len());
        let mut values: Vec<A> = Vec::with_capacity(triplets.len());
        let mut last: Option<(usize, usize)> = None;
        for (i, j, v) in triplets {
            assert!(
                i < rows && j < cols,
                "triplet index ({}, {}) out of bounds for a {}x{} matrix",
                i, j, rows, cols,
            );
            if last == Some((i, j)) {
                let end = values.len() - 1;
                values[end] = values[end] + v;
            } else {
                col_idx.push(j);
                values.push(v);
                counts[i] += 1;
                last = Some((i, j));
            }
        }
        let mut row_ptr: Vec<usize> = Vec::with_capacity(rows + 1);
        row_ptr.push(0);
        let mut acc: usize = 0;
        for c in counts {
            acc += c;
            row_ptr.push(acc);
        }
        Self { rows, cols, row_ptr, col_idx, values }
    }

    /// The `n × n` identity matrix.
    pub fn eye(n: usize) -> Self {
        Self {
            rows: n,
            cols: n,
            row_ptr: (0..=n).collect(),
            col_idx: (0..n).collect(),
            values: vec![A::one(); n],
        }
    }

    /// Build a `rows × cols` matrix with the value of each `(offset, value)`
    /// pair repeated along the corresponding diagonal (`0` the main
    /// diagonal, negative below, positive above). Exactly-zero band values
    /// are skipped.
    pub fn diags(rows: usize, cols: usize, bands: &[(isize, A)]) -> Self {
        let mut triplets: Vec<(usize, usize, A)> = Vec::new();
        for &(offset, value) in bands {
            if value.is_zero() { continue; }
            for i in 0..rows {
                let j = i as isize + offset;
                if (0..cols as isize).contains(&j) {
                    triplets.push((i, j as usize, value));
                }
            }
        }
        Self::from_triplets(rows, cols, triplets)
    }

    /// Diagonal matrix holding the values of `d`.
    pub fn from_diag<S>(d: &Arr1<S>) -> Self
    where S: nd::Data<Elem = A>
    {
        let n = d.len();
        Self {
            rows: n,
            cols: n,
            row_ptr: (0..=n).collect(),
            col_idx: (0..n).collect(),
            values: d.iter().copied().collect(),
        }
    }

    /// Kronecker (tensor) product `self ⊗ other`.
    pub fn kron(&self, other: &Self) -> Self {
        let rows = self.rows * other.rows;
        let cols = self.cols * other.cols;
        let nnz = self.nnz() * other.nnz();
        let mut row_ptr: Vec<usize> = Vec::with_capacity(rows + 1);
        let mut col_idx: Vec<usize> = Vec::with_capacity(nnz);
        let mut values: Vec<A> = Vec::with_capacity(nnz);
        row_ptr.push(0);
        for ia in 0..self.rows {
            for ib in 0..other.rows {
                for ja in self.row_ptr[ia]..self.row_ptr[ia + 1] {
                    let left = self.values[ja];
                    let col_base = self.col_idx[ja] * other.cols;
                    for jb in other.row_ptr[ib]..other.row_ptr[ib + 1] {
                        col_idx.push(col_base + other.col_idx[jb]);
                        values.push(left * other.values[jb]);
                    }
                }
                row_ptr.push(col_idx.len());
            }
        }
        Self { rows, cols, row_ptr, col_idx, values }
    }

    /// Entry-wise sum of two matrices of identical shape.
    ///
    /// *Panics if the shapes differ.*
    pub fn add(&self, other: &Self) -> Self {
        assert_eq!(
            (self.rows, self.cols),
            (other.rows, other.cols),
            "cannot add matrices of different shapes",
        );
        let mut row_ptr: Vec<usize> = Vec::with_capacity(self.rows + 1);
        let mut col_idx: Vec<usize>
            = Vec::with_capacity(self.nnz() + other.nnz());
        let mut values: Vec<A>
            = Vec::with_capacity(self.nnz() + other.nnz());
        row_ptr.push(0);
        for i in 0..self.rows {
            let (mut a, end_a) = (self.row_ptr[i], self.row_ptr[i + 1]);
            let (mut b, end_b) = (other.row_ptr[i], other.row_ptr[i + 1]);
            while a < end_a || b < end_b {
                let ja = (a < end_a).then(|| self.col_idx[a]);
                let jb = (b < end_b).then(|| other.col_idx[b]);
                match (ja, jb) {
                    (Some(ja), Some(jb)) if ja == jb => {
                        col_idx.push(ja);
                        values.push(self.values[a] + other.values[b]);
                        a += 1;
                        b += 1;
                    },
                    (Some(ja), Some(jb)) if ja < jb => {
                        col_idx.push(ja);
                        values.push(self.values[a]);
                        a += 1;
                    },
                    (Some(_), Some(jb)) => {
                        col_idx.push(jb);
                        values.push(other.values[b]);
                        b += 1;
                    },
                    (Some(ja), None) => {
                        col_idx.push(ja);
                        values.push(self.values[a]);
                        a += 1;
                    },
                    (None, Some(jb)) => {
                        col_idx.push(jb);
                        values.push(other.values[b]);
                        b += 1;
                    },
                    (None, None) => unreachable!(),
                }
            }
            row_ptr.push(col_idx.len());
        }
        Self { rows: self.rows, cols: self.cols, row_ptr, col_idx, values }
    }

    /// Multiply all entries by a scalar.
    pub fn scaled(&self, z: A) -> Self {
        let mut new = self.clone();
        new.values.iter_mut().for_each(|v| { *v = *v * z; });
        new
    }

    /// Matrix–vector product `y = A x`.
    ///
    /// *Panics if `x` or `y` has a length incompatible with the matrix
    /// shape.*
    pub fn spmv(&self, x: &[A], y: &mut [A]) {
        assert_eq!(x.len(), self.cols, "input length must match matrix cols");
        assert_eq!(y.len(), self.rows, "output length must match matrix rows");
        for (i, yi) in y.iter_mut().enumerate() {
            let mut acc = A::zero();
            for j in self.row_ptr[i]..self.row_ptr[i + 1] {
                acc = acc + self.values[j] * x[self.col_idx[j]];
            }
            *yi = acc;
        }
    }

    /// Expand into a dense array.
    pub fn to_dense(&self) -> nd::Array2<A> {
        let mut dense: nd::Array2<A>
            = nd::Array2::zeros((self.rows, self.cols));
        for (i, j, &v) in self.iter() { dense[[i, j]] = v; }
        dense
    }
}

impl CsMat<f64> {
    /// Multiply all entries by a complex scalar, promoting the matrix to
    /// complex entries.
    pub fn scaled_complex(&self, z: C64) -> CsMat<C64> {
        CsMat {
            rows: self.rows,
            cols: self.cols,
            row_ptr: self.row_ptr.clone(),
            col_idx: self.col_idx.clone(),
            values: self.values.iter().map(|&v| z * v).collect(),
        }
    }
}
