//! Dense matrices of exact rationals.
//!
//! All statespace algebra runs on `BigRational` entries so rank decisions
//! never depend on floating-point rounding. Operands are small (bounded by
//! the number of locations, typically under a few hundred per side), so the
//! multiply is a direct triple loop and storage is a flat row-major `Vec`.
//! Floats appear exactly once, at [`FracMatrix::to_f64`], the boundary
//! where results are handed to downstream solvers.

use nalgebra::DMatrix;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive, Zero};

use crate::error::StatespaceError;

/// Build an exact rational from an integer pair.
pub fn frac(numer: i64, denom: i64) -> BigRational {
    BigRational::new(BigInt::from(numer), BigInt::from(denom))
}

/// Approximate magnitude of a rational, for comparisons only.
///
/// Values too large for f64 collapse to infinity, which is fine for
/// pivot selection: they compare as maximal.
pub(crate) fn approx_abs(x: &BigRational) -> f64 {
    x.to_f64().map(f64::abs).unwrap_or(f64::INFINITY)
}

/// Dense row-major matrix of `BigRational`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FracMatrix {
    rows: usize,
    cols: usize,
    data: Vec<BigRational>,
}

impl FracMatrix {
    /// All-zero matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![BigRational::zero(); rows * cols],
        }
    }

    /// Identity matrix of the given side.
    pub fn identity(side: usize) -> Self {
        let mut m = Self::zeros(side, side);
        for i in 0..side {
            m.data[i * side + i] = BigRational::from_integer(BigInt::from(1));
        }
        m
    }

    /// Stack rows into a matrix. All rows must share one length; a ragged
    /// input is a caller bug and panics.
    pub fn from_rows(rows: Vec<Vec<BigRational>>) -> Self {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(num_rows * num_cols);
        for row in rows {
            assert_eq!(row.len(), num_cols, "ragged rows");
            data.extend(row);
        }
        Self {
            rows: num_rows,
            cols: num_cols,
            data,
        }
    }

    pub fn num_rows(&self) -> usize {
        self.rows
    }

    pub fn num_cols(&self) -> usize {
        self.cols
    }

    /// Entry at `(r, c)`.
    pub fn get(&self, r: usize, c: usize) -> &BigRational {
        &self.data[r * self.cols + c]
    }

    /// Replace the entry at `(r, c)`.
    pub fn set(&mut self, r: usize, c: usize, value: BigRational) {
        self.data[r * self.cols + c] = value;
    }

    /// Row `r` as a slice.
    pub fn row(&self, r: usize) -> &[BigRational] {
        &self.data[r * self.cols..(r + 1) * self.cols]
    }

    /// Swap two rows in place.
    pub(crate) fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for c in 0..self.cols {
            self.data.swap(a * self.cols + c, b * self.cols + c);
        }
    }

    /// True when every entry of row `r` is exactly zero.
    pub fn row_is_zero(&self, r: usize) -> bool {
        self.row(r).iter().all(|x| x.is_zero())
    }

    /// Number of rows with at least one nonzero entry.
    pub fn nonzero_rows(&self) -> usize {
        (0..self.rows).filter(|&r| !self.row_is_zero(r)).count()
    }

    /// Transposed copy.
    pub fn transpose(&self) -> Self {
        let mut out = Self::zeros(self.cols, self.rows);
        for r in 0..self.rows {
            for c in 0..self.cols {
                out.data[c * self.rows + r] = self.get(r, c).clone();
            }
        }
        out
    }

    /// Horizontal augmentation `[self | other]`.
    pub fn hstack(&self, other: &Self) -> Result<Self, StatespaceError> {
        if self.rows != other.rows {
            return Err(StatespaceError::DimensionMismatch {
                left_rows: self.rows,
                left_cols: self.cols,
                right_rows: other.rows,
                right_cols: other.cols,
            });
        }
        let mut data = Vec::with_capacity(self.rows * (self.cols + other.cols));
        for r in 0..self.rows {
            data.extend_from_slice(self.row(r));
            data.extend_from_slice(other.row(r));
        }
        Ok(Self {
            rows: self.rows,
            cols: self.cols + other.cols,
            data,
        })
    }

    /// Truncate or zero-pad rows so the matrix has exactly `rows` rows.
    pub fn resize_rows(&mut self, rows: usize) {
        self.data.resize(rows * self.cols, BigRational::zero());
        self.rows = rows;
    }

    /// Copy of the column block `[start, start + count)`.
    pub fn column_block(&self, start: usize, count: usize) -> Self {
        assert!(start + count <= self.cols, "column block out of range");
        let mut out = Self::zeros(self.rows, count);
        for r in 0..self.rows {
            for c in 0..count {
                out.data[r * count + c] = self.get(r, start + c).clone();
            }
        }
        out
    }

    /// Copy of the given rows, in the given order.
    pub fn select_rows(&self, indices: &[usize]) -> Self {
        let mut data = Vec::with_capacity(indices.len() * self.cols);
        for &r in indices {
            data.extend_from_slice(self.row(r));
        }
        Self {
            rows: indices.len(),
            cols: self.cols,
            data,
        }
    }

    /// Exact matrix product via direct triple-nested accumulation.
    ///
    /// Deliberately unoptimized; operands here are small and exactness is
    /// the point.
    pub fn matmul(&self, other: &Self) -> Result<Self, StatespaceError> {
        if self.cols != other.rows {
            return Err(StatespaceError::DimensionMismatch {
                left_rows: self.rows,
                left_cols: self.cols,
                right_rows: other.rows,
                right_cols: other.cols,
            });
        }
        let mut out = Self::zeros(self.rows, other.cols);
        for r in 0..self.rows {
            for c in 0..other.cols {
                let mut acc = BigRational::zero();
                for k in 0..self.cols {
                    acc += self.get(r, k) * other.get(k, c);
                }
                out.data[r * other.cols + c] = acc;
            }
        }
        Ok(out)
    }

    /// Right-folded product of one or more matrices. An empty slice is a
    /// caller bug and panics.
    pub fn product(matrices: &[&Self]) -> Result<Self, StatespaceError> {
        let (last, rest) = matrices.split_last().expect("empty product");
        let mut acc = (*last).clone();
        for m in rest.iter().rev() {
            acc = m.matmul(&acc)?;
        }
        Ok(acc)
    }

    /// Convert to floating point.
    ///
    /// This is the single accepted precision-loss point in the pipeline;
    /// everything upstream of it is exact.
    pub fn to_f64(&self) -> DMatrix<f64> {
        DMatrix::from_fn(self.rows, self.cols, |r, c| {
            let x = self.get(r, c);
            x.to_f64().unwrap_or_else(|| {
                if x.is_negative() {
                    f64::NEG_INFINITY
                } else {
                    f64::INFINITY
                }
            })
        })
    }
}
