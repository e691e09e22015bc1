//! Gauss-Jordan elimination over exact rationals.
//!
//! Produces the canonical reduced row echelon form in place: every nonzero
//! row has a leading 1 in a column that is zero in all other rows. The form
//! is used both to extract a subspace basis and to invert by augmentation.
//!
//! All accumulation and division is exact. The one deliberate exception is
//! pivot *selection*: the largest-magnitude candidate is chosen by an
//! approximate f64 comparison (ties to the lowest row index). Replacing it
//! with a full rational comparison would change pivot choice on degenerate
//! ties and, with it, historical output-group inclusion, so the approximate
//! comparison is load-bearing and must stay.

use num_traits::Zero;

use crate::matrix::{approx_abs, FracMatrix};

/// Reduce `x` to canonical reduced row echelon form, in place.
///
/// Callers that still need the original must copy beforehand.
pub fn eliminate(x: &mut FracMatrix) {
    let (num_r, num_c) = (x.num_rows(), x.num_cols());

    // forward phase: partial pivoting, zero below each pivot
    let (mut r, mut c) = (0, 0);
    while r < num_r && c < num_c {
        let mut pivot = r;
        let mut best = approx_abs(x.get(r, c));
        for i in (r + 1)..num_r {
            let mag = approx_abs(x.get(i, c));
            if mag > best {
                best = mag;
                pivot = i;
            }
        }
        if !x.get(pivot, c).is_zero() {
            x.swap_rows(pivot, r);
            let divisor = x.get(r, c).clone();
            for j in c..num_c {
                let v = x.get(r, j) / &divisor;
                x.set(r, j, v);
            }
            for i in (r + 1)..num_r {
                eliminate_row(x, i, r, c);
            }
            r += 1;
        }
        c += 1;
    }

    // backward phase: zero above each leading entry, last row first
    for r in (0..num_r).rev() {
        for c in 0..num_c {
            if !x.get(r, c).is_zero() {
                for i in (0..r).rev() {
                    eliminate_row(x, i, r, c);
                }
                break;
            }
        }
    }
}

/// `row[target] -= target[c] * row[pivot]`, from column `c` onward.
fn eliminate_row(x: &mut FracMatrix, target: usize, pivot: usize, c: usize) {
    let factor = x.get(target, c).clone();
    if factor.is_zero() {
        return;
    }
    for j in c..x.num_cols() {
        let v = x.get(target, j) - &factor * x.get(pivot, j);
        x.set(target, j, v);
    }
}

/// Rank of a matrix already in reduced row echelon form.
pub fn rref_rank(x: &FracMatrix) -> usize {
    x.nonzero_rows()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::frac;
    use num_bigint::BigInt;
    use num_traits::One;

    fn m(rows: &[&[(i64, i64)]]) -> FracMatrix {
        FracMatrix::from_rows(
            rows.iter()
                .map(|r| r.iter().map(|&(n, d)| frac(n, d)).collect())
                .collect(),
        )
    }

    /// Leading 1 per nonzero row, and that column zero everywhere else.
    fn assert_canonical(x: &FracMatrix) {
        for r in 0..x.num_rows() {
            if x.row_is_zero(r) {
                continue;
            }
            let lead = (0..x.num_cols())
                .find(|&c| !x.get(r, c).is_zero())
                .unwrap();
            assert!(x.get(r, lead).is_one(), "leading entry must be 1");
            for i in 0..x.num_rows() {
                if i != r {
                    assert!(
                        x.get(i, lead).is_zero(),
                        "pivot column {lead} must be zero in row {i}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_known_reduction() {
        let mut x = m(&[
            &[(1, 1), (2, 1), (3, 1)],
            &[(4, 1), (5, 1), (6, 1)],
            &[(7, 1), (8, 1), (9, 1)],
        ]);
        eliminate(&mut x);
        assert_canonical(&x);
        assert_eq!(rref_rank(&x), 2);
        // rref of this classic singular matrix is [[1,0,-1],[0,1,2],[0,0,0]]
        assert_eq!(*x.get(0, 2), frac(-1, 1));
        assert_eq!(*x.get(1, 2), frac(2, 1));
        assert!(x.row_is_zero(2));
    }

    #[test]
    fn test_idempotent() {
        let mut x = m(&[
            &[(1, 2), (1, 2), (0, 1)],
            &[(0, 1), (1, 3), (2, 3)],
            &[(1, 2), (5, 6), (2, 3)],
        ]);
        eliminate(&mut x);
        let once = x.clone();
        eliminate(&mut x);
        assert_eq!(x, once);
    }

    #[test]
    fn test_zero_column_skipped() {
        let mut x = m(&[&[(0, 1), (1, 1)], &[(0, 1), (2, 1)]]);
        eliminate(&mut x);
        assert_canonical(&x);
        assert_eq!(rref_rank(&x), 1);
        assert!(x.get(0, 0).is_zero());
        assert!(x.get(0, 1).is_one());
    }

    #[test]
    fn test_zero_matrix_untouched() {
        let mut x = FracMatrix::zeros(2, 3);
        eliminate(&mut x);
        assert_eq!(x, FracMatrix::zeros(2, 3));
    }

    #[test]
    fn test_partial_pivot_picks_largest_magnitude() {
        // |-4| beats |1|: row 1 must be swapped up and normalized first
        let mut x = m(&[&[(1, 1), (0, 1)], &[(-4, 1), (1, 1)]]);
        eliminate(&mut x);
        assert_canonical(&x);
        assert_eq!(rref_rank(&x), 2);
    }

    #[test]
    fn test_inversion_by_augmentation() {
        // [A | I] reduces to [I | A^-1]
        let a = m(&[&[(2, 1), (1, 1)], &[(1, 1), (1, 1)]]);
        let mut aug = a.hstack(&FracMatrix::identity(2)).unwrap();
        eliminate(&mut aug);
        let inv = aug.column_block(2, 2);
        let product = a.matmul(&inv).unwrap();
        assert_eq!(product, FracMatrix::identity(2));
    }

    #[test]
    fn test_exactness_no_drift() {
        // entries whose float images are inexact; the row sums survive exactly
        let mut x = m(&[&[(1, 3), (1, 3), (1, 3)], &[(1, 7), (2, 7), (4, 7)]]);
        eliminate(&mut x);
        assert_canonical(&x);
        for r in 0..x.num_rows() {
            for c in 0..x.num_cols() {
                let v = x.get(r, c);
                // every entry is a ratio of small integers, not a float artifact
                assert!(v.denom() <= &BigInt::from(21));
            }
        }
    }
}
