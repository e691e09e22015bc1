//! Population-weight rows and matrices.
//!
//! A weight row answers: of the population inside this group, what exact
//! fraction sits in each atom? Atoms outside the group get exact zero, and
//! the row sums to exactly 1 because entries are `weight / total` in
//! rational arithmetic, not renormalized floats.

use num_rational::BigRational;
use num_traits::Zero;

use crate::error::StatespaceError;
use crate::matrix::FracMatrix;
use crate::source::GeoSource;

/// Fractional population share of each atom within `group`.
///
/// `atoms` is the ordered column basis; atoms not in the group's membership
/// contribute zero. Fails with [`StatespaceError::DegenerateGroup`] when no
/// atom carries weight (mis-specified membership, or a season with no data
/// for any constituent).
pub fn weight_row<S: GeoSource>(
    source: &S,
    group: &'static str,
    season: Option<i32>,
    atoms: &[&'static str],
) -> Result<Vec<BigRational>, StatespaceError> {
    let members = source.members(group)?;

    let mut total = BigRational::zero();
    let mut populations = Vec::with_capacity(atoms.len());
    for &atom in atoms {
        let population = if members.contains(&atom) {
            source.population_weight(atom, season)?
        } else {
            BigRational::zero()
        };
        total += &population;
        populations.push(population);
    }

    if total.is_zero() {
        return Err(StatespaceError::DegenerateGroup(group));
    }

    Ok(populations.into_iter().map(|p| p / &total).collect())
}

/// Stack weight rows for `groups` into a (groups × atoms) matrix.
///
/// Rows preserve group order, columns preserve atom order. Pure function of
/// its inputs.
pub fn weight_matrix<S: GeoSource>(
    source: &S,
    groups: &[&'static str],
    season: Option<i32>,
    atoms: &[&'static str],
) -> Result<FracMatrix, StatespaceError> {
    let mut rows = Vec::with_capacity(groups.len());
    for &group in groups {
        rows.push(weight_row(source, group, season, atoms)?);
    }
    Ok(FracMatrix::from_rows(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::frac;
    use num_traits::One;

    /// Three atoms with weights 1/6, 2/6, 3/6 and a couple of groupings.
    struct TinyWorld;

    impl GeoSource for TinyWorld {
        fn atoms(&self) -> &[&'static str] {
            &["a", "b", "c"]
        }

        fn groups(&self) -> &[&'static str] {
            &["all", "ab", "a", "b", "c"]
        }

        fn members(&self, group: &str) -> Result<&[&'static str], StatespaceError> {
            match group {
                "all" => Ok(&["a", "b", "c"]),
                "ab" => Ok(&["a", "b"]),
                "a" => Ok(&["a"]),
                "b" => Ok(&["b"]),
                "c" => Ok(&["c"]),
                other => Err(StatespaceError::unknown(other)),
            }
        }

        fn population_weight(
            &self,
            atom: &'static str,
            _season: Option<i32>,
        ) -> Result<BigRational, StatespaceError> {
            match atom {
                "a" => Ok(frac(1, 6)),
                "b" => Ok(frac(2, 6)),
                "c" => Ok(frac(3, 6)),
                other => Err(StatespaceError::unknown(other)),
            }
        }
    }

    #[test]
    fn test_row_sums_to_exactly_one() {
        let atoms = ["a", "b", "c"];
        for group in ["all", "ab", "a"] {
            let row = weight_row(&TinyWorld, group, None, &atoms).unwrap();
            let sum: BigRational = row.iter().sum();
            assert!(sum.is_one(), "row for {group} must sum to 1, got {sum}");
        }
    }

    #[test]
    fn test_nonmember_atoms_are_exact_zero() {
        let row = weight_row(&TinyWorld, "ab", None, &["a", "b", "c"]).unwrap();
        assert_eq!(row[0], frac(1, 3));
        assert_eq!(row[1], frac(2, 3));
        assert!(row[2].is_zero());
    }

    #[test]
    fn test_degenerate_group() {
        // column basis excludes every member of "ab"
        let err = weight_row(&TinyWorld, "ab", None, &["c"]).unwrap_err();
        assert_eq!(err, StatespaceError::DegenerateGroup("ab"));
    }

    #[test]
    fn test_unknown_group() {
        let err = weight_row(&TinyWorld, "nowhere", None, &["a"]).unwrap_err();
        assert!(matches!(err, StatespaceError::UnknownLocation { .. }));
    }

    #[test]
    fn test_matrix_preserves_orders() {
        let m = weight_matrix(&TinyWorld, &["ab", "all"], None, &["a", "b", "c"]).unwrap();
        assert_eq!((m.num_rows(), m.num_cols()), (2, 3));
        assert_eq!(*m.get(0, 0), frac(1, 3)); // "ab" first
        assert_eq!(*m.get(1, 2), frac(1, 2)); // "all" second, atom order kept
    }
}
