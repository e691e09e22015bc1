//! Data-source seam between the statespace core and geography/population data.
//!
//! The core never hard-codes a taxonomy. It consumes this narrow trait; the
//! concrete US implementation lives in `nowfuse-geo`, and tests supply small
//! synthetic worlds.

use num_rational::BigRational;

use crate::error::StatespaceError;

/// Hierarchical location taxonomy plus per-season population weights.
///
/// Identifiers are `&'static str` because taxonomies are fixed, immutable
/// tables known in advance. Ordering is significant everywhere: `atoms()`
/// fixes matrix column order, `groups()` fixes output-row order.
pub trait GeoSource {
    /// Every atomic (indivisible) location, in canonical order.
    fn atoms(&self) -> &[&'static str];

    /// Every known location at every hierarchy level, atoms included,
    /// in canonical order.
    fn groups(&self) -> &[&'static str];

    /// Membership of a group as atoms. An atom is a member of itself.
    fn members(&self, group: &str) -> Result<&[&'static str], StatespaceError>;

    /// Exact population weight of an atom in `[0, 1]` under the given season.
    ///
    /// `None` selects the most recent season. Out-of-range seasons clamp to
    /// the nearest available year; clamping is not an error and must stay
    /// that way for reproducibility of historical results.
    fn population_weight(
        &self,
        atom: &'static str,
        season: Option<i32>,
    ) -> Result<BigRational, StatespaceError>;
}
