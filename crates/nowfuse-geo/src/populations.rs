//! Season-clamped lookup over the imputed population-weight tables.
//!
//! Weights are relative to the US total and keyed by season (the year
//! containing epiweek 40). Seasons outside the table range clamp to the
//! nearest boundary year; that clamping reproduces historical results and
//! must not be reinterpreted as an error. A location absent from a season's
//! table (territories before they began reporting) is a hard miss.

use num_bigint::BigInt;
use num_rational::BigRational;

use crate::tables::{SEASON_WEIGHTS, WEIGHT_SCALE};

/// Earliest season with imputed weights.
pub fn first_season() -> i32 {
    SEASON_WEIGHTS[0].0
}

/// Latest season with imputed weights.
pub fn last_season() -> i32 {
    SEASON_WEIGHTS[SEASON_WEIGHTS.len() - 1].0
}

/// Clamp a requested season into the table's range; `None` means latest.
pub fn clamp_season(season: Option<i32>) -> i32 {
    match season {
        Some(year) => year.clamp(first_season(), last_season()),
        None => last_season(),
    }
}

/// Exact population weight of `atom` under `season`, if tabulated.
///
/// The result is the scaled integer over [`WEIGHT_SCALE`], an exact value
/// in `[0, 1]`.
pub fn population_weight(atom: &str, season: Option<i32>) -> Option<BigRational> {
    let year = clamp_season(season);
    let (_, table) = SEASON_WEIGHTS.iter().find(|(y, _)| *y == year)?;
    let (_, scaled) = table
        .iter()
        .find(|(name, _)| *name == atom)?;
    Some(BigRational::new(
        BigInt::from(*scaled),
        BigInt::from(WEIGHT_SCALE),
    ))
}
