//! US geography for sensor-fusion statespace preparation.
//!
//! Supplies the concrete [`GeoSource`] for the statespace core: the FluView
//! location hierarchy (`locations`) and the imputed, season-keyed population
//! weights (`populations`, data in `tables`). Also maps epiweeks onto the
//! season years that key the weight table.

pub mod locations;
pub mod populations;
mod tables;

use num_rational::BigRational;
use nowfuse_epiweek::Epiweek;
use nowfuse_statespace::{GeoSource, StatespaceError};

/// The US taxonomy and population weights as a statespace data source.
///
/// Stateless; all data is static. Construct freely or share one instance.
#[derive(Debug, Clone, Copy, Default)]
pub struct UsGeo;

impl UsGeo {
    pub fn new() -> Self {
        Self
    }

    /// The season year keying the weight table for a given epiweek, or
    /// `None` during the offseason (weeks 21..=39).
    pub fn season_for(epiweek: Epiweek) -> Option<i32> {
        epiweek.season_year()
    }
}

impl GeoSource for UsGeo {
    fn atoms(&self) -> &[&'static str] {
        locations::ATOMS
    }

    fn groups(&self) -> &[&'static str] {
        locations::REGIONS.as_slice()
    }

    fn members(&self, group: &str) -> Result<&[&'static str], StatespaceError> {
        locations::members(group).ok_or_else(|| StatespaceError::unknown(group))
    }

    fn population_weight(
        &self,
        atom: &'static str,
        season: Option<i32>,
    ) -> Result<BigRational, StatespaceError> {
        populations::population_weight(atom, season).ok_or_else(|| {
            StatespaceError::UnknownLocation {
                location: atom.to_string(),
                season: Some(populations::clamp_season(season)),
            }
        })
    }
}
