//! Error taxonomy for statespace preparation.
//!
//! Every failure here indicates a data or configuration defect upstream.
//! Computations are deterministic and pure, so nothing is retried and no
//! partial results are returned; errors propagate to the caller unmodified.

/// Errors raised while preparing sensor-fusion statespace.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StatespaceError {
    /// A group resolved to zero total population weight, e.g. mis-specified
    /// membership or a season with no data for any constituent.
    #[error("location has no constituent population: {0}")]
    DegenerateGroup(&'static str),

    /// Input locations and excluded atoms intersect.
    #[error("input locations overlap excluded atoms: {0:?}")]
    Overlap(Vec<&'static str>),

    /// Matrix multiply operands are incompatible. Unreachable given correct
    /// atom/group alignment; fatal when it fires.
    #[error("matrix dimensions do not match: {left_rows}x{left_cols} * {right_rows}x{right_cols}")]
    DimensionMismatch {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },

    /// A location identifier is not present in the taxonomy, or an atom has
    /// no population weight in the requested season's table.
    #[error("unknown location: {location} (season {season:?})")]
    UnknownLocation {
        location: String,
        season: Option<i32>,
    },
}

impl StatespaceError {
    /// Shorthand for a taxonomy miss with no season involved.
    pub fn unknown(location: &str) -> Self {
        Self::UnknownLocation {
            location: location.to_string(),
            season: None,
        }
    }
}
