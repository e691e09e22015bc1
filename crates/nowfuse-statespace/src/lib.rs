//! Exact-rational statespace determination for sensor fusion.
//!
//! Reported signals arrive at multiple, hierarchically overlapping
//! aggregation levels: atoms, and groups composed from them. This crate
//! estimates the shared latent statespace those reports determine and
//! builds two linear maps for the fusion kernel: `H` (statespace → inputs)
//! and `W` (statespace → determined outputs). Outputs the inputs cannot
//! pin down are excluded, never approximated.
//!
//! Rank decisions are fragile under floating point, so the whole pipeline
//! runs on `BigRational` and converts to `f64` only in the returned
//! matrices. Pivot *selection* inside elimination is the sole, deliberate
//! use of an approximate comparison (see [`eliminate`]).
//!
//! # Module structure
//! - `matrix`: dense exact-rational matrices and the exact multiply
//! - `eliminate`: Gauss-Jordan reduced row echelon form
//! - `weights`: population-weight rows and matrices
//! - `source`: the [`GeoSource`] trait supplying taxonomy and weights
//! - `statespace`: the determiner and its memoized query cache
//! - `error`: the fail-fast error taxonomy

pub mod eliminate;
pub mod error;
pub mod matrix;
pub mod source;
pub mod statespace;
pub mod weights;

pub use eliminate::eliminate;
pub use error::StatespaceError;
pub use matrix::{frac, FracMatrix};
pub use source::GeoSource;
pub use statespace::{Statespace, StatespaceCache};
pub use weights::{weight_matrix, weight_row};
