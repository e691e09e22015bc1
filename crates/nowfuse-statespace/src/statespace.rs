//! Statespace determination for sensor fusion.
//!
//! Given the locations with sensor readings (inputs) and the full taxonomy
//! (outputs), find the minimal latent basis spanned by the inputs and build
//! the two maps used by the fusion kernel:
//!
//! - `H` maps latent statespace to every input location, exactly;
//! - `W` maps the same statespace to every *determined* output location.
//!
//! Outputs that would need a contribution from outside the spanned subspace
//! are excluded rather than approximated. Results are cached per query shape
//! since the same (inputs, season, exclusions) triple recurs across many
//! nowcast weeks.

use std::collections::HashMap;
use std::sync::Arc;

use nalgebra::DMatrix;
use parking_lot::Mutex;
use serde::Serialize;
use tracing::{debug, trace};

use crate::eliminate::{eliminate, rref_rank};
use crate::error::StatespaceError;
use crate::matrix::FracMatrix;
use crate::source::GeoSource;
use crate::weights::weight_matrix;

/// A prepared statespace: the H/W maps plus the output locations that
/// survived determination, in canonical order.
///
/// Serializable so the orchestration layer can persist prepared queries;
/// identifiers are static taxonomy strings, so only serialization (not
/// deserialization) is offered here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statespace {
    /// Latent statespace → input locations (inputs × rank).
    pub h: DMatrix<f64>,
    /// Latent statespace → determined output locations (outputs × rank).
    pub w: DMatrix<f64>,
    /// Output locations corresponding to the rows of `w`.
    pub outputs: Vec<&'static str>,
}

/// Cache key: query parameters, order-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct QueryKey {
    inputs: Vec<&'static str>,
    season: Option<i32>,
    exclude: Vec<&'static str>,
}

/// Memoized statespace determination.
///
/// Construct once per process and share by reference; there is no hidden
/// global state. The cache is append-only: entries are pure functions of
/// their key and are never invalidated. Concurrent callers racing on the
/// same key may both compute; the duplicate insert is idempotent.
#[derive(Debug, Default)]
pub struct StatespaceCache {
    entries: Mutex<HashMap<QueryKey, Arc<Statespace>>>,
}

impl StatespaceCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct query shapes prepared so far.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Prepare (or fetch) the statespace for one query shape.
    ///
    /// `inputs` are the locations with sensor readings. `season` selects the
    /// population-weight year (`None` = most recent). `exclude` names atoms
    /// known to be absent from reported aggregates (retrospective use);
    /// it must be disjoint from `inputs`.
    pub fn determine<S: GeoSource>(
        &self,
        source: &S,
        inputs: &[&'static str],
        season: Option<i32>,
        exclude: &[&'static str],
    ) -> Result<Arc<Statespace>, StatespaceError> {
        let overlap: Vec<&'static str> = inputs
            .iter()
            .filter(|loc| exclude.contains(loc))
            .copied()
            .collect();
        if !overlap.is_empty() {
            return Err(StatespaceError::Overlap(overlap));
        }

        let key = QueryKey {
            inputs: inputs.to_vec(),
            season,
            exclude: exclude.to_vec(),
        };
        if let Some(hit) = self.entries.lock().get(&key) {
            trace!(inputs = inputs.len(), ?season, "statespace cache hit");
            return Ok(Arc::clone(hit));
        }

        let prepared = Arc::new(prepare(source, inputs, season, exclude)?);
        self.entries
            .lock()
            .entry(key)
            .or_insert_with(|| Arc::clone(&prepared));
        Ok(prepared)
    }
}

/// Uncached determination: build H0/W0 and reduce to the minimal basis.
fn prepare<S: GeoSource>(
    source: &S,
    inputs: &[&'static str],
    season: Option<i32>,
    exclude: &[&'static str],
) -> Result<Statespace, StatespaceError> {
    // canonical orders, minus excluded locations
    let atoms: Vec<&'static str> = source
        .atoms()
        .iter()
        .copied()
        .filter(|a| !exclude.contains(a))
        .collect();
    let all_groups: Vec<&'static str> = source
        .groups()
        .iter()
        .copied()
        .filter(|g| !exclude.contains(g))
        .collect();

    let h0 = weight_matrix(source, inputs, season, &atoms)?;
    let w0 = weight_matrix(source, &all_groups, season, &atoms)?;

    // fully-observed case: inputs already span the atomic basis, no
    // reduction needed
    if atoms.iter().all(|a| inputs.contains(a)) {
        debug!(
            inputs = inputs.len(),
            atoms = atoms.len(),
            "statespace fully observed, skipping reduction"
        );
        return Ok(Statespace {
            h: h0.to_f64(),
            w: w0.to_f64(),
            outputs: all_groups,
        });
    }

    let (h, w, kept_rows) = determine_maps(&h0, &w0)?;
    let outputs: Vec<&'static str> = kept_rows.iter().map(|&i| all_groups[i]).collect();
    debug!(
        inputs = inputs.len(),
        atoms = atoms.len(),
        rank = h.num_cols(),
        outputs = outputs.len(),
        dropped = all_groups.len() - outputs.len(),
        "statespace determined"
    );

    // fractions become floats here and nowhere earlier
    Ok(Statespace {
        h: h.to_f64(),
        w: w.to_f64(),
        outputs,
    })
}

/// Core reduction: from raw maps `H0` (inputs × atoms) and `W0`
/// (outputs × atoms), produce `H`, `W` over the minimal latent basis and
/// the indices of the W0 rows that are fully determined.
fn determine_maps(
    h0: &FracMatrix,
    w0: &FracMatrix,
) -> Result<(FracMatrix, FracMatrix, Vec<usize>), StatespaceError> {
    // basis for the subspace of full statespace spanned by the inputs
    let mut basis = h0.clone();
    eliminate(&mut basis);

    let size = basis.num_cols();
    let rank = rref_rank(&basis);

    // square basis: zero rows below the basis vectors
    basis.resize_rows(size);

    // B may be rank-deficient, so invert by eliminating [Bᵗ | I]. The right
    // block of the result, transposed, expresses each unit vector in basis
    // coordinates: "actual" coefficients first, then coefficients on the
    // unreachable complement ("pseudo" basis vectors).
    let augmented = basis.transpose().hstack(&FracMatrix::identity(size))?;
    let mut reduced = augmented;
    eliminate(&mut reduced);
    let bi = reduced.column_block(size, size).transpose();

    let bi_actual = bi.column_block(0, rank);
    let bi_pseudo = bi.column_block(rank, size - rank);

    // every input lies in the span of the basis
    let h = h0.matmul(&bi_actual)?;

    // outputs must not depend on the unreachable complement
    let w_actual = w0.matmul(&bi_actual)?;
    let w_pseudo = w0.matmul(&bi_pseudo)?;
    let kept: Vec<usize> = (0..w_pseudo.num_rows())
        .filter(|&r| w_pseudo.row_is_zero(r))
        .collect();
    let w = w_actual.select_rows(&kept);

    Ok((h, w, kept))
}
