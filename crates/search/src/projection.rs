//! Low-rank topic projection (latent semantic indexing)
//!
//! The document-term weight matrix `X` (documents × terms) is decomposed as
//! `X = U Σ Vᵀ`. The `k` right singular vectors with the largest singular
//! values become the topic components; any weight vector `w` projects to
//! `Vₖ w`, which is then scaled to unit length.
//!
//! # Determinism
//!
//! - Components are ordered by singular value, ties by position
//! - Each component is sign-fixed so its largest-magnitude entry is positive
//! - Components with a numerically zero singular value, and components beyond
//!   the rank of `X`, are zero rows, so output dimension is always exactly
//!   `topic_count`

use nalgebra::{DMatrix, DVector};
use quotesearch_core::{Error, Result};

/// Singular values at or below `RANK_TOLERANCE * σ_max` count as zero.
const RANK_TOLERANCE: f64 = 1e-10;

/// LAPACK-style iteration budget per singular value pair.
const SVD_ITERATIONS_FACTOR: usize = 6;

// ============================================================================
// ProjectionModel
// ============================================================================

/// Fitted topic projection
#[derive(Debug, Clone)]
pub struct ProjectionModel {
    /// topic_count × vocabulary component rows
    components: DMatrix<f64>,
    /// Singular value of each topic (0 for zero rows)
    singular_values: Vec<f64>,
    /// Share of total weight-matrix variance captured by each topic
    explained_variance: Vec<f64>,
    /// Number of non-zero components
    rank: usize,
}

impl ProjectionModel {
    /// Fit a `topic_count`-dimensional projection over a weight matrix.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if `topic_count` is zero
    /// - `ModelFit` if the matrix is empty or the decomposition fails
    pub fn fit(weights: &DMatrix<f64>, topic_count: usize) -> Result<Self> {
        if topic_count == 0 {
            return Err(Error::invalid_input("topic_count must be at least 1"));
        }
        let (n_docs, n_terms) = weights.shape();
        if n_docs == 0 || n_terms == 0 {
            return Err(Error::model_fit(format!(
                "weight matrix is empty ({} x {})",
                n_docs, n_terms
            )));
        }

        let min_dim = n_docs.min(n_terms);
        let max_niter = (SVD_ITERATIONS_FACTOR * min_dim * min_dim).max(100);
        let svd = weights
            .clone()
            .try_svd(false, true, f64::EPSILON, max_niter)
            .ok_or_else(|| Error::model_fit("singular value decomposition did not converge"))?;
        let v_t = svd
            .v_t
            .ok_or_else(|| Error::model_fit("decomposition returned no right singular vectors"))?;
        let sv = svd.singular_values;

        let mut order: Vec<usize> = (0..sv.len()).collect();
        order.sort_by(|&a, &b| sv[b].total_cmp(&sv[a]).then(a.cmp(&b)));
        let sigma_max = order.first().map(|&i| sv[i]).unwrap_or(0.0);
        let tolerance = sigma_max * RANK_TOLERANCE;

        let mut components = DMatrix::zeros(topic_count, n_terms);
        let mut singular_values = vec![0.0; topic_count];
        let mut rank = 0;
        for (topic, &src) in order.iter().take(topic_count).enumerate() {
            let sigma = sv[src];
            if sigma <= tolerance || sigma <= 0.0 {
                // sorted descending: everything after is zero too
                break;
            }
            let mut row = v_t.row(src).clone_owned();
            let pivot = largest_magnitude(row.iter().copied());
            if row[pivot] < 0.0 {
                row *= -1.0;
            }
            components.set_row(topic, &row);
            singular_values[topic] = sigma;
            rank += 1;
        }

        let projected = weights * components.transpose();
        let total: f64 = column_variances(weights).iter().sum();
        let explained_variance = if total > 0.0 {
            column_variances(&projected)
                .into_iter()
                .map(|v| v / total)
                .collect()
        } else {
            vec![0.0; topic_count]
        };

        Ok(ProjectionModel {
            components,
            singular_values,
            explained_variance,
            rank,
        })
    }

    /// Output dimension
    pub fn topic_count(&self) -> usize {
        self.components.nrows()
    }

    /// Vocabulary size this projection was fitted against
    pub fn input_dim(&self) -> usize {
        self.components.ncols()
    }

    /// Number of non-zero components
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Component rows (topic_count × vocabulary)
    pub fn components(&self) -> &DMatrix<f64> {
        &self.components
    }

    /// Singular value per topic
    pub fn singular_values(&self) -> &[f64] {
        &self.singular_values
    }

    /// Explained variance ratio per topic
    pub fn explained_variance_ratios(&self) -> &[f64] {
        &self.explained_variance
    }

    /// Total explained variance ratio
    pub fn explained_variance_ratio(&self) -> f64 {
        self.explained_variance.iter().sum()
    }

    /// Project a dense weight vector to a unit topic vector
    pub fn project(&self, weights: &DVector<f64>) -> Vec<f64> {
        let projected = &self.components * weights;
        unit_normalized(projected.iter().copied().collect())
    }

    /// Project sparse `(column, weight)` pairs to a unit topic vector
    pub fn project_sparse(&self, weights: &[(usize, f64)]) -> Vec<f64> {
        let mut out = vec![0.0; self.topic_count()];
        for (topic, slot) in out.iter_mut().enumerate() {
            *slot = weights
                .iter()
                .map(|&(col, w)| self.components[(topic, col)] * w)
                .sum();
        }
        unit_normalized(out)
    }

    /// Project every row of a weight matrix to unit topic vectors
    pub fn project_matrix(&self, weights: &DMatrix<f64>) -> Vec<Vec<f64>> {
        let projected = weights * self.components.transpose();
        projected
            .row_iter()
            .map(|row| unit_normalized(row.iter().copied().collect()))
            .collect()
    }
}

/// Scale to unit Euclidean length; the zero vector stays zero.
///
/// Zero entries always come out as `+0.0`.
pub fn unit_normalized(mut v: Vec<f64>) -> Vec<f64> {
    let norm = v.iter().map(|x| x * x).sum::<f64>().sqrt();
    let scale = if norm > 0.0 { norm } else { 1.0 };
    for x in &mut v {
        *x = *x / scale + 0.0;
    }
    v
}

/// Index of the first entry with the largest absolute value
fn largest_magnitude(values: impl Iterator<Item = f64>) -> usize {
    let mut best = (0, f64::NEG_INFINITY);
    for (i, v) in values.enumerate() {
        if v.abs() > best.1 {
            best = (i, v.abs());
        }
    }
    best.0
}

/// Population variance of each column
fn column_variances(m: &DMatrix<f64>) -> Vec<f64> {
    let n = m.nrows() as f64;
    if n == 0.0 {
        return vec![0.0; m.ncols()];
    }
    m.column_iter()
        .map(|col| {
            let mean = col.sum() / n;
            col.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n
        })
        .collect()
}
