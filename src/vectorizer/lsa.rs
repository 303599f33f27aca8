//! Latent semantic reduction via truncated SVD.
//!
//! The decomposition is behind the [`TruncatedSvd`] trait so any linear
//! algebra implementation can back it; the shipped [`GramSvd`] backend
//! eigendecomposes the document-side Gram matrix `A * A^T` with Jacobi
//! rotations and projects documents as `U_k * S_k` (the same product a
//! truncated-SVD `fit_transform` yields).
//!
//! Sign convention: singular vectors are valid in either direction, so each
//! retained direction is flipped to make its largest-magnitude document
//! coefficient non-negative. Output is therefore deterministic across runs,
//! but callers comparing against another library must account for the flip.

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::error::{Result, VectorizerError};
use crate::utils::math::symmetric_eigen;

/// Result of projecting the TF-IDF matrix onto its top singular directions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LsaProjection {
    /// Document projection, shape (doc_count, n_components).
    pub projection: Array2<f64>,
    /// Retained singular values, descending.
    pub singular_values: Vec<f64>,
    /// Fraction of total variance (squared Frobenius norm) captured.
    pub variance_explained: f64,
}

/// Truncated SVD capability: dense matrix + rank in, factors out.
pub trait TruncatedSvd {
    /// Decompose `matrix` keeping the top `n_components` singular directions.
    ///
    /// Callers must validate `n_components` beforehand; see [`reduce`].
    fn decompose(&self, matrix: &Array2<f64>, n_components: usize) -> LsaProjection;
}

/// Gram-matrix backend: eigendecomposition of `A * A^T`.
///
/// Works on the document side, so cost scales with `doc_count^2` rather than
/// `vocab_size^2`; corpora here are small and documents are the short axis.
#[derive(Debug, Default)]
pub struct GramSvd;

impl TruncatedSvd for GramSvd {
    fn decompose(&self, matrix: &Array2<f64>, n_components: usize) -> LsaProjection {
        let doc_count = matrix.nrows();
        let gram = matrix.dot(&matrix.t());
        let (eigvals, eigvecs) = symmetric_eigen(&gram);

        // trace of the Gram matrix = squared Frobenius norm of A;
        // tiny negative eigenvalues are rounding noise
        let total_variance: f64 = eigvals.iter().map(|&l| l.max(0.0)).sum();

        let mut projection = Array2::<f64>::zeros((doc_count, n_components));
        let mut singular_values = Vec::with_capacity(n_components);
        let mut retained = 0.0;
        for i in 0..n_components {
            let lambda = eigvals[i].max(0.0);
            retained += lambda;
            let sigma = lambda.sqrt();
            singular_values.push(sigma);

            let column = eigvecs.column(i);
            let flip = sign_of_largest(column.iter().copied());
            for r in 0..doc_count {
                projection[[r, i]] = flip * column[r] * sigma;
            }
        }

        let variance_explained = if total_variance > 0.0 {
            retained / total_variance
        } else {
            0.0
        };
        LsaProjection {
            projection,
            singular_values,
            variance_explained,
        }
    }
}

/// Validated reduction of a TF-IDF matrix.
///
/// `n_components` must satisfy `1 <= n_components < min(doc_count, vocab_size)`;
/// anything else is rejected before touching the backend.
pub fn reduce<S: TruncatedSvd>(
    matrix: &Array2<f64>,
    n_components: usize,
    backend: &S,
) -> Result<LsaProjection> {
    let limit = matrix.nrows().min(matrix.ncols());
    if n_components == 0 || n_components >= limit {
        return Err(VectorizerError::InvalidComponents {
            requested: n_components,
            limit,
        });
    }
    Ok(backend.decompose(matrix, n_components))
}

/// +1 or -1 so that the largest-magnitude entry ends up non-negative.
fn sign_of_largest<I: Iterator<Item = f64>>(values: I) -> f64 {
    let mut largest = 0.0f64;
    for v in values {
        if v.abs() > largest.abs() {
            largest = v;
        }
    }
    if largest < 0.0 {
        -1.0
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn assert_close(a: f64, b: f64, eps: f64) {
        assert!((a - b).abs() <= eps, "{a} != {b} (eps {eps})");
    }

    #[test]
    fn rank_one_matrix_is_fully_captured_by_one_component() {
        let m = array![[3.0, 0.0, 0.0], [0.0, 0.0, 0.0]];
        let lsa = reduce(&m, 1, &GramSvd).unwrap();
        assert_eq!(lsa.projection.shape(), &[2, 1]);
        assert_close(lsa.singular_values[0], 3.0, 1e-9);
        assert_close(lsa.projection[[0, 0]], 3.0, 1e-9);
        assert_close(lsa.projection[[1, 0]], 0.0, 1e-9);
        assert_close(lsa.variance_explained, 1.0, 1e-9);
    }

    #[test]
    fn variance_split_of_a_diagonal_matrix() {
        let m = array![
            [2.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0]
        ];
        // squared Frobenius norm is 4 + 1 = 5; k=1 keeps 4/5 of it
        let first = reduce(&m, 1, &GramSvd).unwrap();
        assert_close(first.singular_values[0], 2.0, 1e-9);
        assert_close(first.variance_explained, 0.8, 1e-9);

        // k=2 retains the whole nonzero spectrum
        let both = reduce(&m, 2, &GramSvd).unwrap();
        assert_close(both.singular_values[1], 1.0, 1e-9);
        assert_close(both.variance_explained, 1.0, 1e-9);
    }

    #[test]
    fn zero_components_is_rejected() {
        let m = array![[1.0, 0.0], [0.0, 1.0]];
        let err = reduce(&m, 0, &GramSvd).unwrap_err();
        assert!(matches!(
            err,
            crate::error::VectorizerError::InvalidComponents { requested: 0, limit: 2 }
        ));
    }

    #[test]
    fn components_at_or_above_min_dimension_are_rejected() {
        let m = array![[1.0, 0.0, 0.5], [0.0, 1.0, 0.5]];
        assert!(reduce(&m, 2, &GramSvd).is_err());
        assert!(reduce(&m, 5, &GramSvd).is_err());
        assert!(reduce(&m, 1, &GramSvd).is_ok());
    }

    #[test]
    fn decomposition_is_deterministic() {
        let m = array![[0.4, 0.1, 0.0], [0.2, 0.0, 0.3], [0.0, 0.5, 0.1]];
        let a = reduce(&m, 2, &GramSvd).unwrap();
        let b = reduce(&m, 2, &GramSvd).unwrap();
        assert_eq!(a.projection, b.projection);
        assert_eq!(a.singular_values, b.singular_values);
    }

    #[test]
    fn projection_preserves_pairwise_geometry() {
        // With full rank retained (k = n-1 here covers the nonzero spectrum),
        // row norms of U_k * S_k match the original row norms.
        let m = array![[1.0, 2.0, 0.0], [2.0, 1.0, 0.0], [0.0, 0.0, 0.0]];
        let lsa = reduce(&m, 2, &GramSvd).unwrap();
        for r in 0..3 {
            let orig: f64 = m.row(r).iter().map(|v| v * v).sum::<f64>().sqrt();
            let proj: f64 = lsa.projection.row(r).iter().map(|v| v * v).sum::<f64>().sqrt();
            assert_close(orig, proj, 1e-8);
        }
    }
}
