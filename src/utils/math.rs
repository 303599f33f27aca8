//! Dense symmetric eigendecomposition.
//!
//! Cyclic Jacobi rotations over an `ndarray` matrix. Deterministic for a fixed
//! input: rotation order is fixed (row-major over the upper triangle) and
//! there is no randomized pivoting, so repeated calls produce bit-identical
//! factors.

use ndarray::Array2;

/// Upper bound on full Jacobi sweeps before giving up on further refinement.
/// Small symmetric matrices converge in well under ten sweeps.
const MAX_SWEEPS: usize = 64;

/// Relative off-diagonal threshold at which the matrix counts as diagonal.
const CONVERGENCE_EPS: f64 = 1e-12;

/// Eigendecomposition of a symmetric matrix, eigenvalues descending.
///
/// Returns `(eigenvalues, eigenvectors)` where column `i` of the eigenvector
/// matrix corresponds to `eigenvalues[i]`. Only the symmetric part of the
/// input is meaningful; callers are expected to pass Gram matrices.
pub fn symmetric_eigen(matrix: &Array2<f64>) -> (Vec<f64>, Array2<f64>) {
    let n = matrix.nrows();
    debug_assert_eq!(n, matrix.ncols(), "symmetric_eigen needs a square matrix");

    let mut a = matrix.clone();
    let mut v = Array2::<f64>::eye(n);
    if n < 2 {
        let eigvals = (0..n).map(|i| a[[i, i]]).collect();
        return (eigvals, v);
    }

    let scale = frobenius_norm(&a).max(f64::MIN_POSITIVE);
    let threshold = CONVERGENCE_EPS * scale;

    for _ in 0..MAX_SWEEPS {
        if off_diagonal_norm(&a) <= threshold {
            break;
        }
        for p in 0..n - 1 {
            for q in p + 1..n {
                let apq = a[[p, q]];
                if apq.abs() <= threshold * 1e-3 {
                    continue;
                }
                let (c, s) = rotation(a[[p, p]], a[[q, q]], apq);
                apply_rotation(&mut a, &mut v, p, q, c, s);
            }
        }
    }

    sort_descending(&a, v)
}

/// Frobenius norm of the whole matrix.
pub fn frobenius_norm(matrix: &Array2<f64>) -> f64 {
    matrix.iter().map(|x| x * x).sum::<f64>().sqrt()
}

fn off_diagonal_norm(a: &Array2<f64>) -> f64 {
    let n = a.nrows();
    let mut sum = 0.0;
    for p in 0..n {
        for q in 0..n {
            if p != q {
                sum += a[[p, q]] * a[[p, q]];
            }
        }
    }
    sum.sqrt()
}

/// Jacobi rotation (c, s) annihilating the (p, q) entry.
fn rotation(app: f64, aqq: f64, apq: f64) -> (f64, f64) {
    let phi = (aqq - app) / (2.0 * apq);
    // smaller-magnitude root of t^2 + 2*phi*t - 1 = 0, numerically stable form
    let t = if phi >= 0.0 {
        1.0 / (phi + (phi * phi + 1.0).sqrt())
    } else {
        1.0 / (phi - (phi * phi + 1.0).sqrt())
    };
    let c = 1.0 / (t * t + 1.0).sqrt();
    (c, t * c)
}

/// A <- G^T A G and V <- V G for the plane rotation G in the (p, q) plane.
fn apply_rotation(a: &mut Array2<f64>, v: &mut Array2<f64>, p: usize, q: usize, c: f64, s: f64) {
    let n = a.nrows();
    for r in 0..n {
        let arp = a[[r, p]];
        let arq = a[[r, q]];
        a[[r, p]] = c * arp - s * arq;
        a[[r, q]] = s * arp + c * arq;
    }
    for r in 0..n {
        let apr = a[[p, r]];
        let aqr = a[[q, r]];
        a[[p, r]] = c * apr - s * aqr;
        a[[q, r]] = s * apr + c * aqr;
    }
    for r in 0..n {
        let vrp = v[[r, p]];
        let vrq = v[[r, q]];
        v[[r, p]] = c * vrp - s * vrq;
        v[[r, q]] = s * vrp + c * vrq;
    }
}

fn sort_descending(a: &Array2<f64>, v: Array2<f64>) -> (Vec<f64>, Array2<f64>) {
    let n = a.nrows();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&i, &j| a[[j, j]].total_cmp(&a[[i, i]]));

    let eigvals: Vec<f64> = order.iter().map(|&i| a[[i, i]]).collect();
    let mut vectors = Array2::<f64>::zeros((n, n));
    for (dst, &src) in order.iter().enumerate() {
        for r in 0..n {
            vectors[[r, dst]] = v[[r, src]];
        }
    }
    (eigvals, vectors)
}
