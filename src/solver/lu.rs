//! Dense LU factorization with partial pivoting.

use crate::error::{NodalError, Result};

use super::mna::MnaMatrix;

/// `P G = L U` for an assembled system, stored in place.
///
/// `L` has a unit diagonal and lives below the diagonal of `lu`; `U` is the
/// diagonal and above. `perm[k]` is the original row now at position `k`.
#[derive(Debug, Clone)]
pub struct LuFactors {
    size: usize,
    lu: Vec<f64>,
    perm: Vec<usize>,
}

impl LuFactors {
    /// Factor the coefficient matrix of `matrix`.
    ///
    /// A pivot counts as zero when its magnitude is at most
    /// `size * f64::EPSILON` times the largest entry of its column in the
    /// unfactored matrix. The threshold follows the scale of each column, so
    /// uniformly tiny or huge conductances are judged the same as unit ones.
    pub fn factor(matrix: &MnaMatrix) -> Result<Self> {
        let n = matrix.size();
        let mut lu = matrix.conductance().to_vec();
        let mut perm: Vec<usize> = (0..n).collect();
        if n == 0 {
            return Ok(Self { size: n, lu, perm });
        }

        let scales = column_scales(&lu, n);

        for k in 0..n {
            let (pivot_row, magnitude) = (k..n)
                .map(|row| (row, lu[row * n + k].abs()))
                .fold((k, f64::NEG_INFINITY), |best, candidate| {
                    if candidate.1 > best.1 {
                        candidate
                    } else {
                        best
                    }
                });

            let tolerance = n as f64 * f64::EPSILON * scales[k];
            if magnitude <= tolerance || !magnitude.is_finite() {
                log::debug!(
                    "column {}: largest pivot {:.3e} within tolerance {:.3e}",
                    k,
                    magnitude,
                    tolerance
                );
                return Err(NodalError::singular(format!(
                    "unknown {} is not determined by the equations",
                    k
                )));
            }

            if pivot_row != k {
                perm.swap(k, pivot_row);
                swap_rows(&mut lu, n, k, pivot_row);
            }

            let (done, below) = lu.split_at_mut((k + 1) * n);
            let pivot = &done[k * n..];
            for row in below.chunks_exact_mut(n) {
                let factor = row[k] / pivot[k];
                row[k] = factor;
                if factor == 0.0 {
                    continue;
                }
                for (x, &p) in row[k + 1..].iter_mut().zip(&pivot[k + 1..]) {
                    *x -= factor * p;
                }
            }
        }

        Ok(Self { size: n, lu, perm })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Solve `G x = rhs` with the stored factors.
    pub fn solve(&self, rhs: &[f64]) -> Result<Vec<f64>> {
        let n = self.size;
        if rhs.len() != n {
            return Err(NodalError::dimension_mismatch(n, rhs.len()));
        }

        let mut x: Vec<f64> = self.perm.iter().map(|&p| rhs[p]).collect();

        // L y = P rhs
        for i in 1..n {
            let l = &self.lu[i * n..i * n + i];
            let sum: f64 = l.iter().zip(&x[..i]).map(|(a, b)| a * b).sum();
            x[i] -= sum;
        }

        // U x = y
        for i in (0..n).rev() {
            let u = &self.lu[i * n..(i + 1) * n];
            let sum: f64 = u[i + 1..].iter().zip(&x[i + 1..]).map(|(a, b)| a * b).sum();
            x[i] = (x[i] - sum) / u[i];
        }

        if let Some(idx) = x.iter().position(|v| !v.is_finite()) {
            return Err(NodalError::singular(format!(
                "unknown {} overflowed during the solve",
                idx
            )));
        }

        Ok(x)
    }
}

fn column_scales(values: &[f64], n: usize) -> Vec<f64> {
    let mut scales = vec![0.0_f64; n];
    for row in values.chunks_exact(n) {
        for (scale, v) in scales.iter_mut().zip(row) {
            *scale = scale.max(v.abs());
        }
    }
    scales
}

/// Swap rows `a < b` of a row-major `n`-wide matrix.
fn swap_rows(values: &mut [f64], n: usize, a: usize, b: usize) {
    let (head, tail) = values.split_at_mut(b * n);
    head[a * n..(a + 1) * n].swap_with_slice(&mut tail[..n]);
}
