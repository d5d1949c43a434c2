//! Dense direct solver
//!
//! LU factorisation with partial pivoting. A system is treated as singular
//! when the largest available pivot in a column is not larger than
//! `tolerance * max|A|`; a tolerance of zero only rejects exactly zero pivots.
use crate::types::{DenseMatrix, DenseVector, Error, Result};
use log::debug;
use rlst::{rlst_dynamic_array1, rlst_dynamic_array2, RawAccess, RawAccessMut, Shape};

/// Default relative pivot tolerance
pub const DEFAULT_SINGULAR_TOLERANCE: f64 = 1e-12;

/// LU factorisation of a square matrix
///
/// L is unit lower triangular and stored below the diagonal, U on and above
/// it. Row `k` was swapped with row `pivots[k]` at step `k`.
pub struct LuFactorisation {
    lu: DenseMatrix,
    pivots: Vec<usize>,
    n: usize,
}

impl LuFactorisation {
    /// Factorise `matrix`
    pub fn new(matrix: &DenseMatrix, tolerance: f64) -> Result<Self> {
        let [n, ncols] = matrix.shape();
        if n != ncols {
            return Err(Error::DimensionMismatch {
                expected: n,
                got: ncols,
            });
        }
        if n == 0 {
            return Err(Error::EmptyMesh);
        }
        if let Some(k) = matrix.data().iter().position(|a| !a.is_finite()) {
            return Err(Error::NonFiniteSystem {
                row: k % n,
                col: k / n,
            });
        }

        let mut lu = rlst_dynamic_array2!(f64, [n, n]);
        lu.data_mut().copy_from_slice(matrix.data());
        let a = lu.data_mut();
        let scale = a.iter().fold(0.0_f64, |m, v| m.max(v.abs()));
        let threshold = tolerance * scale;
        let mut pivots = Vec::with_capacity(n);

        for k in 0..n {
            let (p, max_val) = (k..n)
                .map(|i| (i, a[i + n * k].abs()))
                .fold((k, -1.0), |best, c| if c.1 > best.1 { c } else { best });
            if max_val <= threshold || max_val == 0.0 {
                debug!(
                    "Pivot {} has magnitude {:e} (threshold {:e})",
                    k, max_val, threshold
                );
                return Err(Error::SingularMatrix { pivot: k });
            }
            if p != k {
                for j in 0..n {
                    a.swap(k + n * j, p + n * j);
                }
            }
            pivots.push(p);

            let pivot = a[k + n * k];
            for i in k + 1..n {
                a[i + n * k] /= pivot;
            }
            for j in k + 1..n {
                let u_kj = a[k + n * j];
                if u_kj != 0.0 {
                    for i in k + 1..n {
                        a[i + n * j] -= a[i + n * k] * u_kj;
                    }
                }
            }
        }

        Ok(Self { lu, pivots, n })
    }

    /// Dimension of the factorised matrix
    pub fn dim(&self) -> usize {
        self.n
    }

    /// Determinant of the factorised matrix
    pub fn determinant(&self) -> f64 {
        let a = self.lu.data();
        let swaps = self
            .pivots
            .iter()
            .enumerate()
            .filter(|(k, p)| *k != **p)
            .count();
        let det = (0..self.n).map(|k| a[k + self.n * k]).product::<f64>();
        if swaps % 2 == 0 {
            det
        } else {
            -det
        }
    }

    /// Solve `A x = rhs`
    pub fn solve(&self, rhs: &DenseVector) -> Result<DenseVector> {
        let n = self.n;
        let len = rhs.shape()[0];
        if len != n {
            return Err(Error::DimensionMismatch {
                expected: n,
                got: len,
            });
        }
        if let Some(k) = rhs.data().iter().position(|b| !b.is_finite()) {
            return Err(Error::NonFiniteRhs { row: k });
        }

        let a = self.lu.data();
        let mut solution = rlst_dynamic_array1!(f64, [n]);
        let x = solution.data_mut();
        x.copy_from_slice(rhs.data());

        for (k, p) in self.pivots.iter().enumerate() {
            x.swap(k, *p);
        }
        // Forward substitution with the unit lower triangle
        for j in 0..n {
            let x_j = x[j];
            for i in j + 1..n {
                x[i] -= a[i + n * j] * x_j;
            }
        }
        // Back substitution with the upper triangle
        for j in (0..n).rev() {
            x[j] /= a[j + n * j];
            let x_j = x[j];
            for i in 0..j {
                x[i] -= a[i + n * j] * x_j;
            }
        }

        Ok(solution)
    }
}

/// Solve `matrix * x = rhs`
pub fn solve(matrix: &DenseMatrix, rhs: &DenseVector, tolerance: f64) -> Result<DenseVector> {
    LuFactorisation::new(matrix, tolerance)?.solve(rhs)
}
