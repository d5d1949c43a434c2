//! Dense assembly of the panel linear system
use crate::assembly::kernel::SourcePanelKernel;
use crate::geometry::Panel;
use crate::traits::InfluenceKernel;
use crate::types::{DenseMatrix, DenseVector, Error, Result};
use rayon::prelude::*;
use rlst::{rlst_dynamic_array1, rlst_dynamic_array2, RawAccessMut, Shape};

/// Assembler for the dense influence matrix and right-hand side
///
/// Each matrix column and each right-hand side entry is computed by a single
/// task with a fixed summation order, so parallel and serial assembly give
/// bitwise identical results.
#[derive(Debug, Clone)]
pub struct PanelAssembler<K: InfluenceKernel> {
    kernel: K,
    parallel: bool,
}

impl PanelAssembler<SourcePanelKernel> {
    /// Create an assembler for constant-strength source panels
    pub fn new_source() -> Self {
        Self::new(SourcePanelKernel)
    }
}

impl<K: InfluenceKernel> PanelAssembler<K> {
    /// Create an assembler for a kernel
    pub fn new(kernel: K) -> Self {
        Self {
            kernel,
            parallel: true,
        }
    }

    /// Use rayon for assembly
    pub fn set_parallel(&mut self, parallel: bool) {
        self.parallel = parallel;
    }

    /// Is assembly run in parallel?
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// The kernel
    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    /// Assemble the influence matrix
    pub fn assemble_matrix(&self, panels: &[Panel]) -> DenseMatrix {
        let n = panels.len();
        let mut matrix = rlst_dynamic_array2!(f64, [n, n]);
        self.fill_matrix(matrix.data_mut(), panels);
        matrix
    }

    /// Assemble the influence matrix into an existing array
    pub fn assemble_matrix_into_dense(
        &self,
        output: &mut DenseMatrix,
        panels: &[Panel],
    ) -> Result<()> {
        let n = panels.len();
        let shape = output.shape();
        if shape[0] != n || shape[1] != n {
            return Err(Error::DimensionMismatch {
                expected: n,
                got: if shape[0] != n { shape[0] } else { shape[1] },
            });
        }
        self.fill_matrix(output.data_mut(), panels);
        Ok(())
    }

    /// Assemble the right-hand side
    pub fn assemble_rhs(&self, panels: &[Panel]) -> DenseVector {
        let mut rhs = rlst_dynamic_array1!(f64, [panels.len()]);
        self.fill_rhs(rhs.data_mut(), panels);
        rhs
    }

    /// Assemble the right-hand side into an existing array
    pub fn assemble_rhs_into_dense(
        &self,
        output: &mut DenseVector,
        panels: &[Panel],
    ) -> Result<()> {
        let len = output.shape()[0];
        if len != panels.len() {
            return Err(Error::DimensionMismatch {
                expected: panels.len(),
                got: len,
            });
        }
        self.fill_rhs(output.data_mut(), panels);
        Ok(())
    }

    /// Fill column-major matrix data
    fn fill_matrix(&self, data: &mut [f64], panels: &[Panel]) {
        let n = panels.len();
        if n == 0 {
            return;
        }
        let fill_column = |(j, column): (usize, &mut [f64])| {
            for (i, (entry, source)) in column.iter_mut().zip(panels).enumerate() {
                *entry = if i == j {
                    self.kernel.self_influence()
                } else {
                    self.kernel.matrix_coefficient(source, &panels[j])
                };
            }
        };
        if self.parallel {
            data.par_chunks_mut(n).enumerate().for_each(fill_column);
        } else {
            data.chunks_mut(n).enumerate().for_each(fill_column);
        }
    }

    fn fill_rhs(&self, data: &mut [f64], panels: &[Panel]) {
        let fill_entry = |(i, entry): (usize, &mut f64)| {
            let source = &panels[i];
            *entry = panels
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .fold(0.0, |sum, (_, field)| {
                    sum + self.kernel.rhs_coefficient(source, field)
                });
        };
        if self.parallel {
            data.par_iter_mut().enumerate().for_each(fill_entry);
        } else {
            data.iter_mut().enumerate().for_each(fill_entry);
        }
    }
}
