//! Assembly of the influence matrix and right-hand side
mod dense;
mod kernel;

pub use dense::PanelAssembler;
pub use kernel::{matrix_coefficient, rhs_coefficient, SourcePanelKernel, SELF_INFLUENCE};
