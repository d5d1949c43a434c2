//! Assembly
use crate::geometry::Panel;

pub trait InfluenceKernel: Sync {
    //! Influence of one panel at the collocation point of another
    //!
    //! `source` is the panel owning the row of the linear system and `field`
    //! the panel whose singularity is being evaluated. Implementations are
    //! only called with distinct panels; the diagonal is given by
    //! [`InfluenceKernel::self_influence`].

    /// Off-diagonal entry of the influence matrix
    fn matrix_coefficient(&self, source: &Panel, field: &Panel) -> f64;

    /// Contribution of `field` to the right-hand side entry of `source`
    fn rhs_coefficient(&self, source: &Panel, field: &Panel) -> f64;

    /// Diagonal entry of the influence matrix
    fn self_influence(&self) -> f64;
}
