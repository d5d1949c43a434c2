//! Influence coefficients of constant-strength source panels
use crate::geometry::{Panel, Vector};
use crate::traits::InfluenceKernel;

/// Diagonal entry of the influence matrix, `-2π`
pub const SELF_INFLUENCE: f64 = -2.0 * std::f64::consts::PI;

/// Off-diagonal influence coefficient of `field` at the centroid of `source`
///
/// With `r` the vector between the two centroids this is
/// `(r · n_field) * area_field² / |r|³`. The field panel area enters squared.
/// Coincident centroids give a non-finite value.
pub fn matrix_coefficient(source: &Panel, field: &Panel) -> f64 {
    let r = Vector::new(source.centroid(), field.centroid());
    let d = r.dot(field.normal());
    (d * field.area()) / r.magnitude().powi(3) * field.area()
}

/// Right-hand side contribution of `field` at the centroid of `source`
///
/// This is `area_field * n_field.z / |r|`, the heave component of the field
/// panel normal.
pub fn rhs_coefficient(source: &Panel, field: &Panel) -> f64 {
    let r = Vector::new(source.centroid(), field.centroid());
    (1.0 / r.magnitude()) * field.area() * field.normal().z()
}

/// Constant-strength source panel kernel
#[derive(Debug, Clone, Copy, Default)]
pub struct SourcePanelKernel;

impl InfluenceKernel for SourcePanelKernel {
    fn matrix_coefficient(&self, source: &Panel, field: &Panel) -> f64 {
        matrix_coefficient(source, field)
    }

    fn rhs_coefficient(&self, source: &Panel, field: &Panel) -> f64 {
        rhs_coefficient(source, field)
    }

    fn self_influence(&self) -> f64 {
        SELF_INFLUENCE
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::Point;
    use approx::assert_relative_eq;

    fn square(origin: [f64; 3], side: f64) -> Panel {
        let [x, y, z] = origin;
        Panel::new([
            Point::new(x, y, z),
            Point::new(x + side, y, z),
            Point::new(x + side, y + side, z),
            Point::new(x, y + side, z),
        ])
    }

    #[test]
    fn test_stacked_panels() {
        // Field panel two units above the source panel, normal along +z
        let source = square([0.0, 0.0, 0.0], 1.0);
        let field = square([0.0, 0.0, 2.0], 1.0);

        // r = (0, 0, 2), d = 2, area = 1
        assert_relative_eq!(matrix_coefficient(&source, &field), 2.0 / 8.0);
        assert_relative_eq!(rhs_coefficient(&source, &field), 0.5);
    }

    #[test]
    fn test_area_enters_squared() {
        let source = square([0.0, 0.0, 0.0], 1.0);
        let small = square([0.0, 0.0, 4.0], 1.0);
        let large = square([-0.5, -0.5, 4.0], 2.0);

        // Same centroid and normal, four times the area
        assert_relative_eq!(
            matrix_coefficient(&source, &large),
            16.0 * matrix_coefficient(&source, &small),
            epsilon = 1e-14
        );
        assert_relative_eq!(
            rhs_coefficient(&source, &large),
            4.0 * rhs_coefficient(&source, &small),
            epsilon = 1e-14
        );
    }

    #[test]
    fn test_coplanar_panels() {
        // r lies in the plane of the field panel, so there is no normal component
        let source = square([0.0, 0.0, 0.0], 1.0);
        let field = square([3.0, 0.0, 0.0], 1.0);
        assert_eq!(matrix_coefficient(&source, &field), 0.0);
        assert_relative_eq!(rhs_coefficient(&source, &field), 1.0 / 3.0);
    }

    #[test]
    fn test_degenerate_field_panel() {
        let source = square([0.0, 0.0, 0.0], 1.0);
        let p = Point::new(0.0, 0.0, 5.0);
        let field = Panel::new([p, p, p, p]);
        assert_eq!(matrix_coefficient(&source, &field), 0.0);
        assert_eq!(rhs_coefficient(&source, &field), 0.0);
    }

    #[test]
    fn test_coincident_centroids() {
        let panel = square([0.0, 0.0, 0.0], 1.0);
        assert!(!matrix_coefficient(&panel, &panel).is_finite());
    }

    #[test]
    fn test_kernel() {
        let kernel = SourcePanelKernel;
        let source = square([0.0, 0.0, 0.0], 1.0);
        let field = square([1.0, 2.0, 3.0], 0.5);
        assert_eq!(
            kernel.matrix_coefficient(&source, &field),
            matrix_coefficient(&source, &field)
        );
        assert_eq!(
            kernel.rhs_coefficient(&source, &field),
            rhs_coefficient(&source, &field)
        );
        assert_eq!(kernel.self_influence(), -2.0 * std::f64::consts::PI);
    }
}
