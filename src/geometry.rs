//! Geometric primitives: points, vectors and quadrilateral panels

mod panel;
mod point;
mod vector;

pub use panel::Panel;
pub use point::Point;
pub use vector::{cross_product, dot_product, Vector};
