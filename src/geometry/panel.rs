//! Flat quadrilateral panels
use crate::geometry::{Point, Vector};
use std::fmt;

/// A quadrilateral panel
///
/// The vertex ordering defines the orientation: the normal points along
/// `(p1 → p2) × (p1 → p4)`, so a panel whose vertices run counter-clockwise
/// when seen from outside the body has an outward normal. The centroid, unit
/// normal and area are computed when the panel is created.
#[derive(Debug, Clone)]
pub struct Panel {
    vertices: [Point; 4],
    centroid: Point,
    normal: Vector,
    area: f64,
}

impl Panel {
    /// Create a panel from its four vertices
    pub fn new(vertices: [Point; 4]) -> Self {
        let centroid = compute_centroid(&vertices);
        let e1 = Vector::new(&vertices[0], &vertices[1]);
        let e2 = Vector::new(&vertices[0], &vertices[2]);
        let e3 = Vector::new(&vertices[0], &vertices[3]);

        let e1_x_e3 = e1.cross(&e3);
        // A zero normal marks a degenerate panel and contributes nothing to assembly
        let normal = e1_x_e3.normalised();
        let area = 0.5 * (e1.cross(&e2).magnitude() + e1_x_e3.magnitude());

        Self {
            vertices,
            centroid,
            normal,
            area,
        }
    }

    /// The four vertices in winding order
    pub fn vertices(&self) -> &[Point; 4] {
        &self.vertices
    }

    /// Vertex average, used as the collocation point
    pub fn centroid(&self) -> &Point {
        &self.centroid
    }

    /// Unit normal, or the zero vector for a degenerate panel
    pub fn normal(&self) -> &Vector {
        &self.normal
    }

    /// Area, approximated by the two triangles sharing the first vertex
    pub fn area(&self) -> f64 {
        self.area
    }

    /// Is the normal undefined?
    pub fn is_degenerate(&self) -> bool {
        self.normal.magnitude() == 0.0
    }
}

fn compute_centroid(vertices: &[Point; 4]) -> Point {
    let mut sum = [0.0; 3];
    for v in vertices {
        sum[0] += v.x;
        sum[1] += v.y;
        sum[2] += v.z;
    }
    Point::new(sum[0] / 4.0, sum[1] / 4.0, sum[2] / 4.0)
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Panel centroid: {}, normal: {}, area: {}",
            self.centroid, self.normal, self.area
        )
    }
}
