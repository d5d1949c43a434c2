//! Panel meshes
//!
//! A mesh owns the node set and the panels built from it. Panels refer to
//! nodes by index; the geometry of each panel is computed once from the shared
//! nodes when the mesh is created and never changes afterwards.

mod builder;

pub use builder::MeshBuilder;

use crate::geometry::{Panel, Point};

/// A surface mesh of quadrilateral panels
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    points: Vec<Point>,
    panels: Vec<Panel>,
    panel_vertices: Vec<[usize; 4]>,
}

impl Mesh {
    /// Create a mesh from raw coordinates and panel index records
    ///
    /// Every record must contain exactly four 0-based indices into `points`.
    /// Records that do not are skipped with a warning.
    pub fn from_raw<I: AsRef<[usize]>>(points: &[[f64; 3]], panels: &[I]) -> Self {
        let mut b = MeshBuilder::new_with_capacity(points.len(), panels.len());
        for p in points {
            b.add_point(*p);
        }
        for (record, indices) in panels.iter().enumerate() {
            b.add_panel_record(record, indices.as_ref());
        }
        b.create_mesh()
    }

    /// The node set
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The panels, in input order
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// Node indices of each panel, in input order
    pub fn panel_vertices(&self) -> &[[usize; 4]] {
        &self.panel_vertices
    }

    /// Number of nodes
    pub fn number_of_points(&self) -> usize {
        self.points.len()
    }

    /// Number of panels
    pub fn number_of_panels(&self) -> usize {
        self.panels.len()
    }

    /// Does the mesh contain no panels?
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Sum of the panel areas
    pub fn total_area(&self) -> f64 {
        self.panels.iter().map(|p| p.area()).sum()
    }
}
