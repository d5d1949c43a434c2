//! Mesh builder

use crate::geometry::{Panel, Point};
use crate::mesh::Mesh;
use log::{debug, warn};

/// Incremental builder for a [`Mesh`]
#[derive(Debug, Default)]
pub struct MeshBuilder {
    points: Vec<Point>,
    panel_vertices: Vec<[usize; 4]>,
}

impl MeshBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with room for `npoints` nodes and `npanels` panels
    pub fn new_with_capacity(npoints: usize, npanels: usize) -> Self {
        Self {
            points: Vec::with_capacity(npoints),
            panel_vertices: Vec::with_capacity(npanels),
        }
    }

    /// Add a node and return its index
    pub fn add_point(&mut self, coords: [f64; 3]) -> usize {
        self.points.push(Point::from(coords));
        self.points.len() - 1
    }

    /// Add a panel from four node indices
    ///
    /// Returns `false`, and adds nothing, if an index does not refer to a node
    /// added so far.
    pub fn add_panel(&mut self, vertices: [usize; 4]) -> bool {
        if let Some(v) = vertices.iter().find(|v| **v >= self.points.len()) {
            warn!(
                "Skipping panel {:?}: node index {} out of range for {} nodes",
                vertices,
                v,
                self.points.len()
            );
            return false;
        }
        self.panel_vertices.push(vertices);
        true
    }

    /// Add a panel from an index record of unchecked length
    ///
    /// `record` is only used to identify the record in diagnostics.
    pub fn add_panel_record(&mut self, record: usize, indices: &[usize]) -> bool {
        match <[usize; 4]>::try_from(indices) {
            Ok(vertices) => self.add_panel(vertices),
            Err(_) => {
                warn!(
                    "Skipping panel record {}: expected 4 node indices, got {}",
                    record,
                    indices.len()
                );
                false
            }
        }
    }

    /// Number of nodes added so far
    pub fn number_of_points(&self) -> usize {
        self.points.len()
    }

    /// Number of panels added so far
    pub fn number_of_panels(&self) -> usize {
        self.panel_vertices.len()
    }

    /// Compute the panel geometry and create the mesh
    pub fn create_mesh(self) -> Mesh {
        let panels = self
            .panel_vertices
            .iter()
            .enumerate()
            .map(|(index, v)| {
                let panel = Panel::new(v.map(|i| self.points[i]));
                if panel.is_degenerate() {
                    debug!("Panel {} ({:?}) is degenerate", index, v);
                }
                panel
            })
            .collect::<Vec<_>>();

        Mesh {
            points: self.points,
            panels,
            panel_vertices: self.panel_vertices,
        }
    }
}
