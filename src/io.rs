//! Mesh input/output
//!
//! Meshes are read from a plain text format listing the nodes and then the
//! panels:
//!
//! ```text
//! 8
//! 0,0.0,0.0,0.0
//! ...
//! 6
//! 0,0,3,2,1
//! ...
//! ```
//!
//! Each count line is followed by one comma-separated record per node
//! (`index,x,y,z`) or panel (`index,n1,n2,n3,n4`). The leading index of a
//! record is ignored; records are numbered by their position and panel node
//! indices are 0-based. Malformed records are skipped with a warning.
use crate::mesh::{Mesh, MeshBuilder};
use crate::traits::GmshIO;
use crate::types::{Error, Result};
use log::{error, warn};
use std::fs;
use std::path::Path;

/// Parse a mesh from the text format
pub fn parse_mesh(contents: &str) -> Result<Mesh> {
    let end_line = contents.lines().count() + 1;
    let mut lines = contents
        .lines()
        .enumerate()
        .map(|(i, text)| (i + 1, text.trim()))
        .filter(|(_, text)| !text.is_empty())
        .peekable();

    let npoints = parse_count(lines.next(), "node count", end_line)?;
    let mut b = MeshBuilder::new();
    let mut node_records = 0;
    loop {
        // The declared number of records are nodes unless a bare count line
        // shows up early; surplus comma-separated records are nodes too.
        let declared = node_records < npoints;
        let Some((line, text)) = lines.next_if(|(_, text)| {
            if declared {
                text.parse::<usize>().is_err()
            } else {
                text.contains(',')
            }
        }) else {
            break;
        };
        node_records += 1;
        match parse_node(text) {
            Some(coords) => {
                b.add_point(coords);
            }
            None => warn!("Skipping invalid node record on line {}: {}", line, text),
        }
    }
    if node_records != npoints {
        warn!(
            "Mesh declares {} nodes but contains {} node records",
            npoints, node_records
        );
    }

    let npanels = parse_count(lines.next(), "panel count", end_line)?;
    let mut panel_records = 0;
    for (line, text) in lines {
        match parse_panel(text) {
            Some(vertices) => {
                b.add_panel(vertices);
            }
            None => warn!("Skipping invalid panel record on line {}: {}", line, text),
        }
        panel_records += 1;
    }
    if panel_records != npanels {
        warn!(
            "Mesh declares {} panels but contains {} panel records",
            npanels, panel_records
        );
    }

    Ok(b.create_mesh())
}

/// Read a mesh file
pub fn read_mesh(path: impl AsRef<Path>) -> Result<Mesh> {
    parse_mesh(&fs::read_to_string(path)?)
}

/// Read a mesh file, reporting failures instead of returning them
///
/// A missing or unreadable file gives an empty mesh, which the added-mass
/// computation rejects.
pub fn load_mesh(path: impl AsRef<Path>) -> Mesh {
    let path = path.as_ref();
    match read_mesh(path) {
        Ok(mesh) => mesh,
        Err(e) => {
            error!("Could not load mesh from {}: {}", path.display(), e);
            Mesh::default()
        }
    }
}

fn parse_count(entry: Option<(usize, &str)>, what: &str, end_line: usize) -> Result<usize> {
    match entry {
        Some((line, text)) => text.parse().map_err(|_| Error::Parse {
            line,
            message: format!("expected {what}, found \"{text}\""),
        }),
        None => Err(Error::Parse {
            line: end_line,
            message: format!("missing {what}"),
        }),
    }
}

fn parse_node(text: &str) -> Option<[f64; 3]> {
    let fields = text.split(',').map(str::trim).collect::<Vec<_>>();
    if fields.len() != 4 {
        return None;
    }
    let mut coords = [0.0; 3];
    for (c, field) in coords.iter_mut().zip(&fields[1..]) {
        *c = field.parse().ok()?;
    }
    Some(coords)
}

fn parse_panel(text: &str) -> Option<[usize; 4]> {
    let fields = text.split(',').map(str::trim).collect::<Vec<_>>();
    if fields.len() != 5 {
        return None;
    }
    let mut vertices = [0; 4];
    for (v, field) in vertices.iter_mut().zip(&fields[1..]) {
        *v = field.parse().ok()?;
    }
    Some(vertices)
}

impl GmshIO for Mesh {
    fn to_gmsh_string(&self) -> String {
        let node_count = self.number_of_points();
        let panel_count = self.number_of_panels();

        let mut gmsh_s = String::from("");
        gmsh_s.push_str("$MeshFormat\n");
        gmsh_s.push_str("4.1 0 8\n");
        gmsh_s.push_str("$EndMeshFormat\n");
        gmsh_s.push_str("$Nodes\n");
        gmsh_s.push_str(&format!("1 {node_count} 1 {node_count}\n"));
        gmsh_s.push_str(&format!("2 1 0 {node_count}\n"));
        for i in 0..node_count {
            gmsh_s.push_str(&format!("{}\n", i + 1));
        }
        for p in self.points() {
            gmsh_s.push_str(&format!("{} {} {}\n", p.x, p.y, p.z));
        }
        gmsh_s.push_str("$EndNodes\n");
        gmsh_s.push_str("$Elements\n");
        gmsh_s.push_str(&format!("1 {panel_count} 1 {panel_count}\n"));
        // Gmsh element type 3 is the 4-node quadrangle
        gmsh_s.push_str(&format!("2 1 3 {panel_count}\n"));
        for (i, vertices) in self.panel_vertices().iter().enumerate() {
            gmsh_s.push_str(&format!("{}", i + 1));
            for v in vertices {
                gmsh_s.push_str(&format!(" {}", v + 1));
            }
            gmsh_s.push('\n');
        }
        gmsh_s.push_str("$EndElements\n");

        gmsh_s
    }
}
