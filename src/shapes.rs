//! Closed quadrilateral meshes of simple bodies

use crate::mesh::{Mesh, MeshBuilder};
use std::collections::{hash_map::Entry::Vacant, HashMap};

/// Create an axis-aligned box
///
/// The box spans `origin` to `origin + lengths`. Each face is divided into
/// `ncells` by `ncells` panels. Nodes on shared edges and corners are shared
/// between faces, and every panel is wound so that its normal points out of
/// the box. An `ncells` of zero is treated as one.
pub fn cuboid(lengths: [f64; 3], origin: [f64; 3], ncells: usize) -> Mesh {
    let ncells = ncells.max(1);
    let nodes_per_face = (ncells + 1) * (ncells + 1);
    let mut b = MeshBuilder::new_with_capacity(6 * nodes_per_face, 6 * ncells * ncells);
    let mut node_indices = HashMap::<[usize; 3], usize>::new();

    let mut node = |b: &mut MeshBuilder, lattice: [usize; 3]| -> usize {
        if let Vacant(e) = node_indices.entry(lattice) {
            let coords = [0, 1, 2].map(|d| {
                origin[d] + lengths[d] * lattice[d] as f64 / ncells as f64
            });
            e.insert(b.add_point(coords));
        }
        node_indices[&lattice]
    };

    for axis in 0..3 {
        // (u, v, axis) is a right-handed permutation of the coordinate axes
        let u = (axis + 1) % 3;
        let v = (axis + 2) % 3;
        for level in [0, ncells] {
            for iu in 0..ncells {
                for iv in 0..ncells {
                    let corner = |du: usize, dv: usize| {
                        let mut lattice = [0; 3];
                        lattice[axis] = level;
                        lattice[u] = iu + du;
                        lattice[v] = iv + dv;
                        lattice
                    };
                    let quad = if level == 0 {
                        [corner(0, 0), corner(0, 1), corner(1, 1), corner(1, 0)]
                    } else {
                        [corner(0, 0), corner(1, 0), corner(1, 1), corner(0, 1)]
                    };
                    let vertices = quad.map(|lattice| node(&mut b, lattice));
                    b.add_panel(vertices);
                }
            }
        }
    }

    b.create_mesh()
}

/// Create the unit cube `[0, 1]^3` with one panel per face
pub fn unit_cube() -> Mesh {
    cuboid([1.0, 1.0, 1.0], [0.0, 0.0, 0.0], 1)
}
