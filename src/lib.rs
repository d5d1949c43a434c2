//! Panel added mass
//!
//! Heave added mass of submerged bodies with a constant-strength source panel
//! method. A closed surface is described by a [`mesh::Mesh`] of quadrilateral
//! panels. The influence of every panel on every other is assembled into a
//! dense linear system, the system is solved for the panel source strengths,
//! and the strengths are integrated over the surface.
//!
//! ```
//! use panel_added_mass::{compute_added_mass, shapes::unit_cube, AddedMassOptions};
//!
//! let mesh = unit_cube();
//! let result = compute_added_mass(&mesh, &AddedMassOptions::default()).unwrap();
//! assert!(result.added_mass.is_finite());
//! ```
#![cfg_attr(feature = "strict", deny(warnings))]
#![warn(missing_docs)]

pub mod added_mass;
pub mod assembly;
pub mod geometry;
pub mod io;
pub mod mesh;
pub mod shapes;
pub mod solver;
pub mod traits;
pub mod types;

pub use added_mass::{compute_added_mass, AddedMassOptions, AddedMassResult};
pub use types::{Error, Result};
