//! Heave added mass
//!
//! The added mass is obtained from the solved source strengths as
//!
//! `m = |ρ s Σ_i φ_i n_z,i A_i|`
//!
//! where ρ is the fluid density and s a symmetry factor accounting for bodies
//! of which only one half is meshed.
use crate::assembly::PanelAssembler;
use crate::geometry::Panel;
use crate::mesh::Mesh;
use crate::solver::{LuFactorisation, DEFAULT_SINGULAR_TOLERANCE};
use crate::types::{DenseMatrix, DenseVector, Error, Result};
use itertools::izip;
use log::{debug, info};
use rlst::RawAccess;

/// Density of seawater in t/m³
pub const SEAWATER_DENSITY: f64 = 1.025;

/// Symmetry factor for half-body meshes
pub const HALF_BODY_SYMMETRY: f64 = 2.0;

/// Options for an added-mass computation
#[derive(Debug, Clone)]
pub struct AddedMassOptions {
    /// Fluid density
    density: f64,
    /// Factor applied to the surface integral
    symmetry_factor: f64,
    /// Relative pivot tolerance used to detect singular systems
    singular_tolerance: f64,
    /// Assemble the linear system in parallel
    parallel: bool,
}

impl Default for AddedMassOptions {
    fn default() -> Self {
        Self {
            density: SEAWATER_DENSITY,
            symmetry_factor: HALF_BODY_SYMMETRY,
            singular_tolerance: DEFAULT_SINGULAR_TOLERANCE,
            parallel: true,
        }
    }
}

impl AddedMassOptions {
    /// Set the fluid density
    pub fn set_density(&mut self, density: f64) {
        self.density = density;
    }

    /// Get the fluid density
    pub fn density(&self) -> f64 {
        self.density
    }

    /// Set the symmetry factor
    pub fn set_symmetry_factor(&mut self, factor: f64) {
        self.symmetry_factor = factor;
    }

    /// Get the symmetry factor
    pub fn symmetry_factor(&self) -> f64 {
        self.symmetry_factor
    }

    /// Set the relative pivot tolerance
    ///
    /// Zero only rejects systems with an exactly zero pivot.
    pub fn set_singular_tolerance(&mut self, tolerance: f64) {
        self.singular_tolerance = tolerance;
    }

    /// Get the relative pivot tolerance
    pub fn singular_tolerance(&self) -> f64 {
        self.singular_tolerance
    }

    /// Set whether assembly runs in parallel
    pub fn set_parallel(&mut self, parallel: bool) {
        self.parallel = parallel;
    }

    /// Does assembly run in parallel?
    pub fn parallel(&self) -> bool {
        self.parallel
    }
}

/// Assembled linear system of a panel mesh
pub struct PanelSystem {
    /// Influence matrix
    pub matrix: DenseMatrix,
    /// Right-hand side
    pub rhs: DenseVector,
}

/// Result of an added-mass computation
pub struct AddedMassResult {
    /// Heave added mass
    pub added_mass: f64,
    /// Source strength of each panel, in panel order
    pub potential: DenseVector,
}

/// Integrate the potential over the panels
///
/// `potential` holds one value per panel, in panel order.
pub fn integrate_added_mass(
    panels: &[Panel],
    potential: &[f64],
    options: &AddedMassOptions,
) -> Result<f64> {
    if potential.len() != panels.len() {
        return Err(Error::DimensionMismatch {
            expected: panels.len(),
            got: potential.len(),
        });
    }
    let sum = izip!(panels, potential).fold(0.0, |sum, (panel, phi)| {
        sum + phi * panel.normal().z() * panel.area()
    });
    Ok((options.density * sum * options.symmetry_factor).abs())
}

/// Assemble the influence matrix and right-hand side for a mesh
pub fn assemble_system(mesh: &Mesh, options: &AddedMassOptions) -> Result<PanelSystem> {
    if mesh.is_empty() {
        return Err(Error::EmptyMesh);
    }
    let mut assembler = PanelAssembler::new_source();
    assembler.set_parallel(options.parallel);
    Ok(PanelSystem {
        matrix: assembler.assemble_matrix(mesh.panels()),
        rhs: assembler.assemble_rhs(mesh.panels()),
    })
}

/// Compute the heave added mass of a mesh
pub fn compute_added_mass(mesh: &Mesh, options: &AddedMassOptions) -> Result<AddedMassResult> {
    info!(
        "Computing added mass for {} nodes and {} panels",
        mesh.number_of_points(),
        mesh.number_of_panels()
    );
    let system = assemble_system(mesh, options)?;
    debug!("Assembled {0}x{0} influence matrix", mesh.number_of_panels());

    let lu = LuFactorisation::new(&system.matrix, options.singular_tolerance)?;
    debug!("Influence matrix determinant {:e}", lu.determinant());
    let potential = lu.solve(&system.rhs)?;

    let added_mass = integrate_added_mass(mesh.panels(), potential.data(), options)?;
    info!("Added mass = {}", added_mass);

    Ok(AddedMassResult {
        added_mass,
        potential,
    })
}
