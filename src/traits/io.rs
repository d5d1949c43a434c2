//! Mesh input/output
use std::fs;
use std::path::Path;

pub trait GmshIO {
    //! Mesh I/O for Gmsh

    /// Generate the Gmsh string for a mesh
    fn to_gmsh_string(&self) -> String;

    /// Export as Gmsh
    fn export_as_gmsh(&self, filename: impl AsRef<Path>) -> std::io::Result<()> {
        fs::write(filename, self.to_gmsh_string())
    }
}
