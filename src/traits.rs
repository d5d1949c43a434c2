//! Trait definitions

mod assembly;
mod io;

pub use assembly::InfluenceKernel;
pub use io::GmshIO;
