//! Compute the heave added mass of a mesh file
//!
//! Usage: `cargo run --example added_mass -- <mesh.txt> [output.msh]`
//!
//! Without a mesh file the unit cube is used. Each panel is listed with its
//! centroid, normal and area. If an output path is given the panels are also
//! written in Gmsh format.
use panel_added_mass::io::load_mesh;
use panel_added_mass::shapes::unit_cube;
use panel_added_mass::traits::GmshIO;
use panel_added_mass::{compute_added_mass, AddedMassOptions};

fn main() {
    let mut args = std::env::args().skip(1);
    let mesh = match args.next() {
        Some(path) => load_mesh(path),
        None => unit_cube(),
    };
    println!("Number of nodes = {}", mesh.number_of_points());
    println!("Number of panels = {}", mesh.number_of_panels());
    for (i, panel) in mesh.panels().iter().enumerate() {
        println!("{i}: {panel}");
    }

    if let Some(output) = args.next() {
        if let Err(e) = mesh.export_as_gmsh(&output) {
            eprintln!("Could not write {output}: {e}");
        }
    }

    match compute_added_mass(&mesh, &AddedMassOptions::default()) {
        Ok(result) => println!("Added Mass = {}", result.added_mass),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
