//! End-to-end added-mass computations
use approx::assert_relative_eq;
use panel_added_mass::added_mass::assemble_system;
use panel_added_mass::assembly::SELF_INFLUENCE;
use panel_added_mass::io::load_mesh;
use panel_added_mass::mesh::Mesh;
use panel_added_mass::shapes::{cuboid, unit_cube};
use panel_added_mass::{compute_added_mass, AddedMassOptions, Error};
use rand::{Rng, SeedableRng};
use rlst::{RawAccess, Shape};

#[test]
fn test_unit_cube() {
    let mesh = unit_cube();
    assert_eq!(mesh.number_of_points(), 8);
    assert_eq!(mesh.number_of_panels(), 6);
    assert_relative_eq!(mesh.total_area(), 6.0);

    let options = AddedMassOptions::default();
    let system = assemble_system(&mesh, &options).unwrap();
    assert_eq!(system.matrix.shape(), [6, 6]);
    assert_eq!(system.rhs.shape(), [6]);
    for i in 0..6 {
        assert_eq!(system.matrix.data()[i + 6 * i], SELF_INFLUENCE);
    }

    let result = compute_added_mass(&mesh, &options).unwrap();
    assert_eq!(result.potential.shape(), [6]);
    assert!(result.added_mass.is_finite());
    assert!(result.added_mass >= 0.0);
}

#[test]
fn test_refined_box() {
    let mesh = cuboid([2.0, 1.0, 0.5], [-1.0, -0.5, -0.5], 4);
    let n = mesh.number_of_panels();
    let options = AddedMassOptions::default();
    let system = assemble_system(&mesh, &options).unwrap();
    assert_eq!(system.matrix.shape(), [n, n]);
    for i in 0..n {
        assert_eq!(system.matrix.data()[i + n * i], SELF_INFLUENCE);
    }
    let result = compute_added_mass(&mesh, &options).unwrap();
    assert_eq!(result.potential.shape(), [n]);
    assert!(result.potential.data().iter().all(|phi| phi.is_finite()));
    assert!(result.added_mass.is_finite());
}

#[test]
fn test_repeatable() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    let base = cuboid([1.0, 1.5, 2.0], [0.0, 0.0, -2.0], 3);
    let points = base
        .points()
        .iter()
        .map(|p| {
            [
                p.x + rng.gen_range(-0.02..0.02),
                p.y + rng.gen_range(-0.02..0.02),
                p.z + rng.gen_range(-0.02..0.02),
            ]
        })
        .collect::<Vec<_>>();
    let mesh = Mesh::from_raw(&points, base.panel_vertices());
    assert_eq!(mesh.number_of_panels(), base.number_of_panels());

    let options = AddedMassOptions::default();
    let first_system = assemble_system(&mesh, &options).unwrap();
    let second_system = assemble_system(&mesh, &options).unwrap();
    assert_eq!(first_system.matrix.data(), second_system.matrix.data());
    assert_eq!(first_system.rhs.data(), second_system.rhs.data());

    let first = compute_added_mass(&mesh, &options).unwrap();
    let second = compute_added_mass(&mesh, &options).unwrap();
    assert_eq!(first.potential.data(), second.potential.data());
    assert_eq!(first.added_mass.to_bits(), second.added_mass.to_bits());

    let mut serial = options.clone();
    serial.set_parallel(false);
    let third = compute_added_mass(&mesh, &serial).unwrap();
    assert_eq!(first.added_mass.to_bits(), third.added_mass.to_bits());
}

#[test]
fn test_translation_invariant() {
    let options = AddedMassOptions::default();
    let near = compute_added_mass(&cuboid([1.0, 2.0, 1.0], [0.0, 0.0, 0.0], 2), &options)
        .unwrap()
        .added_mass;
    let far = compute_added_mass(&cuboid([1.0, 2.0, 1.0], [3.0, -4.0, -10.0], 2), &options)
        .unwrap()
        .added_mass;
    assert_relative_eq!(near, far, max_relative = 1e-9);
}

#[test]
fn test_density_scaling() {
    let mesh = cuboid([1.0, 1.0, 2.0], [0.0, 0.0, 0.0], 2);
    let seawater = compute_added_mass(&mesh, &AddedMassOptions::default())
        .unwrap()
        .added_mass;

    let mut options = AddedMassOptions::default();
    options.set_density(1.0);
    options.set_symmetry_factor(1.0);
    let unit = compute_added_mass(&mesh, &options).unwrap().added_mass;
    assert_relative_eq!(seawater, 2.05 * unit, max_relative = 1e-12);
}

#[test]
fn test_coincident_panels() {
    let points = [
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [1.0, 1.0, 0.0],
        [0.0, 1.0, 0.0],
    ];
    let mesh = Mesh::from_raw(&points, &[[0usize, 1, 2, 3], [0, 1, 2, 3]]);
    assert_eq!(mesh.number_of_panels(), 2);
    let result = compute_added_mass(&mesh, &AddedMassOptions::default());
    assert!(matches!(
        result,
        Err(Error::NonFiniteSystem { .. }) | Err(Error::SingularMatrix { .. })
    ));
}

#[test]
fn test_empty_mesh() {
    let points = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0]];
    let mesh = Mesh::from_raw(&points, &[vec![0usize, 1, 2]]);
    assert!(mesh.is_empty());
    assert!(matches!(
        compute_added_mass(&mesh, &AddedMassOptions::default()),
        Err(Error::EmptyMesh)
    ));

    let missing = load_mesh(std::env::temp_dir().join("_panel_added_mass_no_such_mesh.txt"));
    assert!(matches!(
        compute_added_mass(&missing, &AddedMassOptions::default()),
        Err(Error::EmptyMesh)
    ));
}

#[test]
fn test_collapsed_panel() {
    let base = cuboid([1.0, 1.0, 0.5], [0.0, 0.0, -0.5], 2);
    let mut points = base
        .points()
        .iter()
        .map(|p| p.coords())
        .collect::<Vec<_>>();
    points.push([5.0, 5.0, -3.0]);
    let far = points.len() - 1;
    let mut panels = base.panel_vertices().to_vec();
    panels.push([far; 4]);
    let mesh = Mesh::from_raw(&points, &panels);
    let n = mesh.number_of_panels();
    let c = n - 1;
    assert_eq!(n, base.number_of_panels() + 1);
    assert!(mesh.panels()[c].is_degenerate());

    let options = AddedMassOptions::default();
    let system = assemble_system(&mesh, &options).unwrap();
    // The collapsed panel does not act on any other panel
    for i in 0..c {
        assert_eq!(system.matrix.data()[i + n * c], 0.0);
    }

    let with = compute_added_mass(&mesh, &options).unwrap();
    let without = compute_added_mass(&base, &options).unwrap();
    assert!(with.added_mass.is_finite());
    assert_relative_eq!(with.added_mass, without.added_mass, max_relative = 1e-10);
    for (phi, expected) in with.potential.data()[..c]
        .iter()
        .zip(without.potential.data())
    {
        assert_relative_eq!(*phi, *expected, epsilon = 1e-12, max_relative = 1e-10);
    }

    // Its own strength is fixed by its row alone
    let phi = with.potential.data();
    let coupling = (0..c)
        .map(|j| system.matrix.data()[c + n * j] * phi[j])
        .sum::<f64>();
    assert_relative_eq!(
        phi[c],
        (system.rhs.data()[c] - coupling) / SELF_INFLUENCE,
        epsilon = 1e-12,
        max_relative = 1e-10
    );
}
