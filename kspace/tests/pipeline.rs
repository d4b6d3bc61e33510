#![allow(non_snake_case)]

use std::f64::consts::{ PI, TAU };
use approx::assert_abs_diff_eq;
use ndarray as nd;
use kspace::{
    basis::Basis,
    config::Config,
    error::{ KError, Stage },
    hamiltonian::Assembly,
    kinetic::kinetic_matrix,
    project::project,
    solve::{ SampleSet, solve },
    table::read_table,
    utils::wf_norm,
};

const TABLE: &str
    = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/potential_energy.dat");

fn table() -> SampleSet { read_table(TABLE).unwrap() }

#[test]
fn table_end_to_end() {
    let samples = table();
    assert_eq!(samples.len(), 101);
    let config = Config::new(5.0, 3);
    let spectrum = samples.solve(&config).unwrap();
    assert_eq!(spectrum.energies.len(), 3);
    assert_eq!(spectrum.states.dim(), (3, 3));
    let e = &spectrum.energies;
    assert!(e.iter().zip(e.iter().skip(1)).all(|(ek, ekp1)| ek <= ekp1));

    let again = samples.solve(&config).unwrap();
    assert_eq!(spectrum.energies, again.energies);
    assert_eq!(spectrum.states, again.states);
}

#[test]
fn residual_non_increasing() {
    let samples = table();
    let residuals: Vec<f64>
        = (1..=11)
        .map(|size| {
            let basis = Basis::new(size).unwrap();
            project(samples.get_x(), samples.get_V(), &basis, 1e-12)
                .unwrap()
                .residual(samples.get_V())
                .unwrap()
        })
        .collect();
    for (r, rnext) in residuals.iter().zip(residuals.iter().skip(1)) {
        assert!(*rnext <= r + 1e-9, "residuals increased: {residuals:?}");
    }
    assert!(residuals[10] < residuals[0]);
}

#[test]
fn zero_potential_gives_kinetic_spectrum() {
    let n = 60;
    let x: nd::Array1<f64>
        = nd::Array1::range(0.0, n as f64, 1.0).mapv(|k| TAU * k / n as f64);
    let V: nd::Array1<f64> = nd::Array1::zeros(n);
    for size in 1..=7 {
        let spectrum = solve(&x, &V, &Config::new(3.0, size)).unwrap();
        let kinetic = kinetic_matrix(3.0, size).unwrap();
        assert_eq!(spectrum.hamiltonian, kinetic);
        let mut expected: Vec<f64> = kinetic.diag().to_vec();
        expected.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_abs_diff_eq!(
            spectrum.energies, nd::Array1::from(expected), epsilon = 1e-12);
    }
}

#[test]
fn singular_gram_is_reported() {
    // sin(x) vanishes at every sample
    let x = nd::array![0.0, PI, 2.0 * PI, 3.0 * PI];
    let V = nd::array![1.0, 0.5, 1.0, 0.5];
    let err = solve(&x, &V, &Config::new(1.0, 2)).unwrap_err();
    assert_eq!(err.stage(), Stage::Projection);
    match err {
        KError::Singular { size, samples, rcond, min } => {
            assert_eq!((size, samples), (2, 4));
            assert!(rcond < min);
        },
        other => panic!("unexpected error: {other}"),
    }
    // the same samples support the constant alone
    assert!(solve(&x, &V, &Config::new(1.0, 1)).is_ok());
}

#[test]
fn bad_configuration_is_reported() {
    let samples = table();
    let err = samples.solve(&Config::new(5.0, 0)).unwrap_err();
    assert_eq!(err.stage(), Stage::Configuration);
    let err = samples.solve(&Config::new(5.0, 3).with_rcond_min(0.0))
        .unwrap_err();
    assert_eq!(err.stage(), Stage::Configuration);
}

#[test]
fn assembly_symmetry() {
    let samples = table();
    for assembly in [
        Assembly::Broadcast,
        Assembly::Transposed,
        Assembly::Symmetrized,
        Assembly::Projected,
    ] {
        let config = Config::new(5.0, 5).with_assembly(assembly);
        let spectrum = samples.solve(&config).unwrap();
        assert_eq!(spectrum.assembly, assembly);
        if assembly.is_symmetric() {
            assert!(spectrum.symmetry_defect() < 1e-9);
        } else {
            assert!(spectrum.symmetry_defect() > 0.0);
        }
    }
}

#[test]
fn broadcast_matches_lower_triangle() {
    let samples = table();
    let broadcast = samples.solve(&Config::new(5.0, 5)).unwrap();
    let a = &broadcast.projection.coeffs;
    let k = kinetic_matrix(5.0, 5).unwrap();
    let lower: nd::Array2<f64>
        = nd::Array2::from_shape_fn((5, 5), |(i, j)| a[i.min(j)] + k[[i, j]]);
    for sol in broadcast.solutions() {
        assert_abs_diff_eq!(
            lower.dot(&sol.coeffs), sol.e * &sol.coeffs, epsilon = 1e-9);
    }
}

#[test]
fn transposed_matches_upper_index() {
    let samples = table();
    let config = Config::new(5.0, 5).with_assembly(Assembly::Transposed);
    let transposed = samples.solve(&config).unwrap();
    let a = &transposed.projection.coeffs;
    let k = kinetic_matrix(5.0, 5).unwrap();
    let lower: nd::Array2<f64>
        = nd::Array2::from_shape_fn((5, 5), |(i, j)| a[i.max(j)] + k[[i, j]]);
    for sol in transposed.solutions() {
        assert_abs_diff_eq!(
            lower.dot(&sol.coeffs), sol.e * &sol.coeffs, epsilon = 1e-9);
    }
}

#[test]
fn table_energies() {
    let samples = table();
    let config = Config::new(5.0, 3);
    let broadcast = samples.solve(&config).unwrap();
    assert_abs_diff_eq!(
        broadcast.projection.coeffs,
        nd::array![2.1657775955, 0.0, -2.2025685334],
        epsilon = 1e-7);
    assert_abs_diff_eq!(
        broadcast.energies,
        nd::array![-0.2600784993, 3.7057382638, 6.5175493056],
        epsilon = 1e-8);

    let transposed = samples.solve(&config.with_assembly(Assembly::Transposed))
        .unwrap();
    assert_abs_diff_eq!(
        transposed.energies,
        nd::array![-0.1932311842, 3.4491912062, 6.7072490481],
        epsilon = 1e-8);

    let config = Config::new(5.0, 5);
    assert_abs_diff_eq!(
        samples.solve(&config).unwrap().energies,
        nd::array![
            -1.0484418651, 3.6106172396, 6.4899834494, 19.8661000882,
            21.3970179385,
        ],
        epsilon = 1e-8);
    assert_abs_diff_eq!(
        samples.solve(&config.with_assembly(Assembly::Transposed)).unwrap()
            .energies,
        nd::array![
            -0.2038721884, 3.4485563855, 6.7049209778, 20.0412982001,
            20.3243734757,
        ],
        epsilon = 1e-8);
}

#[test]
fn ground_state_wavefunction() {
    let samples = table();
    let spectrum = samples.solve(&Config::new(1.0, 7)).unwrap();
    let gs = spectrum.ground_state();
    let n = 401;
    let wf = gs.wavefunction_normalized(&spectrum.basis, (-PI, PI, n));
    assert_eq!(wf.len(), n);
    assert_abs_diff_eq!(wf_norm(&wf, TAU / (n - 1) as f64), 1.0, epsilon = 1e-9);

    let x = samples.get_x();
    let raw = gs.wavefunction(&spectrum.basis, x);
    assert_abs_diff_eq!(
        raw, spectrum.basis.reconstruct(&spectrum.states.column(0), x),
        epsilon = 1e-15);
}
