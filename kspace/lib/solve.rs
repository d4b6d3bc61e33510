//! Functions to compute approximate eigenstates of the one-dimensional,
//! time-independent Schrödinger equation (TISE) by Galerkin projection onto a
//! truncated Fourier basis.

use std::cmp;
use ndarray as nd;
use ndarray_linalg::{ self as la, EighInto };
use tracing::debug;
use crate::{
    Arr1,
    basis::Basis,
    config::Config,
    error::{ KError, LengthError },
    hamiltonian::{
        Assembly,
        assemble,
        broadcast_potential,
        transposed_potential,
        projected_potential,
        symmetrized_potential,
    },
    kinetic::kinetic_matrix_unchecked,
    project::{ KResult, Projection, project },
    utils::wf_normalized,
};

/// A single solution to the TISE.
///
/// This struct is usually only returned by a [`Spectrum`]; you probably won't
/// ever instantiate it yourself.
#[derive(Clone, Debug)]
pub struct Solution {
    /// Energy
    pub e: f64,
    /// Expansion coefficients of the wavefunction in the Fourier basis.
    pub coeffs: nd::Array1<f64>,
}

impl Solution {
    /// Compare two `Solution`s by their energy.
    pub fn cmp_energy(&self, other: &Self) -> Option<cmp::Ordering> {
        self.e.partial_cmp(&other.e)
    }

    /// Evaluate the wavefunction over `x` in the given basis.
    pub fn wavefunction<S>(&self, basis: &Basis, x: &Arr1<S>) -> nd::Array1<f64>
    where S: nd::Data<Elem = f64>
    {
        basis.reconstruct(&self.coeffs, x)
    }

    /// Evaluate the wavefunction over a uniform grid generated from
    /// "linspace-style" arguments (start, inclusive end, and an array length),
    /// normalized on that grid.
    ///
    /// *Panics if the number of points is less than 2*.
    pub fn wavefunction_normalized(
        &self,
        basis: &Basis,
        xargs: (f64, f64, usize),
    ) -> nd::Array1<f64>
    {
        let x: nd::Array1<f64>
            = nd::Array1::linspace(xargs.0, xargs.1, xargs.2);
        let dx = x[1] - x[0];
        wf_normalized(&basis.reconstruct(&self.coeffs, &x), dx)
    }
}

/// Output of [`solve`]: the full eigendecomposition of the truncated
/// Hamiltonian, along with the intermediate quantities used to build it.
#[derive(Clone, Debug)]
pub struct Spectrum {
    /// Eigenvalues, in ascending order.
    pub energies: nd::Array1<f64>,
    /// Eigenvectors; column `i` belongs to `energies[i]`.
    pub states: nd::Array2<f64>,
    /// The basis in which `states` are expressed.
    pub basis: Basis,
    /// Projection of the potential onto `basis`.
    pub projection: Projection,
    /// The assembled Hamiltonian.
    pub hamiltonian: nd::Array2<f64>,
    /// The assembly used for `hamiltonian`.
    pub assembly: Assembly,
}

impl Spectrum {
    /// Return the number of eigenstates.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.energies.len() }

    /// Get the `n`-th eigenstate, counting up from the lowest energy.
    pub fn get(&self, n: usize) -> Option<Solution> {
        (n < self.len()).then(|| {
            Solution {
                e: self.energies[n],
                coeffs: self.states.column(n).to_owned(),
            }
        })
    }

    /// Get the lowest-energy eigenstate.
    pub fn ground_state(&self) -> Solution {
        Solution {
            e: self.energies[0],
            coeffs: self.states.column(0).to_owned(),
        }
    }

    /// Return all eigenstates in ascending order of energy.
    pub fn solutions(&self) -> Vec<Solution> {
        self.energies.iter().zip(self.states.columns())
            .map(|(e, v)| Solution { e: *e, coeffs: v.to_owned() })
            .collect()
    }

    /// Return `max |H[i, j] - H[j, i]|` for the assembled Hamiltonian.
    pub fn symmetry_defect(&self) -> f64 {
        crate::hamiltonian::symmetry_defect(&self.hamiltonian)
    }
}

/// Diagonalize `h` with the symmetric eigensolver.
///
/// Only the lower triangle of `h` is read. Eigenvalues are returned in
/// ascending order, with eigenvectors as the columns of the second array.
pub fn eigh(h: nd::Array2<f64>) -> KResult<(nd::Array1<f64>, nd::Array2<f64>)> {
    h.eigh_into(la::UPLO::Lower).map_err(KError::Eigh)
}

/// Compute the truncated spectrum of `-c d²/dx² + V(x)` for a potential
/// sampled at positions `x`.
///
/// Parameters are validated before any computation; see [`KError`] for the
/// failure modes at each stage.
///
/// ```
/// use ndarray as nd;
/// use kspace::{ config::Config, solve::solve };
///
/// let n = 64;
/// let x: nd::Array1<f64>
///     = nd::Array1::range(0.0, n as f64, 1.0)
///     .mapv(|k| std::f64::consts::TAU * k / n as f64);
/// let V = x.mapv(|xk| 1.0 - xk.cos());
/// let spectrum = solve(&x, &V, &Config::new(1.0, 5)).unwrap();
/// assert_eq!(spectrum.len(), 5);
/// let e = &spectrum.energies;
/// assert!(e.iter().zip(e.iter().skip(1)).all(|(ek, ekp1)| ek <= ekp1));
/// ```
pub fn solve<S, T>(x: &Arr1<S>, V: &Arr1<T>, config: &Config)
    -> KResult<Spectrum>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    config.validate()?;
    LengthError::check(x, V)?;
    KError::check_nonempty(x.len())?;
    KError::check_finite("position", x)?;
    KError::check_finite("potential", V)?;

    let basis = Basis::new(config.size)?;
    let kinetic = kinetic_matrix_unchecked(config.c, config.size);
    let projection = project(x, V, &basis, config.rcond_min)?;
    let vmat: nd::Array2<f64>
        = match config.assembly {
            Assembly::Broadcast => broadcast_potential(&projection.coeffs),
            Assembly::Transposed => transposed_potential(&projection.coeffs),
            Assembly::Symmetrized => symmetrized_potential(&projection.coeffs),
            Assembly::Projected => projected_potential(&projection.design, V)?,
        };
    let hamiltonian = assemble(&vmat, &kinetic)?;
    debug!(
        size = config.size,
        assembly = %config.assembly,
        "assembled hamiltonian"
    );
    let (energies, states) = eigh(hamiltonian.clone())?;
    debug!(ground = energies[0], "diagonalized hamiltonian");
    Ok(Spectrum {
        energies,
        states,
        basis,
        projection,
        hamiltonian,
        assembly: config.assembly,
    })
}

/// Simple record to keep track of position and potential arrays.
///
/// Arrays borrowed from this type are guaranteed to have the same, nonzero
/// length. Unlike finite-difference solvers, no uniform grid spacing is
/// required.
#[derive(Clone, Debug)]
pub struct SampleSet {
    // position array
    x: nd::Array1<f64>,
    // potential array
    V: nd::Array1<f64>,
    // array sizes
    n: usize,
}

impl SampleSet {
    /// Create a new `SampleSet`, generating the position array from
    /// "linspace-style" arguments (start, inclusive end, and an array length).
    pub fn new_linspace<F>(xargs: (f64, f64, usize), V: F) -> KResult<Self>
    where F: FnMut(f64) -> f64
    {
        KError::check_nonempty(xargs.2)?;
        let x: nd::Array1<f64>
            = nd::Array1::linspace(xargs.0, xargs.1, xargs.2);
        let V: nd::Array1<f64> = x.mapv(V);
        Self::new_arrays(x, V)
    }

    /// Create a new `SampleSet`, generating the position array from
    /// "range-style" arguments (start, exclusive end, and a step size).
    pub fn new_range<F>(xargs: (f64, f64, f64), V: F) -> KResult<Self>
    where F: FnMut(f64) -> f64
    {
        KError::check_grid(xargs)?;
        let x: nd::Array1<f64>
            = nd::Array1::range(xargs.0, xargs.1, xargs.2);
        let V: nd::Array1<f64> = x.mapv(V);
        Self::new_arrays(x, V)
    }

    /// Create a new `SampleSet` from bare position and potential arrays.
    ///
    /// Every element of both arrays must be finite.
    pub fn new_arrays(x: nd::Array1<f64>, V: nd::Array1<f64>) -> KResult<Self> {
        LengthError::check(&x, &V)?;
        KError::check_nonempty(x.len())?;
        KError::check_finite("position", &x)?;
        KError::check_finite("potential", &V)?;
        let n = x.len();
        Ok(Self { x, V, n })
    }

    /// Get a reference to the position array.
    pub fn get_x(&self) -> &nd::Array1<f64> { &self.x }

    /// Get a reference to the potential array.
    pub fn get_V(&self) -> &nd::Array1<f64> { &self.V }

    /// Get the length of the position and potential arrays.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.n }

    /// Thin interface to [`solve`].
    pub fn solve(&self, config: &Config) -> KResult<Spectrum> {
        solve(&self.x, &self.V, config)
    }
}
