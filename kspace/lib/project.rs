//! Discrete projection of a sampled potential onto the Fourier basis.
//!
//! Inner products are approximated by unweighted sums over the sample
//! positions,
//! ```text
//! p[i]    = Σ_k f_i(x[k]) V[k]
//! G[i, j] = Σ_k f_i(x[k]) f_j(x[k])
//! ```
//! and the expansion coefficients of the potential solve `G a = p`. Writing the
//! `size × N` design matrix as `B`, these are `p = B V` and `G = B Bᵀ`, so `a`
//! is the least-squares fit of the basis to the samples.
//!
//! No spacing-aware quadrature weights are applied; the quality of the
//! projection depends entirely on how densely and regularly the potential is
//! sampled.

use ndarray as nd;
use ndarray_linalg::{ Factorize, ReciprocalConditionNum, Solve };
use tracing::debug;
use crate::{
    Arr1,
    Arr2,
    basis::Basis,
    error::{ KError, LengthError },
    utils::l2_diff,
};

pub type KResult<T> = Result<T, KError>;

/// Compute the projection vector `p[i] = Σ_k f_i(x[k]) V[k]`.
pub fn projection_vector<S, T>(x: &Arr1<S>, V: &Arr1<T>, basis: &Basis)
    -> KResult<nd::Array1<f64>>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    LengthError::check(x, V)?;
    Ok(basis.design_matrix(x).dot(V))
}

/// Compute the discrete Gram matrix `G[i, j] = Σ_k f_i(x[k]) f_j(x[k])`.
pub fn gram_matrix<S>(x: &Arr1<S>, basis: &Basis) -> nd::Array2<f64>
where S: nd::Data<Elem = f64>
{
    let design = basis.design_matrix(x);
    design.dot(&design.t())
}

/// Solve `G a = p` by LU factorization.
///
/// The reciprocal 1-norm condition number of `G` is checked against
/// `rcond_min` before solving; a singular or ill-conditioned system is returned
/// as [`KError::Singular`] together with the measured value.
pub fn solve_coefficients<S, T>(
    gram: &Arr2<S>,
    proj: &Arr1<T>,
    samples: usize,
    rcond_min: f64,
) -> KResult<(nd::Array1<f64>, f64)>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    KError::check_rcond(rcond_min)?;
    let (nrows, ncols) = gram.dim();
    if nrows != ncols { return Err(LengthError(nrows, ncols).into()); }
    if nrows != proj.len() { return Err(LengthError(nrows, proj.len()).into()); }
    let size = proj.len();
    let singular = |rcond: f64| {
        KError::Singular { size, samples, rcond, min: rcond_min }
    };
    // LAPACK reports an exactly zero pivot as a factorization failure
    let lu = gram.factorize().map_err(|_| singular(0.0))?;
    let rcond = lu.rcond().map_err(KError::Solve)?;
    debug!(size, samples, rcond, "factorized gram matrix");
    if !(rcond >= rcond_min) { return Err(singular(rcond)); }
    let a = lu.solve(proj).map_err(KError::Solve)?;
    Ok((a, rcond))
}

/// Output of [`project`].
#[derive(Clone, Debug)]
pub struct Projection {
    /// Design matrix, `size × N`.
    pub design: nd::Array2<f64>,
    /// Gram matrix, `size × size`.
    pub gram: nd::Array2<f64>,
    /// Projection vector, length `size`.
    pub proj: nd::Array1<f64>,
    /// Expansion coefficients of the potential, length `size`.
    pub coeffs: nd::Array1<f64>,
    /// Reciprocal condition number of `gram`.
    pub rcond: f64,
}

impl Projection {
    /// Evaluate the projected potential `Σ_i a[i] f_i(x[k])` at the sample
    /// positions used to build `self`.
    pub fn fitted(&self) -> nd::Array1<f64> { self.design.t().dot(&self.coeffs) }

    /// Return the Euclidean norm of `V - fitted()`.
    ///
    /// `V` must be the potential array used to build `self`.
    pub fn residual<S>(&self, V: &Arr1<S>) -> KResult<f64>
    where S: nd::Data<Elem = f64>
    {
        l2_diff(&self.fitted(), V).map_err(KError::from)
    }
}

/// Project the sampled potential onto `basis`, building the design matrix,
/// Gram matrix and projection vector over the same positions and solving for
/// the expansion coefficients.
pub fn project<S, T>(x: &Arr1<S>, V: &Arr1<T>, basis: &Basis, rcond_min: f64)
    -> KResult<Projection>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    LengthError::check(x, V)?;
    KError::check_nonempty(x.len())?;
    let design = basis.design_matrix(x);
    let gram = design.dot(&design.t());
    let proj = design.dot(V);
    debug!(size = basis.len(), samples = x.len(), "assembled gram system");
    let (coeffs, rcond) = solve_coefficients(&gram, &proj, x.len(), rcond_min)?;
    Ok(Projection { design, gram, proj, coeffs, rcond })
}
