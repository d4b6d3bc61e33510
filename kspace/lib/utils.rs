//! Miscellaneous tools.

use ndarray as nd;
use crate::{ Arr1, error::LengthError };

/// Integrate using the trapezoidal rule on a uniform grid.
///
/// *Panics if `y` has length less than 2*.
pub fn trapz<S>(y: &Arr1<S>, dx: f64) -> f64
where S: nd::Data<Elem = f64>
{
    let n: usize = y.len();
    (dx / 2.0) * (y[0] + 2.0 * y.slice(nd::s![1..n - 1]).sum() + y[n - 1])
}

/// Calculate the norm of a wavefunction sampled on a uniform grid.
///
/// *Panics if `q` has length less than 2*.
pub fn wf_norm<S>(q: &Arr1<S>, dx: f64) -> f64
where S: nd::Data<Elem = f64>
{
    trapz(&q.mapv(|qk| qk.powi(2)), dx)
}

/// Return a copy of a wavefunction sampled on a uniform grid, normalized to
/// unit norm.
///
/// *Panics if `q` has length less than 2*.
pub fn wf_normalized<S>(q: &Arr1<S>, dx: f64) -> nd::Array1<f64>
where S: nd::Data<Elem = f64>
{
    let norm = wf_norm(q, dx).sqrt();
    q.mapv(|qk| qk / norm)
}

/// Return the Euclidean norm of `a - b`.
pub fn l2_diff<S, T>(a: &Arr1<S>, b: &Arr1<T>) -> Result<f64, LengthError>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    LengthError::check(a, b)?;
    let sq: f64
        = a.iter().zip(b)
        .map(|(ak, bk)| (ak - bk).powi(2))
        .sum();
    Ok(sq.sqrt())
}
