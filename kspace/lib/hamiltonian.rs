//! Assembly of the Hamiltonian matrix from the potential expansion and the
//! kinetic matrix.
//!
//! Four potential terms are available, selected by [`Assembly`]:
//! ```text
//! Broadcast:    Vmat[i, j] = a[j]
//! Transposed:   Vmat[i, j] = a[i]
//! Symmetrized:  Vmat[i, j] = (a[i] + a[j]) / 2
//! Projected:    Vmat[i, j] = Σ_k f_i(x[k]) V[k] f_j(x[k])
//! ```
//! in each case with `H = Vmat + K`.
//!
//! `Broadcast` is the documented column-indexed formula and is the default.
//! `Transposed` is what the historical program actually computed: it tiled
//! `a` into rows and then transposed the result. Neither is symmetric unless
//! `a` is constant, and the eigensolver in [`solve`][crate::solve] reads only
//! the lower triangle of `H`, so the matrices diagonalized are
//! `a[min(i, j)] + K` and `a[max(i, j)] + K` respectively. Their spectra
//! differ; use `Transposed` to reproduce historical results. A warning is
//! logged whenever the assembled matrix is asymmetric.

use std::str::FromStr;
use ndarray as nd;
use tracing::warn;
use crate::{
    Arr1,
    Arr2,
    error::{ KError, LengthError },
};

/// Potential-term selector.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Assembly {
    /// Every row equals the coefficient vector: `Vmat[i, j] = a[j]`.
    #[default]
    Broadcast,
    /// Every column equals the coefficient vector: `Vmat[i, j] = a[i]`.
    Transposed,
    /// Symmetric part of the broadcast matrix: `Vmat[i, j] = (a[i] + a[j]) / 2`.
    Symmetrized,
    /// Full double projection of the sampled potential onto the basis.
    Projected,
}

impl Assembly {
    /// Return `true` if `self` is `Broadcast`.
    pub fn is_broadcast(&self) -> bool { matches!(self, Self::Broadcast) }

    /// Return `true` if `self` is `Transposed`.
    pub fn is_transposed(&self) -> bool { matches!(self, Self::Transposed) }

    /// Return `true` if `self` is `Symmetrized`.
    pub fn is_symmetrized(&self) -> bool { matches!(self, Self::Symmetrized) }

    /// Return `true` if `self` is `Projected`.
    pub fn is_projected(&self) -> bool { matches!(self, Self::Projected) }

    /// Return `true` if the assembled potential term is always symmetric.
    pub fn is_symmetric(&self) -> bool {
        !(self.is_broadcast() || self.is_transposed())
    }

    /// Return the lower-case name of `self`, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Self::Broadcast => "broadcast",
            Self::Transposed => "transposed",
            Self::Symmetrized => "symmetrized",
            Self::Projected => "projected",
        }
    }
}

impl std::fmt::Display for Assembly {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Returned when parsing an unknown [`Assembly`] name.
#[derive(Debug, thiserror::Error)]
#[error("unknown assembly {0:?}; expected one of broadcast, transposed, symmetrized, projected")]
pub struct AssemblyParseError(pub String);

impl FromStr for Assembly {
    type Err = AssemblyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "broadcast" => Ok(Self::Broadcast),
            "transposed" => Ok(Self::Transposed),
            "symmetrized" => Ok(Self::Symmetrized),
            "projected" => Ok(Self::Projected),
            _ => Err(AssemblyParseError(s.to_string())),
        }
    }
}

/// Broadcast `a` along rows, so that `Vmat[i, j] = a[j]`.
pub fn broadcast_potential<S>(a: &Arr1<S>) -> nd::Array2<f64>
where S: nd::Data<Elem = f64>
{
    let n = a.len();
    let mut vmat: nd::Array2<f64> = nd::Array2::zeros((n, n));
    vmat.outer_iter_mut().for_each(|mut row| { row.assign(a); });
    vmat
}

/// Broadcast `a` along columns, so that `Vmat[i, j] = a[i]`.
pub fn transposed_potential<S>(a: &Arr1<S>) -> nd::Array2<f64>
where S: nd::Data<Elem = f64>
{
    let n = a.len();
    let mut vmat: nd::Array2<f64> = nd::Array2::zeros((n, n));
    vmat.axis_iter_mut(nd::Axis(1)).for_each(|mut col| { col.assign(a); });
    vmat
}

/// Form `Vmat[i, j] = (a[i] + a[j]) / 2`.
pub fn symmetrized_potential<S>(a: &Arr1<S>) -> nd::Array2<f64>
where S: nd::Data<Elem = f64>
{
    let n = a.len();
    nd::Array2::from_shape_fn((n, n), |(i, j)| (a[i] + a[j]) / 2.0)
}

/// Form `Vmat[i, j] = Σ_k B[i, k] V[k] B[j, k]` from a `size × N` design
/// matrix `B`.
pub fn projected_potential<S, T>(design: &Arr2<S>, V: &Arr1<T>)
    -> Result<nd::Array2<f64>, KError>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    let (_, n) = design.dim();
    if n != V.len() { return Err(LengthError(n, V.len()).into()); }
    let weighted: nd::Array2<f64> = design * &V.view().insert_axis(nd::Axis(0));
    Ok(weighted.dot(&design.t()))
}

/// Return `max |H[i, j] - H[j, i]|`.
pub fn symmetry_defect<S>(h: &Arr2<S>) -> f64
where S: nd::Data<Elem = f64>
{
    h.indexed_iter()
        .filter(|((i, j), _)| i > j)
        .map(|((i, j), hij)| (hij - h[[j, i]]).abs())
        .fold(0.0, f64::max)
}

/// Add a potential term to the kinetic matrix.
///
/// Logs a warning if the result is asymmetric.
pub fn assemble<S, T>(vmat: &Arr2<S>, kinetic: &Arr2<T>)
    -> Result<nd::Array2<f64>, KError>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    if vmat.dim() != kinetic.dim() {
        return Err(LengthError(vmat.nrows(), kinetic.nrows()).into());
    }
    let h = vmat + kinetic;
    let defect = symmetry_defect(&h);
    if defect > 0.0 {
        warn!(
            defect,
            "assembled hamiltonian is asymmetric; only its lower triangle \
            will be diagonalized"
        );
    }
    Ok(h)
}
