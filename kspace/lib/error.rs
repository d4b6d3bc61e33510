//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! Every error that can abort a solve reports the pipeline [`Stage`] it came
//! from, so that callers can tell a bad input table from a badly conditioned
//! basis without inspecting messages.
//!
//! [anyhow]: https://crates.io/crates/anyhow

use std::{ fmt, num::ParseFloatError, path::PathBuf };
use ndarray as nd;
use ndarray_linalg::error::LinalgError;
use thiserror::Error;

/// Pipeline stage at which an error was raised.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Reading and validating the sampled potential.
    Input,
    /// Validating solver parameters.
    Configuration,
    /// Building and solving the Gram system.
    Projection,
    /// Diagonalizing the Hamiltonian.
    Eigendecomposition,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input => write!(f, "input"),
            Self::Configuration => write!(f, "configuration"),
            Self::Projection => write!(f, "projection"),
            Self::Eigendecomposition => write!(f, "eigendecomposition"),
        }
    }
}

/// Returned when an operation requiring equal-length arrays encounters arrays
/// with unequal length.
#[derive(Debug, Error)]
#[error("encountered arrays with incompatible lengths; got {0} and {1}")]
pub struct LengthError(pub usize, pub usize);

impl LengthError {
    pub(crate) fn check<S, A, T, B>(
        a: &nd::ArrayBase<S, nd::Ix1>,
        b: &nd::ArrayBase<T, nd::Ix1>,
    ) -> Result<(), Self>
    where
        S: nd::Data<Elem = A>,
        T: nd::Data<Elem = B>,
    {
        let na = a.len();
        let nb = b.len();
        (na == nb).then_some(()).ok_or(Self(na, nb))
    }
}

/// Returned from the projection and eigensolver pipeline.
#[derive(Debug, Error)]
pub enum KError {
    /// Returned when a basis size of zero is requested.
    #[error("basis size must be at least 1; got {0}")]
    BadSize(usize),

    /// Returned when the kinetic constant is NaN or infinite.
    #[error("kinetic constant must be finite; got {0}")]
    BadConstant(f64),

    /// Returned when the conditioning threshold is not a positive, finite
    /// number.
    #[error("rcond threshold must be positive and finite; got {0}")]
    BadRcond(f64),

    /// Returned when a sample set contains no points.
    #[error("sample set must contain at least one point")]
    EmptySamples,

    /// Returned when a position or potential sample is NaN or infinite.
    #[error("{array} sample {index} is not finite: {value}")]
    NonFinite { array: &'static str, index: usize, value: f64 },

    /// Returned when a grid step is zero, NaN, or infinite, or the grid
    /// bounds are not finite.
    #[error("grid must have finite bounds and a finite, nonzero step; got {0:?}")]
    BadGrid((f64, f64, f64)),

    /// Returned when the Gram matrix is singular or its reciprocal condition
    /// number falls below the configured threshold.
    #[error(
        "gram matrix is singular or ill-conditioned for {size} basis functions \
        on {samples} samples; rcond = {rcond:e} (threshold {min:e})"
    )]
    Singular { size: usize, samples: usize, rcond: f64, min: f64 },

    /// [`LengthError`]
    #[error("array length error: {0}")]
    Length(#[from] LengthError),

    /// [`LinalgError`] raised while solving for the expansion coefficients.
    #[error("linear solve failed: {0}")]
    Solve(LinalgError),

    /// [`LinalgError`] raised by the symmetric eigensolver.
    #[error("eigensolver failed: {0}")]
    Eigh(LinalgError),
}

impl KError {
    /// Return the pipeline stage associated with `self`.
    pub fn stage(&self) -> Stage {
        match self {
            Self::BadSize(_) | Self::BadConstant(_) | Self::BadRcond(_)
                => Stage::Configuration,
            Self::EmptySamples
                | Self::NonFinite { .. }
                | Self::BadGrid(_)
                | Self::Length(_)
                => Stage::Input,
            Self::Singular { .. } | Self::Solve(_) => Stage::Projection,
            Self::Eigh(_) => Stage::Eigendecomposition,
        }
    }

    pub(crate) fn check_size(size: usize) -> Result<(), Self> {
        (size != 0).then_some(()).ok_or(Self::BadSize(size))
    }

    pub(crate) fn check_constant(c: f64) -> Result<(), Self> {
        c.is_finite().then_some(()).ok_or(Self::BadConstant(c))
    }

    pub(crate) fn check_rcond(rcond_min: f64) -> Result<(), Self> {
        (rcond_min.is_finite() && rcond_min > 0.0)
            .then_some(())
            .ok_or(Self::BadRcond(rcond_min))
    }

    pub(crate) fn check_nonempty(n: usize) -> Result<(), Self> {
        (n != 0).then_some(()).ok_or(Self::EmptySamples)
    }

    pub(crate) fn check_finite<S>(array: &'static str, a: &nd::ArrayBase<S, nd::Ix1>)
        -> Result<(), Self>
    where S: nd::Data<Elem = f64>
    {
        a.iter().enumerate()
            .find(|(_, ak)| !ak.is_finite())
            .map_or(Ok(()), |(index, ak)| {
                Err(Self::NonFinite { array, index, value: *ak })
            })
    }

    pub(crate) fn check_grid(xargs: (f64, f64, f64)) -> Result<(), Self> {
        let (start, end, step) = xargs;
        (start.is_finite() && end.is_finite() && step.is_finite() && step != 0.0)
            .then_some(())
            .ok_or(Self::BadGrid(xargs))
    }
}

/// Returned when reading a potential table.
#[derive(Debug, Error)]
pub enum InputError {
    /// The table file could not be read.
    #[error("could not read {path:?}: {source}")]
    Io { path: PathBuf, source: std::io::Error },

    /// A data line had fewer than two columns.
    #[error("line {line}: expected two columns (position, potential)")]
    MissingColumn { line: usize },

    /// A data token could not be parsed as a float.
    #[error("line {line}: could not parse {token:?} as a number: {source}")]
    BadFloat { line: usize, token: String, source: ParseFloatError },

    /// A data token parsed as NaN or an infinity.
    #[error("line {line}: {token:?} is not a finite number")]
    NonFinite { line: usize, token: String },

    /// The parsed columns did not form a valid sample set.
    #[error("invalid sample set: {0}")]
    Samples(#[from] KError),
}

impl InputError {
    /// Return the pipeline stage associated with `self`.
    pub fn stage(&self) -> Stage {
        match self {
            Self::Samples(err) => err.stage(),
            _ => Stage::Input,
        }
    }
}
