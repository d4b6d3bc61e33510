//! The real Fourier basis on a periodic domain.
//!
//! Basis functions are ordered by increasing frequency, alternating sine and
//! cosine after the leading constant:
//! ```text
//! n:     0    1       2       3        4        5        ...
//! f_n:   1    sin(x)  cos(x)  sin(2x)  cos(2x)  sin(3x)  ...
//! ```
//!
//! ```
//! use std::f64::consts::PI;
//! use ndarray as nd;
//! use kspace::basis::Basis;
//!
//! let basis = Basis::new(3).unwrap();
//! let x = nd::array![0.0, PI / 2.0, PI];
//! let design = basis.design_matrix(&x);
//! assert_eq!(design.dim(), (3, 3));
//! assert!((design[[1, 1]] - 1.0).abs() < 1e-12); // sin(π/2)
//! assert!((design[[2, 2]] + 1.0).abs() < 1e-12); // cos(π)
//! ```

use ndarray as nd;
use crate::{ Arr1, error::KError };

/// A single element of the Fourier basis.
///
/// The frequency is stored by value, so every variant is a self-contained,
/// immutable function of position.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BasisFn {
    /// The constant function 1.
    Constant,
    /// `sin(k x)` for `k ≥ 1`.
    Sine(usize),
    /// `cos(k x)` for `k ≥ 1`.
    Cosine(usize),
}

impl BasisFn {
    /// Return the `n`-th (0-based) basis function.
    pub fn nth(n: usize) -> Self {
        if n == 0 {
            Self::Constant
        } else if n % 2 == 1 {
            Self::Sine((n + 1) / 2)
        } else {
            Self::Cosine(n / 2)
        }
    }

    /// Return the position of `self` in the basis ordering.
    pub fn index(&self) -> usize {
        match self {
            Self::Constant => 0,
            Self::Sine(k) => 2 * k - 1,
            Self::Cosine(k) => 2 * k,
        }
    }

    /// Return the angular frequency of `self` (0 for the constant).
    pub fn frequency(&self) -> usize {
        match self {
            Self::Constant => 0,
            Self::Sine(k) | Self::Cosine(k) => *k,
        }
    }

    /// Return the eigenvalue of `-d²/dx²` on `self`, i.e. `k²`.
    pub fn laplacian_eigenvalue(&self) -> f64 {
        (self.frequency() as f64).powi(2)
    }

    /// Evaluate at a single position.
    pub fn eval_at(&self, x: f64) -> f64 {
        match self {
            Self::Constant => 1.0,
            Self::Sine(k) => (*k as f64 * x).sin(),
            Self::Cosine(k) => (*k as f64 * x).cos(),
        }
    }

    /// Evaluate over an array of positions, returning an array of the same
    /// length.
    pub fn eval<S>(&self, x: &Arr1<S>) -> nd::Array1<f64>
    where S: nd::Data<Elem = f64>
    {
        match self {
            Self::Constant => nd::Array1::ones(x.len()),
            _ => x.mapv(|xk| self.eval_at(xk)),
        }
    }
}

/// An ordered, truncated Fourier basis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Basis {
    fns: Vec<BasisFn>,
}

impl Basis {
    /// Construct the first `size` basis functions.
    ///
    /// Fails with [`KError::BadSize`] if `size` is zero.
    pub fn new(size: usize) -> Result<Self, KError> {
        KError::check_size(size)?;
        let fns: Vec<BasisFn> = (0..size).map(BasisFn::nth).collect();
        Ok(Self { fns })
    }

    /// Return the number of basis functions.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.fns.len() }

    /// Get the `n`-th basis function, if present.
    pub fn get(&self, n: usize) -> Option<&BasisFn> { self.fns.get(n) }

    /// Iterate over the basis functions in order.
    pub fn iter(&self) -> std::slice::Iter<'_, BasisFn> { self.fns.iter() }

    /// Evaluate every basis function at every position.
    ///
    /// Row `i` of the returned `size × N` matrix holds basis function `i`
    /// evaluated over `x`.
    pub fn design_matrix<S>(&self, x: &Arr1<S>) -> nd::Array2<f64>
    where S: nd::Data<Elem = f64>
    {
        let mut design: nd::Array2<f64>
            = nd::Array2::zeros((self.fns.len(), x.len()));
        design.outer_iter_mut().zip(&self.fns)
            .for_each(|(mut row, f)| { row.assign(&f.eval(x)); });
        design
    }

    /// Evaluate the expansion `Σ_i coeffs[i] f_i(x)` over `x`.
    ///
    /// Coefficients beyond the length of the basis are ignored, as are basis
    /// functions beyond the length of `coeffs`.
    pub fn reconstruct<S, T>(&self, coeffs: &Arr1<S>, x: &Arr1<T>)
        -> nd::Array1<f64>
    where
        S: nd::Data<Elem = f64>,
        T: nd::Data<Elem = f64>,
    {
        self.fns.iter().zip(coeffs)
            .fold(nd::Array1::zeros(x.len()), |acc, (f, ak)| {
                acc + *ak * f.eval(x)
            })
    }
}

impl<'a> IntoIterator for &'a Basis {
    type Item = &'a BasisFn;
    type IntoIter = std::slice::Iter<'a, BasisFn>;

    fn into_iter(self) -> Self::IntoIter { self.fns.iter() }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;
    use approx::assert_abs_diff_eq;
    use super::*;

    #[test]
    fn ordering() {
        let expected = [
            BasisFn::Constant,
            BasisFn::Sine(1),
            BasisFn::Cosine(1),
            BasisFn::Sine(2),
            BasisFn::Cosine(2),
            BasisFn::Sine(3),
        ];
        for (n, f) in expected.iter().enumerate() {
            assert_eq!(BasisFn::nth(n), *f);
            assert_eq!(f.index(), n);
        }
        let basis = Basis::new(6).unwrap();
        assert!(basis.iter().copied().eq(expected));
    }

    #[test]
    fn constant_is_ones() {
        let basis = Basis::new(4).unwrap();
        for n in [0, 1, 7, 100] {
            let x: nd::Array1<f64> = nd::Array1::linspace(-3.0, 3.0, n);
            let y = basis.get(0).unwrap().eval(&x);
            assert_eq!(y.len(), n);
            assert!(y.iter().all(|yk| *yk == 1.0));
        }
    }

    #[test]
    fn low_order_values() {
        let basis = Basis::new(3).unwrap();
        let x = nd::array![0.0, PI / 2.0, PI];
        let f0 = basis.get(0).unwrap().eval(&x);
        let f1 = basis.get(1).unwrap().eval(&x);
        let f2 = basis.get(2).unwrap().eval(&x);
        assert_abs_diff_eq!(f0, nd::array![1.0, 1.0, 1.0], epsilon = 1e-12);
        assert_abs_diff_eq!(f1, nd::array![0.0, 1.0, 0.0], epsilon = 1e-12);
        assert_abs_diff_eq!(f2, nd::array![1.0, 0.0, -1.0], epsilon = 1e-12);
    }

    #[test]
    fn independent_frequencies() {
        // each function keeps its own frequency regardless of construction
        // order
        let basis = Basis::new(5).unwrap();
        let x = 0.3;
        let vals: Vec<f64> = basis.iter().map(|f| f.eval_at(x)).collect();
        assert_abs_diff_eq!(vals[1], (1.0 * x).sin(), epsilon = 1e-15);
        assert_abs_diff_eq!(vals[3], (2.0 * x).sin(), epsilon = 1e-15);
        assert_abs_diff_eq!(vals[4], (2.0 * x).cos(), epsilon = 1e-15);
    }

    #[test]
    fn zero_size() {
        assert!(matches!(Basis::new(0), Err(KError::BadSize(0))));
    }

    #[test]
    fn laplacian() {
        let eigs: Vec<f64>
            = (0..5).map(|n| BasisFn::nth(n).laplacian_eigenvalue()).collect();
        assert_eq!(eigs, vec![0.0, 1.0, 1.0, 4.0, 4.0]);
    }

    #[test]
    fn design_and_reconstruct() {
        let basis = Basis::new(3).unwrap();
        let x: nd::Array1<f64> = nd::Array1::linspace(0.0, 6.0, 13);
        let design = basis.design_matrix(&x);
        assert_eq!(design.dim(), (3, 13));
        for (row, f) in design.outer_iter().zip(&basis) {
            assert_abs_diff_eq!(row, f.eval(&x), epsilon = 1e-15);
        }
        let coeffs = nd::array![0.5, -2.0, 3.0];
        let y = basis.reconstruct(&coeffs, &x);
        let expected = x.mapv(|xk| 0.5 - 2.0 * xk.sin() + 3.0 * xk.cos());
        assert_abs_diff_eq!(y, expected, epsilon = 1e-12);
    }
}
