//! Exact kinetic-energy matrix in the Fourier basis.
//!
//! Every basis function is an eigenfunction of `-d²/dx²` with eigenvalue `k²`,
//! so the kinetic operator `-c d²/dx²` is diagonal:
//! ```text
//! K[i, i] = c ⌊(i + 1) / 2⌋²
//! ```
//! No quadrature is involved.

use ndarray as nd;
use crate::{ basis::BasisFn, error::KError };

/// Build the `size × size` kinetic matrix for kinetic constant `c`.
///
/// ```
/// use ndarray as nd;
/// use kspace::kinetic::kinetic_matrix;
///
/// let k = kinetic_matrix(4.0, 5).unwrap();
/// assert_eq!(k.diag(), nd::array![0.0, 4.0, 4.0, 16.0, 16.0]);
/// ```
pub fn kinetic_matrix(c: f64, size: usize) -> Result<nd::Array2<f64>, KError> {
    KError::check_constant(c)?;
    KError::check_size(size)?;
    Ok(kinetic_matrix_unchecked(c, size))
}

pub(crate) fn kinetic_matrix_unchecked(c: f64, size: usize) -> nd::Array2<f64> {
    let diag: nd::Array1<f64>
        = (0..size)
        .map(|n| match BasisFn::nth(n) {
            // keep an exact zero regardless of the sign of `c`
            BasisFn::Constant => 0.0,
            f => c * f.laplacian_eigenvalue(),
        })
        .collect();
    nd::Array2::from_diag(&diag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagonal() {
        let k = kinetic_matrix(4.0, 5).unwrap();
        assert_eq!(k.dim(), (5, 5));
        assert_eq!(k.diag(), nd::array![0.0, 4.0, 4.0, 16.0, 16.0]);
        for ((i, j), kij) in k.indexed_iter() {
            if i != j { assert_eq!(*kij, 0.0); }
        }
    }

    #[test]
    fn floor_rule() {
        let c = 5.0;
        let k = kinetic_matrix(c, 9).unwrap();
        for i in 1..9 {
            let m = ((i + 1) / 2) as f64;
            assert_eq!(k[[i, i]], m * m * c);
        }
        assert_eq!(k[[0, 0]], 0.0);
        assert_eq!(kinetic_matrix(-1.0, 1).unwrap()[[0, 0]], 0.0);
    }

    #[test]
    fn rejects_bad_parameters() {
        assert!(matches!(kinetic_matrix(1.0, 0), Err(KError::BadSize(0))));
        assert!(matches!(
            kinetic_matrix(f64::INFINITY, 3), Err(KError::BadConstant(_))));
    }
}
