//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [Kinetic term](#kinetic-term)
//! - [Potential term](#potential-term)
//! - [Hamiltonian assembly](#hamiltonian-assembly)
//! - [Conditioning](#conditioning)
//!
//! # Background
//! We look for eigenpairs of the operator
//! ```text
//!         ∂²
//! H = - c --- + V(x)
//!         ∂x²
//! ```
//! where, for the usual time-independent Schrödinger equation (TISE),
//! *c* = *ħ*²/2 *m* in whatever units are convenient, and *V*(*x*) is known
//! only through a table of samples (*x*\[*k*\], *V*\[*k*\]) for *k* ∊ {0, ...,
//! *N* - 1}.
//!
//! Rather than discretizing the domain, the Galerkin approach restricts *H* to
//! the span of a finite set of basis functions *f*<sub>0</sub>, ...,
//! *f*<sub>*M*-1</sub> and diagonalizes the resulting *M*×*M* matrix. Here the
//! basis is the real Fourier basis, ordered by increasing frequency:
//! ```text
//! f_0(x)      = 1
//! f_{2k-1}(x) = sin(k x)
//! f_{2k}(x)   = cos(k x),    k ≥ 1
//! ```
//! These are orthogonal over any interval of length 2π and, more usefully, are
//! each eigenfunctions of the second derivative. Eigenvectors of the truncated
//! matrix are expansion coefficients in this basis, and the lowest eigenvalue
//! approximates the ground-state energy.
//!
//! # Kinetic term
//! Since
//! ```text
//! ∂²                              ∂²
//! --- sin(k x) = -k² sin(k x),    --- cos(k x) = -k² cos(k x)
//! ∂x²                             ∂x²
//! ```
//! the kinetic operator is exactly diagonal in this basis,
//! ```text
//! K[i, i] = c ⌊(i + 1) / 2⌋²
//! ```
//! with *K*\[0, 0\] = 0 for the constant function. No quadrature is needed.
//!
//! # Potential term
//! The potential is first expanded in the same basis,
//! *V*(*x*) ≈ Σ<sub>*i*</sub> *a*\[*i*\] *f*<sub>*i*</sub>(*x*). Taking inner
//! products with each basis function and approximating the integrals by plain
//! sums over the sample points gives the linear system
//! ```text
//! Σ_j G[i, j] a[j] = p[i]
//!
//! G[i, j] = Σ_k f_i(x[k]) f_j(x[k])
//! p[i]    = Σ_k f_i(x[k]) V[k]
//! ```
//! No quadrature weights are applied. With the design matrix *B*\[*i*, *k*\] =
//! *f*<sub>*i*</sub>(*x*\[*k*\]) these are the normal equations *B* *B*ᵀ *a* =
//! *B* *V*, so *a* is the least-squares fit of the basis to the samples and,
//! for a fixed sample set, the fit residual can only shrink as basis functions
//! are added. On *N* equispaced samples spanning exactly one period the Gram
//! matrix is diagonal, diag(*N*, *N*/2, *N*/2, ...), and *a* reduces to the
//! discrete Fourier coefficients of the samples.
//!
//! # Hamiltonian assembly
//! The default assembly broadcasts the coefficient vector along rows,
//! ```text
//! H[i, j] = a[j] + K[i, j]
//! ```
//! which depends only on the column index and is not symmetric unless *a* is
//! constant. The symmetric eigensolver reads only the lower triangle, so the
//! matrix actually diagonalized is
//! ```text
//! H'[i, j] = a[min(i, j)] + K[i, j]
//! ```
//! The historical program built the same tile of rows but then transposed it,
//! giving *H*\[*i*, *j*\] = *a*\[*i*\] + *K*\[*i*, *j*\] and, after the
//! lower-triangle read, *a*\[max(*i*, *j*)\] + *K*\[*i*, *j*\]. The two
//! orientations give different spectra; select
//! [`Assembly::Transposed`][crate::hamiltonian::Assembly::Transposed] to
//! reproduce historical results.
//!
//! Two symmetric alternatives are available through
//! [`Assembly`][crate::hamiltonian::Assembly]: the symmetrized broadcast
//! (*a*\[*i*\] + *a*\[*j*\]) / 2, and the full double projection
//! ```text
//! Vmat[i, j] = Σ_k f_i(x[k]) V[k] f_j(x[k])
//! ```
//! which is the discrete analogue of ⟨*f*<sub>*i*</sub>|*V*|*f*<sub>*j*</sub>⟩
//! under the same unweighted summation rule. Note that these sums are not
//! normalized by the Gram matrix, so the scale of this term grows with the
//! number of samples while the kinetic term does not.
//!
//! # Conditioning
//! The Gram system is only well posed when the basis functions are linearly
//! independent on the sample set. This fails when there are fewer distinct
//! sample positions than basis functions, when positions are duplicated, or
//! when the samples land on common zeros of some basis function (e.g. sin(*x*)
//! sampled only at multiples of π). The reciprocal condition number
//! ```text
//! rcond(G) = 1 / (‖G‖₁ ‖G⁻¹‖₁)
//! ```
//! is estimated from the LU factorization of *G*, and solves with
//! rcond(*G*) below a configurable threshold are rejected rather than returned.
