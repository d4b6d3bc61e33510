#![allow(dead_code, non_snake_case)]

//! Provides functions and higher-level constructs for approximate solution of
//! the one-dimensional, time-independent Schrödinger equation
//! ```text
//! -c ∂²ψ/∂x² + V(x) ψ(x) = E ψ(x)
//! ```
//! for a potential known only at a set of sample points, via Galerkin
//! projection onto a truncated real Fourier basis.
//!
//! The pipeline is:
//! - [Basis][basis] construction: constant, then alternating sine/cosine of
//!   increasing frequency
//! - [Kinetic][kinetic] matrix, exact and diagonal in this basis
//! - [Projection][project] of the sampled potential via the discrete Gram
//!   system
//! - [Hamiltonian][hamiltonian] assembly, with a selectable potential term
//! - Symmetric [eigendecomposition][solve]
//!
//! Potential tables can be read from text files using [`table`].
//!
//! ```
//! use kspace::{ config::Config, solve::SampleSet };
//!
//! let samples = SampleSet::new_range(
//!     (0.0, std::f64::consts::TAU, 0.05), |x| 1.0 - x.cos()).unwrap();
//! let spectrum = samples.solve(&Config::default()).unwrap();
//! let gs = spectrum.ground_state();
//! println!("E0 = {:.6}; coefficients = {}", gs.e, gs.coeffs);
//! ```
//!
//! See [`docs`] for theoretical background.

pub mod basis;
pub mod config;
pub mod error;
pub mod hamiltonian;
pub mod kinetic;
pub mod project;
pub mod solve;
pub mod table;
pub mod utils;

pub mod docs;

pub(crate) const DEF_C: f64 = 5.0;
pub(crate) const DEF_SIZE: usize = 3;
pub(crate) const DEF_RCOND_MIN: f64 = 1e-12;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
pub type Arr2<S> = ndarray::ArrayBase<S, ndarray::Ix2>;
