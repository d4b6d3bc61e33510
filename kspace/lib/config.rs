//! Solver parameters.

use crate::{
    error::KError,
    hamiltonian::Assembly,
    DEF_C,
    DEF_RCOND_MIN,
    DEF_SIZE,
};

/// Parameters for a single solve.
///
/// ```
/// use kspace::{ config::Config, hamiltonian::Assembly };
///
/// let config = Config::new(2.0, 7).with_assembly(Assembly::Projected);
/// assert!(config.validate().is_ok());
/// assert!(Config::new(2.0, 0).validate().is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Kinetic constant `c` in `-c d²/dx² + V(x)` (default: `5.0`).
    pub c: f64,
    /// Number of basis functions (default: `3`).
    pub size: usize,
    /// Potential term of the Hamiltonian (default: [`Assembly::Broadcast`]).
    pub assembly: Assembly,
    /// Smallest acceptable reciprocal condition number of the Gram matrix
    /// (default: `1e-12`).
    pub rcond_min: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            c: DEF_C,
            size: DEF_SIZE,
            assembly: Assembly::default(),
            rcond_min: DEF_RCOND_MIN,
        }
    }
}

impl Config {
    /// Create a new `Config` with the default assembly and conditioning
    /// threshold.
    pub fn new(c: f64, size: usize) -> Self {
        Self { c, size, ..Self::default() }
    }

    /// Set the Hamiltonian assembly.
    pub fn with_assembly(mut self, assembly: Assembly) -> Self {
        self.assembly = assembly;
        self
    }

    /// Set the Gram conditioning threshold.
    pub fn with_rcond_min(mut self, rcond_min: f64) -> Self {
        self.rcond_min = rcond_min;
        self
    }

    /// Check all parameters, returning the first violation found.
    pub fn validate(&self) -> Result<(), KError> {
        KError::check_size(self.size)?;
        KError::check_constant(self.c)?;
        KError::check_rcond(self.rcond_min)?;
        Ok(())
    }
}
