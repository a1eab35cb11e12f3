use thiserror::Error;

/// Configuration for the Nelder–Mead solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    f_abs_tol: f64,
    f_rel_tol: f64,
    x_abs_tol: f64,
    initial_step: f64,
}

/// Errors that can occur when validating a Nelder–Mead solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("f_abs_tol must be finite and non-negative")]
    FAbs,

    #[error("f_rel_tol must be finite and non-negative")]
    FRel,

    #[error("x_abs_tol must be finite and non-negative")]
    XAbs,

    #[error("initial_step must be in (0, 1]")]
    InitialStep,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(1000, 1e-12, 1e-10, 1e-10).unwrap()
    }
}

impl Config {
    /// Creates a new config with validated tolerances and an initial step of `0.5`.
    ///
    /// # Errors
    ///
    /// Returns an error if any tolerance is negative or non-finite.
    pub fn new(
        max_iters: usize,
        f_abs_tol: f64,
        f_rel_tol: f64,
        x_abs_tol: f64,
    ) -> Result<Self, ConfigError> {
        if !f_abs_tol.is_finite() || f_abs_tol < 0.0 {
            return Err(ConfigError::FAbs);
        }
        if !f_rel_tol.is_finite() || f_rel_tol < 0.0 {
            return Err(ConfigError::FRel);
        }
        if !x_abs_tol.is_finite() || x_abs_tol < 0.0 {
            return Err(ConfigError::XAbs);
        }

        Ok(Self {
            max_iters,
            f_abs_tol,
            f_rel_tol,
            x_abs_tol,
            initial_step: 0.5,
        })
    }

    /// Returns a copy with a different iteration limit.
    #[must_use]
    pub fn with_max_iters(self, max_iters: usize) -> Self {
        Self { max_iters, ..self }
    }

    /// Returns a copy with a different initial simplex step.
    ///
    /// The step is the fraction of the distance from the bounds midpoint to
    /// the upper bound that each non-midpoint vertex is moved along its axis.
    ///
    /// # Errors
    ///
    /// Returns an error if `initial_step` is not in `(0, 1]`.
    pub fn with_initial_step(self, initial_step: f64) -> Result<Self, ConfigError> {
        if !(initial_step > 0.0 && initial_step <= 1.0) {
            return Err(ConfigError::InitialStep);
        }
        Ok(Self {
            initial_step,
            ..self
        })
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the absolute tolerance on the best-to-worst cost spread.
    #[must_use]
    pub fn f_abs_tol(&self) -> f64 {
        self.f_abs_tol
    }

    /// Returns the relative tolerance on the best-to-worst cost spread.
    #[must_use]
    pub fn f_rel_tol(&self) -> f64 {
        self.f_rel_tol
    }

    /// Returns the simplex size below which the simplex counts as collapsed.
    #[must_use]
    pub fn x_abs_tol(&self) -> f64 {
        self.x_abs_tol
    }

    /// Returns the initial simplex step fraction.
    #[must_use]
    pub fn initial_step(&self) -> f64 {
        self.initial_step
    }
}
