use thiserror::Error;
use wayfind_solvers::optimization::nelder_mead;

/// Tuning constants for the multilateration cost.
///
/// The defaults reproduce the field-tuned behavior: residuals are capped at
/// 7.5 m on the over-estimate side only, at most 3 approximate readings are
/// used, approximate readings are ignored once more than 2 exact readings
/// are available, and otherwise exact residuals weigh 10× approximate ones.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCostConfig"))]
pub struct CostConfig {
    residual_cap: f64,
    approximate_limit: usize,
    exact_quorum: usize,
    exact_weight: f64,
}

/// Errors that can occur when validating a [`CostConfig`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CostConfigError {
    #[error("residual_cap must be finite and positive")]
    ResidualCap,

    #[error("exact_weight must be finite and non-negative")]
    ExactWeight,
}

impl Default for CostConfig {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(7.5, 3, 2, 10.0).unwrap()
    }
}

impl CostConfig {
    /// Creates a new config.
    ///
    /// # Errors
    ///
    /// Returns an error if `residual_cap` is not finite and positive, or
    /// `exact_weight` is not finite and non-negative.
    pub fn new(
        residual_cap: f64,
        approximate_limit: usize,
        exact_quorum: usize,
        exact_weight: f64,
    ) -> Result<Self, CostConfigError> {
        if !residual_cap.is_finite() || residual_cap <= 0.0 {
            return Err(CostConfigError::ResidualCap);
        }
        if !exact_weight.is_finite() || exact_weight < 0.0 {
            return Err(CostConfigError::ExactWeight);
        }

        Ok(Self {
            residual_cap,
            approximate_limit,
            exact_quorum,
            exact_weight,
        })
    }

    /// Upper limit applied to `predicted - measured` before squaring.
    ///
    /// Only over-estimates are capped; a predicted distance shorter than the
    /// reading contributes its full squared residual.
    #[must_use]
    pub fn residual_cap(&self) -> f64 {
        self.residual_cap
    }

    /// Maximum number of approximate readings kept per batch.
    #[must_use]
    pub fn approximate_limit(&self) -> usize {
        self.approximate_limit
    }

    /// Exact readings beyond this count make approximate readings irrelevant.
    #[must_use]
    pub fn exact_quorum(&self) -> usize {
        self.exact_quorum
    }

    /// Multiplier on the exact mean when blending with approximate readings.
    #[must_use]
    pub fn exact_weight(&self) -> f64 {
        self.exact_weight
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawCostConfig {
    residual_cap: f64,
    approximate_limit: usize,
    exact_quorum: usize,
    exact_weight: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCostConfig> for CostConfig {
    type Error = CostConfigError;

    fn try_from(raw: RawCostConfig) -> Result<Self, Self::Error> {
        Self::new(
            raw.residual_cap,
            raw.approximate_limit,
            raw.exact_quorum,
            raw.exact_weight,
        )
    }
}

/// Everything [`locate`](crate::locate) needs besides the inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LocateConfig {
    /// Cost tuning.
    pub cost: CostConfig,

    /// Nelder–Mead iteration budget per estimate.
    pub max_iters: usize,
}

impl Default for LocateConfig {
    fn default() -> Self {
        Self {
            cost: CostConfig::default(),
            max_iters: nelder_mead::Config::default().max_iters(),
        }
    }
}

impl LocateConfig {
    /// Returns the solver config: default tolerances with this iteration budget.
    #[must_use]
    pub fn solver(&self) -> nelder_mead::Config {
        nelder_mead::Config::default().with_max_iters(self.max_iters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_field_tuning() {
        let config = CostConfig::default();

        assert_eq!(config.residual_cap(), 7.5);
        assert_eq!(config.approximate_limit(), 3);
        assert_eq!(config.exact_quorum(), 2);
        assert_eq!(config.exact_weight(), 10.0);
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            CostConfig::new(0.0, 3, 2, 10.0),
            Err(CostConfigError::ResidualCap)
        );
        assert_eq!(
            CostConfig::new(f64::INFINITY, 3, 2, 10.0),
            Err(CostConfigError::ResidualCap)
        );
        assert_eq!(
            CostConfig::new(7.5, 3, 2, f64::NAN),
            Err(CostConfigError::ExactWeight)
        );
    }

    #[test]
    fn locate_config_drives_solver_budget() {
        let config = LocateConfig {
            max_iters: 25,
            ..LocateConfig::default()
        };
        assert_eq!(config.solver().max_iters(), 25);
        assert_eq!(LocateConfig::default().solver(), nelder_mead::Config::default());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: LocateConfig = serde_json::from_str(r#"{ "max_iters": 200 }"#).unwrap();
        assert_eq!(config.max_iters, 200);
        assert_eq!(config.cost, CostConfig::default());

        let bad = r#"{ "cost": { "residual_cap": -1, "approximate_limit": 3, "exact_quorum": 2, "exact_weight": 10 } }"#;
        assert!(serde_json::from_str::<LocateConfig>(bad).is_err());
    }
}
