//! # Simulation Configuration
//!
//! Tuning constants for the quick-match engine, kept in one place so balance
//! changes never touch the algorithm.
//!
//! ## Usage
//! ```rust
//! use fk_core::engine::config::SimulationConfig;
//!
//! let config = SimulationConfig::default();
//! let flat = SimulationConfig::deterministic();
//! assert_eq!(flat.tactic_variance, 0.0);
//! # let _ = config;
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};

/// Largest accepted `regulation_exchanges` or `extra_time_exchanges`.
pub const MAX_PHASE_EXCHANGES: u32 = 1000;
/// Largest accepted `penalty_base + penalty_spread`.
pub const MAX_SHOOTOUT_PENALTIES: u32 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Scale of the pre-match tactical noise. Each noise term is a uniform
    /// draw in [-1, 1) times this value.
    pub tactic_variance: f32,
    /// Multiplier on every outfield "utilize" contribution. Tunes goals per
    /// match.
    pub utilize_multiplier: f32,
    /// Exchanges played in regulation time.
    pub regulation_exchanges: u32,
    /// Exchanges added when extra time is played.
    pub extra_time_exchanges: u32,
    /// Minimum successful penalties per side in a shootout.
    pub penalty_base: u32,
    /// Shootout penalties are `penalty_base + uniform(0..=penalty_spread)`.
    pub penalty_spread: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tactic_variance: 0.5,
            utilize_multiplier: 4.0,
            regulation_exchanges: 9,
            extra_time_exchanges: 3,
            penalty_base: 3,
            penalty_spread: 2,
        }
    }
}

impl SimulationConfig {
    /// Default balance.
    pub fn realistic() -> Self {
        Self::default()
    }

    /// No tactical noise: team strength comes from skills and tactics only.
    pub fn deterministic() -> Self {
        Self { tactic_variance: 0.0, ..Self::default() }
    }

    /// Stronger attacks, more goals per match.
    pub fn high_scoring() -> Self {
        Self { utilize_multiplier: 6.0, ..Self::default() }
    }

    /// Upper bound on goals per match when extra time is played.
    pub fn max_exchanges(&self) -> u32 {
        self.regulation_exchanges.saturating_add(self.extra_time_exchanges)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.tactic_variance.is_finite() || self.tactic_variance < 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "tactic_variance must be a nonnegative number, got {}",
                self.tactic_variance
            )));
        }
        if !self.utilize_multiplier.is_finite() || self.utilize_multiplier < 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "utilize_multiplier must be a nonnegative number, got {}",
                self.utilize_multiplier
            )));
        }
        if self.regulation_exchanges == 0 {
            return Err(SimError::InvalidConfig(
                "regulation_exchanges must be at least 1".to_string(),
            ));
        }
        for (name, value) in [
            ("regulation_exchanges", self.regulation_exchanges),
            ("extra_time_exchanges", self.extra_time_exchanges),
        ] {
            if value > MAX_PHASE_EXCHANGES {
                return Err(SimError::InvalidConfig(format!(
                    "{name} must be at most {MAX_PHASE_EXCHANGES}, got {value}"
                )));
            }
        }
        match self.penalty_base.checked_add(self.penalty_spread) {
            Some(most) if most <= MAX_SHOOTOUT_PENALTIES => Ok(()),
            _ => Err(SimError::InvalidConfig(format!(
                "penalty_base + penalty_spread must be at most {MAX_SHOOTOUT_PENALTIES}, got {} + {}",
                self.penalty_base, self.penalty_spread
            ))),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }
}
