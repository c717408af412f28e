//! Configuration types for agent creation.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Hyperparameters of a single TD agent.
///
/// # Examples
///
/// ```
/// use td_tictactoe::app::AgentConfig;
///
/// let config = AgentConfig::new()
///     .with_exploration_rate(0.2)
///     .with_learning_rate(0.05);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Probability ε of playing a uniformly random move
    pub exploration_rate: f64,
    /// Step size α of the TD update
    pub learning_rate: f64,
}

impl AgentConfig {
    /// Create a configuration with ε = 0.1 and α = 0.1.
    pub fn new() -> Self {
        Self {
            exploration_rate: 0.1,
            learning_rate: 0.1,
        }
    }

    /// Set the exploration rate ε.
    pub fn with_exploration_rate(mut self, rate: f64) -> Self {
        self.exploration_rate = rate;
        self
    }

    /// Set the learning rate α.
    pub fn with_learning_rate(mut self, rate: f64) -> Self {
        self.learning_rate = rate;
        self
    }

    /// Check both rates lie in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] naming the offending rate.
    pub fn validate(&self) -> Result<()> {
        check_rate("exploration rate", self.exploration_rate)?;
        check_rate("learning rate", self.learning_rate)
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn check_rate(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::config(format!("{name} {value} must lie in [0, 1]")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(AgentConfig::default().validate().is_ok());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let config = AgentConfig::new()
            .with_exploration_rate(0.0)
            .with_learning_rate(1.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_out_of_range_rates() {
        for bad in [-0.1, 1.01, f64::NAN, f64::INFINITY] {
            let config = AgentConfig::new().with_exploration_rate(bad);
            assert!(matches!(
                config.validate(),
                Err(Error::InvalidConfiguration { .. })
            ));

            let config = AgentConfig::new().with_learning_rate(bad);
            assert!(matches!(
                config.validate(),
                Err(Error::InvalidConfiguration { .. })
            ));
        }
    }
}
