//! Random-restart search configuration.

use crate::error::ConfigError;

/// Configuration for a random-restart search.
///
/// # Presets
///
/// ```
/// use rake_optim::search::SearchConfig;
///
/// assert_eq!(SearchConfig::genetic().trials, 20);
/// assert_eq!(SearchConfig::monte_carlo().trials, 50);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use rake_optim::search::SearchConfig;
///
/// let config = SearchConfig::monte_carlo()
///     .with_trials(200)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Number of random permutations sampled.
    ///
    /// More trials explore more of the permutation space at
    /// proportionally higher cost. At least one trial always runs.
    pub trials: usize,

    /// Score the input order as a baseline before sampling.
    ///
    /// When set, the returned score never exceeds the input order's score.
    pub include_identity: bool,

    /// Score candidates on the rayon pool (needs the `parallel` feature).
    ///
    /// Candidate generation and best selection stay sequential, so a
    /// seeded run returns the same result either way.
    pub parallel: bool,

    /// Random seed for reproducibility. `None` draws fresh entropy per run.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            trials: 20,
            include_identity: true,
            parallel: false,
            seed: None,
        }
    }
}

impl SearchConfig {
    /// 20 trials, the genetic-style pass.
    pub fn genetic() -> Self {
        Self::default()
    }

    /// 50 trials, the denser Monte Carlo pass.
    pub fn monte_carlo() -> Self {
        Self {
            trials: 50,
            ..Self::default()
        }
    }

    pub fn with_trials(mut self, n: usize) -> Self {
        self.trials = n;
        self
    }

    pub fn with_include_identity(mut self, include: bool) -> Self {
        self.include_identity = include;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trials == 0 {
            return Err(ConfigError::Invalid("trials must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.trials, 20);
        assert!(config.include_identity);
        assert!(!config.parallel);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_presets() {
        assert_eq!(SearchConfig::genetic().trials, 20);
        assert_eq!(SearchConfig::monte_carlo().trials, 50);
    }

    #[test]
    fn test_validate_ok() {
        assert!(SearchConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_trials() {
        let err = SearchConfig::default().with_trials(0).validate().unwrap_err();
        assert!(err.to_string().contains("trials"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: SearchConfig = toml::from_str("trials = 75").unwrap();
        assert_eq!(config.trials, 75);
        assert!(config.include_identity);
    }
}
