//! Optimizer configuration.
//!
//! Loaded from TOML so trial counts, seeding and the rake capacity can
//! change without code changes:
//!
//! ```
//! # #[cfg(feature = "serde")]
//! # {
//! use rake_optim::optimizer::OptimizerConfig;
//!
//! let config = OptimizerConfig::from_toml_str(r#"
//!     seed = 7
//!     rake_capacity_tons = 3000.0
//!
//!     [monte_carlo]
//!     trials = 120
//! "#).unwrap();
//!
//! assert_eq!(config.seed, Some(7));
//! assert_eq!(config.monte_carlo.trials, 120);
//! assert_eq!(config.genetic.trials, 20);
//! # }
//! ```

use crate::error::ConfigError;
use crate::model::DEFAULT_RAKE_CAPACITY_TONS;
use crate::search::SearchConfig;

/// Main optimizer configuration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OptimizerConfig {
    /// Seed for every call's generator. Overrides the per-search seeds.
    ///
    /// `None` leaves seeding to each search config, then to fresh entropy.
    pub seed: Option<u64>,

    /// Aggregate tonnage a rake can carry.
    pub rake_capacity_tons: f64,

    /// Genetic-style search parameters.
    pub genetic: SearchConfig,

    /// Monte Carlo search parameters.
    pub monte_carlo: SearchConfig,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            seed: None,
            rake_capacity_tons: DEFAULT_RAKE_CAPACITY_TONS,
            genetic: SearchConfig::genetic(),
            monte_carlo: SearchConfig::monte_carlo(),
        }
    }
}

impl OptimizerConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_rake_capacity_tons(mut self, tons: f64) -> Self {
        self.rake_capacity_tons = tons;
        self
    }

    pub fn with_genetic(mut self, config: SearchConfig) -> Self {
        self.genetic = config;
        self
    }

    pub fn with_monte_carlo(mut self, config: SearchConfig) -> Self {
        self.monte_carlo = config;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.rake_capacity_tons.is_finite() || self.rake_capacity_tons <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "rake_capacity_tons must be positive, got {}",
                self.rake_capacity_tons
            )));
        }
        self.genetic.validate().map_err(|e| scoped("genetic", e))?;
        self.monte_carlo
            .validate()
            .map_err(|e| scoped("monte_carlo", e))?;
        Ok(())
    }
}

fn scoped(section: &str, err: ConfigError) -> ConfigError {
    match err {
        ConfigError::Invalid(msg) => ConfigError::Invalid(format!("{section}: {msg}")),
        other => other,
    }
}

#[cfg(feature = "serde")]
impl OptimizerConfig {
    /// Loads and validates configuration from a TOML file.
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses and validates configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s).map_err(|e| ConfigError::Toml(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}
