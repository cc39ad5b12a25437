//! Strategy selector.

use crate::greedy::GREEDY_EXPLANATION;
use crate::search::{GENETIC_EXPLANATION, MONTE_CARLO_EXPLANATION};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// One of the three interchangeable sequencing strategies.
///
/// Parsing never fails: an absent or unrecognized selector is
/// [`Algorithm::Greedy`].
///
/// ```
/// use rake_optim::optimizer::Algorithm;
///
/// assert_eq!(Algorithm::from_selector(Some("ga")), Algorithm::Genetic);
/// assert_eq!(Algorithm::from_selector(Some("bogus")), Algorithm::Greedy);
/// assert_eq!(Algorithm::from_selector(None), Algorithm::Greedy);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    #[default]
    Greedy,
    Genetic,
    MonteCarlo,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Greedy, Algorithm::Genetic, Algorithm::MonteCarlo];

    /// Resolves a wire selector (`"greedy"`, `"ga"`, `"monteCarlo"`).
    pub fn from_selector(selector: Option<&str>) -> Self {
        match selector {
            Some("ga") => Algorithm::Genetic,
            Some("monteCarlo") => Algorithm::MonteCarlo,
            _ => Algorithm::Greedy,
        }
    }

    /// The wire selector for this strategy.
    pub fn selector(self) -> &'static str {
        match self {
            Algorithm::Greedy => "greedy",
            Algorithm::Genetic => "ga",
            Algorithm::MonteCarlo => "monteCarlo",
        }
    }

    /// Fixed rationale lines this strategy reports.
    pub fn explanation(self) -> &'static [&'static str] {
        match self {
            Algorithm::Greedy => &GREEDY_EXPLANATION,
            Algorithm::Genetic => &GENETIC_EXPLANATION,
            Algorithm::MonteCarlo => &MONTE_CARLO_EXPLANATION,
        }
    }

    /// Whether results depend on the random source.
    pub fn is_stochastic(self) -> bool {
        !matches!(self, Algorithm::Greedy)
    }
}

impl FromStr for Algorithm {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_selector(Some(s)))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_roundtrip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(Algorithm::from_selector(Some(algorithm.selector())), algorithm);
        }
    }

    #[test]
    fn test_unknown_falls_back_to_greedy() {
        assert_eq!(Algorithm::from_selector(Some("")), Algorithm::Greedy);
        assert_eq!(Algorithm::from_selector(Some("GA")), Algorithm::Greedy);
        assert_eq!("monte_carlo".parse::<Algorithm>(), Ok(Algorithm::Greedy));
    }

    #[test]
    fn test_stochastic() {
        assert!(!Algorithm::Greedy.is_stochastic());
        assert!(Algorithm::Genetic.is_stochastic());
        assert!(Algorithm::MonteCarlo.is_stochastic());
    }

    #[test]
    fn test_display() {
        assert_eq!(Algorithm::MonteCarlo.to_string(), "monteCarlo");
    }
}
