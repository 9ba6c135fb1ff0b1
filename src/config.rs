//! Engine configuration
//!
//! The engine carries no ambient default instance: every caller builds an
//! [`EngineConfig`] (or takes [`EngineConfig::default`]) and passes it in.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Default number of plies explored by minimax
pub const DEFAULT_SEARCH_DEPTH: u8 = 3;

/// Default multiplier applied to the engine's own pattern score
pub const DEFAULT_SELF_WEIGHT: f64 = 1.2;

/// Preset strength levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Search and evaluation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Plies explored before falling back to the heuristic evaluation
    pub search_depth: u8,
    /// Offensive bias: `evaluate = own * self_weight - opponent`
    pub self_weight: f64,
}

impl EngineConfig {
    /// Validated configuration with the given depth and default weight.
    pub fn new(search_depth: u8) -> Result<Self> {
        let config = Self {
            search_depth,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        let search_depth = match difficulty {
            Difficulty::Easy => 2,
            Difficulty::Medium => 3,
            Difficulty::Hard => 4,
        };
        Self {
            search_depth,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_depth(mut self, search_depth: u8) -> Self {
        self.search_depth = search_depth;
        self
    }

    #[must_use]
    pub fn with_self_weight(mut self, self_weight: f64) -> Self {
        self.self_weight = self_weight;
        self
    }

    /// Reject settings the search cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.search_depth == 0 {
            return Err(EngineError::InvalidConfiguration(
                "search_depth must be at least 1".to_string(),
            ));
        }
        if !self.self_weight.is_finite() || self.self_weight <= 0.0 {
            return Err(EngineError::InvalidConfiguration(format!(
                "self_weight must be a positive number, got {}",
                self.self_weight
            )));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search_depth: DEFAULT_SEARCH_DEPTH,
            self_weight: DEFAULT_SELF_WEIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.search_depth, 3);
        assert!(config.self_weight > 1.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_depth_rejected() {
        assert!(matches!(
            EngineConfig::new(0),
            Err(EngineError::InvalidConfiguration(_))
        ));
        assert!(EngineConfig::default().with_depth(0).validate().is_err());
    }

    #[test]
    fn test_bad_weight_rejected() {
        for weight in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = EngineConfig::default().with_self_weight(weight);
            assert!(config.validate().is_err(), "weight {weight} accepted");
        }
    }

    #[test]
    fn test_difficulty_depths() {
        assert_eq!(EngineConfig::from_difficulty(Difficulty::Easy).search_depth, 2);
        assert_eq!(EngineConfig::from_difficulty(Difficulty::Medium).search_depth, 3);
        assert_eq!(EngineConfig::from_difficulty(Difficulty::Hard).search_depth, 4);
    }

    #[test]
    fn test_config_json_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{"search_depth": 5}"#).unwrap();
        assert_eq!(config.search_depth, 5);
        assert_eq!(config.self_weight, DEFAULT_SELF_WEIGHT);

        let json = serde_json::to_string(&config).unwrap();
        let back: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
