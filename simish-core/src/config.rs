//! Configuration management for `simish-core`.
//!
//! This module defines the scoring weights, vote confidence parameters and
//! engine selection used by the matchers. It handles YAML (de)serialization
//! and provides utilities for loading, merging, and validating configs.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use simish_votes::ConfidenceParams;

use crate::errors::SimishError;

/// Concrete weights of the three raw-score terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub word: f64,
    pub action: f64,
    pub distance: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            word: 0.7,
            action: 1.0,
            distance: 0.2,
        }
    }
}

impl ScoringWeights {
    pub fn total(&self) -> f64 {
        self.word + self.action + self.distance
    }
}

/// Which score combination an engine applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    /// Lexical score multiplied by vote confidence.
    #[default]
    Confidence,
    /// Lexical score alone; votes are ignored.
    Lexical,
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineKind::Confidence => f.write_str("confidence"),
            EngineKind::Lexical => f.write_str("lexical"),
        }
    }
}

/// User-overridable scoring weights. Missing values fall back to the defaults.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub word: Option<f64>,
    pub action: Option<f64>,
    pub distance: Option<f64>,
}

/// User-overridable vote confidence parameters.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoteConfig {
    /// Confidence of a candidate with no votes (default: 0.7).
    pub initial: Option<f64>,
    /// Growth rate of the vote evidence weight (default: 0.2).
    pub slope: Option<f64>,
}

/// Represents the top-level configuration structure for simish.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub engine: Option<EngineKind>,
    pub scoring: ScoringConfig,
    pub votes: VoteConfig,
}

impl MatchConfig {
    /// Loads a configuration from a YAML file and validates it.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading match configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: MatchConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config.validate()
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// Loads the built-in configuration.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default match configuration from embedded string...");
        let default_yaml = include_str!("../config/default_config.yaml");
        let config: MatchConfig = serde_yml::from_str(default_yaml)
            .context("Failed to parse default match configuration")?;
        Ok(config)
    }

    /// Serializes the configuration back to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yml::to_string(self)
            .map_err(|e| SimishError::SerializationError(e.to_string()).into())
    }

    pub fn engine_kind(&self) -> EngineKind {
        self.engine.unwrap_or_default()
    }

    pub fn weights(&self) -> ScoringWeights {
        let defaults = ScoringWeights::default();
        ScoringWeights {
            word: self.scoring.word.unwrap_or(defaults.word),
            action: self.scoring.action.unwrap_or(defaults.action),
            distance: self.scoring.distance.unwrap_or(defaults.distance),
        }
    }

    pub fn confidence_params(&self) -> ConfidenceParams {
        let defaults = ConfidenceParams::default();
        ConfidenceParams {
            initial: self.votes.initial.unwrap_or(defaults.initial),
            slope: self.votes.slope.unwrap_or(defaults.slope),
        }
    }

    /// Checks that every resolved parameter is usable by the scoring pipeline.
    pub fn validate(&self) -> std::result::Result<(), SimishError> {
        let weights = self.weights();
        for (name, value) in [
            ("scoring.word", weights.word),
            ("scoring.action", weights.action),
            ("scoring.distance", weights.distance),
        ] {
            check_weight(name, value)?;
        }
        if weights.total() <= 0.0 {
            return Err(SimishError::InvalidConfig(
                "scoring weights must not all be zero".to_string(),
            ));
        }

        let params = self.confidence_params();
        if !params.initial.is_finite() || !(0.0..=1.0).contains(&params.initial) {
            return Err(SimishError::InvalidConfig(format!(
                "votes.initial must be within [0, 1], got {}",
                params.initial
            )));
        }
        check_weight("votes.slope", params.slope)?;
        Ok(())
    }
}

fn check_weight(name: &str, value: f64) -> std::result::Result<(), SimishError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SimishError::InvalidWeight(name.to_string(), value))
    }
}

/// Merges a user configuration over the defaults; user values win.
pub fn merge_config(default_config: MatchConfig, user_config: Option<MatchConfig>) -> MatchConfig {
    let mut merged = default_config;

    if let Some(user) = user_config {
        debug!("User config provided. Merging overrides.");
        if let Some(engine) = user.engine {
            debug!("Overriding engine with user value: {}", engine);
            merged.engine = Some(engine);
        }
        merge_option(&mut merged.scoring.word, user.scoring.word, "scoring.word");
        merge_option(&mut merged.scoring.action, user.scoring.action, "scoring.action");
        merge_option(&mut merged.scoring.distance, user.scoring.distance, "scoring.distance");
        merge_option(&mut merged.votes.initial, user.votes.initial, "votes.initial");
        merge_option(&mut merged.votes.slope, user.votes.slope, "votes.slope");
    }

    merged
}

fn merge_option(target: &mut Option<f64>, value: Option<f64>, name: &str) {
    if let Some(v) = value {
        debug!("Overriding {} with user value: {}", name, v);
        *target = Some(v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_builtin_constants() {
        let config = MatchConfig::load_default().unwrap();
        assert_eq!(config.weights(), ScoringWeights::default());
        assert_eq!(config.confidence_params(), ConfidenceParams::default());
        assert_eq!(config.engine_kind(), EngineKind::Confidence);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_falls_back_to_defaults() {
        let config = MatchConfig::default();
        assert!((config.weights().total() - 1.9).abs() < 1e-12);
    }

    #[test]
    fn test_negative_weight_is_rejected() {
        let mut config = MatchConfig::default();
        config.scoring.action = Some(-1.0);
        assert!(matches!(config.validate(), Err(SimishError::InvalidWeight(name, _)) if name == "scoring.action"));
    }

    #[test]
    fn test_all_zero_weights_are_rejected() {
        let mut config = MatchConfig::default();
        config.scoring = ScoringConfig { word: Some(0.0), action: Some(0.0), distance: Some(0.0) };
        assert!(matches!(config.validate(), Err(SimishError::InvalidConfig(_))));
    }

    #[test]
    fn test_initial_out_of_range_is_rejected() {
        let mut config = MatchConfig::default();
        config.votes.initial = Some(1.5);
        assert!(config.validate().is_err());
    }
}
