//! A `MatchEngine` that weights the lexical score of each candidate by the
//! confidence earned from community votes on it.
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use simish_votes::ConfidenceParams;

use crate::candidate::Candidate;
use crate::config::{EngineKind, MatchConfig, ScoringWeights};
use crate::engine::MatchEngine;

/// Scores candidates as `raw_score * vote_confidence`.
///
/// Without votes every candidate is scaled by the same prior, so the ranking
/// equals the purely lexical one until feedback accumulates.
#[derive(Debug, Clone)]
pub struct ConfidenceEngine {
    weights: ScoringWeights,
    params: ConfidenceParams,
}

impl ConfidenceEngine {
    pub fn new(config: &MatchConfig) -> Result<Self> {
        config.validate().context("Failed to build ConfidenceEngine")?;
        Ok(Self::with_params(config.weights(), config.confidence_params()))
    }

    pub fn with_params(weights: ScoringWeights, params: ConfidenceParams) -> Self {
        Self { weights, params }
    }

    pub fn params(&self) -> &ConfidenceParams {
        &self.params
    }
}

impl Default for ConfidenceEngine {
    fn default() -> Self {
        Self::with_params(ScoringWeights::default(), ConfidenceParams::default())
    }
}

impl MatchEngine for ConfidenceEngine {
    fn kind(&self) -> EngineKind { EngineKind::Confidence }
    fn weights(&self) -> &ScoringWeights { &self.weights }
    fn confidence(&self, candidate: &Candidate) -> f64 {
        candidate.votes().confidence(&self.params)
    }
}
