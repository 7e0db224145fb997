//! A `MatchEngine` that ranks candidates on their lexical score alone.
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};

use crate::candidate::Candidate;
use crate::config::{EngineKind, MatchConfig, ScoringWeights};
use crate::engine::MatchEngine;

/// Ignores vote counters entirely; every candidate has confidence `1.0`.
#[derive(Debug, Clone, Default)]
pub struct LexicalEngine {
    weights: ScoringWeights,
}

impl LexicalEngine {
    pub fn new(config: &MatchConfig) -> Result<Self> {
        config.validate().context("Failed to build LexicalEngine")?;
        Ok(Self::with_weights(config.weights()))
    }

    pub fn with_weights(weights: ScoringWeights) -> Self {
        Self { weights }
    }
}

impl MatchEngine for LexicalEngine {
    fn kind(&self) -> EngineKind { EngineKind::Lexical }
    fn weights(&self) -> &ScoringWeights { &self.weights }
    fn confidence(&self, _candidate: &Candidate) -> f64 { 1.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_votes_are_ignored() {
        let engine = LexicalEngine::default();
        let candidates = vec![
            Candidate::new("hello there", "first", 1).with_votes(0.0, 50.0),
            Candidate::new("hello there", "second", 1).with_votes(50.0, 0.0),
        ];
        let result = engine.soft_match("hello there", &candidates).unwrap();
        assert_eq!(result.candidate.output, "first");
        assert!((result.score - 0.9 / 1.9).abs() < 1e-12);
    }

    #[test]
    fn test_actions_dominate_words() {
        let engine = LexicalEngine::default();
        let candidates = vec![
            Candidate::new("open the red door", "words", 1),
            Candidate::new("#open gate", "action", 1),
        ];
        let result = engine.soft_match("#open red door", &candidates).unwrap();
        assert_eq!(result.candidate.output, "action");
    }
}
