// simish-core/src/engine.rs
//! Defines the core MatchEngine trait.
//!
//! The `MatchEngine` trait provides a pluggable interface for the ways a raw
//! lexical score can be turned into a final candidate score. Every engine
//! shares the same tokenization, alignment and candidate selection; they
//! differ only in how much they trust the community feedback on a candidate.
//!
//! License: MIT OR Apache-2.0

use crate::alignment::score_breakdown;
use crate::candidate::Candidate;
use crate::config::{EngineKind, ScoringWeights};
use crate::match_result::{log_candidate_score_debug, log_match_outcome_debug, CandidateScore, MatchResult};
use crate::tokenizer::{tokenize, Token};

/// A trait that defines how candidates are scored and selected.
///
/// Engines hold no mutable state and can be shared between threads.
pub trait MatchEngine: Send + Sync {
    /// The score combination this engine implements.
    fn kind(&self) -> EngineKind;

    /// The raw-score weights used by this engine.
    fn weights(&self) -> &ScoringWeights;

    /// Multiplier in `[0, 1]` applied to a candidate's raw lexical score.
    fn confidence(&self, candidate: &Candidate) -> f64;

    /// Scores one candidate against already tokenized user input.
    fn score_details(&self, user_tokens: &[Token], candidate: &Candidate) -> CandidateScore {
        let db_tokens = tokenize(&candidate.input);
        let lexical = score_breakdown(user_tokens, &db_tokens, self.weights());
        let confidence = self.confidence(candidate);
        CandidateScore {
            lexical,
            confidence,
            score: lexical.score * confidence,
        }
    }

    fn score_candidate(&self, user_tokens: &[Token], candidate: &Candidate) -> f64 {
        self.score_details(user_tokens, candidate).score
    }

    /// Returns the candidate with the strictly greatest score.
    ///
    /// Candidates are scanned in order and the first one reaching the best
    /// score wins ties. `None` means no candidate scored above zero.
    fn soft_match(&self, input: &str, candidates: &[Candidate]) -> Option<MatchResult> {
        let user_tokens = tokenize(input);
        let mut best: Option<(usize, f64)> = None;
        let mut max_score = 0.0;

        for (index, candidate) in candidates.iter().enumerate() {
            let score = self.score_candidate(&user_tokens, candidate);
            log_candidate_score_debug(module_path!(), input, candidate, score);
            if score > max_score {
                max_score = score;
                best = Some((index, score));
            }
        }

        let outcome = best.map(|(index, score)| MatchResult {
            candidate: candidates[index].clone(),
            score,
        });
        log_match_outcome_debug(module_path!(), input, outcome.as_ref());
        outcome
    }

    /// Scores every candidate and orders them best first.
    ///
    /// The sort is stable, so equal scores keep the order they were supplied in.
    fn rank(&self, input: &str, candidates: &[Candidate]) -> Vec<(usize, CandidateScore)> {
        let user_tokens = tokenize(input);
        let mut ranked: Vec<(usize, CandidateScore)> = candidates
            .iter()
            .enumerate()
            .map(|(index, candidate)| (index, self.score_details(&user_tokens, candidate)))
            .collect();
        ranked.sort_by(|a, b| b.1.score.total_cmp(&a.1.score));
        ranked
    }
}
