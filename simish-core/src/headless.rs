// simish-core/src/headless.rs
//! Convenience wrappers for answering a single utterance without any UI.
//!
//! Builds the engine selected by the configuration, fetches the room's
//! candidates from a store and packages the outcome as a `MatchResponse`.

use anyhow::{Context, Result};
use log::info;

use crate::config::{EngineKind, MatchConfig};
use crate::engine::MatchEngine;
use crate::engines::confidence_engine::ConfidenceEngine;
use crate::engines::lexical_engine::LexicalEngine;
use crate::candidate::Candidate;
use crate::match_result::{MatchResponse, MatchResult};
use crate::store::CandidateStore;

/// Instantiates the engine named by `config` behind the `MatchEngine` trait.
pub fn build_engine(config: &MatchConfig) -> Result<Box<dyn MatchEngine>> {
    let engine: Box<dyn MatchEngine> = match config.engine_kind() {
        EngineKind::Confidence => Box::new(ConfidenceEngine::new(config)?),
        EngineKind::Lexical => Box::new(LexicalEngine::new(config)?),
    };
    Ok(engine)
}

/// Soft-matches `input` with the default confidence-weighted engine.
pub fn soft_match(input: &str, candidates: &[Candidate]) -> Option<MatchResult> {
    ConfidenceEngine::default().soft_match(input, candidates)
}

/// Answers `input` from the candidates of `room_id`.
///
/// # Arguments
///
/// * `config` - The merged MatchConfig (defaults + optional user overrides).
/// * `store` - Source of the room's candidates.
/// * `input` - The user's utterance.
/// * `room_id` - The room whose pairs are eligible.
pub fn headless_respond(
    config: &MatchConfig,
    store: &dyn CandidateStore,
    input: &str,
    room_id: i64,
) -> Result<MatchResponse> {
    let engine = build_engine(config)?;
    let candidates = store
        .fetch_candidates(room_id)
        .with_context(|| format!("Failed to fetch candidates for room {}", room_id))?;

    let outcome = engine.soft_match(input, &candidates);
    let response = MatchResponse::from_outcome(input, room_id, outcome.as_ref());
    info!("Answered room {} with {} engine (score {:.4})", room_id, engine.kind(), response.score);
    Ok(response)
}
