// simish-core/src/lib.rs
//! # Simish Core Library
//!
//! `simish-core` finds, for a free-text user utterance, the closest
//! pre-recorded utterance of a room and returns the canned response attached
//! to it, together with a score. Matching tolerates paraphrase, reordering,
//! punctuation noise and partial vocabulary overlap.
//!
//! The library is pure computation over immutable inputs. Storage of pairs
//! and votes sits behind the [`CandidateStore`] trait.
//!
//! ## Modules
//!
//! * `tokenizer`: Normalizes utterances into word and action tokens.
//! * `alignment`: Greedy token alignment and the raw lexical score.
//! * `order_distance`: Position-coded Jaro-Winkler order similarity.
//! * `engine`: Defines the `MatchEngine` trait and candidate selection.
//! * `engines`: The confidence-weighted and purely lexical engines.
//! * `config`: Scoring weights, vote parameters and engine selection.
//! * `candidate`: The recorded pairs matched against.
//! * `match_result`: Match outcomes and the serialized response payload.
//! * `store`: The `CandidateStore` trait, an in-memory store and a file-backed store.
//! * `evaluation`: Leave-one-out evaluation of a room.
//! * `headless`: One-shot answering of an utterance.
//!
//! ## Usage Example
//!
//! ```rust
//! use simish_core::{headless_respond, Candidate, CandidateStore, MatchConfig, MemoryStore};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let mut store = MemoryStore::new();
//!     store.save_pair(Candidate::new("hello there", "hi!", 1))?;
//!     store.save_pair(Candidate::new("goodbye", "bye!", 1))?;
//!
//!     let config = MatchConfig::load_default()?;
//!     let response = headless_respond(&config, &store, "Hello there!", 1)?;
//!     assert_eq!(response.response, "hi!");
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Scoring itself cannot fail. Loading configuration and stores uses
//! `anyhow::Error`, with [`SimishError`] for the library's own failure cases.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod alignment;
pub mod candidate;
pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod evaluation;
pub mod headless;
pub mod match_result;
pub mod order_distance;
pub mod store;
pub mod tokenizer;

/// Re-exports the configuration types and the merge helper.
pub use config::{merge_config, EngineKind, MatchConfig, ScoringConfig, ScoringWeights, VoteConfig};

/// Re-exports the custom error type for clear error reporting.
pub use errors::SimishError;

pub use candidate::Candidate;
pub use engine::MatchEngine;
pub use engines::confidence_engine::ConfidenceEngine;
pub use engines::lexical_engine::LexicalEngine;

pub use alignment::{align, raw_score, score_breakdown, Alignment, LexicalBreakdown};
pub use order_distance::order_distance;
pub use tokenizer::{tokenize, Token, TokenKind};

pub use match_result::{CandidateScore, MatchResponse, MatchResult};
pub use store::{vote_uid, CandidateStore, MemoryStore, PairsFile, VoteRecord};
pub use evaluation::{evaluate_pairs, EvaluationEntry, RoomEvaluation};
pub use headless::{build_engine, headless_respond, soft_match};

/// Re-exports the vote primitives so callers need only one dependency.
pub use simish_votes::{vote_confidence, ConfidenceParams, VoteDirection, VoteTally};
