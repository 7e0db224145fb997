// simish-core/src/store/mod.rs
//! Candidate stores: where recorded pairs and vote counters come from.
//!
//! The matching engines never talk to storage directly. A `CandidateStore`
//! hands them the enabled candidates of a room and records feedback on the
//! matches they produced.
//!
//! License: MIT OR Apache-2.0

use anyhow::Result;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use simish_votes::{VoteDirection, VoteTally};

use crate::candidate::Candidate;

pub mod file;
pub mod memory;

pub use file::PairsFile;
pub use memory::MemoryStore;

/// A source of candidates and a sink for votes.
pub trait CandidateStore {
    /// Returns the enabled candidates of `room_id`, with their effective vote counters.
    fn fetch_candidates(&self, room_id: i64) -> Result<Vec<Candidate>>;

    /// Returns every stored pair of `room_id` as recorded, disabled ones included.
    fn all_pairs(&self, room_id: i64) -> Result<Vec<Candidate>>;

    /// Stores a new pair. Returns `false` if the same pair was already present.
    fn save_pair(&mut self, candidate: Candidate) -> Result<bool>;

    /// Adds one vote on the match of `input_text` to `matched_text`.
    fn record_vote(
        &mut self,
        input_text: &str,
        matched_text: &str,
        room_id: i64,
        direction: VoteDirection,
    ) -> Result<VoteRecord>;
}

/// Feedback counters for one (user input, matched utterance) combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoteRecord {
    pub uid: String,
    pub room_id: i64,
    pub input: String,
    pub matched: String,
    #[serde(default)]
    pub up_votes: f64,
    #[serde(default)]
    pub down_votes: f64,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl VoteRecord {
    /// A zero-initialized counter pair.
    pub fn new(input: &str, matched: &str, room_id: i64) -> Self {
        Self {
            uid: vote_uid(input, matched),
            room_id,
            input: input.to_string(),
            matched: matched.to_string(),
            up_votes: 0.0,
            down_votes: 0.0,
            updated_at: None,
        }
    }

    pub fn tally(&self) -> VoteTally {
        VoteTally::new(self.up_votes, self.down_votes)
    }

    pub fn cast(&mut self, direction: VoteDirection, weight: f64) {
        let mut tally = self.tally();
        tally.cast(direction, weight);
        self.up_votes = tally.up;
        self.down_votes = tally.down;
        self.updated_at = Some(Utc::now().to_rfc3339());
    }
}

/// Stable key of a vote counter: hex SHA-256 over the input and matched text.
pub fn vote_uid(input: &str, matched: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hasher.update(b"\x1f");
    hasher.update(matched.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vote_uid_is_order_sensitive() {
        assert_eq!(vote_uid("a", "b"), vote_uid("a", "b"));
        assert_ne!(vote_uid("a", "b"), vote_uid("b", "a"));
        assert_ne!(vote_uid("ab", "c"), vote_uid("a", "bc"));
        assert_eq!(vote_uid("a", "b").len(), 64);
    }

    #[test]
    fn test_new_record_is_zeroed() {
        let record = VoteRecord::new("hi", "hello there", 1);
        assert_eq!(record.tally(), VoteTally::default());
        assert!(record.updated_at.is_none());
    }

    #[test]
    fn test_cast_updates_timestamp() {
        let mut record = VoteRecord::new("hi", "hello there", 1);
        record.cast(VoteDirection::Down, 1.0);
        assert_eq!(record.down_votes, 1.0);
        assert!(record.updated_at.is_some());
    }
}
