// simish-core/src/store/memory.rs
//! An in-memory `CandidateStore`.

use anyhow::Result;
use log::debug;
use std::collections::{BTreeMap, HashMap};

use simish_votes::{VoteDirection, VoteTally};

use super::{vote_uid, CandidateStore, VoteRecord};
use crate::candidate::Candidate;
use crate::errors::SimishError;

/// Holds pairs in insertion order and a vote ledger keyed by `vote_uid`.
///
/// A candidate's effective votes are its own counters plus every ledger entry
/// of the same room whose matched text is the candidate's input.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pairs: Vec<Candidate>,
    votes: BTreeMap<String, VoteRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from loaded pairs and votes. Pairs without an `ai_col` get one.
    pub fn from_parts(pairs: Vec<Candidate>, votes: Vec<VoteRecord>) -> Self {
        let votes = votes.into_iter().map(|v| (v.uid.clone(), v)).collect();
        let mut store = Self { pairs: Vec::with_capacity(pairs.len()), votes };
        for mut pair in pairs {
            store.assign_ai_col(&mut pair);
            store.pairs.push(pair);
        }
        store
    }

    // An `ai_col` of 0 is unset; it becomes one past the largest in use.
    fn assign_ai_col(&self, candidate: &mut Candidate) {
        if candidate.ai_col == 0 {
            candidate.ai_col = self.pairs.iter().map(|p| p.ai_col).max().unwrap_or(0).max(0) + 1;
        }
    }

    pub fn pairs(&self) -> &[Candidate] {
        &self.pairs
    }

    pub fn votes(&self) -> impl Iterator<Item = &VoteRecord> {
        self.votes.values()
    }

    pub fn vote(&self, input_text: &str, matched_text: &str) -> Option<&VoteRecord> {
        self.votes.get(&vote_uid(input_text, matched_text))
    }

    fn ledger_for_room(&self, room_id: i64) -> HashMap<&str, VoteTally> {
        let mut ledger: HashMap<&str, VoteTally> = HashMap::new();
        for record in self.votes.values().filter(|v| v.room_id == room_id) {
            ledger.entry(record.matched.as_str()).or_default().merge(&record.tally());
        }
        ledger
    }

    /// Like `record_vote` but with an arbitrary non-negative weight.
    pub fn record_weighted_vote(
        &mut self,
        input_text: &str,
        matched_text: &str,
        room_id: i64,
        direction: VoteDirection,
        weight: f64,
    ) -> Result<VoteRecord> {
        if input_text.is_empty() || matched_text.is_empty() {
            return Err(SimishError::EmptyVoteTarget.into());
        }
        let record = self
            .votes
            .entry(vote_uid(input_text, matched_text))
            .or_insert_with(|| VoteRecord::new(input_text, matched_text, room_id));
        record.cast(direction, weight);
        debug!(
            "Recorded {} vote (weight {}) on {}: up={}, down={}",
            direction, weight, record.uid, record.up_votes, record.down_votes
        );
        Ok(record.clone())
    }
}

impl CandidateStore for MemoryStore {
    fn fetch_candidates(&self, room_id: i64) -> Result<Vec<Candidate>> {
        let ledger = self.ledger_for_room(room_id);
        let candidates: Vec<Candidate> = self
            .pairs
            .iter()
            .filter(|p| p.room_id == room_id && !p.disabled)
            .map(|p| {
                let mut candidate = p.clone();
                if let Some(extra) = ledger.get(candidate.input.as_str()) {
                    let mut tally = candidate.votes();
                    tally.merge(extra);
                    candidate.up_votes = tally.up;
                    candidate.down_votes = tally.down;
                }
                candidate
            })
            .collect();
        debug!("Fetched {} candidates for room {}", candidates.len(), room_id);
        Ok(candidates)
    }

    fn all_pairs(&self, room_id: i64) -> Result<Vec<Candidate>> {
        Ok(self.pairs.iter().filter(|p| p.room_id == room_id).cloned().collect())
    }

    fn save_pair(&mut self, candidate: Candidate) -> Result<bool> {
        if self.pairs.iter().any(|p| p.same_pair(&candidate)) {
            debug!("Pair already present in room {}, skipping", candidate.room_id);
            return Ok(false);
        }
        let mut candidate = candidate;
        self.assign_ai_col(&mut candidate);
        self.pairs.push(candidate);
        Ok(true)
    }

    fn record_vote(
        &mut self,
        input_text: &str,
        matched_text: &str,
        room_id: i64,
        direction: VoteDirection,
    ) -> Result<VoteRecord> {
        self.record_weighted_vote(input_text, matched_text, room_id, direction, 1.0)
    }
}
