// simish-core/src/candidate.rs
//! The recorded utterance/response pairs that user input is matched against.

use serde::{Deserialize, Serialize};
use simish_votes::VoteTally;

/// A single pre-recorded utterance and its canned response, scoped to a room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Candidate {
    /// The recorded utterance that user input is compared with.
    #[serde(alias = "pc_input")]
    pub input: String,
    /// The response returned when this candidate wins.
    #[serde(alias = "gm_response")]
    pub output: String,
    pub room_id: i64,
    pub up_votes: f64,
    pub down_votes: f64,
    /// Operator-assigned identifier of the pair.
    pub ai_col: i64,
    /// Operator-assigned response category.
    pub result_type: i64,
    /// Disabled pairs are never offered as candidates.
    pub disabled: bool,
}

impl Candidate {
    pub fn new(input: impl Into<String>, output: impl Into<String>, room_id: i64) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            room_id,
            ..Default::default()
        }
    }

    pub fn with_votes(mut self, up_votes: f64, down_votes: f64) -> Self {
        self.up_votes = up_votes;
        self.down_votes = down_votes;
        self
    }

    pub fn votes(&self) -> VoteTally {
        VoteTally::new(self.up_votes, self.down_votes)
    }

    /// True if this candidate records the same pair as `other`.
    pub fn same_pair(&self, other: &Candidate) -> bool {
        self.room_id == other.room_id && self.input == other.input && self.output == other.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_legacy_column_names() {
        let json = r#"{"pc_input": "hello there", "gm_response": "hi!", "room_id": 1}"#;
        let candidate: Candidate = serde_json::from_str(json).unwrap();
        assert_eq!(candidate, Candidate::new("hello there", "hi!", 1));
    }

    #[test]
    fn test_votes_are_sanitized() {
        let candidate = Candidate::new("a", "b", 1).with_votes(3.0, -2.0);
        let tally = candidate.votes();
        assert_eq!(tally.up, 3.0);
        assert_eq!(tally.down, 0.0);
    }
}
