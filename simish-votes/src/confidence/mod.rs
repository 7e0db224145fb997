// simish-votes/src/confidence/mod.rs
use crate::tally::{sanitize_count, VoteTally};
use crate::Confidence;

/// Parameters of the vote confidence blend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceParams {
    /// Prior confidence assigned to a candidate nobody has voted on.
    pub initial: f64,
    /// How quickly accumulated votes pull the confidence toward the observed ratio.
    pub slope: f64,
}

impl Default for ConfidenceParams {
    fn default() -> Self {
        Self {
            initial: 0.7,
            slope: 0.2,
        }
    }
}

/// Weight given to the observed upvote ratio for `total` votes.
///
/// Starts at 0 with no votes and approaches 1 as votes accumulate.
pub fn asymptote(total: f64, slope: f64) -> f64 {
    let total = sanitize_count(total);
    let slope = sanitize_count(slope);
    1.0 - 1.0 / (slope * total + 1.0)
}

/// Shrinks the observed upvote ratio toward `params.initial`.
///
/// Sparse evidence stays close to the prior; with many votes the raw ratio dominates.
/// The result is always within `[0, 1]` as long as `params.initial` is.
pub fn vote_confidence(up: f64, down: f64, params: &ConfidenceParams) -> Confidence {
    let tally = VoteTally::new(up, down);
    let weight = asymptote(tally.total(), params.slope);
    let confidence = params.initial + weight * (tally.upvote_ratio() - params.initial);
    confidence.clamp(0.0, 1.0)
}

impl VoteTally {
    pub fn confidence(&self, params: &ConfidenceParams) -> Confidence {
        vote_confidence(self.up, self.down, params)
    }
}
