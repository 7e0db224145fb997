// simish-votes/src/tally/mod.rs
use core::fmt;

/// Direction of a single piece of feedback on a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteDirection {
    Up,
    Down,
}

impl fmt::Display for VoteDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoteDirection::Up => f.write_str("up"),
            VoteDirection::Down => f.write_str("down"),
        }
    }
}

/// Accumulated up/down feedback for one candidate.
///
/// Counters are real-valued so that callers can cast weighted votes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VoteTally {
    pub up: f64,
    pub down: f64,
}

impl VoteTally {
    pub fn new(up: f64, down: f64) -> Self {
        Self {
            up: sanitize_count(up),
            down: sanitize_count(down),
        }
    }

    /// Adds `weight` to the counter selected by `direction`.
    /// Negative or non-finite weights are ignored.
    pub fn cast(&mut self, direction: VoteDirection, weight: f64) {
        let weight = sanitize_count(weight);
        match direction {
            VoteDirection::Up => self.up += weight,
            VoteDirection::Down => self.down += weight,
        }
    }

    pub fn merge(&mut self, other: &VoteTally) {
        self.up += sanitize_count(other.up);
        self.down += sanitize_count(other.down);
    }

    pub fn total(&self) -> f64 {
        sanitize_count(self.up) + sanitize_count(self.down)
    }

    /// Fraction of votes that were upvotes; `0.0` when nobody has voted.
    pub fn upvote_ratio(&self) -> f64 {
        let total = self.total();
        if total > 0.0 {
            sanitize_count(self.up) / total
        } else {
            0.0
        }
    }
}

/// Clamps a counter into the domain the confidence function is defined on.
pub(crate) fn sanitize_count(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tally_ratio_is_zero() {
        let tally = VoteTally::default();
        assert_eq!(tally.total(), 0.0);
        assert_eq!(tally.upvote_ratio(), 0.0);
    }

    #[test]
    fn test_cast_weighted_votes() {
        let mut tally = VoteTally::default();
        tally.cast(VoteDirection::Up, 1.0);
        tally.cast(VoteDirection::Up, 0.5);
        tally.cast(VoteDirection::Down, 0.5);
        assert_eq!(tally.up, 1.5);
        assert_eq!(tally.down, 0.5);
        assert!((tally.upvote_ratio() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_weights_are_ignored() {
        let mut tally = VoteTally::new(-3.0, f64::NAN);
        tally.cast(VoteDirection::Down, f64::INFINITY);
        tally.cast(VoteDirection::Up, -1.0);
        assert_eq!(tally, VoteTally::default());
    }

    #[test]
    fn test_merge_adds_counters() {
        let mut a = VoteTally::new(2.0, 1.0);
        a.merge(&VoteTally::new(1.0, 3.0));
        assert_eq!(a.up, 3.0);
        assert_eq!(a.down, 4.0);
    }
}
