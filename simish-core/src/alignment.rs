// simish-core/src/alignment.rs
//! Greedy token alignment and the raw lexical score built on top of it.
//!
//! Each user token is paired with the first still-unused candidate token that
//! is exactly equal to it. A candidate token is consumed by at most one match.
//! The word and action ratios are computed from the token counts before any
//! alignment takes place.
//!
//! License: MIT OR Apache-2.0

use serde::Serialize;

use crate::config::ScoringWeights;
use crate::order_distance::order_distance;
use crate::tokenizer::{Token, TokenKind};

/// The outcome of one greedy alignment pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alignment {
    /// `(user_index, candidate_index)` for every matched token, in user order.
    pub pairs: Vec<(usize, usize)>,
    pub matched_words: usize,
    pub matched_actions: usize,
}

/// Pairs user tokens with candidate tokens, first exact match wins.
///
/// Candidate positions are tracked with a `used` marker so indices always
/// refer to the original candidate sequence.
pub fn align(user_tokens: &[Token], db_tokens: &[Token]) -> Alignment {
    let mut used = vec![false; db_tokens.len()];
    let mut alignment = Alignment::default();

    for (user_index, user_token) in user_tokens.iter().enumerate() {
        let found = db_tokens
            .iter()
            .enumerate()
            .find(|(db_index, db_token)| !used[*db_index] && *db_token == user_token)
            .map(|(db_index, _)| db_index);

        if let Some(db_index) = found {
            used[db_index] = true;
            alignment.pairs.push((user_index, db_index));
            match user_token.kind() {
                TokenKind::Action => alignment.matched_actions += 1,
                TokenKind::Word => alignment.matched_words += 1,
            }
        }
    }

    alignment
}

/// Every intermediate value that goes into a raw lexical score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LexicalBreakdown {
    pub matched_words: usize,
    pub matched_actions: usize,
    pub total_words: usize,
    pub total_actions: usize,
    pub word_match: f64,
    pub action_match: f64,
    pub order_distance: f64,
    pub score: f64,
}

fn count_actions(tokens: &[Token]) -> usize {
    tokens.iter().filter(|t| t.is_action()).count()
}

/// A matched count relative to the tokens of both sides, `0.0` when there are none.
fn match_ratio(matched: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        2.0 * matched as f64 / total as f64
    }
}

/// Computes the full lexical breakdown for one user/candidate pair.
pub fn score_breakdown(
    user_tokens: &[Token],
    db_tokens: &[Token],
    weights: &ScoringWeights,
) -> LexicalBreakdown {
    let total_tokens = user_tokens.len() + db_tokens.len();
    let total_actions = count_actions(db_tokens) + count_actions(user_tokens);
    let total_words = total_tokens - total_actions;

    let alignment = align(user_tokens, db_tokens);
    let word_match = match_ratio(alignment.matched_words, total_words);
    let action_match = match_ratio(alignment.matched_actions, total_actions);
    let dist = order_distance(user_tokens, db_tokens);

    let weight_sum = weights.total();
    let score = if weight_sum > 0.0 {
        (word_match * weights.word + action_match * weights.action + dist * weights.distance)
            / weight_sum
    } else {
        0.0
    };

    LexicalBreakdown {
        matched_words: alignment.matched_words,
        matched_actions: alignment.matched_actions,
        total_words,
        total_actions,
        word_match,
        action_match,
        order_distance: dist,
        score,
    }
}

/// The raw lexical score of a candidate, roughly in `[0, 1]`.
pub fn raw_score(user_tokens: &[Token], db_tokens: &[Token], weights: &ScoringWeights) -> f64 {
    score_breakdown(user_tokens, db_tokens, weights).score
}
