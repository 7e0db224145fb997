// simish-core/src/match_result.rs
//! Provides the data structures describing a soft-match outcome, the payload
//! handed to downstream consumers, and PII-aware debug logging helpers.

use lazy_static::lazy_static;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::alignment::LexicalBreakdown;
use crate::candidate::Candidate;

lazy_static! {
    /// A static boolean that is initialized once to determine if utterances may appear in debug logs.
    static ref PII_DEBUG_ALLOWED: bool = {
        std::env::var("SIMISH_ALLOW_DEBUG_PII")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

/// The candidate judged closest to a user utterance, with its combined score.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub candidate: Candidate,
    pub score: f64,
}

/// Every value that contributed to one candidate's score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CandidateScore {
    pub lexical: LexicalBreakdown,
    pub confidence: f64,
    pub score: f64,
}

/// The serialized answer to a user utterance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MatchResponse {
    pub input: String,
    pub response: String,
    #[serde(rename = "match", default, skip_serializing_if = "String::is_empty")]
    pub matched: String,
    pub room: String,
    pub score: f64,
    pub ai_col: i64,
    pub result_type: i64,
}

impl MatchResponse {
    /// Packages the outcome of a soft match; an absent result yields empty fields and a zero score.
    pub fn from_outcome(input: &str, room_id: i64, outcome: Option<&MatchResult>) -> Self {
        match outcome {
            Some(result) => Self {
                input: input.to_string(),
                response: result.candidate.output.clone(),
                matched: result.candidate.input.clone(),
                room: room_id.to_string(),
                score: result.score,
                ai_col: result.candidate.ai_col,
                result_type: result.candidate.result_type,
            },
            None => Self {
                input: input.to_string(),
                room: room_id.to_string(),
                ..Default::default()
            },
        }
    }

    pub fn is_match(&self) -> bool {
        !self.matched.is_empty()
    }
}

impl fmt::Display for MatchResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Input: {}, Matched: {}, Score: {:.6}, Response: {}, Room: {}",
            self.input, self.matched, self.score, self.response, self.room
        )
    }
}

pub fn redact_utterance(s: &str) -> String {
    const MAX_LEN: usize = 8;
    if s.len() <= MAX_LEN {
        "[UTTERANCE]".to_string()
    } else {
        format!("[UTTERANCE: {} chars]", s.len())
    }
}

fn get_loggable_content(utterance: &str) -> String {
    if *PII_DEBUG_ALLOWED {
        utterance.to_string()
    } else {
        redact_utterance(utterance)
    }
}

pub fn log_candidate_score_debug(module_path: &str, user_input: &str, candidate: &Candidate, score: f64) {
    debug!(
        "{} Scored candidate: Input='{}', Candidate='{}', Room={}, Score={:.6}",
        module_path,
        get_loggable_content(user_input),
        get_loggable_content(&candidate.input),
        candidate.room_id,
        score
    );
}

pub fn log_match_outcome_debug(module_path: &str, user_input: &str, outcome: Option<&MatchResult>) {
    match outcome {
        Some(result) => debug!(
            "{} Best match for '{}': '{}' with score {:.6}",
            module_path,
            get_loggable_content(user_input),
            get_loggable_content(&result.candidate.input),
            result.score
        ),
        None => debug!(
            "{} No candidate scored above zero for '{}'",
            module_path,
            get_loggable_content(user_input)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_utterance_short_string() {
        assert_eq!(redact_utterance("hi"), "[UTTERANCE]".to_string());
    }

    #[test]
    fn test_redact_utterance_long_string() {
        assert_eq!(redact_utterance("hello there"), "[UTTERANCE: 11 chars]".to_string());
    }

    #[test]
    fn test_response_json_field_names() {
        let result = MatchResult {
            candidate: Candidate { ai_col: 4, result_type: 2, ..Candidate::new("hello there", "hi!", 1) },
            score: 0.25,
        };
        let response = MatchResponse::from_outcome("hello", 1, Some(&result));
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["match"], "hello there");
        assert_eq!(value["response"], "hi!");
        assert_eq!(value["room"], "1");
        assert_eq!(value["score"], 0.25);
        assert_eq!(value["aiCol"], 4);
        assert_eq!(value["resultType"], 2);
    }

    #[test]
    fn test_absent_outcome_omits_match() {
        let response = MatchResponse::from_outcome("hello", 3, None);
        assert!(!response.is_match());
        assert_eq!(response.score, 0.0);
        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("match").is_none());
        assert_eq!(value["room"], "3");
    }
}
