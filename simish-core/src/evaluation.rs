// simish-core/src/evaluation.rs
//! Offline evaluation of a room's pairs.
//!
//! Each pair's input is matched against every other pair of the room, which
//! shows operators which utterances are confusable and how strongly the
//! engine separates them.

use log::debug;
use serde::Serialize;

use simish_votes::statistics::{compute_stats, ScoreStats};

use crate::candidate::Candidate;
use crate::engine::MatchEngine;

/// What one recorded utterance matched when its own pair was held out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationEntry {
    pub input: String,
    pub matched: String,
    pub response: String,
    pub score: f64,
}

/// All entries of an evaluation, best score first, plus their summary.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomEvaluation {
    pub entries: Vec<EvaluationEntry>,
    pub stats: ScoreStats,
}

/// Matches every pair against the others, skipping pairs with the same `ai_col`.
pub fn evaluate_pairs(engine: &dyn MatchEngine, pairs: &[Candidate]) -> RoomEvaluation {
    let mut entries: Vec<EvaluationEntry> = pairs
        .iter()
        .map(|pair| {
            let others: Vec<Candidate> = pairs
                .iter()
                .filter(|other| other.ai_col != pair.ai_col)
                .cloned()
                .collect();
            let outcome = engine.soft_match(&pair.input, &others);
            let (matched, response, score) = match outcome {
                Some(result) => (result.candidate.input, result.candidate.output, result.score),
                None => (String::new(), String::new(), 0.0),
            };
            EvaluationEntry {
                input: pair.input.clone(),
                matched,
                response,
                score,
            }
        })
        .collect();

    entries.sort_by(|a, b| b.score.total_cmp(&a.score));

    let scores: Vec<f64> = entries.iter().map(|e| e.score).collect();
    let stats = compute_stats(&scores);
    debug!(
        "Evaluated {} pairs: mean {:.4}, std dev {:.4}",
        entries.len(),
        stats.mean,
        stats.std_dev
    );
    RoomEvaluation { entries, stats }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::lexical_engine::LexicalEngine;

    fn pair(input: &str, output: &str, ai_col: i64) -> Candidate {
        Candidate { ai_col, ..Candidate::new(input, output, 1) }
    }

    #[test]
    fn test_leave_one_out_excludes_same_ai_col() {
        let pairs = vec![
            pair("hello there friend", "hi!", 1),
            pair("hello friend", "hey!", 2),
            pair("goodbye", "bye!", 3),
        ];
        let evaluation = evaluate_pairs(&LexicalEngine::default(), &pairs);
        assert_eq!(evaluation.entries.len(), 3);

        let first = evaluation.entries.iter().find(|e| e.input == "hello there friend").unwrap();
        assert_eq!(first.matched, "hello friend");

        let lonely = evaluation.entries.iter().find(|e| e.input == "goodbye").unwrap();
        assert!(lonely.matched.is_empty());
        assert_eq!(lonely.score, 0.0);
    }

    #[test]
    fn test_entries_sorted_by_score() {
        let pairs = vec![
            pair("goodbye", "bye!", 1),
            pair("hello friend", "hey!", 2),
            pair("hello friend", "hi!", 3),
        ];
        let evaluation = evaluate_pairs(&LexicalEngine::default(), &pairs);
        let scores: Vec<f64> = evaluation.entries.iter().map(|e| e.score).collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(evaluation.stats.max, scores[0]);
    }

    #[test]
    fn test_empty_room() {
        let evaluation = evaluate_pairs(&LexicalEngine::default(), &[]);
        assert!(evaluation.entries.is_empty());
        assert_eq!(evaluation.stats.mean, 0.0);
    }
}
