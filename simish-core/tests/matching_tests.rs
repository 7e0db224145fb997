// simish-core/tests/matching_tests.rs
use simish_core::{
    raw_score, score_breakdown, soft_match, tokenize, vote_confidence, Candidate, ConfidenceEngine,
    ConfidenceParams, LexicalEngine, MatchEngine, ScoringWeights,
};
use test_log::test;

const EPSILON: f64 = 1e-12;

fn room_one() -> Vec<Candidate> {
    vec![
        Candidate::new("hello there", "hi!", 1),
        Candidate::new("goodbye", "bye!", 1),
    ]
}

#[test]
fn test_scenario_hello_there_matches_first_candidate() {
    let result = soft_match("hello there", &room_one()).expect("expected a match");
    assert_eq!(result.candidate.input, "hello there");
    assert_eq!(result.candidate.output, "hi!");
    assert_eq!(result.candidate.room_id, 1);

    // The best attainable score for a word-only utterance without votes.
    let ceiling = 0.9 / 1.9 * 0.7;
    assert!((result.score - ceiling).abs() < EPSILON, "score {}", result.score);
}

#[test]
fn test_scenario_unrelated_input_scores_at_lower_bound() {
    let outcome = soft_match("xyz completely unrelated", &room_one());
    let score = outcome.map(|r| r.score).unwrap_or(0.0);
    assert!(score < 0.05, "score {}", score);
}

#[test]
fn test_empty_candidate_set_is_absent() {
    assert!(soft_match("hello there", &[]).is_none());
}

#[test]
fn test_empty_input_is_absent() {
    assert!(soft_match("   ", &room_one()).is_none());
}

#[test]
fn test_paraphrase_with_noise_and_reordering() {
    let candidates = vec![
        Candidate::new("where is the red door", "Down the hall.", 1),
        Candidate::new("open the blue window", "It is stuck.", 1),
        Candidate::new("goodbye", "bye!", 1),
    ];
    let result = soft_match("Door... RED?! where", &candidates).expect("expected a match");
    assert_eq!(result.candidate.output, "Down the hall.");
}

#[test]
fn test_identical_scores_keep_supply_order() {
    let candidates = vec![
        Candidate::new("the purple monkey", "first", 1),
        Candidate::new("purple monkey!", "second", 1),
        Candidate::new("PURPLE MONKEY", "third", 1),
    ];
    let result = soft_match("purple monkey", &candidates).unwrap();
    assert_eq!(result.candidate.output, "first");
}

#[test]
fn test_word_and_action_identity_reaches_one() {
    let tokens = tokenize("#nod I agree completely");
    let score = raw_score(&tokens, &tokens, &ScoringWeights::default());
    assert!((score - 1.0).abs() < EPSILON);
}

#[test]
fn test_disjoint_raw_score_is_distance_term_only() {
    let weights = ScoringWeights::default();
    let user = tokenize("completely unrelated words");
    let db = tokenize("#wave hello");
    let breakdown = score_breakdown(&user, &db, &weights);
    assert_eq!(breakdown.word_match, 0.0);
    assert_eq!(breakdown.action_match, 0.0);
    let expected = breakdown.order_distance * weights.distance / weights.total();
    assert!((breakdown.score - expected).abs() < EPSILON);
}

#[test]
fn test_raw_scores_stay_bounded() {
    let weights = ScoringWeights::default();
    let texts = [
        "",
        "hello",
        "hello hello hello",
        "#wave hello",
        "#wave #wave #smile",
        "where is the red door",
        "door red where is",
    ];
    for a in texts.iter() {
        for b in texts.iter() {
            let score = raw_score(&tokenize(a), &tokenize(b), &weights);
            assert!(score.is_finite());
            assert!((0.0..=1.0 + EPSILON).contains(&score), "{:?} vs {:?} = {}", a, b, score);
        }
    }
}

#[test]
fn test_no_votes_preserve_lexical_ordering() {
    let candidates = vec![
        Candidate::new("where is the red door", "a", 1),
        Candidate::new("red door", "b", 1),
        Candidate::new("open the door", "c", 1),
    ];
    let input = "is the red door open";
    let lexical = LexicalEngine::default().rank(input, &candidates);
    let weighted = ConfidenceEngine::default().rank(input, &candidates);
    let lexical_order: Vec<usize> = lexical.iter().map(|(i, _)| *i).collect();
    let weighted_order: Vec<usize> = weighted.iter().map(|(i, _)| *i).collect();
    assert_eq!(lexical_order, weighted_order);
    for ((_, l), (_, w)) in lexical.iter().zip(weighted.iter()) {
        assert!((w.score - l.score * 0.7).abs() < EPSILON);
    }
}

#[test]
fn test_downvotes_demote_a_candidate() {
    let candidates = vec![
        Candidate::new("hello there", "rude", 1).with_votes(0.0, 20.0),
        Candidate::new("hello there friend", "polite", 1),
    ];
    let result = soft_match("hello there", &candidates).unwrap();
    assert_eq!(result.candidate.output, "polite");
}

#[test]
fn test_vote_confidence_contract() {
    let params = ConfidenceParams::default();
    assert_eq!(vote_confidence(0.0, 0.0, &params), 0.7);
    assert!(vote_confidence(3.0, 0.0, &params) > 0.7);
    assert!(vote_confidence(0.0, 3.0, &params) < 0.7);
}
