// simish-core/src/tokenizer.rs
//! Normalization and segmentation of utterances into matchable tokens.
//!
//! Tokenization lower-cases the input, splits it on single spaces, removes
//! punctuation noise from every piece and drops stop words. It never fails:
//! blank input simply produces no tokens.
//!
//! License: MIT OR Apache-2.0

use std::collections::HashSet;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// First character of a token that marks it as an action rather than a word.
pub const ACTION_SENTINEL: char = '#';

static NOISE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([.,?!*]|[[:blank:]])+").expect("noise pattern is a valid regex")
});

static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    include_str!("../config/stop_words.txt")
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
});

/// Whether a token is a plain word or an intent marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Word,
    Action,
}

/// A normalized, non-empty unit of an utterance.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token(String);

impl Token {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn kind(&self) -> TokenKind {
        if self.0.starts_with(ACTION_SENTINEL) {
            TokenKind::Action
        } else {
            TokenKind::Word
        }
    }

    pub fn is_action(&self) -> bool {
        self.kind() == TokenKind::Action
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Returns true if `token` is excluded from matching.
pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(token)
}

/// Splits `text` into normalized tokens, preserving their original order.
pub fn tokenize(text: &str) -> Vec<Token> {
    text.to_lowercase()
        .split(' ')
        .filter_map(|piece| {
            let cleaned = NOISE.replace_all(piece, "");
            if cleaned.is_empty() || is_stop_word(&cleaned) {
                None
            } else {
                Some(Token(cleaned.into_owned()))
            }
        })
        .collect()
}
