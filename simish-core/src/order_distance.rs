// simish-core/src/order_distance.rs
//! Order similarity between two token sequences.
//!
//! Every token position of both sequences gets its own code from a shared,
//! strictly increasing counter. Each aligned pair is then recoded with one
//! fresh code shared by both positions, so only matched tokens can ever
//! coincide. Jaro-Winkler similarity over the two code strings then measures
//! how well the relative order of the matched tokens lines up.

use log::trace;

use crate::alignment::align;
use crate::tokenizer::Token;

/// First code handed out, just above the printable space.
const FIRST_CODE: u32 = 0x20;
const SURROGATE_START: u32 = 0xD800;
const SURROGATE_END: u32 = 0xDFFF;

/// Shared counter producing codes that are valid unicode scalar values.
#[derive(Debug)]
struct CodeAllocator {
    next: u32,
}

impl CodeAllocator {
    fn new() -> Self {
        Self { next: FIRST_CODE }
    }

    fn allocate(&mut self) -> u32 {
        if (SURROGATE_START..=SURROGATE_END).contains(&self.next) {
            self.next = SURROGATE_END + 1;
        }
        let code = self.next;
        self.next += 1;
        code
    }
}

/// The pair of position-coded arrays for a user/candidate pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionCodes {
    pub user: Vec<u32>,
    pub db: Vec<u32>,
}

impl PositionCodes {
    /// Assigns unique codes to every position, then recodes aligned pairs.
    pub fn build(user_tokens: &[Token], db_tokens: &[Token]) -> Self {
        let mut codes = CodeAllocator::new();
        let mut user: Vec<u32> = user_tokens.iter().map(|_| codes.allocate()).collect();
        let mut db: Vec<u32> = db_tokens.iter().map(|_| codes.allocate()).collect();

        for (user_index, db_index) in align(user_tokens, db_tokens).pairs {
            let shared = codes.allocate();
            user[user_index] = shared;
            db[db_index] = shared;
        }

        Self { user, db }
    }

    /// Jaro-Winkler similarity of the two code strings.
    pub fn similarity(&self) -> f64 {
        if self.user.is_empty() || self.db.is_empty() {
            return 0.0;
        }
        let user = codes_to_string(&self.user);
        let db = codes_to_string(&self.db);
        strsim::jaro_winkler(&user, &db)
    }
}

// The allocator only yields scalar values, the fallback is unreachable in practice.
fn codes_to_string(codes: &[u32]) -> String {
    codes
        .iter()
        .map(|&code| char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}

/// How well matched tokens keep their relative order, in `[0, 1]`.
///
/// Returns `0.0` when either sequence is empty.
pub fn order_distance(user_tokens: &[Token], db_tokens: &[Token]) -> f64 {
    let codes = PositionCodes::build(user_tokens, db_tokens);
    let similarity = codes.similarity();
    trace!(
        "order distance over {} user / {} candidate tokens: {:.4}",
        codes.user.len(),
        codes.db.len(),
        similarity
    );
    similarity
}
