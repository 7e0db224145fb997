// simish/src/commands/evaluate.rs
//! The `test` command.
//!
//! With an utterance it behaves like a plain `match`. Without one, every pair
//! of the room is matched against the rest and the results are tabulated.

use anyhow::Result;
use is_terminal::IsTerminal;
use std::io::{self, Write};
use std::path::Path;

use simish_core::{build_engine, evaluate_pairs, CandidateStore, MatchConfig, MatchResponse, PairsFile};

use super::{info_msg, warn_msg};
use crate::cli::TestCommand;
use crate::ui::match_table;

pub fn run_test(config: &MatchConfig, pairs_path: &Path, args: &TestCommand) -> Result<()> {
    let file = PairsFile::open(pairs_path)?;
    let engine = build_engine(config)?;
    let candidates = file.fetch_candidates(args.room)?;
    let disabled = file.all_pairs(args.room)?.len().saturating_sub(candidates.len());
    if disabled > 0 {
        info_msg(format!("Skipping {} disabled pairs in room {}", disabled, args.room));
    }

    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    let mut out = stdout.lock();

    match &args.input {
        Some(input) => {
            let outcome = engine.soft_match(input, &candidates);
            let response = MatchResponse::from_outcome(input, args.room, outcome.as_ref());
            match_table::print_response(&mut out, &response, supports_color)?;
        }
        None => {
            if candidates.is_empty() {
                warn_msg(format!("Room {} has no pairs to test", args.room));
                return Ok(());
            }
            let evaluation = evaluate_pairs(engine.as_ref(), &candidates);
            match_table::print_evaluation(&mut out, &evaluation)?;
        }
    }
    out.flush()?;
    Ok(())
}
