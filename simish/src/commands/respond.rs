// simish/src/commands/respond.rs
//! The `match` command: answers one utterance from a room.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::io::{self, Write};
use std::path::Path;

use simish_core::{build_engine, CandidateStore, MatchConfig, MatchResponse, PairsFile};

use super::warn_msg;
use crate::cli::MatchCommand;
use crate::ui::match_table;

pub fn run_match(config: &MatchConfig, pairs_path: &Path, args: &MatchCommand) -> Result<()> {
    let file = PairsFile::open(pairs_path)?;
    let engine = build_engine(config)?;
    let candidates = file
        .fetch_candidates(args.room)
        .with_context(|| format!("Failed to fetch candidates for room {}", args.room))?;
    debug!("Room {} has {} candidates", args.room, candidates.len());

    let outcome = engine.soft_match(&args.input, &candidates);
    let response = MatchResponse::from_outcome(&args.input, args.room, outcome.as_ref());
    info!("Answered room {} with {} engine (score {:.4})", args.room, engine.kind(), response.score);

    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    let mut out = stdout.lock();

    if args.json {
        let json = serde_json::to_string(&response).context("Failed to serialize response")?;
        writeln!(out, "{}", json)?;
        return Ok(());
    }

    if !response.is_match() {
        warn_msg(format!("No pair in room {} matched the input", args.room));
    }
    match_table::print_response(&mut out, &response, supports_color)?;

    if args.explain {
        let ranked = engine.rank(&args.input, &candidates);
        let table = match_table::build_breakdown_table(&ranked, &candidates, args.top);
        writeln!(out, "{table}")?;
    }
    Ok(())
}
