// simish/src/commands/vote.rs
use anyhow::Result;
use std::path::Path;

use simish_core::{CandidateStore, PairsFile, VoteDirection};

use super::success_msg;
use crate::cli::VoteCommand;

pub fn run_vote(pairs_path: &Path, args: &VoteCommand) -> Result<()> {
    let direction = if args.down { VoteDirection::Down } else { VoteDirection::Up };

    let mut file = PairsFile::open(pairs_path)?;
    let record = file.record_vote(&args.input, &args.matched, args.room, direction)?;
    file.save()?;

    success_msg(format!(
        "Recorded {} vote (up {}, down {})",
        direction, record.up_votes, record.down_votes
    ));
    Ok(())
}
