// simish/src/commands/add.rs
use anyhow::Result;
use log::info;
use std::path::Path;

use simish_core::{Candidate, CandidateStore, PairsFile};

use super::{success_msg, warn_msg};
use crate::cli::AddCommand;

/// Records a pair in the pairs file. An identical pair is reported and left alone.
pub fn run_add(pairs_path: &Path, args: &AddCommand) -> Result<()> {
    let mut file = PairsFile::open(pairs_path)?;

    let mut candidate = Candidate::new(args.input.as_str(), args.response.as_str(), args.room);
    candidate.ai_col = args.ai_col;
    candidate.result_type = args.result_type;

    if file.save_pair(candidate)? {
        file.save()?;
        info!("Added pair to room {} in {}", args.room, pairs_path.display());
        success_msg(format!("Added pair to room {}", args.room));
    } else {
        warn_msg(format!("Room {} already has this pair; nothing changed", args.room));
    }
    Ok(())
}
