// simish/src/commands/init.rs
//! The `init` command: writes a starter configuration and pairs file.

use anyhow::{bail, Context, Result};
use log::info;
use std::fs;
use std::path::Path;

use simish_core::{MatchConfig, PairsFile};

use super::{info_msg, success_msg};

pub fn run_init(output: &Path, force: bool, pairs_path: &Path) -> Result<()> {
    if output.exists() && !force {
        bail!(
            "Configuration file '{}' already exists. Use --force to overwrite it.",
            output.display()
        );
    }

    let yaml = MatchConfig::load_default()?.to_yaml()?;
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }
    fs::write(output, yaml)
        .with_context(|| format!("Failed to write configuration to '{}'", output.display()))?;
    info!("Wrote default configuration to {}", output.display());
    success_msg(format!("Configuration written to {}", output.display()));

    if pairs_path.exists() {
        info_msg(format!("Keeping existing pairs file {}", pairs_path.display()));
    } else {
        PairsFile::open(pairs_path)?.save()?;
        success_msg(format!("Created empty pairs file {}", pairs_path.display()));
    }
    Ok(())
}
