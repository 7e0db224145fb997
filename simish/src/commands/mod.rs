// simish/src/commands/mod.rs
//! Subcommand implementations and the helpers they share.

pub mod add;
pub mod evaluate;
pub mod init;
pub mod respond;
pub mod vote;

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::debug;
use std::io;
use std::path::{Path, PathBuf};

use simish_core::{merge_config, EngineKind, MatchConfig};

use crate::ui::output_format;

/// Helper for printing info messages to stderr.
pub fn info_msg(msg: impl AsRef<str>) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_info_message(&mut io::stderr(), msg.as_ref(), stderr_supports_color);
}

/// Helper for printing success messages to stderr.
pub fn success_msg(msg: impl AsRef<str>) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_success_message(&mut io::stderr(), msg.as_ref(), stderr_supports_color);
}

/// Helper for printing warning messages to stderr.
pub fn warn_msg(msg: impl AsRef<str>) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_warn_message(&mut io::stderr(), msg.as_ref(), stderr_supports_color);
}

/// Helper for printing error messages to stderr.
pub fn error_msg(msg: impl AsRef<str>) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_error_message(&mut io::stderr(), msg.as_ref(), stderr_supports_color);
}

/// The per-user configuration file, if the platform has a config directory.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("simish").join("config.yaml"))
}

/// Builds the effective configuration.
///
/// An explicit path must exist and parse. Without one, the per-user file is
/// merged in when present. A command-line engine choice overrides both.
pub fn resolve_config(explicit: Option<&Path>, engine: Option<EngineKind>) -> Result<MatchConfig> {
    let default_config = MatchConfig::load_default()?;

    let user_config = match explicit {
        Some(path) => Some(
            MatchConfig::load_from_file(path)
                .with_context(|| format!("Failed to load configuration '{}'", path.display()))?,
        ),
        None => match user_config_path() {
            Some(path) if path.is_file() => Some(MatchConfig::load_from_file(&path)?),
            _ => None,
        },
    };

    let mut config = merge_config(default_config, user_config);
    if let Some(kind) = engine {
        debug!("Engine overridden on the command line: {}", kind);
        config.engine = Some(kind);
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_explicit_config_is_merged_over_defaults() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "votes:\n  slope: 0.5")?;
        let config = resolve_config(Some(file.path()), None)?;
        assert_eq!(config.votes.slope, Some(0.5));
        assert_eq!(config.votes.initial, Some(0.7));
        Ok(())
    }

    #[test]
    fn test_engine_override_wins() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "engine: confidence")?;
        let config = resolve_config(Some(file.path()), Some(EngineKind::Lexical))?;
        assert_eq!(config.engine_kind(), EngineKind::Lexical);
        Ok(())
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        assert!(resolve_config(Some(Path::new("/no/such/simish.yaml")), None).is_err());
    }
}
