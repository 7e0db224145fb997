// simish/src/cli.rs
//! This file defines the command-line interface (CLI) for the simish application,
//! including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Parser, Subcommand, ValueEnum};
use simish_core::EngineKind;
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "simish",
    author = "Simish Team",
    version = env!("CARGO_PKG_VERSION"),
    about = "Soft Matching Algorithm as a service",
    long_about = "Simish answers free-text user utterances with the canned response of the closest recorded utterance in a room. Matching tolerates paraphrase, word reordering, punctuation noise and partial vocabulary overlap, and community votes on matches shift future scores.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// Path to the pairs file holding recorded pairs and votes.
    #[arg(long, global = true, env = "SIMISH_PAIRS", default_value = "pairs.yaml", value_name = "FILE", help = "Pairs file (YAML, or JSON when it ends in .json).")]
    pub pairs: PathBuf,

    /// Path to a match configuration file (YAML).
    #[arg(long, global = true, env = "SIMISH_CONFIG", value_name = "FILE", help = "Path to a match configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `simish` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Writes a default configuration file and an empty pairs file.
    #[command(about = "Write a default configuration file and an empty pairs file.")]
    Init(InitCommand),

    /// Records a new utterance/response pair.
    #[command(about = "Record a new utterance/response pair in a room.")]
    Add(AddCommand),

    /// Finds the best response for an utterance.
    #[command(name = "match", about = "Find the best response for an utterance.")]
    Match(MatchCommand),

    /// Evaluates the soft-match algorithm on the pairs of a room.
    #[command(about = "Test the soft-match algorithm against the pairs of a room.")]
    Test(TestCommand),

    /// Records an up or down vote on a match.
    #[command(about = "Record an up or down vote on a match.")]
    Vote(VoteCommand),
}

/// Arguments for the `init` command.
#[derive(Parser, Debug)]
pub struct InitCommand {
    /// Where to write the configuration.
    #[arg(long = "output", short = 'o', value_name = "FILE", default_value = "simish.yaml", help = "Where to write the configuration file.")]
    pub output: PathBuf,

    /// Overwrite an existing configuration file.
    #[arg(long, short = 'f', help = "Overwrite an existing configuration file.")]
    pub force: bool,
}

/// Arguments for the `add` command.
#[derive(Parser, Debug)]
pub struct AddCommand {
    /// The recorded utterance.
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// The response returned when the utterance matches.
    #[arg(value_name = "RESPONSE")]
    pub response: String,

    #[arg(long, short = 'r', value_name = "ROOM", help = "Room the pair belongs to.")]
    pub room: i64,

    #[arg(long = "ai-col", value_name = "ID", default_value_t = 0, help = "Operator-assigned pair identifier; 0 picks the next free one.")]
    pub ai_col: i64,

    #[arg(long = "result-type", value_name = "TYPE", default_value_t = 0, help = "Operator-assigned response category.")]
    pub result_type: i64,
}

/// Arguments for the `match` command.
#[derive(Parser, Debug)]
pub struct MatchCommand {
    /// The user utterance to answer.
    #[arg(value_name = "INPUT")]
    pub input: String,

    #[arg(long, short = 'r', value_name = "ROOM", help = "Room whose pairs are eligible.")]
    pub room: i64,

    /// Override the engine selected by the configuration.
    #[arg(long = "engine", value_name = "ENGINE", help = "Select a match engine ('confidence' or 'lexical').")]
    pub engine: Option<EngineChoice>,

    /// Print the response as JSON.
    #[arg(long = "json", help = "Print the response as JSON.")]
    pub json: bool,

    /// Show how the best candidates were scored.
    #[arg(long = "explain", conflicts_with = "json", help = "Show the score breakdown of the best candidates.")]
    pub explain: bool,

    /// Number of candidates listed by --explain.
    #[arg(long = "top", value_name = "N", default_value_t = 5, help = "Number of candidates listed by --explain.")]
    pub top: usize,
}

/// Arguments for the `test` command.
#[derive(Parser, Debug)]
pub struct TestCommand {
    /// A single utterance to match. Without it every pair is matched against the others.
    #[arg(value_name = "INPUT")]
    pub input: Option<String>,

    #[arg(long, short = 'r', value_name = "ROOM", default_value_t = 1, help = "Room to test.")]
    pub room: i64,

    #[arg(long = "engine", value_name = "ENGINE", help = "Select a match engine ('confidence' or 'lexical').")]
    pub engine: Option<EngineChoice>,
}

/// Arguments for the `vote` command.
#[derive(Parser, Debug)]
pub struct VoteCommand {
    /// The utterance the user typed.
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// The recorded utterance it was matched to.
    #[arg(value_name = "MATCHED")]
    pub matched: String,

    #[arg(long, short = 'r', value_name = "ROOM", help = "Room the match happened in.")]
    pub room: i64,

    /// Record a downvote instead of an upvote.
    #[arg(long, help = "Record a downvote instead of an upvote.")]
    pub down: bool,
}

/// Enum for selecting the match engine.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum EngineChoice {
    /// Lexical score weighted by vote confidence.
    Confidence,
    /// Lexical score only.
    Lexical,
}

impl From<EngineChoice> for EngineKind {
    fn from(choice: EngineChoice) -> Self {
        match choice {
            EngineChoice::Confidence => EngineKind::Confidence,
            EngineChoice::Lexical => EngineKind::Lexical,
        }
    }
}
