// simish/src/main.rs
//! Simish entry point.
//!
//! Loads `.env`, parses the command line, sets up logging and dispatches to
//! the subcommand.

use anyhow::Result;
use clap::Parser;
use log::debug;

use simish::cli::{Cli, Commands};
use simish::commands::{self, add, evaluate, init, respond, vote};
use simish::logger;

fn run(cli: Cli) -> Result<()> {
    match &cli.command {
        Commands::Init(args) => init::run_init(&args.output, args.force, &cli.pairs),
        Commands::Add(args) => add::run_add(&cli.pairs, args),
        Commands::Vote(args) => vote::run_vote(&cli.pairs, args),
        Commands::Match(args) => {
            let config = commands::resolve_config(cli.config.as_deref(), args.engine.map(Into::into))?;
            respond::run_match(&config, &cli.pairs, args)
        }
        Commands::Test(args) => {
            let config = commands::resolve_config(cli.config.as_deref(), args.engine.map(Into::into))?;
            evaluate::run_test(&config, &cli.pairs, args)
        }
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    logger::init_logger(logger::level_from_flags(cli.quiet, cli.debug));
    debug!("Parsed command line: {:?}", cli.command);

    if let Err(e) = run(cli) {
        commands::error_msg(format!("{:#}", e));
        std::process::exit(1);
    }
    Ok(())
}
