//! ShopLinker CLI entry point.
//!
//! Binary name: `shoplink`
//!
//! Parses CLI arguments, loads the shop collection, dispatches one command,
//! then flushes the collection before exiting.

mod cli;
mod state;

use clap::Parser;
use clap_complete::generate;

use cli::{Cli, Commands};
use shoplinker_observe::tracing_setup::{init_tracing, otel_requested, shutdown_tracing};
use state::AppState;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    init_tracing(filter, otel_requested())
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "shoplink", &mut std::io::stdout());
        return Ok(());
    }

    let state = AppState::init()?;
    let result = run(&state, cli);

    // Final flush runs even when the command failed.
    let flushed = state.shutdown();
    shutdown_tracing();

    result?;
    flushed
}

fn run(state: &AppState, cli: Cli) -> anyhow::Result<()> {
    let json = cli.json;
    let actor = cli.actor;

    match cli.command {
        Commands::List => cli::shop::list_shops(state, json),
        Commands::Show { name } => cli::shop::show_shop(state, &name, json),
        Commands::Add {
            name,
            description,
            url,
        } => cli::shop::add_shop(state, actor, name, description, url, json),
        Commands::Remove { name, force } => {
            cli::shop::remove_shop(state, actor, &name, force, json)
        }
        Commands::Modify { shop, field, value } => {
            cli::shop::modify_shop(state, actor, &shop, field, &value, json)
        }
        Commands::Whoami => cli::shop::whoami(state, actor, json),
        Commands::Completions { .. } => unreachable!("handled before state init"),
    }
}
