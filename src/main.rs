//! mcwarm command line front end

use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::helpers::Context;
use mcwarm::error::Result;

fn run(cli: Cli) -> Result<()> {
    // Commands that need neither config nor discovery
    match cli.command {
        Commands::Version => return commands::version::run(),
        Commands::Completions(args) => return commands::completions::run(args),
        _ => {}
    }

    let ctx = Context::from_cli(&cli)?;
    match cli.command {
        Commands::Roots => commands::roots::run(&ctx, cli.verbose),
        Commands::List(args) => commands::list::run(&ctx, args),
        Commands::Plan(args) => commands::plan::run(&ctx, args),
        Commands::Warm(args) => commands::warm::run(&ctx, args),
        Commands::Reveal(args) => commands::reveal::run(&ctx, args),
        Commands::Detect(args) => commands::detect::run(&ctx, args),
        Commands::Open(args) => commands::open::run(&ctx, args),
        Commands::Version | Commands::Completions(_) => Ok(()),
    }
}

fn main() {
    let cli = Cli::parse();
    mcwarm::logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
