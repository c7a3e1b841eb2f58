use clap::Parser;

mod cli;
mod commands;
mod domain;
mod ns;
mod services;
mod sheets;

use cli::{Cli, Commands};
use services::config::{load_config_file, RunConfig};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let file = load_config_file()?;
    let cfg = RunConfig::resolve(&cli, file);

    match cli.command {
        Commands::Violators => commands::violators::run(&cfg),
        Commands::Endorsers { verbose } => commands::endorsers::run(&cfg, verbose),
    }
}
