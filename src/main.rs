use anyhow::Result;
use clap::Parser;
use impactmap::cli::{Cli, Commands};
use impactmap::commands::{changes, module};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Changes {
            files,
            from_file,
            rules,
            inputs,
            output,
        } => changes::run_changes(changes::ChangesConfig {
            files,
            from_file,
            rules,
            inputs,
            output,
        })?,
        Commands::Module {
            name,
            inputs,
            output,
        } => module::run_module(module::ModuleConfig {
            name,
            inputs,
            output,
        })?,
    }
    Ok(())
}
