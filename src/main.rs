use blockies::cli::{Cli, Commands};
use blockies::output::Printer;
use clap::Parser;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Generate(args) => blockies::cli::generate::run(args, &printer)?,
        Commands::Inspect(args) => blockies::cli::inspect::run(args)?,
        Commands::Completions(args) => blockies::cli::completions::run(args)?,
    }

    Ok(())
}
