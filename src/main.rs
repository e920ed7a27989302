use clap::Parser;
use icongen::cli::{Cli, Commands};
use icongen::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Png(args) => icongen::cli::png::run(args, &printer)?,
        Commands::Svg(args) => icongen::cli::svg::run(args, &printer)?,
        Commands::Label(args) => icongen::cli::label::run(args, &printer)?,
        Commands::Init(args) => icongen::cli::init::run(args, &printer)?,
        Commands::Completions(args) => icongen::cli::completions::run(args)?,
    }

    Ok(())
}
