use clap::Parser;
use miette::Result;
use roomed::cli::Cli;
use roomed::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();

    roomed::cli::run(cli, Printer::new())?;

    Ok(())
}
