use clap::Parser;
use tracing_subscriber::EnvFilter;

mod catalog;
mod cli;
mod core;
mod grid;
mod parsing;
mod repl;
mod utils;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("shelfscan=debug,info")
    } else {
        EnvFilter::new("shelfscan=warn")
    };

    // Logs go to stderr so prompts and query results own stdout
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Library(args) => {
            cli::library::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Carpet(args) => {
            cli::carpet::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
