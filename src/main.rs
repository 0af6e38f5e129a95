use clap::Parser;

use tradewinds::cli::{check, search, Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Search(args) => search::run(args),
        Commands::Check(args) => check::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
