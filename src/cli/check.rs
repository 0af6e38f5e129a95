//! The `check` subcommand: validate configuration and summarize the graph.

use anyhow::Result;

use crate::config::Config;
use crate::ingest;

use super::CheckArgs;

pub fn run(args: CheckArgs) -> Result<()> {
    let config = Config::load(&args.config)?;
    config.init_logging();

    let records = ingest::load_prices(&args.prices)?;
    let map = ingest::build_route_map(&records, config.search.allow_hidden)?;

    let origin = map.find_port(&config.search.origin)?;
    let destination = config
        .search
        .destination
        .as_deref()
        .map(|name| map.find_port(name))
        .transpose()?;

    let routes: usize = map.nodes().map(|node| node.routes().len()).sum();

    println!("Configuration OK");
    println!("  ports:       {}", map.len());
    println!("  routes:      {routes}");
    println!("  origin:      {}", map.node(origin).port());
    if let Some(destination) = destination {
        println!("  destination: {}", map.node(destination).port());
    }

    if args.verbose {
        println!();
        print!("{map}");
    }

    Ok(())
}
