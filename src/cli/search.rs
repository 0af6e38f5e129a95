//! The `search` subcommand: run one route search end to end.

use anyhow::Result;
use tracing::info;

use crate::config::Config;
use crate::ingest;
use crate::search::RouteTree;

use super::{output, SearchArgs};

pub fn run(args: SearchArgs) -> Result<()> {
    let mut config = Config::load(&args.config)?;

    if let Some(origin) = args.origin {
        config.search.origin = origin;
    }
    if let Some(destination) = args.destination {
        config.search.destination = Some(destination);
    }
    if let Some(max_hops) = args.max_hops {
        config.search.max_hops = max_hops;
    }
    if let Some(level) = args.log_level {
        config.logging.level = level;
    }

    // Overrides may have invalidated the loaded values.
    config.validate()?;
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

    info!(
        origin = %map.node(origin).port(),
        max_hops = config.search.max_hops,
        "starting route search"
    );

    let mut ship = config.ship();
    let options = config.search_options();

    let tree = RouteTree::build(&map, origin, destination, &mut ship, &options)?;
    let paths = tree.paths()?;

    info!(
        nodes = tree.node_count(),
        leaves = tree.leaf_count(),
        paths = paths.len(),
        "search complete"
    );

    if args.json {
        output::print_json(&paths, args.top)?;
    } else {
        output::print_paths(&paths, args.top);
    }

    Ok(())
}
