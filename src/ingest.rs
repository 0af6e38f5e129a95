//! Price-list ingestion.
//!
//! The sole input surface into graph construction: a flat collection of
//! records, one per trading post, each carrying the post's location path
//! and its commodity price list. A missing price means the post does not
//! offer that commodity on that side.

use serde::Deserialize;
use std::path::Path;

use tracing::debug;

use crate::domain::{Commodity, Port, Price, TradeCatalog};
use crate::error::Result;
use crate::graph::RouteMap;

/// One commodity line of a price list.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceRecord {
    pub name: String,
    /// Price the post sells at (a ship buys here); absent = not offered.
    pub buy: Option<Price>,
    /// Price the post buys at (a ship sells here); absent = not offered.
    pub sell: Option<Price>,
}

/// One trading post of a price list.
#[derive(Debug, Clone, Deserialize)]
pub struct PortRecord {
    /// Hierarchical location path, e.g. system / body / post.
    pub location: Vec<String>,
    pub commodities: Vec<PriceRecord>,
}

/// Read a JSON price list from disk.
pub fn load_prices<P: AsRef<Path>>(path: P) -> Result<Vec<PortRecord>> {
    let raw = std::fs::read_to_string(path)?;
    let records: Vec<PortRecord> = serde_json::from_str(&raw)?;

    Ok(records)
}

/// Build the fully linked trading-post graph from ingested records.
///
/// Hidden posts are skipped unless `allow_hidden` is set. All vertices are
/// registered before any route is linked.
pub fn build_route_map(records: &[PortRecord], allow_hidden: bool) -> Result<RouteMap> {
    let mut map = RouteMap::new();
    let mut skipped = 0usize;

    for record in records {
        let port = Port::new(record.location.clone());

        if port.is_hidden() && !allow_hidden {
            skipped += 1;
            continue;
        }

        let mut catalog = TradeCatalog::new();
        for line in &record.commodities {
            if let Some(price) = line.buy {
                catalog.add_selling(Commodity::new(&line.name, price));
            }
            if let Some(price) = line.sell {
                catalog.add_buying(Commodity::new(&line.name, price));
            }
        }

        map.add_port(port, catalog);
    }

    map.link_all()?;

    debug!(ports = map.len(), skipped, "price list ingested");

    Ok(map)
}
