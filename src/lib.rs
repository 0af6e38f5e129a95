//! Tradewinds - multi-hop trade route profit search.
//!
//! Given per-post commodity prices, a starting stake, and a hop limit,
//! this crate finds the most profitable sequences of buy/sell trades
//! across a network of trading posts.
//!
//! # Architecture
//!
//! Data flows catalog-first:
//!
//! - [`ingest`] - price-list records in, fully linked [`graph::RouteMap`] out
//! - [`graph`] - directed graph linking every sell listing at one post to
//!   every matching buy listing at another (or the same) post
//! - [`domain`] - commodities, ports, catalogs, and the [`domain::Ship`]
//!   simulation the engine checkpoints as it explores
//! - [`search`] - the route-tree engine: bounded breadth-first expansion
//!   with branch capping, best-of-generation pruning, and sentinel-leg
//!   merging
//!
//! # Modules
//!
//! - [`config`] - configuration loading from TOML files
//! - [`error`] - error types for the crate
//! - [`cli`] - clap definitions and terminal output
//!
//! # Example
//!
//! ```no_run
//! use tradewinds::ingest;
//! use tradewinds::domain::Ship;
//! use tradewinds::search::{RouteTree, SearchOptions};
//! use rust_decimal_macros::dec;
//!
//! # fn main() -> tradewinds::error::Result<()> {
//! let records = ingest::load_prices("prices.json")?;
//! let map = ingest::build_route_map(&records, false)?;
//!
//! let origin = map.find_port("olisar")?;
//! let mut ship = Ship::new(dec!(5000), 96);
//!
//! let options = SearchOptions {
//!     max_hops: 3,
//!     ..Default::default()
//! };
//!
//! let tree = RouteTree::build(&map, origin, None, &mut ship, &options)?;
//! for path in tree.paths()? {
//!     println!("{path}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod graph;
pub mod ingest;
pub mod search;
