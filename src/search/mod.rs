//! The route-tree search engine.
//!
//! Breadth-first expansion of the trading-post graph from an origin up to a
//! hop limit, with per-generation branch capping, periodic best-of-
//! generation pruning, and sentinel-leg merging in the collected paths.

mod path;
mod tree;

pub use path::{PathLeg, TradePath};
pub use tree::RouteTree;

use std::collections::BTreeSet;

/// Bounds and filters for one search run.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Number of BFS generations to explore. Zero means the root only.
    pub max_hops: u32,
    /// Hard cap on surviving children per expanded node. `None` is
    /// unbounded.
    pub max_children: Option<usize>,
    /// Generations between best-of-generation cuts. `None` disables split
    /// pruning.
    pub split_depth: Option<u32>,
    /// Commodity names excluded from purchase.
    pub exclude_commodities: BTreeSet<String>,
}

impl SearchOptions {
    /// Whether a generation at `depth` lands on a split boundary.
    pub(crate) fn is_split_depth(&self, depth: u32) -> bool {
        match self.split_depth {
            Some(interval) if interval > 0 => depth % interval == 0,
            _ => false,
        }
    }

    /// Whether buying `commodity` is ruled out by configuration.
    pub(crate) fn is_excluded(&self, commodity: &str) -> bool {
        self.exclude_commodities.contains(commodity)
    }
}
