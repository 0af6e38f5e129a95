//! Bounded breadth-first route-tree construction.
//!
//! The tree is an arena: nodes and edges live in flat vectors addressed by
//! index, and a node's parent edge is fixed at insertion time. Every node
//! carries the ship snapshot taken right after the trade that created it,
//! so cumulative profit at any point of the tree is a single subtraction
//! away and no path prefix is ever re-simulated.

use std::collections::{BTreeMap, VecDeque};

use tracing::{debug, trace};

use crate::domain::{Commodity, Credits, Ship, ShipSnapshot};
use crate::error::{Result, SearchError};
use crate::graph::{NodeId, RouteMap};

use super::path::{PathLeg, TradePath};
use super::SearchOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NodeIx(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EdgeIx(usize);

/// A graph vertex visited at a specific point of the search.
#[derive(Debug)]
struct TreeNode {
    vertex: NodeId,
    snapshot: ShipSnapshot,
    /// Set exactly once, when the node is inserted. Only the root has
    /// none.
    parent: Option<EdgeIx>,
}

/// One executed trade hop.
#[derive(Debug)]
struct TreeEdge {
    parent: NodeIx,
    child: NodeIx,
    buy: Commodity,
    sell: Commodity,
    units: u64,
}

/// The search tree produced by one run of the engine.
pub struct RouteTree<'g> {
    graph: &'g RouteMap,
    nodes: Vec<TreeNode>,
    edges: Vec<TreeEdge>,
    leaves: Vec<NodeIx>,
    initial_credits: Credits,
}

impl<'g> RouteTree<'g> {
    /// Run a bounded breadth-first search from `origin` and collect the
    /// resulting tree.
    ///
    /// The ship is reset first and again before returning; between those
    /// points the engine is its only writer, restoring the parent snapshot
    /// before every simulated trade.
    pub fn build(
        graph: &'g RouteMap,
        origin: NodeId,
        destination: Option<NodeId>,
        ship: &mut Ship,
        options: &SearchOptions,
    ) -> Result<RouteTree<'g>> {
        ship.reset();

        let mut tree = RouteTree {
            graph,
            nodes: Vec::new(),
            edges: Vec::new(),
            leaves: Vec::new(),
            initial_credits: ship.credits(),
        };

        let root = NodeIx(0);
        tree.nodes.push(TreeNode {
            vertex: origin,
            snapshot: ship.snapshot(),
            parent: None,
        });

        if options.max_hops == 0 {
            return Ok(tree);
        }

        // Only edges already attached to the tree, whose children will not
        // exceed the hop limit, are allowed in the queue.
        let mut queue: VecDeque<(EdgeIx, u32)> = VecDeque::new();

        // First generation: exclusion filter only, no branch cap.
        for edge in tree.expand(root, ship, options, None)? {
            if options.max_hops > 1 {
                queue.push_back((edge, 1));
            } else {
                tree.add_leaf(edge, destination);
            }
        }

        let mut last_split_depth = 0;

        while let Some((edge, depth)) = queue.pop_front() {
            // At a split boundary, drain the whole generation and keep
            // only the edges tied with the best cumulative profit.
            if depth != last_split_depth && options.is_split_depth(depth) {
                last_split_depth = depth;

                let mut generation = vec![edge];
                while queue.front().is_some_and(|&(_, d)| d == depth) {
                    if let Some((next, _)) = queue.pop_front() {
                        generation.push(next);
                    }
                }

                let total = generation.len();
                let survivors = tree.best_of(generation);
                debug!(depth, total, survivors = survivors.len(), "split prune");

                for survivor in survivors {
                    queue.push_back((survivor, depth));
                }

                continue;
            }

            let child_depth = depth + 1;
            let node = tree.edges[edge.0].child;

            for new_edge in tree.expand(node, ship, options, options.max_children)? {
                if child_depth == options.max_hops {
                    tree.add_leaf(new_edge, destination);
                } else {
                    queue.push_back((new_edge, child_depth));
                }
            }
        }

        ship.reset();
        debug!(
            nodes = tree.nodes.len(),
            edges = tree.edges.len(),
            leaves = tree.leaves.len(),
            "route tree built"
        );

        Ok(tree)
    }

    /// Materialize every collected leaf into a trade path, best first.
    ///
    /// Paths with zero net profit are dropped; losing paths are kept and
    /// sort last.
    pub fn paths(&self) -> Result<Vec<TradePath>> {
        let mut paths = Vec::new();

        for &leaf in &self.leaves {
            let path = self.full_path(leaf)?;
            if path.has_profit() {
                paths.push(path);
            }
        }

        paths.sort_by(|a, b| b.net_profit().cmp(&a.net_profit()));

        Ok(paths)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
    }

    /// Largest number of children committed under any single node.
    pub fn max_branching(&self) -> usize {
        let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
        for edge in &self.edges {
            *counts.entry(edge.parent.0).or_default() += 1;
        }

        counts.into_values().max().unwrap_or(0)
    }

    /// Simulate every outgoing route of `parent`'s vertex, deduplicate per
    /// destination keeping the higher cumulative profit, rank descending,
    /// apply the hard branch `cap`, and commit the survivors to the arena.
    fn expand(
        &mut self,
        parent: NodeIx,
        ship: &mut Ship,
        options: &SearchOptions,
        cap: Option<usize>,
    ) -> Result<Vec<EdgeIx>> {
        let graph = self.graph;
        let vertex = self.nodes[parent.0].vertex;
        let parent_snapshot = self.nodes[parent.0].snapshot;

        // Best candidate per destination key. Ties keep the incumbent.
        let mut best: BTreeMap<String, (usize, u64, ShipSnapshot)> = BTreeMap::new();

        for (index, route) in graph.node(vertex).routes().iter().enumerate() {
            if options.is_excluded(route.offer().name()) {
                trace!(commodity = route.offer().name(), "excluded");
                continue;
            }

            ship.restore(&parent_snapshot);
            let units = ship.trade(route.offer(), route.demand())?;
            let snapshot = ship.snapshot();

            let key = graph.node(route.destination()).port().key();
            let replace = match best.get(&key) {
                Some((_, _, incumbent)) => snapshot.credits() > incumbent.credits(),
                None => true,
            };
            if replace {
                best.insert(key, (index, units, snapshot));
            }
        }

        ship.reset();

        let mut candidates: Vec<_> = best.into_values().collect();
        candidates.sort_by(|a, b| b.2.credits().cmp(&a.2.credits()));
        if let Some(cap) = cap {
            candidates.truncate(cap);
        }

        let mut committed = Vec::with_capacity(candidates.len());
        for (index, units, snapshot) in candidates {
            let route = &graph.node(vertex).routes()[index];

            let edge = EdgeIx(self.edges.len());
            let child = NodeIx(self.nodes.len());

            self.nodes.push(TreeNode {
                vertex: route.destination(),
                snapshot,
                parent: Some(edge),
            });
            self.edges.push(TreeEdge {
                parent,
                child,
                buy: route.offer().clone(),
                sell: route.demand().clone(),
                units,
            });

            committed.push(edge);
        }

        Ok(committed)
    }

    /// Record `edge`'s child as a leaf, unless a destination filter is set
    /// and the child is elsewhere.
    fn add_leaf(&mut self, edge: EdgeIx, destination: Option<NodeId>) {
        let child = self.edges[edge.0].child;

        if let Some(wanted) = destination {
            if self.nodes[child.0].vertex != wanted {
                return;
            }
        }

        self.leaves.push(child);
    }

    /// Keep the subset of `generation` tied with the best cumulative
    /// profit, in rank order.
    fn best_of(&self, mut generation: Vec<EdgeIx>) -> Vec<EdgeIx> {
        generation.sort_by(|a, b| self.profit_so_far(*b).cmp(&self.profit_so_far(*a)));

        let Some(&best) = generation.first() else {
            return generation;
        };

        let best_profit = self.profit_so_far(best);
        generation.retain(|&edge| self.profit_so_far(edge) == best_profit);

        generation
    }

    /// Cumulative profit encoded in an edge's child snapshot.
    fn profit_so_far(&self, edge: EdgeIx) -> Credits {
        self.nodes[self.edges[edge.0].child.0].snapshot.credits() - self.initial_credits
    }

    /// Walk parent edges from `leaf` back to the root and fold the chain
    /// into a path, merging sentinel seams along the way.
    fn full_path(&self, leaf: NodeIx) -> std::result::Result<TradePath, SearchError> {
        let mut chain = Vec::new();
        let mut current = leaf;

        while let Some(edge) = self.nodes[current.0].parent {
            chain.push(edge);
            current = self.edges[edge.0].parent;
        }
        chain.reverse();

        let mut path = TradePath::new();
        for edge in chain {
            path.push(self.leg(edge))?;
        }

        Ok(path)
    }

    fn leg(&self, edge: EdgeIx) -> PathLeg {
        let e = &self.edges[edge.0];

        PathLeg {
            buy: e.buy.clone(),
            units: e.units,
            sell: e.sell.clone(),
            origin: self.graph.node(self.nodes[e.parent.0].vertex).port().key(),
            destination: self.graph.node(self.nodes[e.child.0].vertex).port().key(),
            profit_so_far: self.profit_so_far(edge),
        }
    }
}
