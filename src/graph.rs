//! The trading-post graph.
//!
//! [`RouteMap`] holds every trading post as a [`PortNode`] in an arena
//! addressed by [`NodeId`], with each node owning its outgoing [`Route`]s.
//! A route links one commodity the origin sells to the same commodity the
//! destination buys; only non-losing routes survive construction, so the
//! search engine never has to re-check edge profitability.

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::domain::{Commodity, Port, Price, TradeCatalog};
use crate::error::GraphError;

/// Index of a [`PortNode`] in a [`RouteMap`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// A directed trade opportunity between two posts.
#[derive(Debug, Clone)]
pub struct Route {
    destination: NodeId,
    /// The listing bought at the origin (the origin's sell side).
    offer: Commodity,
    /// The listing sold at the destination (the destination's buy side).
    demand: Commodity,
}

impl Route {
    pub fn destination(&self) -> NodeId {
        self.destination
    }

    pub fn offer(&self) -> &Commodity {
        &self.offer
    }

    pub fn demand(&self) -> &Commodity {
        &self.demand
    }

    /// Per-unit profit of taking this route, using unit prices.
    pub fn profit(&self) -> Price {
        self.demand.price_delta(&self.offer)
    }
}

/// A trading post placed in the graph, with its catalog and outgoing
/// routes.
#[derive(Debug)]
pub struct PortNode {
    port: Port,
    catalog: TradeCatalog,
    routes: Vec<Route>,
}

impl PortNode {
    pub fn port(&self) -> &Port {
        &self.port
    }

    pub fn catalog(&self) -> &TradeCatalog {
        &self.catalog
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}

/// Directed graph of trading posts.
#[derive(Debug, Default)]
pub struct RouteMap {
    nodes: Vec<PortNode>,
    index: HashMap<String, NodeId>,
}

impl RouteMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a post and its catalog as a vertex. Posts must all be
    /// added before any routes reference them.
    pub fn add_port(&mut self, port: Port, catalog: TradeCatalog) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.index.insert(port.key(), id);
        self.nodes.push(PortNode {
            port,
            catalog,
            routes: Vec::new(),
        });

        id
    }

    /// Link one commodity from `origin`'s sell side to `destination`'s buy
    /// side.
    ///
    /// Losing routes are dropped; a same-post route additionally requires
    /// the destination price to strictly exceed the origin price, so
    /// zero-gain self-loops never flood the graph. The sentinel self-loop
    /// is the one exception: it always exists, at zero profit, so a ship
    /// can idle through a hop.
    pub fn add_route(
        &mut self,
        origin: &Port,
        destination: &Port,
        commodity: &str,
    ) -> Result<(), GraphError> {
        let origin_id = self.lookup(origin)?;
        let destination_id = self.lookup(destination)?;

        let offer = self.nodes[origin_id.0]
            .catalog
            .selling(commodity)
            .ok_or_else(|| GraphError::CommodityNotListed {
                commodity: commodity.to_string(),
                side: "sell",
                port: origin.key(),
            })?
            .clone();

        let demand = self.nodes[destination_id.0]
            .catalog
            .buying(commodity)
            .ok_or_else(|| GraphError::CommodityNotListed {
                commodity: commodity.to_string(),
                side: "buy",
                port: destination.key(),
            })?
            .clone();

        let route = Route {
            destination: destination_id,
            offer,
            demand,
        };

        let same_post = origin == destination;
        let sentinel_loop = same_post && route.offer.is_nothing() && route.demand.is_nothing();

        if !sentinel_loop {
            if route.profit() < Price::ZERO {
                return Ok(());
            }
            if same_post && route.profit() <= Price::ZERO {
                return Ok(());
            }
        }

        self.nodes[origin_id.0].routes.push(route);

        Ok(())
    }

    /// Link every sell listing at every post to every matching buy listing
    /// at every post, including the post itself.
    pub fn link_all(&mut self) -> Result<(), GraphError> {
        let mut pairs: Vec<(Port, Port, String)> = Vec::new();
        for origin in &self.nodes {
            for destination in &self.nodes {
                for offer in origin.catalog.all_selling() {
                    if destination.catalog.is_buying(offer.name()) {
                        pairs.push((
                            origin.port.clone(),
                            destination.port.clone(),
                            offer.name().to_string(),
                        ));
                    }
                }
            }
        }

        for (origin, destination, commodity) in pairs {
            self.add_route(&origin, &destination, &commodity)?;
        }

        debug!(
            ports = self.nodes.len(),
            routes = self.nodes.iter().map(|n| n.routes.len()).sum::<usize>(),
            "route map linked"
        );

        Ok(())
    }

    /// Find a vertex by human-entered name, using the partial-match rule
    /// of [`Port::matches_name`]. First match wins.
    pub fn find_port(&self, query: &str) -> Result<NodeId, GraphError> {
        self.nodes
            .iter()
            .position(|node| node.port.matches_name(query))
            .map(NodeId)
            .ok_or_else(|| GraphError::PortNotFound {
                query: query.to_string(),
            })
    }

    pub fn node(&self, id: NodeId) -> &PortNode {
        &self.nodes[id.0]
    }

    pub fn nodes(&self) -> impl Iterator<Item = &PortNode> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn lookup(&self, port: &Port) -> Result<NodeId, GraphError> {
        self.index
            .get(&port.key())
            .copied()
            .ok_or_else(|| GraphError::UnknownPort { port: port.key() })
    }
}

impl fmt::Display for RouteMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in &self.nodes {
            writeln!(f, "{}", node.port)?;
            for route in &node.routes {
                writeln!(
                    f,
                    "\tBuy {} -> Sell {} in '{}'",
                    route.offer,
                    route.demand,
                    self.node(route.destination).port
                )?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn port(name: &str) -> Port {
        Port::new(vec!["Stanton".into(), name.into()])
    }

    fn catalog(sells: &[(&str, Price)], buys: &[(&str, Price)]) -> TradeCatalog {
        let mut c = TradeCatalog::new();
        for (name, price) in sells {
            c.add_selling(Commodity::new(*name, *price));
        }
        for (name, price) in buys {
            c.add_buying(Commodity::new(*name, *price));
        }
        c
    }

    fn two_post_map() -> RouteMap {
        let mut map = RouteMap::new();
        map.add_port(port("A"), catalog(&[("Gold", dec!(10))], &[]));
        map.add_port(port("B"), catalog(&[], &[("Gold", dec!(15))]));
        map.link_all().unwrap();
        map
    }

    #[test]
    fn links_profitable_cross_post_routes() {
        let map = two_post_map();
        let a = map.find_port("A").unwrap();

        let gold: Vec<_> = map
            .node(a)
            .routes()
            .iter()
            .filter(|r| !r.offer().is_nothing())
            .collect();

        assert_eq!(gold.len(), 1);
        assert_eq!(gold[0].profit(), dec!(5));
    }

    #[test]
    fn all_routes_are_non_negative_profit() {
        let mut map = RouteMap::new();
        map.add_port(port("A"), catalog(&[("Gold", dec!(20))], &[]));
        map.add_port(port("B"), catalog(&[], &[("Gold", dec!(15))]));
        map.link_all().unwrap();

        for node in map.nodes() {
            for route in node.routes() {
                assert!(route.profit() >= dec!(0));
            }
        }

        // The losing Gold route must not exist at all.
        let a = map.find_port("A").unwrap();
        assert!(map.node(a).routes().iter().all(|r| r.offer().is_nothing()));
    }

    #[test]
    fn same_post_routes_require_strict_gain() {
        let mut map = RouteMap::new();
        map.add_port(
            port("A"),
            catalog(
                &[("Gold", dec!(10)), ("Zinc", dec!(5))],
                &[("Gold", dec!(10)), ("Zinc", dec!(7))],
            ),
        );
        map.link_all().unwrap();

        let a = map.find_port("A").unwrap();
        let self_routes: Vec<_> = map
            .node(a)
            .routes()
            .iter()
            .filter(|r| r.destination() == a && !r.offer().is_nothing())
            .collect();

        // Gold at 10 -> 10 is a zero-gain self-loop and is dropped;
        // Zinc at 5 -> 7 survives.
        assert_eq!(self_routes.len(), 1);
        assert_eq!(self_routes[0].offer().name(), "Zinc");
    }

    #[test]
    fn sentinel_self_loop_always_present_with_zero_profit() {
        let map = two_post_map();
        let a = map.find_port("A").unwrap();

        let loop_route = map
            .node(a)
            .routes()
            .iter()
            .find(|r| r.destination() == a && r.offer().is_nothing())
            .expect("sentinel self-loop");

        assert!(loop_route.demand().is_nothing());
        assert_eq!(loop_route.profit(), dec!(0));
    }

    #[test]
    fn add_route_before_add_port_is_fatal() {
        let mut map = RouteMap::new();
        map.add_port(port("A"), catalog(&[("Gold", dec!(10))], &[]));

        let err = map.add_route(&port("A"), &port("B"), "Gold").unwrap_err();
        assert!(matches!(err, GraphError::UnknownPort { .. }));
    }

    #[test]
    fn find_port_is_partial_and_first_match_wins() {
        let map = two_post_map();

        assert!(map.find_port("a").is_ok());
        assert!(matches!(
            map.find_port("Zzz"),
            Err(GraphError::PortNotFound { .. })
        ));
    }
}
