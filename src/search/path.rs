//! Materialized trade paths.

use serde::Serialize;
use std::fmt;

use crate::domain::{Commodity, Credits};
use crate::error::SearchError;

/// One executed hop of a trade path: buy at the origin, sell at the
/// destination.
#[derive(Debug, Clone, Serialize)]
pub struct PathLeg {
    pub buy: Commodity,
    pub units: u64,
    pub sell: Commodity,
    pub origin: String,
    pub destination: String,
    /// Cumulative profit after this leg.
    pub profit_so_far: Credits,
}

impl PathLeg {
    /// Whether this leg followed by `other` is a pair of sentinel hops
    /// that should collapse into one.
    fn can_merge(&self, other: &PathLeg) -> bool {
        self.sell.is_nothing() && other.buy.is_nothing()
    }

    /// Collapse this leg and `other` into a single leg spanning both hops.
    ///
    /// The legs must chain: this leg's sell side and the other's buy side
    /// are the same commodity. Anything else is a tree-invariant violation.
    fn merged_with(&self, other: &PathLeg) -> Result<PathLeg, SearchError> {
        if self.sell != other.buy {
            return Err(SearchError::MergeMismatch {
                sell: self.sell.name().to_string(),
                buy: other.buy.name().to_string(),
            });
        }

        Ok(PathLeg {
            buy: self.buy.clone(),
            units: self.units,
            sell: other.sell.clone(),
            origin: self.origin.clone(),
            destination: other.destination.clone(),
            profit_so_far: other.profit_so_far,
        })
    }
}

impl fmt::Display for PathLeg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let units = if self.buy.is_nothing() {
            String::new()
        } else {
            format!("{} units of ", self.units)
        };

        write!(
            f,
            "Buy {units}{} at '{}' -> Sell {} in '{}'",
            self.buy, self.origin, self.sell, self.destination
        )
    }
}

/// A root-to-leaf sequence of trade legs with its net profit.
///
/// Consecutive sentinel legs collapse as they are pushed, so "trade
/// nothing" hops never appear as visible legs in a result.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TradePath {
    legs: Vec<PathLeg>,
    net_profit: Credits,
}

impl TradePath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a leg, merging it with the previous one when both sides of
    /// the seam are the sentinel.
    pub fn push(&mut self, leg: PathLeg) -> Result<(), SearchError> {
        let leg = match self.legs.last() {
            Some(last) if last.can_merge(&leg) => {
                let merged = last.merged_with(&leg)?;
                self.legs.pop();
                merged
            }
            _ => leg,
        };

        self.net_profit = leg.profit_so_far;
        self.legs.push(leg);

        Ok(())
    }

    pub fn legs(&self) -> &[PathLeg] {
        &self.legs
    }

    pub fn net_profit(&self) -> Credits {
        self.net_profit
    }

    /// Whether the path is worth reporting: net profit is non-zero.
    pub fn has_profit(&self) -> bool {
        !self.net_profit.is_zero()
    }
}

impl fmt::Display for TradePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for leg in &self.legs {
            writeln!(f, "{leg}")?;
        }
        write!(f, "Net profit: {} cr", self.net_profit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn leg(buy: &str, sell: &str, origin: &str, destination: &str, profit: Credits) -> PathLeg {
        PathLeg {
            buy: if buy == "Nothing" {
                Commodity::nothing()
            } else {
                Commodity::new(buy, dec!(10))
            },
            units: 50,
            sell: if sell == "Nothing" {
                Commodity::nothing()
            } else {
                Commodity::new(sell, dec!(15))
            },
            origin: origin.to_string(),
            destination: destination.to_string(),
            profit_so_far: profit,
        }
    }

    #[test]
    fn consecutive_sentinel_legs_collapse() {
        let mut path = TradePath::new();
        path.push(leg("Nothing", "Nothing", "A", "B", dec!(0))).unwrap();
        path.push(leg("Nothing", "Nothing", "B", "C", dec!(0))).unwrap();
        path.push(leg("Gold", "Gold", "C", "D", dec!(250))).unwrap();

        assert_eq!(path.legs().len(), 2);
        assert_eq!(path.legs()[0].origin, "A");
        assert_eq!(path.legs()[0].destination, "C");
        assert_eq!(path.net_profit(), dec!(250));
    }

    #[test]
    fn no_two_adjacent_sentinel_seams_survive() {
        let mut path = TradePath::new();
        path.push(leg("Nothing", "Nothing", "A", "B", dec!(0))).unwrap();
        path.push(leg("Nothing", "Nothing", "B", "C", dec!(0))).unwrap();
        path.push(leg("Nothing", "Nothing", "C", "D", dec!(0))).unwrap();

        assert_eq!(path.legs().len(), 1);
        assert_eq!(path.legs()[0].origin, "A");
        assert_eq!(path.legs()[0].destination, "D");
    }

    #[test]
    fn trade_legs_do_not_merge() {
        let mut path = TradePath::new();
        path.push(leg("Gold", "Gold", "A", "B", dec!(250))).unwrap();
        path.push(leg("Zinc", "Zinc", "B", "C", dec!(400))).unwrap();

        assert_eq!(path.legs().len(), 2);
        assert_eq!(path.net_profit(), dec!(400));
    }

    #[test]
    fn zero_net_profit_is_not_reportable() {
        let mut path = TradePath::new();
        path.push(leg("Nothing", "Nothing", "A", "B", dec!(0))).unwrap();

        assert!(!path.has_profit());
    }

    #[test]
    fn negative_net_profit_still_counts_as_reportable() {
        let mut path = TradePath::new();
        path.push(leg("Gold", "Gold", "A", "B", dec!(-50))).unwrap();

        assert!(path.has_profit());
    }
}
