//! Per-post buy/sell commodity availability.

use std::collections::BTreeMap;

use super::commodity::Commodity;

/// The commodities one trading post sells to ships and buys from them.
///
/// Both sides always contain the sentinel listing, so every post can serve
/// a "trade nothing" leg. Iteration order is name-sorted, which keeps graph
/// construction deterministic.
#[derive(Debug, Clone)]
pub struct TradeCatalog {
    sells: BTreeMap<String, Commodity>,
    buys: BTreeMap<String, Commodity>,
}

impl Default for TradeCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl TradeCatalog {
    pub fn new() -> Self {
        let mut catalog = Self {
            sells: BTreeMap::new(),
            buys: BTreeMap::new(),
        };

        catalog.add_selling(Commodity::nothing());
        catalog.add_buying(Commodity::nothing());

        catalog
    }

    /// Register a listing the post sells (a ship buys here).
    pub fn add_selling(&mut self, commodity: Commodity) {
        self.sells.insert(commodity.name().to_string(), commodity);
    }

    /// Register a listing the post buys (a ship sells here).
    pub fn add_buying(&mut self, commodity: Commodity) {
        self.buys.insert(commodity.name().to_string(), commodity);
    }

    pub fn is_selling(&self, name: &str) -> bool {
        self.sells.contains_key(name)
    }

    pub fn is_buying(&self, name: &str) -> bool {
        self.buys.contains_key(name)
    }

    pub fn selling(&self, name: &str) -> Option<&Commodity> {
        self.sells.get(name)
    }

    pub fn buying(&self, name: &str) -> Option<&Commodity> {
        self.buys.get(name)
    }

    /// All listings the post sells, name-sorted.
    pub fn all_selling(&self) -> impl Iterator<Item = &Commodity> {
        self.sells.values()
    }

    /// All listings the post buys, name-sorted.
    pub fn all_buying(&self) -> impl Iterator<Item = &Commodity> {
        self.buys.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn sentinel_present_on_both_sides() {
        let catalog = TradeCatalog::new();

        assert!(catalog.is_selling("Nothing"));
        assert!(catalog.is_buying("Nothing"));
        assert!(catalog.selling("Nothing").unwrap().unit_price().is_zero());
    }

    #[test]
    fn lookups_are_by_name_and_side() {
        let mut catalog = TradeCatalog::new();
        catalog.add_selling(Commodity::new("Gold", dec!(10)));

        assert!(catalog.is_selling("Gold"));
        assert!(!catalog.is_buying("Gold"));
        assert_eq!(catalog.selling("Gold").unwrap().unit_price(), dec!(10));
    }

    #[test]
    fn iteration_is_name_sorted() {
        let mut catalog = TradeCatalog::new();
        catalog.add_selling(Commodity::new("Zinc", dec!(2)));
        catalog.add_selling(Commodity::new("Agricium", dec!(25)));

        let names: Vec<_> = catalog.all_selling().map(|c| c.name()).collect();
        assert_eq!(names, vec!["Agricium", "Nothing", "Zinc"]);
    }
}
