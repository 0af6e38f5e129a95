//! Commodity listings and cargo lots.
//!
//! A [`Commodity`] is a good as listed at one trading post, priced per unit.
//! Once a unit count is chosen the listing converts into a [`CargoLot`],
//! which carries an absolute price for the whole lot. The conversion is
//! one-way at the type level: there is no path from a lot back to a
//! per-unit listing, so "re-converting an absolute commodity" cannot be
//! expressed.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

use super::money::Price;

/// Name of the sentinel listing representing "no trade on this leg".
///
/// Every post's catalog carries it on both sides at price zero, so a ship
/// can always traverse a hop without trading.
pub const NOTHING: &str = "Nothing";

/// A commodity as priced at one trading post, per unit.
///
/// Identity is name-only: two listings with the same name but different
/// prices are the same commodity seen from two posts.
#[derive(Debug, Clone, Serialize)]
pub struct Commodity {
    name: String,
    unit_price: Price,
}

impl Commodity {
    /// Create a listing with the given per-unit price.
    pub fn new(name: impl Into<String>, unit_price: Price) -> Self {
        Self {
            name: name.into(),
            unit_price,
        }
    }

    /// The sentinel "no trade" listing, price zero.
    pub fn nothing() -> Self {
        Self::new(NOTHING, Decimal::ZERO)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> Price {
        self.unit_price
    }

    /// Whether this is the sentinel listing.
    pub fn is_nothing(&self) -> bool {
        self.name == NOTHING
    }

    /// Maximum units purchasable with `funds`, capped by `capacity`.
    ///
    /// The sentinel's zero price imposes no funding limit, so it fills the
    /// cap. Negative funds buy nothing.
    pub fn max_units(&self, funds: Price, capacity: u64) -> u64 {
        if self.unit_price.is_zero() {
            return capacity;
        }

        let affordable = (funds / self.unit_price)
            .floor()
            .to_u64()
            .unwrap_or(0);

        affordable.min(capacity)
    }

    /// Per-unit price delta `self - other`, the profit of selling against
    /// `self` a unit bought against `other`.
    pub fn price_delta(&self, other: &Commodity) -> Price {
        self.unit_price - other.unit_price
    }

    /// Convert this per-unit listing into an absolute-priced lot of
    /// `units`. Consumes the listing; there is no inverse.
    pub fn into_lot(self, units: u64) -> CargoLot {
        let total_price = self.unit_price * Decimal::from(units);

        CargoLot {
            name: self.name,
            units,
            total_price,
        }
    }
}

impl PartialEq for Commodity {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Commodity {}

impl fmt::Display for Commodity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{} cr", self.name, self.unit_price)
    }
}

/// An absolute-priced lot: a commodity with a chosen unit count.
///
/// Produced by [`Commodity::into_lot`]; the single-slot cargo hold stores
/// exactly one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CargoLot {
    name: String,
    units: u64,
    total_price: Price,
}

impl CargoLot {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn units(&self) -> u64 {
        self.units
    }

    /// Absolute price paid for the whole lot.
    pub fn total_price(&self) -> Price {
        self.total_price
    }
}

impl fmt::Display for CargoLot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x{} ({} cr)", self.name, self.units, self.total_price)
    }
}
