//! Ship financial simulation.
//!
//! A [`Ship`] models capital and a single-slot cargo hold while the search
//! engine replays candidate trades against it. The engine checkpoints the
//! ship with [`Ship::snapshot`] before exploring a branch and restores
//! before exploring a sibling; traversal is fully sequential, so one ship
//! instance serves an entire search without reallocation.

use rust_decimal::Decimal;

use crate::error::SimulationError;

use super::commodity::{CargoLot, Commodity};
use super::money::Credits;

/// Credits-only checkpoint of a ship's financial position.
///
/// The cargo hold is always empty at snapshot and restore boundaries (every
/// trade buys and sells within one hop), so credits are all the state worth
/// capturing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipSnapshot {
    credits: Credits,
}

impl ShipSnapshot {
    pub fn credits(&self) -> Credits {
        self.credits
    }
}

/// Mutable financial and cargo position during a search.
#[derive(Debug)]
pub struct Ship {
    credits: Credits,
    initial_credits: Credits,
    capacity: u64,
    cargo: Option<CargoLot>,
}

impl Ship {
    pub fn new(initial_credits: Credits, capacity: u64) -> Self {
        Self {
            credits: initial_credits,
            initial_credits,
            capacity,
            cargo: None,
        }
    }

    pub fn credits(&self) -> Credits {
        self.credits
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Profit relative to the initial stake. The scoring function for
    /// every comparison in the search engine.
    pub fn profit(&self) -> Credits {
        self.credits - self.initial_credits
    }

    /// Execute one hop: buy the maximum affordable and storable units of
    /// `buy`, then sell the whole hold against `sell`'s price. Returns the
    /// units traded.
    pub fn trade(&mut self, buy: &Commodity, sell: &Commodity) -> Result<u64, SimulationError> {
        let units = self.buy_max(buy);
        self.sell_cargo(sell)?;

        Ok(units)
    }

    /// Fill the hold with as many units of `buy` as funds and capacity
    /// allow, consuming credits.
    fn buy_max(&mut self, buy: &Commodity) -> u64 {
        let units = buy.max_units(self.credits, self.capacity);
        let lot = buy.clone().into_lot(units);

        self.credits -= lot.total_price();
        self.cargo = Some(lot);

        units
    }

    /// Sell the entire cargo hold against `sell`'s unit price.
    ///
    /// Selling with an empty hold is a core logic defect, not a market
    /// condition, and fails loudly.
    pub fn sell_cargo(&mut self, sell: &Commodity) -> Result<(), SimulationError> {
        let lot = self.cargo.take().ok_or(SimulationError::EmptyCargo)?;

        self.credits += sell.unit_price() * Decimal::from(lot.units());

        Ok(())
    }

    /// Checkpoint the current financial position.
    pub fn snapshot(&self) -> ShipSnapshot {
        ShipSnapshot {
            credits: self.credits,
        }
    }

    /// Rewind to a previously captured position in O(1).
    pub fn restore(&mut self, snapshot: &ShipSnapshot) {
        self.credits = snapshot.credits;
    }

    /// Restore the initial stake and empty the hold, making the ship ready
    /// for an independent trial.
    pub fn reset(&mut self) {
        self.credits = self.initial_credits;
        self.cargo = None;
    }
}
