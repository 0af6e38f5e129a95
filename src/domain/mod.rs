//! Core domain types: commodities, ports, catalogs, and the ship
//! simulation.

mod catalog;
mod commodity;
mod money;
mod port;
mod ship;

pub use catalog::TradeCatalog;
pub use commodity::{CargoLot, Commodity, NOTHING};
pub use money::{Credits, Price};
pub use port::Port;
pub use ship::{Ship, ShipSnapshot};
