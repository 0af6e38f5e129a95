//! Monetary types for price and credit representation.

use rust_decimal::Decimal;

/// Price represented as a Decimal for precision.
///
/// Exact arithmetic matters here: the search engine's tie-inclusive pruning
/// compares cumulative profits for equality.
pub type Price = Decimal;

/// Credit balance represented as a Decimal for precision.
pub type Credits = Decimal;
