//! Unit Price
//!
//! Unit Price compares a list of line items by price per unit and reports which
//! one is the cheapest. It holds the state behind a comparison form (rows, base
//! unit, focus traversal) and keeps the comparison itself a pure function of the
//! rows.

pub mod comparison;
pub mod fixtures;
pub mod focus;
pub mod items;
pub mod observability;
pub mod prelude;
pub mod report;
pub mod sheet;
pub mod units;
pub mod utils;
