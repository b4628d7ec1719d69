//! Items
//!
//! A line item is one row of the comparison form. Quantity and price are kept
//! exactly as typed so that half-entered values survive edits; they are only
//! parsed when the row is compared.

use serde::{Deserialize, Serialize};

use crate::units::Unit;

/// Editable field of a line item
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    /// Quantity field
    Quantity,

    /// Price field
    Price,
}

/// A user-entered row: quantity, price and the unit the quantity is given in.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(default)]
    unit: Unit,

    #[serde(default)]
    quantity: String,

    #[serde(default)]
    price: String,
}

impl LineItem {
    /// Creates an empty line item in the given unit.
    pub fn new(unit: Unit) -> Self {
        Self {
            unit,
            quantity: String::new(),
            price: String::new(),
        }
    }

    /// Creates a line item with the given raw quantity and price.
    pub fn with_values(unit: Unit, quantity: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            unit,
            quantity: quantity.into(),
            price: price.into(),
        }
    }

    /// Unit of measure
    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Raw quantity, as typed
    pub fn quantity(&self) -> &str {
        &self.quantity
    }

    /// Raw price, as typed
    pub fn price(&self) -> &str {
        &self.price
    }

    /// Returns the raw text of a field.
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Quantity => &self.quantity,
            Field::Price => &self.price,
        }
    }

    /// Changes the unit of measure.
    pub fn set_unit(&mut self, unit: Unit) {
        self.unit = unit;
    }

    /// Replaces the raw quantity.
    pub fn set_quantity(&mut self, quantity: impl Into<String>) {
        self.quantity = quantity.into();
    }

    /// Replaces the raw price.
    pub fn set_price(&mut self, price: impl Into<String>) {
        self.price = price.into();
    }

    /// Replaces the raw text of a field.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        match field {
            Field::Quantity => self.set_quantity(value),
            Field::Price => self.set_price(value),
        }
    }

    /// Parsed quantity. Only strictly positive quantities count, so a zero
    /// quantity can never reach the division.
    pub fn quantity_value(&self) -> Option<f64> {
        parse_amount(&self.quantity).filter(|quantity| *quantity > 0.0)
    }

    /// Parsed price
    pub fn price_value(&self) -> Option<f64> {
        parse_amount(&self.price)
    }

    /// Whether both quantity and price hold usable numbers.
    pub fn is_complete(&self) -> bool {
        self.price_per_unit().is_some()
    }

    /// Price divided by quantity, or `None` when the item is incomplete.
    ///
    /// Never NaN: the price is finite and non-negative and the quantity is
    /// finite and positive. A quotient too large for `f64` is `+inf`, which
    /// still ranks above every finite ratio.
    pub fn price_per_unit(&self) -> Option<f64> {
        let quantity = self.quantity_value()?;
        let price = self.price_value()?;

        Some(price / quantity)
    }
}

/// Parses a user-entered amount.
///
/// Surrounding whitespace is ignored. Plain decimals (`"2.5"`, `".5"`), an
/// explicit plus sign (`"+3"`) and scientific notation (`"1e3"`) are
/// accepted. Empty input, digit separators (`"1_000"`, `"1,000"`), trailing
/// text, `NaN`, infinities (including overflowing literals such as `"1e999"`)
/// and negative values yield `None`.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let raw = raw.trim();

    if raw.is_empty() {
        return None;
    }

    raw.parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount >= 0.0)
}
