//! Sheet
//!
//! The owned state behind the comparison form: an ordered list of line items,
//! the selected base unit, and a revision counter that moves on every edit.

use thiserror::Error;
use tracing::trace;

use crate::{
    comparison::Comparison,
    focus::{FocusMove, FocusTarget, next_focus},
    items::{Field, LineItem},
    units::Unit,
};

/// Number of empty rows a new or reset sheet starts with.
pub const DEFAULT_ROWS: usize = 2;

/// Errors related to editing a sheet.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SheetError {
    /// A row index was outside the sheet.
    #[error("Row {0} not found")]
    RowNotFound(usize),
}

/// Sheet
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sheet {
    items: Vec<LineItem>,
    unit: Unit,
    revision: u64,
}

impl Default for Sheet {
    fn default() -> Self {
        Self::new()
    }
}

impl Sheet {
    /// Create a sheet with two empty rows in milliliters.
    pub fn new() -> Self {
        Self::with_unit(Unit::default())
    }

    /// Create a sheet with two empty rows in the given unit.
    pub fn with_unit(unit: Unit) -> Self {
        Self {
            items: empty_rows(unit),
            unit,
            revision: 0,
        }
    }

    /// Create a sheet holding the given items. Every item is re-labelled with
    /// the sheet unit.
    pub fn with_items(unit: Unit, items: impl Into<Vec<LineItem>>) -> Self {
        let mut items = items.into();

        for item in &mut items {
            item.set_unit(unit);
        }

        Self {
            items,
            unit,
            revision: 0,
        }
    }

    /// Selected base unit
    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Current revision. Starts at zero and increases with every edit.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The rows, in order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Iterate over the rows.
    pub fn iter(&self) -> impl Iterator<Item = &LineItem> {
        self.items.iter()
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the sheet has no rows.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get a row.
    ///
    /// # Errors
    ///
    /// Returns [`SheetError::RowNotFound`] if `row` is out of range.
    pub fn row(&self, row: usize) -> Result<&LineItem, SheetError> {
        self.items.get(row).ok_or(SheetError::RowNotFound(row))
    }

    /// Append an empty row in the sheet unit, returning its index.
    pub fn add_row(&mut self) -> usize {
        self.items.push(LineItem::new(self.unit));
        self.bump();

        trace!(rows = self.items.len(), revision = self.revision, "added row");

        self.items.len() - 1
    }

    /// Replace every row with two empty ones. The selected unit is kept.
    pub fn reset(&mut self) {
        self.items = empty_rows(self.unit);
        self.bump();

        trace!(revision = self.revision, "reset sheet");
    }

    /// Change the base unit of the sheet and all of its rows.
    pub fn set_unit(&mut self, unit: Unit) {
        self.unit = unit;

        for item in &mut self.items {
            item.set_unit(unit);
        }

        self.bump();

        trace!(%unit, revision = self.revision, "changed unit");
    }

    /// Replace the raw text of a field on a row.
    ///
    /// # Errors
    ///
    /// Returns [`SheetError::RowNotFound`] if `row` is out of range.
    pub fn set_field(
        &mut self,
        row: usize,
        field: Field,
        value: impl Into<String>,
    ) -> Result<(), SheetError> {
        let item = self
            .items
            .get_mut(row)
            .ok_or(SheetError::RowNotFound(row))?;

        item.set_field(field, value);
        self.bump();

        trace!(row, ?field, revision = self.revision, "edited field");

        Ok(())
    }

    /// Replace the raw quantity on a row.
    ///
    /// # Errors
    ///
    /// Returns [`SheetError::RowNotFound`] if `row` is out of range.
    pub fn set_quantity(&mut self, row: usize, value: impl Into<String>) -> Result<(), SheetError> {
        self.set_field(row, Field::Quantity, value)
    }

    /// Replace the raw price on a row.
    ///
    /// # Errors
    ///
    /// Returns [`SheetError::RowNotFound`] if `row` is out of range.
    pub fn set_price(&mut self, row: usize, value: impl Into<String>) -> Result<(), SheetError> {
        self.set_field(row, Field::Price, value)
    }

    /// Move focus on from `current`, appending a row when the last price
    /// field is submitted. Returns the field that should receive focus.
    pub fn advance_focus(&mut self, current: FocusTarget) -> FocusTarget {
        match next_focus(current, self.len()) {
            FocusMove::Focus(target) => target,
            FocusMove::AppendRow(_) => FocusTarget::quantity(self.add_row()),
        }
    }

    /// Compare the current rows by price per unit.
    pub fn compare(&self) -> Comparison {
        Comparison::of(&self.items)
    }

    fn bump(&mut self) {
        self.revision += 1;
    }
}

fn empty_rows(unit: Unit) -> Vec<LineItem> {
    vec![LineItem::new(unit); DEFAULT_ROWS]
}
