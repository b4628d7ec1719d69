//! Report
//!
//! Renders a sheet and its comparison as a terminal table, badging the
//! cheapest row green and the other complete rows red.

use std::io;

use rust_decimal::{Decimal, prelude::FromPrimitive};
use rusty_money::{Money, iso::Currency};
use smallvec::SmallVec;
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    comparison::{Classification, Comparison},
    items::LineItem,
    sheet::Sheet,
    units::Unit,
};

/// Column holding the badge text.
const BADGE_COLUMN: usize = 4;

/// Decimal places shown for a price per unit.
const RATIO_DP: u32 = 4;

/// Errors that can occur while writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The output could not be written to.
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
}

/// Visual badge attached to a compared row.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Badge {
    /// Positive badge for the cheapest row.
    Cheapest,

    /// Negative badge for every other complete row.
    Expensive,
}

impl Badge {
    /// Badge for a classification. Neutral rows get none.
    pub fn for_classification(classification: Classification) -> Option<Self> {
        match classification {
            Classification::Cheapest => Some(Badge::Cheapest),
            Classification::Expensive => Some(Badge::Expensive),
            Classification::Neutral => None,
        }
    }

    /// Text shown on the badge.
    pub fn label(self) -> &'static str {
        match self {
            Badge::Cheapest => "Cheapest",
            Badge::Expensive => "Pricier",
        }
    }

    fn color(self) -> Color {
        match self {
            Badge::Cheapest => Color::FG_GREEN,
            Badge::Expensive => Color::FG_RED,
        }
    }
}

/// Writes the sheet as a table followed by a one line summary.
///
/// Prices are shown in `currency`; the currency is for display only.
///
/// # Errors
///
/// Returns [`ReportError::Io`] if the output cannot be written to.
pub fn write_comparison(
    mut out: impl io::Write,
    sheet: &Sheet,
    currency: &'static Currency,
) -> Result<(), ReportError> {
    let comparison = sheet.compare();

    let mut builder = Builder::default();
    let mut badge_colors: SmallVec<[(usize, Color); 16]> = SmallVec::new();

    builder.push_record(["", "Quantity", "Price", "Per unit", ""]);

    for (index, item) in sheet.iter().enumerate() {
        let badge = Badge::for_classification(comparison.classification(index));

        if let Some(badge) = badge {
            // header is row 0
            badge_colors.push((index + 1, badge.color()));
        }

        builder.push_record([
            format!("#{:<3}", index + 1),
            quantity_cell(item),
            price_cell(item, currency),
            comparison
                .ratio(index)
                .map_or_else(String::new, |ratio| {
                    ratio_cell(ratio, item.unit(), currency)
                }),
            badge.map_or("", Badge::label).to_string(),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::rounded());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(1..4), Alignment::right());

    for (row, color) in badge_colors {
        table.modify((row, BADGE_COLUMN), color);
    }

    writeln!(out, "{table}")?;
    writeln!(out, "{}", summary_line(&comparison, sheet, currency))?;

    Ok(())
}

fn quantity_cell(item: &LineItem) -> String {
    if item.quantity().trim().is_empty() {
        String::new()
    } else {
        format!("{} {}", item.quantity().trim(), item.unit())
    }
}

fn price_cell(item: &LineItem, currency: &'static Currency) -> String {
    item.price_value()
        .and_then(Decimal::from_f64)
        .map_or_else(
            || item.price().trim().to_string(),
            |price| Money::from_decimal(price, currency).to_string(),
        )
}

fn ratio_cell(ratio: f64, unit: Unit, currency: &Currency) -> String {
    format!("{}{} / {unit}", currency.symbol, format_ratio(ratio))
}

/// Ratios that round away to nothing, or do not fit a `Decimal`, fall back to
/// scientific notation.
fn format_ratio(ratio: f64) -> String {
    match Decimal::from_f64(ratio).map(|ratio| ratio.round_dp(RATIO_DP).normalize()) {
        Some(rounded) if !rounded.is_zero() || ratio <= 0.0 => rounded.to_string(),
        _ => format!("{ratio:.3e}"),
    }
}

fn summary_line(comparison: &Comparison, sheet: &Sheet, currency: &Currency) -> String {
    let Some(cheapest) = comparison.cheapest() else {
        return "Enter a quantity and a price to compare items.".to_string();
    };

    let ratio = comparison
        .ratio(cheapest)
        .map_or_else(String::new, |ratio| {
            ratio_cell(ratio, sheet.unit(), currency)
        });

    match comparison.priciest() {
        Some(priciest) => format!(
            "Cheapest: item #{} at {ratio}, priciest: item #{}",
            cheapest + 1,
            priciest + 1
        ),
        None => format!("Cheapest: item #{} at {ratio}", cheapest + 1),
    }
}
