//! Comparison
//!
//! Ranks line items by price per unit. Items that are incomplete (empty,
//! unparseable, negative or zero-quantity) are left out of the ranking and
//! classified as [`Classification::Neutral`].

use tracing::debug;

use crate::items::LineItem;

/// Outcome of comparing a single line item against the rest of the list.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Classification {
    /// The complete item with the lowest price per unit.
    Cheapest,

    /// A complete item that is not the cheapest.
    Expensive,

    /// An incomplete item, excluded from the comparison.
    Neutral,
}

/// Price per unit comparison over an ordered list of line items.
///
/// Computed once per revision of the list and read by position afterwards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Comparison {
    ratios: Vec<Option<f64>>,
    cheapest: Option<usize>,
    priciest: Option<usize>,
}

impl Comparison {
    /// Compares the given items.
    pub fn of(items: &[LineItem]) -> Self {
        let ratios: Vec<Option<f64>> = items.iter().map(LineItem::price_per_unit).collect();

        let cheapest = first_extreme(&ratios, |candidate, best| candidate < best);

        let priciest = first_extreme(&ratios, |candidate, best| candidate > best)
            .filter(|&index| Some(index) != cheapest);

        debug!(
            items = ratios.len(),
            complete = ratios.iter().flatten().count(),
            ?cheapest,
            ?priciest,
            "compared line items"
        );

        Self {
            ratios,
            cheapest,
            priciest,
        }
    }

    /// Index of the item with the lowest price per unit.
    pub fn cheapest(&self) -> Option<usize> {
        self.cheapest
    }

    /// Index of the item with the highest price per unit.
    ///
    /// `None` unless at least two items are complete and their ratios differ.
    pub fn priciest(&self) -> Option<usize> {
        self.priciest
    }

    /// Price per unit of the item at `index`, if it is complete.
    pub fn ratio(&self, index: usize) -> Option<f64> {
        self.ratios.get(index).copied().flatten()
    }

    /// Classification of the item at `index`. Out of range indexes are neutral.
    pub fn classification(&self, index: usize) -> Classification {
        match self.ratios.get(index) {
            Some(Some(_)) if self.cheapest == Some(index) => Classification::Cheapest,
            Some(Some(_)) => Classification::Expensive,
            _ => Classification::Neutral,
        }
    }

    /// Classifications for every item, in input order.
    pub fn classifications(&self) -> Vec<Classification> {
        (0..self.ratios.len())
            .map(|index| self.classification(index))
            .collect()
    }

    /// Number of items that took part in the comparison.
    pub fn complete_count(&self) -> usize {
        self.ratios.iter().flatten().count()
    }

    /// Number of items compared, complete or not.
    pub fn len(&self) -> usize {
        self.ratios.len()
    }

    /// Whether no items were compared.
    pub fn is_empty(&self) -> bool {
        self.ratios.is_empty()
    }
}

/// Classifies every item by price per unit, preserving input order.
///
/// The complete item with the lowest ratio is [`Classification::Cheapest`];
/// ties go to the earliest item. Other complete items are
/// [`Classification::Expensive`] and incomplete items are
/// [`Classification::Neutral`].
pub fn classify(items: &[LineItem]) -> Vec<Classification> {
    Comparison::of(items).classifications()
}

/// Returns the index of the complete item with the lowest price per unit.
pub fn cheapest_index(items: &[LineItem]) -> Option<usize> {
    Comparison::of(items).cheapest()
}

/// Stable scan for the first ratio that beats every earlier one under `beats`.
fn first_extreme(
    ratios: &[Option<f64>],
    beats: impl Fn(f64, f64) -> bool,
) -> Option<usize> {
    ratios
        .iter()
        .enumerate()
        .filter_map(|(index, ratio)| ratio.map(|ratio| (index, ratio)))
        .fold(None, |best: Option<(usize, f64)>, (index, ratio)| match best {
            Some((_, best_ratio)) if !beats(ratio, best_ratio) => best,
            _ => Some((index, ratio)),
        })
        .map(|(index, _)| index)
}
