//! Focus
//!
//! Keyboard traversal between the input fields of a sheet. Fields are visited
//! row by row, quantity before price. Submitting the last price field asks
//! for a new row.

use crate::items::Field;

/// An input field on a given row.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FocusTarget {
    /// Row index
    pub row: usize,

    /// Field within the row
    pub field: Field,
}

impl FocusTarget {
    /// Quantity field of `row`
    pub fn quantity(row: usize) -> Self {
        Self {
            row,
            field: Field::Quantity,
        }
    }

    /// Price field of `row`
    pub fn price(row: usize) -> Self {
        Self {
            row,
            field: Field::Price,
        }
    }
}

/// Where focus goes after a field is submitted.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FocusMove {
    /// Focus an existing field.
    Focus(FocusTarget),

    /// Append a row, then focus the given field on it.
    AppendRow(FocusTarget),
}

impl FocusMove {
    /// The field that ends up focused.
    pub fn target(self) -> FocusTarget {
        match self {
            FocusMove::Focus(target) | FocusMove::AppendRow(target) => target,
        }
    }
}

/// Returns the move that follows submitting `current` on a sheet of
/// `row_count` rows.
pub fn next_focus(current: FocusTarget, row_count: usize) -> FocusMove {
    let next = match current.field {
        Field::Quantity => FocusTarget::price(current.row),
        Field::Price => FocusTarget::quantity(current.row + 1),
    };

    if next.row < row_count {
        FocusMove::Focus(next)
    } else {
        FocusMove::AppendRow(FocusTarget::quantity(row_count))
    }
}

/// Full traversal table for a sheet of `row_count` rows.
pub fn focus_order(row_count: usize) -> Vec<FocusTarget> {
    (0..row_count)
        .flat_map(|row| [FocusTarget::quantity(row), FocusTarget::price(row)])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_moves_to_price_on_the_same_row() {
        assert_eq!(
            next_focus(FocusTarget::quantity(0), 2),
            FocusMove::Focus(FocusTarget::price(0))
        );
    }

    #[test]
    fn price_moves_to_the_next_quantity() {
        assert_eq!(
            next_focus(FocusTarget::price(0), 2),
            FocusMove::Focus(FocusTarget::quantity(1))
        );
    }

    #[test]
    fn last_price_appends_a_row() {
        assert_eq!(
            next_focus(FocusTarget::price(1), 2),
            FocusMove::AppendRow(FocusTarget::quantity(2))
        );
    }

    #[test]
    fn stale_target_past_the_end_appends_a_row() {
        let next = next_focus(FocusTarget::quantity(5), 2);

        assert_eq!(next, FocusMove::AppendRow(FocusTarget::quantity(2)));
        assert_eq!(next.target(), FocusTarget::quantity(2));
    }

    #[test]
    fn focus_order_visits_quantity_before_price() {
        assert_eq!(
            focus_order(2),
            vec![
                FocusTarget::quantity(0),
                FocusTarget::price(0),
                FocusTarget::quantity(1),
                FocusTarget::price(1),
            ]
        );
    }

    #[test]
    fn focus_order_matches_next_focus() {
        let order = focus_order(3);

        for pair in order.windows(2) {
            if let [current, next] = pair {
                assert_eq!(next_focus(*current, 3), FocusMove::Focus(*next));
            }
        }
    }
}
