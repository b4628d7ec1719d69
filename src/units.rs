//! Units
//!
//! Units of measure a line item can be quoted in. The unit is shown next to
//! the quantity field and never takes part in the price per unit ratio.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while reading a unit of measure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UnitError {
    /// The code does not name a known unit.
    #[error("Unknown unit code: {0}")]
    Unknown(String),
}

/// Unit of measure
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    /// Milliliters (ml)
    #[default]
    #[serde(rename = "ml")]
    Milliliters,

    /// Grams (gr)
    #[serde(rename = "gr")]
    Grams,

    /// Kilograms (kg)
    #[serde(rename = "kg")]
    Kilograms,

    /// A whole container (cc)
    #[serde(rename = "cc")]
    Container,
}

impl Unit {
    /// Every unit, in picker order.
    pub const ALL: [Unit; 4] = [
        Unit::Milliliters,
        Unit::Grams,
        Unit::Kilograms,
        Unit::Container,
    ];

    /// Short code displayed beside the quantity.
    pub fn code(self) -> &'static str {
        match self {
            Unit::Milliliters => "ml",
            Unit::Grams => "gr",
            Unit::Kilograms => "kg",
            Unit::Container => "cc",
        }
    }

    /// Picker label
    pub fn label(self) -> &'static str {
        match self {
            Unit::Milliliters => "Milliliters (ml)",
            Unit::Grams => "Grams (gr)",
            Unit::Kilograms => "Kilograms (kg)",
            Unit::Container => "Container",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Unit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();

        Unit::ALL
            .into_iter()
            .find(|unit| unit.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| UnitError::Unknown(code.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn default_is_milliliters() {
        assert_eq!(Unit::default(), Unit::Milliliters);
    }

    #[test]
    fn parses_codes_case_insensitively() -> TestResult {
        assert_eq!("ml".parse::<Unit>()?, Unit::Milliliters);
        assert_eq!(" GR ".parse::<Unit>()?, Unit::Grams);
        assert_eq!("Kg".parse::<Unit>()?, Unit::Kilograms);
        assert_eq!("cc".parse::<Unit>()?, Unit::Container);

        Ok(())
    }

    #[test]
    fn unknown_code_errors() {
        assert_eq!(
            "lb".parse::<Unit>(),
            Err(UnitError::Unknown("lb".to_string()))
        );
    }

    #[test]
    fn display_round_trips_through_from_str() -> TestResult {
        for unit in Unit::ALL {
            assert_eq!(unit.to_string().parse::<Unit>()?, unit);
        }

        Ok(())
    }

    #[test]
    fn labels_follow_picker_order() {
        let labels: Vec<&str> = Unit::ALL.into_iter().map(Unit::label).collect();

        assert_eq!(
            labels,
            vec![
                "Milliliters (ml)",
                "Grams (gr)",
                "Kilograms (kg)",
                "Container"
            ]
        );
    }
}
