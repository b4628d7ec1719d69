//! Fixtures
//!
//! Sheets described in YAML, for demos and tests.
//!
//! ```yaml
//! unit: gr
//! items:
//!   - quantity: "500"
//!     price: "2.40"
//!   - quantity: "1000"
//!     price: "4.10"
//! ```

use std::{fs, path::Path};

use serde::Deserialize;
use thiserror::Error;

use crate::{items::LineItem, sheet::Sheet, units::Unit};

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),
}

/// Sheet Fixture
#[derive(Debug, Default, Deserialize)]
pub struct SheetFixture {
    /// Base unit for every row
    #[serde(default)]
    pub unit: Unit,

    /// Rows, in order
    #[serde(default)]
    pub items: Vec<ItemFixture>,
}

/// Row Fixture
#[derive(Debug, Default, Deserialize)]
pub struct ItemFixture {
    /// Raw quantity
    #[serde(default)]
    pub quantity: String,

    /// Raw price
    #[serde(default)]
    pub price: String,
}

impl SheetFixture {
    /// Parse a fixture from YAML.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Yaml`] if the document is not a valid fixture.
    pub fn from_yaml(contents: &str) -> Result<Self, FixtureError> {
        Ok(serde_norway::from_str(contents)?)
    }

    /// Read and parse a fixture file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let contents = fs::read_to_string(path)?;

        Self::from_yaml(&contents)
    }

    /// Build a sheet from the fixture. A fixture with no rows yields a fresh
    /// sheet with the default empty rows.
    pub fn into_sheet(self) -> Sheet {
        if self.items.is_empty() {
            return Sheet::with_unit(self.unit);
        }

        let unit = self.unit;

        let items: Vec<LineItem> = self
            .items
            .into_iter()
            .map(|item| LineItem::with_values(unit, item.quantity, item.price))
            .collect();

        Sheet::with_items(unit, items)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{comparison::Classification, sheet::DEFAULT_ROWS};

    use super::*;

    #[test]
    fn parses_unit_and_items() -> TestResult {
        let fixture = SheetFixture::from_yaml(
            "unit: kg\nitems:\n  - quantity: \"2\"\n    price: \"7\"\n  - quantity: \"1\"\n",
        )?;

        assert_eq!(fixture.unit, Unit::Kilograms);
        assert_eq!(fixture.items.len(), 2);

        let sheet = fixture.into_sheet();

        assert_eq!(sheet.unit(), Unit::Kilograms);
        assert_eq!(sheet.row(1)?.price(), "");
        assert_eq!(
            sheet.compare().classifications(),
            vec![Classification::Cheapest, Classification::Neutral]
        );

        Ok(())
    }

    #[test]
    fn empty_fixture_gives_default_rows() -> TestResult {
        let sheet = SheetFixture::from_yaml("unit: cc\n")?.into_sheet();

        assert_eq!(sheet.len(), DEFAULT_ROWS);
        assert_eq!(sheet.unit(), Unit::Container);

        Ok(())
    }

    #[test]
    fn unknown_unit_is_a_yaml_error() {
        let result = SheetFixture::from_yaml("unit: lb\n");

        assert!(matches!(result, Err(FixtureError::Yaml(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = SheetFixture::load("./does/not/exist.yml");

        assert!(matches!(result, Err(FixtureError::Io(_))));
    }
}
