//! Integration tests for loading sheets from YAML fixtures and rendering them.

use std::{io::Write, path::PathBuf};

use rusty_money::iso;
use testresult::TestResult;

use unit_price::prelude::*;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("demos")
        .join("fixtures")
        .join(format!("{name}.yml"))
}

#[test]
fn groceries_fixture_ranks_rows() -> TestResult {
    let sheet = SheetFixture::load(fixture_path("groceries"))?.into_sheet();
    let comparison = sheet.compare();

    assert_eq!(sheet.unit(), Unit::Grams);
    assert_eq!(
        comparison.classifications(),
        vec![
            Classification::Expensive,
            Classification::Cheapest,
            Classification::Expensive,
            Classification::Neutral,
        ]
    );
    assert_eq!(comparison.priciest(), Some(2));

    Ok(())
}

#[test]
fn drinks_fixture_breaks_ties_by_position() -> TestResult {
    let sheet = SheetFixture::load(fixture_path("drinks"))?.into_sheet();
    let comparison = sheet.compare();

    assert_eq!(comparison.cheapest(), Some(2));
    assert_eq!(comparison.priciest(), Some(0));
    assert_eq!(comparison.complete_count(), 4);

    Ok(())
}

#[test]
fn fixture_from_temp_file_renders() -> TestResult {
    let mut file = tempfile::NamedTempFile::new()?;

    writeln!(
        file,
        "unit: cc\nitems:\n  - quantity: \"6\"\n    price: \"3\"\n  - quantity: \"12\"\n    price: \"5\"\n"
    )?;

    let sheet = SheetFixture::load(file.path())?.into_sheet();

    let mut out = Vec::new();
    write_comparison(&mut out, &sheet, iso::GBP)?;
    let output = String::from_utf8(out)?;

    assert!(output.contains("6 cc"));
    assert!(output.contains("Cheapest: item #2"));
    assert!(output.contains("priciest: item #1"));

    Ok(())
}

#[test]
fn editing_a_loaded_sheet_recomputes() -> TestResult {
    let mut sheet = SheetFixture::load(fixture_path("groceries"))?.into_sheet();

    sheet.set_price(3, "2.00")?;

    assert_eq!(sheet.compare().cheapest(), Some(3));

    sheet.reset();

    assert_eq!(sheet.len(), DEFAULT_ROWS);
    assert_eq!(sheet.compare().cheapest(), None);

    Ok(())
}

#[test]
fn invalid_fixture_reports_yaml_error() -> TestResult {
    let mut file = tempfile::NamedTempFile::new()?;

    writeln!(file, "items: [not, a, row")?;

    let result = SheetFixture::load(file.path());

    assert!(matches!(result, Err(FixtureError::Yaml(_))));

    Ok(())
}
