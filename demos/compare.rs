//! Compare Example
//!
//! Loads a sheet from a YAML fixture (or uses a small built-in one), compares
//! its rows by price per unit and prints the result as a table.
//!
//! Run with: `cargo run --example compare -- --fixture demos/fixtures/groceries.yml`

use anyhow::Result;
use clap::Parser;
use tracing::info;

use unit_price::{
    fixtures::SheetFixture,
    observability::init_subscriber,
    report::write_comparison,
    sheet::Sheet,
    units::Unit,
    utils::CompareArgs,
};

/// Compare Example
pub fn main() -> Result<()> {
    let args = CompareArgs::parse();

    init_subscriber(&args.logging)?;

    let currency = args.currency()?;

    let mut sheet = match &args.fixture {
        Some(path) => {
            info!(path = %path.display(), "loading fixture");

            SheetFixture::load(path)?.into_sheet()
        }
        None => sample_sheet()?,
    };

    if let Some(unit) = args.unit {
        sheet.set_unit(unit);
    }

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    write_comparison(&mut handle, &sheet, currency)?;

    Ok(())
}

fn sample_sheet() -> Result<Sheet> {
    let mut sheet = Sheet::with_unit(Unit::Milliliters);

    sheet.set_quantity(0, "100")?;
    sheet.set_price(0, "5")?;
    sheet.set_quantity(1, "50")?;
    sheet.set_price(1, "3")?;

    let row = sheet.add_row();
    sheet.set_quantity(row, "250")?;

    Ok(sheet)
}
