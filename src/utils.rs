//! Utils

use std::path::PathBuf;

use clap::Parser;
use rusty_money::iso::{self, Currency};
use thiserror::Error;

use crate::{observability::LoggingConfig, units::Unit};

/// Errors raised while reading demo arguments.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    /// The currency code is not a known ISO 4217 code.
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),
}

/// Arguments for the comparison demo
#[derive(Debug, Parser)]
pub struct CompareArgs {
    /// YAML fixture describing the sheet to compare
    #[clap(short, long)]
    pub fixture: Option<PathBuf>,

    /// Base unit, overriding the fixture (ml, gr, kg, cc)
    #[clap(short, long)]
    pub unit: Option<Unit>,

    /// ISO 4217 code of the currency prices are displayed in
    #[clap(short, long, default_value = "USD")]
    pub currency: String,

    /// Logging settings
    #[command(flatten)]
    pub logging: LoggingConfig,
}

impl CompareArgs {
    /// Looks up the display currency.
    ///
    /// # Errors
    ///
    /// Returns [`ArgsError::UnknownCurrency`] if the code is not recognised.
    pub fn currency(&self) -> Result<&'static Currency, ArgsError> {
        currency_from_code(&self.currency)
    }
}

/// Looks up an ISO 4217 currency by code, ignoring case.
///
/// # Errors
///
/// Returns [`ArgsError::UnknownCurrency`] if the code is not recognised.
pub fn currency_from_code(code: &str) -> Result<&'static Currency, ArgsError> {
    let code = code.trim().to_ascii_uppercase();

    iso::find(&code).ok_or(ArgsError::UnknownCurrency(code))
}
